//! Standard base64 decoding function.

use crate::codec::STANDARD;
use crate::Base64Error;

/// Decodes a standard, padded base64 string.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] when the length is not a multiple
/// of 4, a character is outside the alphabet, padding appears anywhere but the
/// last one or two positions, or the final character has non-zero unused bits.
///
/// # Example
///
/// ```
/// use ct_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert!(from_base64("aGVsbG8").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    STANDARD.decode_to_vec(encoded.as_bytes())
}
