//! Encoding and decoding with the `@`/`&` compat alphabet.
//!
//! The bit grouping and `=` padding are standard; only the symbols for
//! indices 62 and 63 differ.

use crate::codec::COMPAT;
use crate::Base64Error;

/// Encodes a byte slice with the compat alphabet.
///
/// # Example
///
/// ```
/// use ct_base64::to_base64_compat;
///
/// assert_eq!(to_base64_compat(&[0xFB, 0xFF]), "@&8=");
/// ```
pub fn to_base64_compat(uint8: &[u8]) -> String {
    COMPAT.encode_to_string(uint8)
}

/// Decodes a padded string written with the compat alphabet.
///
/// # Example
///
/// ```
/// use ct_base64::from_base64_compat;
///
/// assert_eq!(from_base64_compat("@&8=").unwrap(), [0xFB, 0xFF]);
/// assert!(from_base64_compat("+/8=").is_err());
/// ```
pub fn from_base64_compat(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    COMPAT.decode_to_vec(encoded.as_bytes())
}
