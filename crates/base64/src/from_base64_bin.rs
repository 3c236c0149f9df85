//! Binary base64 decoding function.

use crate::codec::STANDARD;
use crate::Base64Error;

/// Decodes standard base64 bytes into a destination slice.
///
/// # Arguments
///
/// * `view` - The source byte slice containing base64-encoded data.
/// * `dest` - The destination byte slice; output is written from index 0.
///
/// # Returns
///
/// The number of decoded bytes, or an error if the input is invalid or
/// `dest` is too short.
///
/// # Example
///
/// ```
/// use ct_base64::from_base64_bin;
///
/// let encoded = b"aGVsbG8=";
/// let mut dest = [0u8; 5];
/// let len = from_base64_bin(encoded, &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"hello");
/// ```
pub fn from_base64_bin(view: &[u8], dest: &mut [u8]) -> Result<usize, Base64Error> {
    STANDARD.decode_to_slice(view, dest)
}
