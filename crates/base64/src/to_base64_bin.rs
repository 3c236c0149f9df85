//! Binary base64 encoding function.

use crate::codec::STANDARD;
use crate::create_to_base64_bin::encode_bin;
use crate::Base64Error;

/// Encodes bytes into a destination byte slice using standard base64.
///
/// # Arguments
///
/// * `uint8` - The source bytes to encode.
/// * `dest` - The destination byte slice; output is written from index 0.
///
/// # Returns
///
/// The number of bytes written to the destination.
///
/// # Errors
///
/// [`Base64Error::BufferTooSmall`] if `dest` is shorter than
/// [`encoded_len`](crate::encoded_len)`(uint8.len(), true)`.
///
/// # Example
///
/// ```
/// use ct_base64::to_base64_bin;
///
/// let data = b"hello";
/// let mut dest = vec![0u8; 100];
/// let len = to_base64_bin(data, &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn to_base64_bin(uint8: &[u8], dest: &mut [u8]) -> Result<usize, Base64Error> {
    encode_bin(&STANDARD, uint8, dest)
}
