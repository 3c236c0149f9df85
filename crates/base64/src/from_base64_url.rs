//! URL-safe base64 decoding function.

use crate::codec::URL;
use crate::Base64Error;

/// Decodes an unpadded URL-safe base64 string.
///
/// Padding characters are rejected like any other character outside the
/// alphabet.
///
/// # Example
///
/// ```
/// use ct_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// assert!(from_base64_url("aGVsbG8gd29ybGQ=").is_err());
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    URL.decode_to_vec(encoded.as_bytes())
}
