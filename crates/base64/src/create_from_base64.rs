//! Factory function for creating base64 decoders with custom alphabets.

use crate::codec::Codec;
use crate::Base64Error;

/// Creates a base64 decoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to standard base64.
/// * `pad` - The padding character. Defaults to `=`. With an empty string the
///   decoder expects unpadded input and rejects padding characters.
///
/// # Returns
///
/// A function that decodes a base64 `&str` to a `Vec<u8>`.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidAlphabet`] for an unusable alphabet or
/// padding. The returned function reports malformed input as
/// [`Base64Error::InvalidEncoding`].
///
/// # Example
///
/// ```
/// use ct_base64::create_from_base64;
///
/// let decode = create_from_base64(None, None).unwrap();
/// let result = decode("aGVsbG8=").unwrap();
/// assert_eq!(result, b"hello");
///
/// let decode_unpadded = create_from_base64(None, Some("")).unwrap();
/// assert_eq!(decode_unpadded("aGVsbG8").unwrap(), b"hello");
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base64Error> + Send + Sync, Base64Error> {
    let codec = Codec::from_chars(chars, pad)?;
    Ok(move |encoded: &str| codec.decode_to_vec(encoded.as_bytes()))
}
