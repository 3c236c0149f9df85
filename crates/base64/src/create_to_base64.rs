//! Factory function for creating base64 encoders with custom alphabets.

use crate::codec::Codec;
use crate::Base64Error;

/// Creates a base64 encoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to standard base64.
/// * `pad` - The padding character. Defaults to `=`. Use an empty string for no padding.
///
/// # Returns
///
/// A function that encodes a byte slice to a `String`.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidAlphabet`] if `chars` is not 64 distinct
/// printable ASCII characters, or if `pad` is neither empty nor a single
/// printable ASCII character outside the alphabet.
///
/// # Example
///
/// ```
/// use ct_base64::{create_to_base64, ALPHABET_COMPAT};
///
/// let encode = create_to_base64(Some(ALPHABET_COMPAT), None).unwrap();
/// assert_eq!(encode(&[0xFF, 0xFF, 0xFF]), "&&&&");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8]) -> String + Send + Sync, Base64Error> {
    let codec = Codec::from_chars(chars, pad)?;
    Ok(move |uint8: &[u8]| codec.encode_to_string(uint8))
}
