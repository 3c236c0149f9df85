//! Factory function for creating base64 decoders that read from byte slices.

use crate::codec::Codec;
use crate::Base64Error;

/// Creates a base64 decoder function that reads ASCII bytes and writes into a
/// caller-owned buffer.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet.
/// * `pad` - The padding character. Defaults to `=`. Use an empty string for unpadded input.
///
/// # Returns
///
/// A function that decodes a source slice into the front of a destination
/// slice, returning the number of bytes written.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidAlphabet`] for an unusable alphabet or
/// padding. The returned function may return [`Base64Error::InvalidEncoding`]
/// or [`Base64Error::BufferTooSmall`]; in both cases the destination is left
/// untouched.
///
/// # Example
///
/// ```
/// use ct_base64::create_from_base64_bin;
///
/// let decode = create_from_base64_bin(None, None).unwrap();
/// let mut dest = [0u8; 8];
/// let len = decode(b"aGVsbG8=", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"hello");
/// ```
#[allow(clippy::type_complexity)]
pub fn create_from_base64_bin(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8], &mut [u8]) -> Result<usize, Base64Error> + Send + Sync, Base64Error> {
    let codec = Codec::from_chars(chars, pad)?;
    Ok(move |view: &[u8], dest: &mut [u8]| codec.decode_to_slice(view, dest))
}
