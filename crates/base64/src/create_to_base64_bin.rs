//! Factory function for creating base64 encoders that write to byte slices.

use crate::codec::Codec;
use crate::Base64Error;

/// Creates a base64 encoder function that writes into a caller-owned buffer.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet.
/// * `pad` - The padding character. Defaults to `=`. Use an empty string for no padding.
///
/// # Returns
///
/// A function that encodes a source slice into the front of a destination
/// slice, returning the number of bytes written.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidAlphabet`] for an unusable alphabet or
/// padding. The returned function fails with [`Base64Error::BufferTooSmall`]
/// when the destination cannot hold the whole output, and writes nothing in
/// that case.
///
/// # Example
///
/// ```
/// use ct_base64::create_to_base64_bin;
///
/// let encode = create_to_base64_bin(None, Some("")).unwrap();
/// let mut dest = [0u8; 16];
/// let len = encode(b"hello", &mut dest).unwrap();
/// assert_eq!(&dest[..len], b"aGVsbG8");
/// ```
#[allow(clippy::type_complexity)]
pub fn create_to_base64_bin(
    chars: Option<&str>,
    pad: Option<&str>,
) -> Result<impl Fn(&[u8], &mut [u8]) -> Result<usize, Base64Error> + Send + Sync, Base64Error> {
    let codec = Codec::from_chars(chars, pad)?;
    Ok(move |uint8: &[u8], dest: &mut [u8]| encode_bin(&codec, uint8, dest))
}

pub(crate) fn encode_bin(codec: &Codec, uint8: &[u8], dest: &mut [u8]) -> Result<usize, Base64Error> {
    let needed = codec.encoded_len(uint8.len());
    if dest.len() < needed {
        return Err(Base64Error::BufferTooSmall {
            needed,
            available: dest.len(),
        });
    }
    Ok(codec.encode_to_slice(uint8, dest))
}
