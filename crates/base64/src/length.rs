//! Encoded and decoded length calculations.

use crate::{Base64Error, EncodingFault};

/// Returns the exact number of characters `len` bytes encode to.
///
/// # Example
///
/// ```
/// use ct_base64::encoded_len;
///
/// assert_eq!(encoded_len(5, true), 8);
/// assert_eq!(encoded_len(5, false), 7);
/// ```
pub const fn encoded_len(len: usize, padded: bool) -> usize {
    let full = len / 3 * 4;
    match (len % 3, padded) {
        (0, _) => full,
        (_, true) => full + 4,
        (rem, false) => full + rem + 1,
    }
}

/// Returns the number of bytes an encoded input decodes to.
///
/// Only the length and the placement of trailing padding are checked here;
/// alphabet membership is left to the decoder. Pass `None` as `pad` for
/// unpadded input.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] when the length cannot be produced
/// by the encoder, or when more than two padding characters trail the input.
///
/// # Example
///
/// ```
/// use ct_base64::decoded_len;
///
/// assert_eq!(decoded_len(b"Zm8=", Some(b'=')).unwrap(), 2);
/// assert_eq!(decoded_len(b"Zm8", None).unwrap(), 2);
/// assert!(decoded_len(b"Zm8", Some(b'=')).is_err());
/// ```
pub fn decoded_len(encoded: &[u8], pad: Option<u8>) -> Result<usize, Base64Error> {
    let data = data_len(encoded, pad)?;
    bytes_for_chars(data)
}

/// Number of leading characters that carry data, i.e. the input without its
/// trailing padding.
pub(crate) fn data_len(encoded: &[u8], pad: Option<u8>) -> Result<usize, Base64Error> {
    let length = encoded.len();

    let Some(pad) = pad else {
        if length % 4 == 1 {
            return Err(Base64Error::InvalidEncoding(EncodingFault::Length(length)));
        }
        return Ok(length);
    };

    if length % 4 != 0 {
        return Err(Base64Error::InvalidEncoding(EncodingFault::Length(length)));
    }

    let padding = encoded.iter().rev().take_while(|&&c| c == pad).count();
    if padding > 2 {
        return Err(Base64Error::InvalidEncoding(EncodingFault::Padding {
            position: length - padding,
        }));
    }

    Ok(length - padding)
}

/// Output bytes for `data` significant characters.
pub(crate) fn bytes_for_chars(data: usize) -> Result<usize, Base64Error> {
    let full = data / 4 * 3;
    match data % 4 {
        0 => Ok(full),
        2 => Ok(full + 1),
        3 => Ok(full + 2),
        _ => Err(Base64Error::InvalidEncoding(EncodingFault::Length(data))),
    }
}
