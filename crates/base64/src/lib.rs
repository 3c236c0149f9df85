//! Base64 encoding and decoding utilities.
//!
//! This crate provides base64 encoding/decoding with support for:
//! - Standard base64 with padding
//! - URL-safe base64 without padding
//! - The `@`/`&` compat alphabet
//! - Custom alphabets and padding through the `create_*` factories
//! - Encoding into and decoding from caller-owned byte buffers
//!
//! Decoding is strict: the input is validated in full before any byte is
//! produced, and malformed input is reported as [`Base64Error::InvalidEncoding`]
//! rather than repaired.
//!
//! # Example
//!
//! ```
//! use ct_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod codec;
mod compat;
mod constants;
mod create_from_base64;
mod create_from_base64_bin;
mod create_to_base64;
mod create_to_base64_bin;
mod display;
mod from_base64;
mod from_base64_bin;
mod from_base64_url;
mod length;
mod to_base64;
mod to_base64_bin;
mod to_base64_url;

pub use compat::{from_base64_compat, to_base64_compat};
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_COMPAT, ALPHABET_URL, PAD};
pub use create_from_base64::create_from_base64;
pub use create_from_base64_bin::create_from_base64_bin;
pub use create_to_base64::create_to_base64;
pub use create_to_base64_bin::create_to_base64_bin;
pub use display::{B64Display, B64DisplayHelper};
pub use from_base64::from_base64;
pub use from_base64_bin::from_base64_bin;
pub use from_base64_url::from_base64_url;
pub use length::{decoded_len, encoded_len};
pub use to_base64::to_base64;
pub use to_base64_bin::to_base64_bin;
pub use to_base64_url::to_base64_url;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The input is not a well-formed base64 encoding.
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(EncodingFault),
    /// The alphabet or padding given to a factory is unusable.
    #[error("invalid base64 alphabet: {0}")]
    InvalidAlphabet(AlphabetFault),
    /// The destination buffer cannot hold the output.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Why an input was rejected as [`Base64Error::InvalidEncoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingFault {
    /// No encoder output has this length.
    #[error("length {0} is not a valid encoded length")]
    Length(usize),
    /// A character outside the alphabet.
    #[error("character at {position} is not in the alphabet")]
    Character { position: usize },
    /// A padding character that is not part of the trailing padding.
    #[error("padding at {position} is not in a trailing position")]
    Padding { position: usize },
    /// The last character of a short group sets bits that no output byte holds.
    #[error("character at {position} has non-zero trailing bits")]
    TrailingBits { position: usize },
}

/// Why an alphabet was rejected as [`Base64Error::InvalidAlphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetFault {
    /// The alphabet must be exactly 64 bytes long.
    #[error("alphabet must be 64 characters long, got {0} bytes")]
    Length(usize),
    /// Alphabet characters must be printable ASCII.
    #[error("alphabet character at {position} is not printable ASCII")]
    NotPrintable { position: usize },
    /// Alphabet characters must be distinct.
    #[error("alphabet character at {position} is a duplicate")]
    Duplicate { position: usize },
    /// Padding must be empty or one printable ASCII character outside the alphabet.
    #[error("padding must be empty or a single printable character outside the alphabet")]
    Padding,
}
