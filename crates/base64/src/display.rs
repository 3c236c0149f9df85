//! Formatting byte slices as base64 without allocating.

use std::fmt::{self, Display};

use crate::codec::STANDARD;

/// Input bytes encoded per write; a multiple of 3 so only the last chunk pads.
const CHUNK: usize = 48;

/// Formats the wrapped bytes as standard, padded base64.
pub struct B64DisplayHelper<'a>(&'a [u8]);

impl Display for B64DisplayHelper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; CHUNK / 3 * 4];
        for chunk in self.0.chunks(CHUNK) {
            let len = STANDARD.encode_to_slice(chunk, &mut buf);
            let text = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
            f.write_str(text)?;
        }
        Ok(())
    }
}

/// Adds [`fmt_b64`](B64Display::fmt_b64) to anything that can be viewed as bytes.
///
/// # Example
///
/// ```
/// use ct_base64::B64Display;
///
/// let key = [0x4Du8, 0x61, 0x6E];
/// assert_eq!(format!("key={}", key.fmt_b64()), "key=TWFu");
/// ```
pub trait B64Display {
    fn fmt_b64(&self) -> B64DisplayHelper<'_>;
}

impl<T: AsRef<[u8]> + ?Sized> B64Display for T {
    fn fmt_b64(&self) -> B64DisplayHelper<'_> {
        B64DisplayHelper(self.as_ref())
    }
}
