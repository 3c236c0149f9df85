//! Lookup tables and the group-wise encode/decode loops shared by every entry point.

use crate::constants::{
    ALPHABET, ALPHABET_BYTES, ALPHABET_COMPAT_BYTES, ALPHABET_URL_BYTES, PAD_BYTE,
};
use crate::length::{bytes_for_chars, data_len, encoded_len};
use crate::{AlphabetFault, Base64Error, EncodingFault};

/// Marks bytes that are not part of the alphabet in the reverse table.
const INVALID: u8 = 0xFF;

/// Standard alphabet, `=` padding.
pub(crate) static STANDARD: Codec = Codec::new(ALPHABET_BYTES, Some(PAD_BYTE));

/// URL-safe alphabet, no padding.
pub(crate) static URL: Codec = Codec::new(ALPHABET_URL_BYTES, None);

/// `@`/`&` alphabet, `=` padding.
pub(crate) static COMPAT: Codec = Codec::new(ALPHABET_COMPAT_BYTES, Some(PAD_BYTE));

/// A validated alphabet together with its reverse lookup table.
#[derive(Clone, Debug)]
pub(crate) struct Codec {
    encode: [u8; 64],
    decode: [u8; 256],
    pad: Option<u8>,
}

impl Codec {
    /// Builds the tables without validating the alphabet; only used for the
    /// built-in alphabets, which are known to be valid.
    pub(crate) const fn new(alphabet: &[u8; 64], pad: Option<u8>) -> Self {
        let mut decode = [INVALID; 256];
        let mut i = 0;
        while i < 64 {
            decode[alphabet[i] as usize] = i as u8;
            i += 1;
        }
        Self {
            encode: *alphabet,
            decode,
            pad,
        }
    }

    /// Validates a caller-supplied alphabet and padding and builds the tables.
    ///
    /// `None` selects the standard alphabet and `=` respectively. An empty
    /// padding string disables padding.
    pub(crate) fn from_chars(chars: Option<&str>, pad: Option<&str>) -> Result<Self, Base64Error> {
        let chars = chars.unwrap_or(ALPHABET).as_bytes();
        let alphabet: &[u8; 64] = chars
            .try_into()
            .map_err(|_| Base64Error::InvalidAlphabet(AlphabetFault::Length(chars.len())))?;

        for (position, &c) in alphabet.iter().enumerate() {
            if !c.is_ascii_graphic() {
                return Err(Base64Error::InvalidAlphabet(AlphabetFault::NotPrintable {
                    position,
                }));
            }
            if alphabet[..position].contains(&c) {
                return Err(Base64Error::InvalidAlphabet(AlphabetFault::Duplicate {
                    position,
                }));
            }
        }

        let pad = match pad.unwrap_or("=").as_bytes() {
            [] => None,
            [p] if p.is_ascii_graphic() && !alphabet.contains(p) => Some(*p),
            _ => return Err(Base64Error::InvalidAlphabet(AlphabetFault::Padding)),
        };

        Ok(Self::new(alphabet, pad))
    }

    pub(crate) fn encoded_len(&self, len: usize) -> usize {
        encoded_len(len, self.pad.is_some())
    }

    /// Encodes `src` into the front of `dest` and returns the number of bytes
    /// written. `dest` must hold at least `self.encoded_len(src.len())` bytes.
    pub(crate) fn encode_to_slice(&self, src: &[u8], dest: &mut [u8]) -> usize {
        let table = &self.encode;
        let mut chunks = src.chunks_exact(3);
        let mut j = 0;

        for chunk in &mut chunks {
            let (b0, b1, b2) = (chunk[0], chunk[1], chunk[2]);
            dest[j] = table[(b0 >> 2) as usize];
            dest[j + 1] = table[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
            dest[j + 2] = table[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize];
            dest[j + 3] = table[(b2 & 0x3F) as usize];
            j += 4;
        }

        match *chunks.remainder() {
            [b0] => {
                dest[j] = table[(b0 >> 2) as usize];
                dest[j + 1] = table[((b0 & 0x03) << 4) as usize];
                j += 2;
                if let Some(pad) = self.pad {
                    dest[j] = pad;
                    dest[j + 1] = pad;
                    j += 2;
                }
            }
            [b0, b1] => {
                dest[j] = table[(b0 >> 2) as usize];
                dest[j + 1] = table[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
                dest[j + 2] = table[((b1 & 0x0F) << 2) as usize];
                j += 3;
                if let Some(pad) = self.pad {
                    dest[j] = pad;
                    j += 1;
                }
            }
            _ => {}
        }

        j
    }

    pub(crate) fn encode_to_string(&self, src: &[u8]) -> String {
        let mut buf = vec![0u8; self.encoded_len(src.len())];
        let written = self.encode_to_slice(src, &mut buf);
        buf.truncate(written);
        // Alphabet and padding are ASCII, so every byte maps to one char.
        buf.into_iter().map(char::from).collect()
    }

    /// Checks every character and the trailing bits, returning the number of
    /// significant characters and the number of bytes they decode to.
    pub(crate) fn validate(&self, encoded: &[u8]) -> Result<(usize, usize), Base64Error> {
        let data = data_len(encoded, self.pad)?;
        let decoded = bytes_for_chars(data)?;

        for (position, &c) in encoded[..data].iter().enumerate() {
            if self.decode[c as usize] == INVALID {
                let fault = if Some(c) == self.pad {
                    EncodingFault::Padding { position }
                } else {
                    EncodingFault::Character { position }
                };
                return Err(Base64Error::InvalidEncoding(fault));
            }
        }

        // The last character of a short group carries bits that fall outside
        // the output; they must be zero.
        let unused_bits = match data % 4 {
            2 => 0x0F,
            3 => 0x03,
            _ => 0,
        };
        if unused_bits != 0 {
            let position = data - 1;
            if self.decode[encoded[position] as usize] & unused_bits != 0 {
                return Err(Base64Error::InvalidEncoding(EncodingFault::TrailingBits {
                    position,
                }));
            }
        }

        Ok((data, decoded))
    }

    /// Decodes into the front of `dest` and returns the number of bytes written.
    /// Nothing is written unless the whole input is valid.
    pub(crate) fn decode_to_slice(
        &self,
        encoded: &[u8],
        dest: &mut [u8],
    ) -> Result<usize, Base64Error> {
        let (data, decoded) = self.validate(encoded)?;
        if dest.len() < decoded {
            return Err(Base64Error::BufferTooSmall {
                needed: decoded,
                available: dest.len(),
            });
        }
        Ok(self.decode_validated(&encoded[..data], dest))
    }

    pub(crate) fn decode_to_vec(&self, encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
        let (data, decoded) = self.validate(encoded)?;
        let mut buf = vec![0u8; decoded];
        self.decode_validated(&encoded[..data], &mut buf);
        Ok(buf)
    }

    fn decode_validated(&self, data: &[u8], dest: &mut [u8]) -> usize {
        let mut chunks = data.chunks_exact(4);
        let mut j = 0;

        for chunk in &mut chunks {
            let v = self.pack(chunk);
            dest[j] = (v >> 16) as u8;
            dest[j + 1] = (v >> 8) as u8;
            dest[j + 2] = v as u8;
            j += 3;
        }

        let rest = chunks.remainder();
        if !rest.is_empty() {
            let v = self.pack(rest);
            let bytes = [(v >> 16) as u8, (v >> 8) as u8];
            let n = rest.len() - 1;
            dest[j..j + n].copy_from_slice(&bytes[..n]);
            j += n;
        }

        j
    }

    /// Packs up to four sextets into a 24-bit value; missing sextets count as zero.
    fn pack(&self, chars: &[u8]) -> u32 {
        chars.iter().enumerate().fold(0u32, |v, (k, &c)| {
            v | (u32::from(self.decode[c as usize]) << (18 - 6 * k))
        })
    }
}
