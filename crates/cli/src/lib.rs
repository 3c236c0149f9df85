//! `ctb64`: encode or decode base64 between a file or stdin and stdout.
//!
//! [run] holds the bulk of the work; the binary's main function only parses
//! arguments, sets up logging and picks the input stream.

pub mod cli;

use std::io::{Read, Write};

use anyhow::Context;
use ct_base64::{create_from_base64_bin, create_to_base64_bin, decoded_len, encoded_len};
use log::{debug, info};

use crate::cli::CliArgs;

/// Reads all of `input`, encodes or decodes it according to `args` and writes
/// the result to `output`.
pub fn run<R: Read, W: Write>(args: &CliArgs, mut input: R, mut output: W) -> anyhow::Result<()> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .context("failed to read input")?;
    debug!("read {} bytes of input", data.len());

    if args.decode {
        decode(args, &data, &mut output)?;
    } else {
        encode(args, &data, &mut output)?;
    }

    output.flush().context("failed to flush output")
}

fn encode<W: Write>(args: &CliArgs, data: &[u8], output: &mut W) -> anyhow::Result<()> {
    let encode = create_to_base64_bin(Some(args.alphabet.chars()), Some(args.pad()))?;
    let mut encoded = vec![0u8; encoded_len(data.len(), !args.no_pad)];
    let n = encode(data, &mut encoded)?;
    info!(
        "encoded {} bytes to {} characters ({:?} alphabet)",
        data.len(),
        n,
        args.alphabet
    );

    write_wrapped(output, &encoded[..n], args.wrap).context("failed to write output")
}

fn decode<W: Write>(args: &CliArgs, data: &[u8], output: &mut W) -> anyhow::Result<()> {
    let encoded: Vec<u8> = data
        .iter()
        .copied()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    debug!(
        "stripped {} whitespace bytes",
        data.len() - encoded.len()
    );

    let decode = create_from_base64_bin(Some(args.alphabet.chars()), Some(args.pad()))?;
    let mut decoded =
        vec![0u8; decoded_len(&encoded, args.pad_byte()).context("failed to decode input")?];
    let n = decode(&encoded, &mut decoded).context("failed to decode input")?;
    info!(
        "decoded {} characters to {} bytes ({:?} alphabet)",
        encoded.len(),
        n,
        args.alphabet
    );

    output
        .write_all(&decoded[..n])
        .context("failed to write output")
}

/// Writes `text` in lines of at most `cols` characters, each ending in a
/// newline. With `cols == 0` the text is written as a single line without a
/// trailing newline.
fn write_wrapped<W: Write>(output: &mut W, text: &[u8], cols: usize) -> std::io::Result<()> {
    if cols == 0 {
        return output.write_all(text);
    }
    for line in text.chunks(cols) {
        output.write_all(line)?;
        output.write_all(b"\n")?;
    }
    Ok(())
}
