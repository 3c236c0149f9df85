//! Command line parameters for `ctb64`.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use ct_base64::{ALPHABET, ALPHABET_COMPAT, ALPHABET_URL};

/// Alphabets selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetArg {
    /// RFC 4648 alphabet with `+` and `/`
    Standard,
    /// URL-safe alphabet with `-` and `_`
    Url,
    /// Compat alphabet with `@` and `&`
    Compat,
}

impl AlphabetArg {
    pub fn chars(self) -> &'static str {
        match self {
            AlphabetArg::Standard => ALPHABET,
            AlphabetArg::Url => ALPHABET_URL,
            AlphabetArg::Compat => ALPHABET_COMPAT,
        }
    }
}

/// Base64 encode or decode FILE, or standard input, to standard output.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Lowest log level to show
    #[arg(long = "log-level", value_name = "LOG_LEVEL", group = "log-level")]
    log_level: Option<log::LevelFilter>,

    /// Show verbose log output – sets log level to "debug"
    #[arg(short, long, group = "log-level")]
    verbose: bool,

    /// Show no log output – sets log level to "error"
    #[arg(short, long, group = "log-level")]
    quiet: bool,

    /// Decode data; whitespace in the input is ignored
    #[arg(short, long)]
    pub decode: bool,

    /// Alphabet for indices 62 and 63
    #[arg(short, long, value_enum, default_value_t = AlphabetArg::Standard)]
    pub alphabet: AlphabetArg,

    /// Do not write padding when encoding; expect none when decoding
    #[arg(long)]
    pub no_pad: bool,

    /// Wrap encoded lines after COLS characters; 0 disables wrapping
    #[arg(short, long, value_name = "COLS", default_value_t = 76)]
    pub wrap: usize,

    /// File to read; standard input when absent or `-`
    pub file: Option<PathBuf>,
}

impl CliArgs {
    /// returns the log level filter set by CLI args
    /// returns `None` if the user did not specify any log level filter via CLI
    ///
    /// The `group = "log-level"` on the three arguments makes them mutually exclusive.
    pub fn get_log_level(&self) -> Option<log::LevelFilter> {
        if self.verbose {
            return Some(log::LevelFilter::Debug);
        }
        if self.quiet {
            return Some(log::LevelFilter::Error);
        }
        self.log_level
    }

    /// Padding string in the form the `ct_base64` factories take.
    pub fn pad(&self) -> &'static str {
        if self.no_pad {
            ""
        } else {
            "="
        }
    }

    pub fn pad_byte(&self) -> Option<u8> {
        self.pad().bytes().next()
    }

    /// The input file, or `None` for standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }
}
