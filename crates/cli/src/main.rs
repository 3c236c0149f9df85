use std::fs::File;
use std::io::{self, BufReader, Read};

use anyhow::Context;
use clap::Parser;
use ct_base64_cli::cli::CliArgs;
use ct_base64_cli::run;

pub fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = args.get_log_level() {
        logger.filter_level(level);
    }
    logger.init();

    let input: Box<dyn Read> = match args.input_path() {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    run(&args, input, io::stdout().lock())
}
