use std::{path::PathBuf, process};

use clap::Parser;
use jack_tokenizer::{
    config::DEFAULT_LOG_LEVEL,
    display_error,
    driver::{read_source, tokenize_to_file},
    errors::errors::Error,
    logging,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "jack-tokenizer",
    about = "Tokenizes a Jack source file into <name>T.xml next to it",
    version
)]
struct Cli {
    /// Path of the source file to tokenize
    #[arg(value_name = "SOURCE")]
    source: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    logging::init(DEFAULT_LOG_LEVEL);

    let source = match read_source(&cli.source) {
        Ok(source) => source,
        Err(error) => fail(&error, None),
    };

    if let Err(error) = tokenize_to_file(&cli.source, &source) {
        fail(&error, Some(&source));
    }
}

fn fail(error: &Error, source: Option<&str>) -> ! {
    debug!(error = %error, "tokenizing failed");
    display_error(error, source);
    process::exit(1)
}
