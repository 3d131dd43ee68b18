//! `md5sum`: print MD5 digests of files or standard input.

mod cli;
mod error;
mod input;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("md5sum: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Hashes every input, reporting read failures and carrying on.
/// Returns whether all inputs were hashed.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let bare = cli.bare();
    let mut all_ok = true;

    for input in cli.inputs() {
        match input.hex_digest(cli.mode()) {
            Ok(hex) if bare => writeln!(out, "{hex}").map_err(CliError::Write)?,
            Ok(hex) => writeln!(out, "{hex}  {input}").map_err(CliError::Write)?,
            Err(error) => {
                eprintln!("md5sum: {error}");
                all_ok = false;
            }
        }
    }
    out.flush().map_err(CliError::Write)?;
    Ok(all_ok)
}
