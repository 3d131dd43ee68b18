//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

use crate::input::Input;

/// Print MD5 digests of files or standard input.
///
/// With a single input only the digest is printed. With several inputs each
/// line is `<digest>  <name>`.
#[derive(Parser, Debug)]
#[command(name = "md5sum")]
#[command(version)]
pub struct Cli {
    /// Files to hash. With no FILE, or when FILE is -, read standard input.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Stream each input through the incremental hasher instead of
    /// reading it fully into memory first.
    #[arg(long)]
    pub incremental: bool,

    /// Print only digests, never input names.
    #[arg(short, long)]
    pub quiet: bool,
}

/// How an input is fed to the hash engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read everything, then one single-shot update.
    Legacy,
    /// Copy the input into a buffered hasher.
    Incremental,
}

impl Cli {
    /// Inputs in command-line order, standard input if none were named.
    pub fn inputs(&self) -> Vec<Input> {
        if self.files.is_empty() {
            return vec![Input::Stdin];
        }
        self.files.iter().map(|p| Input::from_arg(p)).collect()
    }

    /// Engine selected by `--incremental`.
    pub fn mode(&self) -> Mode {
        if self.incremental {
            Mode::Incremental
        } else {
            Mode::Legacy
        }
    }

    /// Whether output lines omit the input name.
    pub fn bare(&self) -> bool {
        self.quiet || self.files.len() <= 1
    }
}
