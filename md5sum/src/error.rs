use std::io;

use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input could not be opened or read.
    #[error("{name}: {source}")]
    Read {
        /// Input name as shown to the user.
        name: String,
        #[source]
        source: io::Error,
    },
    /// Writing a digest line to standard output failed.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}
