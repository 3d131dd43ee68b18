//! Reading inputs and hashing them.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use md5::{Digest, LegacyMd5, Md5};
use tracing::debug;

use crate::cli::Mode;
use crate::error::CliError;

/// One source of bytes to hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input, named `-`.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Input {
    /// Maps a command-line argument to an input, `-` being standard input.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }

    fn open(&self) -> io::Result<Box<dyn Read>> {
        Ok(match self {
            Input::Stdin => Box::new(io::stdin().lock()),
            Input::File(path) => Box::new(File::open(path)?),
        })
    }

    /// Lowercase hex digest of the whole input.
    pub fn hex_digest(&self, mode: Mode) -> Result<String, CliError> {
        let read_err = |source| CliError::Read {
            name: self.to_string(),
            source,
        };
        let mut reader = self.open().map_err(read_err)?;

        match mode {
            Mode::Legacy => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data).map_err(read_err)?;
                let mut engine = LegacyMd5::new();
                engine.update(&data);
                debug!(
                    input = %self,
                    bytes = data.len(),
                    blocks = engine.blocks_processed(),
                    "hashed input"
                );
                Ok(engine.hex_digest())
            }
            Mode::Incremental => {
                let mut hasher = Md5::new();
                let bytes = io::copy(&mut reader, &mut hasher).map_err(read_err)?;
                debug!(input = %self, bytes, "hashed input incrementally");
                Ok(format!("{:x}", hasher.finalize()))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("-"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn both_modes_agree_on_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"The quick brown fox jumps over the lazy dog").unwrap();
        let input = Input::File(file.path().to_path_buf());
        let expected = "9e107d9d372bb6826bd81d3542a419d6";
        assert_eq!(input.hex_digest(Mode::Legacy).unwrap(), expected);
        assert_eq!(input.hex_digest(Mode::Incremental).unwrap(), expected);
    }

    #[test]
    fn missing_file_names_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let err = Input::File(path.clone())
            .hex_digest(Mode::Legacy)
            .unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().starts_with(&path.display().to_string()));
    }
}
