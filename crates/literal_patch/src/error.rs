// crates/literal_patch/src/error.rs

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("the pattern to replace must not be empty")]
    EmptyPattern,
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatchError {
    /// True when the error came from a target file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PatchError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
