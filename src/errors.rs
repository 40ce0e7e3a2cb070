use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No extension found in file name {0:?}")]
    NotFound(String),
    #[error("Invalid sound name {0:?}: must be 1 to 16 characters, without leading or trailing whitespace")]
    InvalidName(String),
    #[error("Failed to copy {source_file:?} to {destination:?}")]
    Io {
        source_file: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Copy thread stopped unexpectedly")]
    Interrupted,
    #[error("Failed to write sound list to {path:?}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
