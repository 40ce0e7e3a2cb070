use thiserror::Error;

use crate::errors::Error;

#[derive(Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Completed { copied: usize },
    Cancelled { copied: usize },
}

impl CopyOutcome {
    pub fn copied(&self) -> usize {
        match self {
            Self::Completed { copied } | Self::Cancelled { copied } => *copied,
        }
    }
}

/// A copy that stopped on an error. Files copied before the error stay in place.
#[derive(Debug, Error)]
#[error("Copying stopped after {copied} files")]
pub struct CopyFailure {
    pub copied: usize,
    #[source]
    pub error: Error,
}

pub type CopyResult = Result<CopyOutcome, CopyFailure>;
