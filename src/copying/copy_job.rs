use std::path::Path;
use std::path::PathBuf;

use crate::config::NUMBER_WIDTH;
use crate::errors::Result;
use crate::file_name::extension;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyEntry {
    pub number: usize,
    pub source: PathBuf,
}

impl CopyEntry {
    /// The file name on the alarm clock, e.g. `0003.mp3` for sound number 3.
    pub fn target_name(&self) -> Result<String> {
        Ok(format!(
            "{:0width$}{}",
            self.number,
            extension(&self.source)?,
            width = NUMBER_WIDTH
        ))
    }

    pub fn target_file(&self, destination: &Path) -> Result<PathBuf> {
        Ok(destination.join(self.target_name()?))
    }
}

/// The sounds to copy, in ascending number order, as they were when copying started.
#[derive(Clone, Debug, Default)]
pub struct CopyJob {
    entries: Vec<CopyEntry>,
}

impl CopyJob {
    pub fn new(entries: Vec<(usize, PathBuf)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(number, source)| CopyEntry { number, source })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CopyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
