use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyProgress {
    pub copied: usize,
    pub total: usize,
}

impl CopyProgress {
    pub fn new(copied: usize, total: usize) -> Self {
        Self { copied, total }
    }

    /// Share of copied files in [0, 1]. Nothing to copy counts as done.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.copied as f64 / self.total as f64
        }
    }
}

impl fmt::Display for CopyProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.0}%)",
            self.copied,
            self.total,
            self.fraction() * 100.0
        )
    }
}
