use std::fs::File;
use std::fs::{self};
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::mpsc::SyncSender;
use std::sync::Arc;

use log::debug;
use log::info;
use tempfile::NamedTempFile;

use super::copy_job::CopyEntry;
use super::copy_job::CopyJob;
use super::copy_outcome::CopyFailure;
use super::copy_outcome::CopyOutcome;
use super::copy_outcome::CopyResult;
use super::copy_progress::CopyProgress;
use crate::errors::Error;
use crate::errors::Result;

pub(super) struct CopyThread {
    job: CopyJob,
    destination: PathBuf,
    is_cancelled: Arc<AtomicBool>,
    progress_sender: SyncSender<CopyProgress>,
}

impl CopyThread {
    pub fn new(
        job: CopyJob,
        destination: &Path,
        is_cancelled: Arc<AtomicBool>,
        progress_sender: SyncSender<CopyProgress>,
    ) -> Self {
        Self {
            job,
            destination: destination.to_owned(),
            is_cancelled,
            progress_sender,
        }
    }

    pub fn copy(self) -> CopyResult {
        let sender = self.progress_sender;
        copy_sounds(&self.job, &self.destination, &self.is_cancelled, |progress| {
            // The receiving side may already be gone, which is no reason to stop copying
            let _ = sender.send(progress);
        })
    }
}

/// Copy every sound of `job` into `destination` under its numbered name,
/// in order, reporting progress after each file.
///
/// `is_cancelled` is checked before each file. Cancelling leaves already
/// copied files in place. The first error stops the copy.
pub fn copy_sounds<F>(
    job: &CopyJob,
    destination: &Path,
    is_cancelled: &AtomicBool,
    mut on_progress: F,
) -> CopyResult
where
    F: FnMut(CopyProgress),
{
    let total = job.len();
    info!("Copying {} sounds to {:?}", total, destination);
    for (copied, entry) in job.iter().enumerate() {
        if is_cancelled.load(Ordering::SeqCst) {
            info!("Copying cancelled after {} of {} sounds", copied, total);
            return Ok(CopyOutcome::Cancelled { copied });
        }
        copy_entry(entry, destination).map_err(|error| CopyFailure { copied, error })?;
        on_progress(CopyProgress::new(copied + 1, total));
    }
    if total == 0 {
        on_progress(CopyProgress::new(0, 0));
    }
    info!("Copied {} sounds to {:?}", total, destination);
    Ok(CopyOutcome::Completed { copied: total })
}

fn copy_entry(entry: &CopyEntry, destination: &Path) -> Result<()> {
    let target = entry.target_file(destination)?;
    debug!("Copying {:?} to {:?}", entry.source, target);
    let to_error = |source| Error::Io {
        source_file: entry.source.clone(),
        destination: target.clone(),
        source,
    };
    // An interrupted copy never shows up under the target name
    let mut source_file = File::open(&entry.source).map_err(to_error)?;
    let mut temp_file = NamedTempFile::new_in(destination).map_err(to_error)?;
    io::copy(&mut source_file, &mut temp_file).map_err(to_error)?;
    let permissions = source_file.metadata().map_err(to_error)?.permissions();
    fs::set_permissions(temp_file.path(), permissions).map_err(to_error)?;
    temp_file.as_file().sync_all().map_err(to_error)?;
    temp_file
        .persist(&target)
        .map_err(|persist_error| to_error(persist_error.error))?;
    Ok(())
}
