use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::mpsc::sync_channel;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::thread::{self};

use log::error;

use super::copy_job::CopyJob;
use super::copy_outcome::CopyFailure;
use super::copy_outcome::CopyResult;
use super::copy_progress::CopyProgress;
use super::copy_thread::CopyThread;
use crate::config;
use crate::data_stream::DataStream;
use crate::errors::Error;

/// Runs a copy job on its own thread. Progress arrives through `update`.
pub struct CopyThreadHandle {
    handle: JoinHandle<CopyResult>,
    is_cancelled: Arc<AtomicBool>,
    total: usize,
    progress: DataStream<CopyProgress>,
}

impl CopyThreadHandle {
    pub fn start(job: CopyJob, destination: &Path) -> Self {
        // One report per file, or a single one for an empty job
        let queue_len = job.len().max(1);
        Self::spawn(job, destination, queue_len)
    }

    /// With a `queue_len` smaller than the number of reports, the thread
    /// waits for progress to be received before moving on.
    pub(super) fn spawn(job: CopyJob, destination: &Path, queue_len: usize) -> Self {
        let is_cancelled = Arc::new(AtomicBool::new(false));
        let (progress_sender, progress_receiver) = sync_channel(queue_len);
        let total = job.len();
        let handle = {
            let is_cancelled = is_cancelled.clone();
            let destination = destination.to_owned();
            thread::spawn(move || {
                CopyThread::new(job, &destination, is_cancelled, progress_sender).copy()
            })
        };
        Self {
            handle,
            is_cancelled,
            total,
            progress: DataStream::new(progress_receiver),
        }
    }

    /// Returns the progress reports received since the last call.
    pub fn update(&mut self) -> Vec<CopyProgress> {
        self.progress
            .update(config::RECV_COPY_PROGRESS_TIMEOUT)
            .to_vec()
    }

    pub fn request_cancel(&self) {
        self.is_cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn progress(&self) -> CopyProgress {
        self.progress
            .last()
            .copied()
            .unwrap_or_else(|| CopyProgress::new(0, self.total))
    }

    /// Block until the copy thread is done.
    pub fn get_result(mut self) -> (CopyResult, Vec<CopyProgress>) {
        let result = self.handle.join().unwrap_or_else(|_| {
            error!("Copy thread panicked");
            Err(CopyFailure {
                copied: self.progress.last().map(|p| p.copied).unwrap_or(0),
                error: Error::Interrupted,
            })
        });
        let remaining = self.progress.drain().to_vec();
        (result, remaining)
    }
}
