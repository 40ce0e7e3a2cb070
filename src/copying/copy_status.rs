use log::info;
use log::warn;

use super::copy_outcome::CopyFailure;
use super::copy_outcome::CopyOutcome;
use super::copy_progress::CopyProgress;
use super::copy_thread_handle::CopyThreadHandle;

/// Where a running copy stands from the point of view of whoever started it.
///
/// `Running` copies. `ConfirmingCancel` is waiting for the user to confirm a
/// cancel request while the copy goes on. `CancelRequested` has told the
/// thread to stop and waits for it to finish the file it is on. The last
/// three states are terminal and ignore every further event.
pub enum CopyStatus {
    Running(CopyThreadHandle),
    ConfirmingCancel(CopyThreadHandle),
    CancelRequested(CopyThreadHandle),
    Cancelled { copied: usize, total: usize },
    Completed { copied: usize },
    Failed { failure: CopyFailure, total: usize },
}

impl CopyStatus {
    pub fn new(handle: CopyThreadHandle) -> Self {
        Self::Running(handle)
    }

    /// Receive progress and move to a terminal state once the thread is done.
    /// Returns the progress reports received by this call.
    pub fn update(&mut self) -> Vec<CopyProgress> {
        let mut received = vec![];
        take_mut::take(self, |status| match status {
            Self::Running(mut handle) => {
                received = handle.update();
                finish_if_done(handle, Self::Running, &mut received)
            }
            Self::ConfirmingCancel(mut handle) => {
                received = handle.update();
                finish_if_done(handle, Self::ConfirmingCancel, &mut received)
            }
            Self::CancelRequested(mut handle) => {
                received = handle.update();
                finish_if_done(handle, Self::CancelRequested, &mut received)
            }
            terminal => terminal,
        });
        received
    }

    /// Ask to cancel the copy. With `needs_confirmation` the copy keeps going
    /// until `confirm_cancel` is called, otherwise the thread is told to stop right away.
    pub fn request_cancel(&mut self, needs_confirmation: bool) {
        take_mut::take(self, |status| match status {
            Self::Running(handle) if needs_confirmation => Self::ConfirmingCancel(handle),
            Self::Running(handle) | Self::ConfirmingCancel(handle) => {
                handle.request_cancel();
                Self::CancelRequested(handle)
            }
            other => other,
        });
    }

    pub fn confirm_cancel(&mut self) {
        take_mut::take(self, |status| match status {
            Self::ConfirmingCancel(handle) => {
                info!("Cancelling copy");
                handle.request_cancel();
                Self::CancelRequested(handle)
            }
            other => other,
        });
    }

    pub fn reject_cancel(&mut self) {
        take_mut::take(self, |status| match status {
            Self::ConfirmingCancel(handle) => Self::Running(handle),
            other => other,
        });
    }

    /// Block until the copy thread is done, receiving all remaining progress.
    pub fn wait(&mut self) -> Vec<CopyProgress> {
        let mut received = vec![];
        while !self.is_terminal() {
            received.extend(self.update());
        }
        received
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Cancelled { .. } | Self::Completed { .. } | Self::Failed { .. }
        )
    }

    pub fn is_confirming_cancel(&self) -> bool {
        matches!(self, Self::ConfirmingCancel(_))
    }

    pub fn progress(&self) -> CopyProgress {
        match self {
            Self::Running(handle)
            | Self::ConfirmingCancel(handle)
            | Self::CancelRequested(handle) => handle.progress(),
            Self::Cancelled { copied, total } => CopyProgress::new(*copied, *total),
            Self::Completed { copied } => CopyProgress::new(*copied, *copied),
            Self::Failed { failure, total } => CopyProgress::new(failure.copied, *total),
        }
    }
}

fn finish_if_done(
    handle: CopyThreadHandle,
    still_running: fn(CopyThreadHandle) -> CopyStatus,
    received: &mut Vec<CopyProgress>,
) -> CopyStatus {
    if !handle.is_finished() {
        return still_running(handle);
    }
    let total = handle.progress().total;
    let (result, remaining) = handle.get_result();
    received.extend(remaining);
    match result {
        Ok(CopyOutcome::Completed { copied }) => CopyStatus::Completed { copied },
        Ok(CopyOutcome::Cancelled { copied }) => CopyStatus::Cancelled { copied, total },
        Err(failure) => {
            warn!("{}: {}", failure, failure.error);
            CopyStatus::Failed { failure, total }
        }
    }
}
