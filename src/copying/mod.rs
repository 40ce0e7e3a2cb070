mod copy_job;
mod copy_outcome;
mod copy_progress;
mod copy_status;
mod copy_thread;
mod copy_thread_handle;

pub use copy_job::CopyEntry;
pub use copy_job::CopyJob;
pub use copy_outcome::CopyFailure;
pub use copy_outcome::CopyOutcome;
pub use copy_outcome::CopyResult;
pub use copy_progress::CopyProgress;
pub use copy_status::CopyStatus;
pub use copy_thread::copy_sounds;
pub use copy_thread_handle::CopyThreadHandle;
