use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;

/// Ctrl-C turns into a cancel request while a copy runs and exits otherwise.
#[derive(Clone, Default)]
pub struct Interrupt {
    requested: Arc<AtomicBool>,
    copying: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn set_ctrl_handler(&self) -> Result<()> {
        let interrupt = self.clone();
        ctrlc::set_handler(move || {
            if interrupt.copying.load(Ordering::SeqCst) {
                interrupt.requested.store(true, Ordering::SeqCst);
            } else {
                process::exit(130);
            }
        })
        .context("Error setting Ctrl-C handler")
    }

    pub fn start_copying(&self) {
        self.requested.store(false, Ordering::SeqCst);
        self.copying.store(true, Ordering::SeqCst);
    }

    pub fn stop_copying(&self) {
        self.copying.store(false, Ordering::SeqCst);
    }

    /// Whether Ctrl-C was pressed since the last call.
    pub fn take_request(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}
