use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Result;
use log::info;

use crate::collection::SoundCollection;
use crate::config_file::ConfigFile;
use crate::copying::CopyOutcome;
use crate::copying::CopyProgress;
use crate::copying::CopyStatus;
use crate::copying::CopyThreadHandle;
use crate::interrupt::Interrupt;
use crate::open::open;
use crate::picker::Picker;

/// The sound list together with everything needed to pick, export and copy it.
pub struct App {
    pub sounds: SoundCollection,
    picker: Picker,
    open_after: bool,
    confirm_cancel: bool,
    interrupt: Interrupt,
}

impl App {
    pub fn new(config_file: &ConfigFile, open_after: bool, interrupt: Interrupt) -> Self {
        Self {
            sounds: SoundCollection::new(),
            picker: Picker::new(&config_file.initial_dir(), &config_file.sound_extensions),
            open_after,
            confirm_cancel: config_file.confirm_cancel,
            interrupt,
        }
    }

    /// Resolve every path against `dir` instead of the last picked directory.
    pub fn resolve_from(mut self, dir: &Path) -> Self {
        self.picker = self.picker.fixed_at(dir);
        self
    }

    /// Returns the number of added sounds.
    pub fn add_sounds<S: AsRef<str>>(&mut self, inputs: &[S]) -> usize {
        let files = self.picker.pick_files(inputs);
        let num_files = files.len();
        self.sounds.add(files);
        num_files
    }

    /// Write the sound list to `input`. Returns `None` if there is nowhere to write to.
    pub fn export_json(&mut self, input: &str) -> Result<Option<PathBuf>> {
        let destination = match self.picker.pick_save_file(input) {
            Some(destination) => destination,
            None => return Ok(None),
        };
        self.sounds.write_json(&destination)?;
        if self.open_after {
            open(&destination);
        }
        Ok(Some(destination))
    }

    /// Copy the sounds into the directory `input`, printing progress.
    ///
    /// Ctrl-C asks to cancel. If cancelling needs confirmation, `confirm`
    /// decides, while the copy goes on in the background.
    pub fn copy_sound_files<F>(
        &mut self,
        input: &str,
        mut confirm: F,
    ) -> Result<Option<CopyOutcome>>
    where
        F: FnMut() -> bool,
    {
        let destination = match self.picker.pick_directory(input) {
            Some(destination) => destination,
            None => return Ok(None),
        };
        info!("Copying {} sounds to {:?}", self.sounds.len(), destination);
        self.interrupt.start_copying();
        let handle = CopyThreadHandle::start(self.sounds.snapshot(), &destination);
        let mut status = CopyStatus::new(handle);
        while !status.is_terminal() {
            if !status.update().is_empty() {
                print_progress(status.progress());
            }
            if self.interrupt.take_request() {
                println!();
                status.request_cancel(self.confirm_cancel);
                if status.is_confirming_cancel() {
                    if confirm() {
                        status.confirm_cancel();
                    } else {
                        status.reject_cancel();
                    }
                }
            }
        }
        self.interrupt.stop_copying();
        println!();
        let outcome = match status {
            CopyStatus::Completed { copied } => CopyOutcome::Completed { copied },
            CopyStatus::Cancelled { copied, .. } => CopyOutcome::Cancelled { copied },
            CopyStatus::Failed { failure, .. } => return Err(failure.into()),
            _ => return Err(anyhow!("Copying ended in a running state")),
        };
        if self.open_after {
            open(&destination);
        }
        Ok(Some(outcome))
    }

    pub fn play(&self, number: usize) -> Result<()> {
        let sound = self
            .sounds
            .get(number)
            .ok_or_else(|| anyhow!("No sound with number {}", number))?;
        open(sound.file());
        Ok(())
    }
}

fn print_progress(progress: CopyProgress) {
    print!("\rCopying {}", progress);
    // Progress output is cosmetic
    let _ = io::stdout().flush();
}
