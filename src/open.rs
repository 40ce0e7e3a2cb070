use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use log::warn;
use subprocess::Exec;

#[cfg(target_os = "linux")]
fn open_command(path: &Path) -> Exec {
    Exec::cmd("xdg-open").arg(path)
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Exec {
    Exec::cmd("open").arg(path)
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Exec {
    Exec::cmd("cmd").arg("/C").arg("start").arg("").arg(path)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn open_command(path: &Path) -> Exec {
    Exec::cmd("xdg-open").arg(path)
}

fn try_open(path: &Path) -> Result<()> {
    open_command(path)
        .detached()
        .popen()
        .context("Failed to start the default application")?;
    Ok(())
}

/// Open `path` with the default application of the desktop.
/// Failing to do so is not an error for the caller.
pub fn open(path: &Path) {
    debug!("Opening {:?}", path);
    if let Err(e) = try_open(path) {
        warn!("File could not be opened: {:?}: {:#}", path, e);
    }
}
