use std::fs::DirEntry;
use std::fs::{self};
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

fn get_entries_with_predicate<F>(dir: &Path, predicate: F) -> Result<impl Iterator<Item = PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    let entries = fs::read_dir(dir).context(format!("While reading directory {:?}", dir))?;
    let dir_entries: std::io::Result<Vec<DirEntry>> = entries.collect();
    Ok(dir_entries?
        .into_iter()
        .map(|entry| entry.path())
        .filter(move |path| predicate(path)))
}

pub fn has_extension_in(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|extension| {
            let extension = extension.to_string_lossy();
            extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
        })
        .unwrap_or(false)
}

/// The files in `dir` with one of the given extensions, sorted by file name.
pub fn get_sound_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = get_entries_with_predicate(dir, |path| {
        path.is_file() && has_extension_in(path, extensions)
    })?
    .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
