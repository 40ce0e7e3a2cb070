use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::warn;

use crate::util::get_sound_files;

/// Turns paths typed by the user into sound files or a destination directory.
///
/// Like a file dialog, it starts where the previous pick ended, unless it
/// was fixed to a directory.
pub struct Picker {
    initial_dir: PathBuf,
    extensions: Vec<String>,
    remember_dir: bool,
}

impl Picker {
    pub fn new(initial_dir: &Path, extensions: &[String]) -> Self {
        Self {
            initial_dir: initial_dir.into(),
            extensions: extensions.to_vec(),
            remember_dir: true,
        }
    }

    /// Resolve everything against `dir` from now on.
    pub fn fixed_at(self, dir: &Path) -> Self {
        Self {
            initial_dir: dir.into(),
            remember_dir: false,
            ..self
        }
    }

    fn remember(&mut self, dir: &Path) {
        if self.remember_dir {
            self.initial_dir = dir.to_owned();
        }
    }

    pub fn initial_dir(&self) -> &Path {
        &self.initial_dir
    }

    fn resolve(&self, input: &str) -> PathBuf {
        let expanded = shellexpand::tilde(input);
        let path = Path::new(&*expanded);
        if path.is_absolute() {
            path.to_owned()
        } else {
            self.initial_dir.join(path)
        }
    }

    /// Resolve each input to files. Directories contribute their sound files.
    /// Inputs that do not exist are skipped. An empty result means nothing was picked.
    pub fn pick_files<S: AsRef<str>>(&mut self, inputs: &[S]) -> Vec<PathBuf> {
        let mut files = vec![];
        for input in inputs {
            let path = self.resolve(input.as_ref());
            if path.is_file() {
                files.push(path);
            } else if path.is_dir() {
                match get_sound_files(&path, &self.extensions) {
                    Ok(found) => files.extend(found),
                    Err(e) => warn!("{:#}", e),
                }
            } else {
                warn!("No such file: {:?}", path);
            }
        }
        if let Some(parent) = files.first().and_then(|file| file.parent()) {
            self.remember(parent);
        }
        debug!("Picked {} files", files.len());
        files
    }

    /// Resolve an existing directory. Directories are never created.
    pub fn pick_directory(&mut self, input: &str) -> Option<PathBuf> {
        let path = self.resolve(input);
        if !path.is_dir() {
            warn!("Not a directory: {:?}", path);
            return None;
        }
        self.remember(&path);
        Some(path)
    }

    /// Resolve a file to write to, inside an existing directory.
    pub fn pick_save_file(&mut self, input: &str) -> Option<PathBuf> {
        let path = self.resolve(input);
        match path.parent() {
            Some(parent) if parent.is_dir() => {
                self.remember(parent);
                Some(path)
            }
            _ => {
                warn!("Cannot save to {:?}", path);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::Picker;

    fn picker(dir: &TempDir) -> Picker {
        Picker::new(dir.path(), &["mp3".to_owned()])
    }

    #[test]
    fn picks_files_relative_to_initial_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.mp3"), "").unwrap();
        fs::write(dir.path().join("b.wav"), "").unwrap();
        let files = picker(&dir).pick_files(&["a.mp3", "b.wav", "missing.mp3"]);
        assert_eq!(files, [dir.path().join("a.mp3"), dir.path().join("b.wav")]);
    }

    #[test]
    fn directory_expands_to_sound_files() {
        let dir = TempDir::new().unwrap();
        let sounds = dir.path().join("sounds");
        fs::create_dir(&sounds).unwrap();
        fs::write(sounds.join("2.mp3"), "").unwrap();
        fs::write(sounds.join("1.mp3"), "").unwrap();
        fs::write(sounds.join("cover.jpg"), "").unwrap();
        let mut picker = picker(&dir);
        let files = picker.pick_files(&["sounds"]);
        assert_eq!(files, [sounds.join("1.mp3"), sounds.join("2.mp3")]);
        assert_eq!(picker.initial_dir(), sounds);
    }

    #[test]
    fn empty_pick_keeps_initial_dir() {
        let dir = TempDir::new().unwrap();
        let mut picker = picker(&dir);
        let nothing: [&str; 0] = [];
        assert!(picker.pick_files(&nothing).is_empty());
        assert_eq!(picker.initial_dir(), dir.path());
    }

    #[test]
    fn fixed_picker_keeps_its_directory() {
        let dir = TempDir::new().unwrap();
        let sounds = dir.path().join("sounds");
        fs::create_dir(&sounds).unwrap();
        fs::write(sounds.join("a.mp3"), "").unwrap();
        let mut picker = picker(&dir).fixed_at(dir.path());
        assert_eq!(picker.pick_files(&["sounds/a.mp3"]), [sounds.join("a.mp3")]);
        assert_eq!(picker.pick_directory("sounds"), Some(sounds.clone()));
        assert_eq!(picker.initial_dir(), dir.path());
        assert_eq!(
            picker.pick_save_file("out.json"),
            Some(dir.path().join("out.json"))
        );
    }

    #[test]
    fn pick_directory_requires_existing_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sd")).unwrap();
        let mut picker = picker(&dir);
        assert!(picker.pick_directory("missing").is_none());
        assert_eq!(picker.pick_directory("sd"), Some(dir.path().join("sd")));
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn pick_save_file_requires_existing_parent() {
        let dir = TempDir::new().unwrap();
        let mut picker = picker(&dir);
        assert_eq!(
            picker.pick_save_file("sounds.json"),
            Some(dir.path().join("sounds.json"))
        );
        assert!(picker.pick_save_file("missing/sounds.json").is_none());
    }
}
