use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::debug;
use serde::Deserialize;

use crate::config;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub initial_dir: Option<PathBuf>,
    pub sound_extensions: Vec<String>,
    pub open_after: bool,
    pub confirm_cancel: bool,
    pub log_level: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            initial_dir: None,
            sound_extensions: config::DEFAULT_SOUND_EXTENSIONS
                .iter()
                .map(|extension| extension.to_string())
                .collect(),
            open_after: true,
            confirm_cancel: true,
            log_level: config::DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ConfigFile {
    /// Read the given config file, or the one in the xdg config directory.
    /// Without either, the defaults are used.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return ConfigFile::from_file(path);
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix(config::APP_NAME)
            .context("While looking for the config directory")?;
        match xdg_dirs.find_config_file(config::CONFIG_FILE_NAME) {
            Some(config_path) => ConfigFile::from_file(&config_path),
            None => Ok(ConfigFile::default()),
        }
    }

    fn from_file(file: &Path) -> Result<ConfigFile> {
        debug!("Reading config file {:?}", file);
        let data =
            fs::read_to_string(file).context(format!("While reading config file at {:?}", file))?;
        ConfigFile::parse(&data)
    }

    fn parse(data: &str) -> Result<ConfigFile> {
        let mut config_file: ConfigFile =
            serde_yaml::from_str(data).context("Reading config file contents")?;
        if let Some(initial_dir) = &config_file.initial_dir {
            config_file.initial_dir = Some(expanduser(initial_dir)?);
        }
        Ok(config_file)
    }

    pub fn initial_dir(&self) -> PathBuf {
        self.initial_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn expanduser(path: &Path) -> Result<PathBuf> {
    let path = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path);
    Path::new(&*expanded)
        .canonicalize()
        .context(format!("While reading {}", &expanded))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::ConfigFile;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ConfigFile::parse("{}").unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.sound_extensions, ["mp3"]);
        assert!(config.confirm_cancel);
        assert_eq!(config.initial_dir(), PathBuf::from("."));
    }

    #[test]
    fn reads_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let data = format!(
            "initial_dir: {}\nsound_extensions: [mp3, wav]\nopen_after: false\nconfirm_cancel: false\nlog_level: debug\n",
            dir.path().display()
        );
        let config = ConfigFile::parse(&data).unwrap();
        assert_eq!(
            config.initial_dir(),
            dir.path().canonicalize().unwrap()
        );
        assert_eq!(config.sound_extensions, ["mp3", "wav"]);
        assert!(!config.open_after);
        assert!(!config.confirm_cancel);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("colour: blue\n").is_err());
    }

    #[test]
    fn missing_initial_dir_is_an_error() {
        assert!(ConfigFile::parse("initial_dir: /does/not/exist\n").is_err());
    }

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "open_after: false\n").unwrap();
        let config = ConfigFile::read(Some(&path)).unwrap();
        assert!(!config.open_after);
        assert!(ConfigFile::read(Some(&dir.path().join("missing.yaml"))).is_err());
    }
}
