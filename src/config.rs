use std::time::Duration;

pub static APP_NAME: &str = "soundpicker";
pub static CONFIG_FILE_NAME: &str = "config.yaml";

pub static MAX_NAME_LENGTH: usize = 16;
// Sounds are copied as e.g. 0001.mp3, which is what the alarm clock reads from its sd card
pub static NUMBER_WIDTH: usize = 4;

pub static DEFAULT_SOUND_EXTENSIONS: &[&str] = &["mp3"];
pub static DEFAULT_LOG_LEVEL: &str = "info";

pub static RECV_COPY_PROGRESS_TIMEOUT: Duration = Duration::from_millis(50);
