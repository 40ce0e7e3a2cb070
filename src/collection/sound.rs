use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use regex::Regex;

use crate::config::MAX_NAME_LENGTH;
use crate::config::NUMBER_WIDTH;
use crate::errors::Error;
use crate::errors::Result;
use crate::file_name::name_without_extension;

// At most 16 characters, no leading whitespace and no whitespace as the 16th character
static NAME_PATTERN: &str = r"^\S.{0,14}\S?$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoundId(pub(super) u64);

/// One picked sound file together with the metadata the alarm clock needs.
///
/// The number is owned by the collection that holds the sound and is
/// recomputed by it on every mutation.
#[derive(Clone, Debug)]
pub struct Sound {
    id: SoundId,
    file: PathBuf,
    number: usize,
    name: String,
    allow_random: bool,
}

impl Sound {
    pub(super) fn new(id: SoundId, file: PathBuf) -> Self {
        let name = default_name(&file);
        Self {
            id,
            file,
            number: 0,
            name,
            allow_random: true,
        }
    }

    pub(super) fn place(&mut self, index: usize) {
        self.number = index + 1;
    }

    pub fn id(&self) -> SoundId {
        self.id
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn display_number(&self) -> String {
        format!("#{:0width$}", self.number, width = NUMBER_WIDTH)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(Error::InvalidName(name.to_owned()));
        }
        self.name = name.to_owned();
        Ok(())
    }

    pub fn allow_random(&self) -> bool {
        self.allow_random
    }

    pub fn set_allow_random(&mut self, allow_random: bool) {
        self.allow_random = allow_random;
    }

    pub fn toggle_allow_random(&mut self) {
        self.allow_random = !self.allow_random;
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<width$} [{}]",
            self.display_number(),
            self.name,
            if self.allow_random { "random" } else { "fixed" },
            width = MAX_NAME_LENGTH
        )
    }
}

pub fn is_valid_name(name: &str) -> bool {
    Regex::new(NAME_PATTERN).unwrap().is_match(name)
}

fn truncate_and_trim(name: &str) -> String {
    name.chars()
        .take(MAX_NAME_LENGTH)
        .collect::<String>()
        .trim()
        .to_owned()
}

fn default_name(file: &Path) -> String {
    let name = truncate_and_trim(&name_without_extension(file));
    if !name.is_empty() {
        return name;
    }
    // Files like ".mp3" have nothing left once the extension is gone
    file.file_name()
        .map(|name| truncate_and_trim(&name.to_string_lossy()))
        .unwrap_or_default()
}
