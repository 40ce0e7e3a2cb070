use std::path::Path;

use regex::Regex;

use crate::errors::Error;
use crate::errors::Result;

static EXTENSION_PATTERN: &str = "[.][^.]+$";

fn extension_regex() -> Regex {
    Regex::new(EXTENSION_PATTERN).unwrap()
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The base name of `path` with its trailing `.suffix` removed.
/// Names without a suffix are returned unchanged.
pub fn name_without_extension(path: &Path) -> String {
    extension_regex()
        .replace(&base_name(path), "")
        .into_owned()
}

/// The trailing `.suffix` of the base name of `path`, dot included.
pub fn extension(path: &Path) -> Result<String> {
    let name = base_name(path);
    extension_regex()
        .find(&name)
        .map(|m| m.as_str().to_owned())
        .ok_or(Error::NotFound(name))
}
