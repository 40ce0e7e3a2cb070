use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;
use serde::Serializer;

use super::sound::Sound;
use super::sound_collection::SoundCollection;
use crate::errors::Error;
use crate::errors::Result;

/// A sound as the alarm clock reads it from its sound list.
/// The source file is not part of the record.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SoundRecord {
    pub number: usize,
    pub name: String,
    #[serde(serialize_with = "bool_as_int")]
    pub allow_random: bool,
}

impl From<&Sound> for SoundRecord {
    fn from(sound: &Sound) -> Self {
        Self {
            number: sound.number(),
            name: sound.name().to_owned(),
            allow_random: sound.allow_random(),
        }
    }
}

fn bool_as_int<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

impl SoundCollection {
    pub fn export_metadata(&self) -> Vec<SoundRecord> {
        self.iter().map(SoundRecord::from).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.export_metadata())
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let to_error = |source| Error::Serialization {
            path: path.to_owned(),
            source,
        };
        let file = File::create(path).map_err(|e| to_error(serde_json::Error::io(e)))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.export_metadata()).map_err(to_error)?;
        writer
            .flush()
            .map_err(|e| to_error(serde_json::Error::io(e)))?;
        info!("Wrote {} sounds to {:?}", self.len(), path);
        Ok(())
    }
}
