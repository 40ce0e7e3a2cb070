mod export;
mod sound;
mod sound_collection;

pub use export::SoundRecord;
pub use sound::is_valid_name;
pub use sound::Sound;
pub use sound::SoundId;
pub use sound_collection::SoundCollection;
