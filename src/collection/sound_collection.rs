use std::path::PathBuf;

use log::debug;

use super::sound::Sound;
use super::sound::SoundId;
use crate::copying::CopyJob;

/// The ordered list of picked sounds.
///
/// A sound's number always equals its position in the list plus one.
/// Every mutation renumbers the affected sounds before it returns.
#[derive(Default)]
pub struct SoundCollection {
    sounds: Vec<Sound>,
    next_id: u64,
}

impl SoundCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for file in files {
            let mut sound = Sound::new(SoundId(self.next_id), file);
            self.next_id += 1;
            sound.place(self.sounds.len());
            debug!("Added sound {}: {:?}", sound.number(), sound.file());
            self.sounds.push(sound);
        }
    }

    pub fn remove(&mut self, id: SoundId) {
        if let Some(index) = self.index_of(id) {
            let sound = self.sounds.remove(index);
            debug!("Removed sound {}: {:?}", sound.number(), sound.file());
            self.renumber_from(index);
        }
    }

    pub fn remove_number(&mut self, number: usize) {
        if let Some(id) = self.get(number).map(Sound::id) {
            self.remove(id);
        }
    }

    /// Exchange the sounds at two zero-based positions.
    /// Positions past either end are clamped to the first or last sound.
    pub fn swap(&mut self, position_a: usize, position_b: usize) {
        if self.sounds.is_empty() {
            return;
        }
        let last = self.sounds.len() - 1;
        let position_a = position_a.min(last);
        let position_b = position_b.min(last);
        self.sounds.swap(position_a, position_b);
        self.sounds[position_a].place(position_a);
        self.sounds[position_b].place(position_b);
    }

    pub fn move_up(&mut self, id: SoundId) {
        if let Some(index) = self.index_of(id) {
            self.swap(index.saturating_sub(1), index);
        }
    }

    pub fn move_down(&mut self, id: SoundId) {
        if let Some(index) = self.index_of(id) {
            self.swap(index, index + 1);
        }
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sound> {
        self.sounds.iter()
    }

    pub fn get(&self, number: usize) -> Option<&Sound> {
        self.sounds.get(number.checked_sub(1)?)
    }

    pub fn get_mut(&mut self, number: usize) -> Option<&mut Sound> {
        self.sounds.get_mut(number.checked_sub(1)?)
    }

    pub fn find(&self, id: SoundId) -> Option<&Sound> {
        self.sounds.iter().find(|sound| sound.id() == id)
    }

    pub fn find_mut(&mut self, id: SoundId) -> Option<&mut Sound> {
        self.sounds.iter_mut().find(|sound| sound.id() == id)
    }

    /// The current order of sound files and numbers, detached from later edits.
    pub fn snapshot(&self) -> CopyJob {
        CopyJob::new(
            self.sounds
                .iter()
                .map(|sound| (sound.number(), sound.file().to_owned()))
                .collect(),
        )
    }

    fn index_of(&self, id: SoundId) -> Option<usize> {
        self.sounds.iter().position(|sound| sound.id() == id)
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, sound) in self.sounds.iter_mut().enumerate().skip(start) {
            sound.place(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::SoundCollection;

    fn collection(names: &[&str]) -> SoundCollection {
        let mut collection = SoundCollection::new();
        collection.add(names.iter().map(|name| PathBuf::from(format!("{}.mp3", name))));
        collection
    }

    fn names(collection: &SoundCollection) -> Vec<&str> {
        collection.iter().map(|sound| sound.name()).collect()
    }

    fn assert_numbers_match_positions(collection: &SoundCollection) {
        for (index, sound) in collection.iter().enumerate() {
            assert_eq!(sound.number(), index + 1);
        }
    }

    #[test]
    fn add_appends_in_order() {
        let mut collection = collection(&["a", "b"]);
        collection.add(vec![PathBuf::from("c.mp3"), PathBuf::from("d.mp3")]);
        assert_eq!(names(&collection), ["a", "b", "c", "d"]);
        assert_numbers_match_positions(&collection);
    }

    #[test]
    fn add_nothing_is_a_no_op() {
        let mut collection = collection(&["a"]);
        collection.add(Vec::new());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn remove_shifts_later_numbers_down() {
        let mut collection = collection(&["a", "b", "c", "d"]);
        let id = collection.get(2).unwrap().id();
        collection.remove(id);
        assert_eq!(names(&collection), ["a", "c", "d"]);
        assert_eq!(collection.get(1).unwrap().name(), "a");
        assert_eq!(collection.get(2).unwrap().name(), "c");
        assert_eq!(collection.get(3).unwrap().name(), "d");
        assert_numbers_match_positions(&collection);
    }

    #[test]
    fn removing_absent_sound_is_a_no_op() {
        let mut collection = collection(&["a", "b"]);
        let id = collection.get(1).unwrap().id();
        collection.remove(id);
        collection.remove(id);
        collection.remove_number(5);
        collection.remove_number(0);
        assert_eq!(names(&collection), ["b"]);
        assert_numbers_match_positions(&collection);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut collection = collection(&["a"]);
        let old = collection.get(1).unwrap().id();
        collection.remove(old);
        collection.add(vec![PathBuf::from("b.mp3")]);
        assert_ne!(collection.get(1).unwrap().id(), old);
        assert!(collection.find(old).is_none());
    }

    #[test]
    fn swap_exchanges_and_renumbers() {
        let mut collection = collection(&["a", "b", "c"]);
        collection.swap(0, 2);
        assert_eq!(names(&collection), ["c", "b", "a"]);
        assert_numbers_match_positions(&collection);
    }

    #[test]
    fn swap_clamps_out_of_range_positions() {
        let mut collection = collection(&["a", "b", "c"]);
        collection.swap(1, 10);
        assert_eq!(names(&collection), ["a", "c", "b"]);
        assert_numbers_match_positions(&collection);
        SoundCollection::new().swap(0, 1);
    }

    #[test]
    fn move_up_and_down() {
        let mut collection = collection(&["a", "b", "c"]);
        let b = collection.get(2).unwrap().id();
        collection.move_up(b);
        assert_eq!(names(&collection), ["b", "a", "c"]);
        assert_eq!(collection.find(b).unwrap().number(), 1);
        collection.move_down(b);
        collection.move_down(b);
        assert_eq!(names(&collection), ["a", "c", "b"]);
        assert_eq!(collection.find(b).unwrap().number(), 3);
        assert_numbers_match_positions(&collection);
    }

    #[test]
    fn moving_past_the_ends_is_a_no_op() {
        let mut collection = collection(&["a", "b", "c"]);
        let first = collection.get(1).unwrap().id();
        let last = collection.get(3).unwrap().id();
        collection.move_up(first);
        collection.move_down(last);
        assert_eq!(names(&collection), ["a", "b", "c"]);
        assert_numbers_match_positions(&collection);
    }

    #[test]
    fn edits_through_get_mut_keep_numbers() {
        let mut collection = collection(&["a", "b"]);
        let sound = collection.get_mut(2).unwrap();
        sound.set_name("Bells").unwrap();
        sound.toggle_allow_random();
        let sound = collection.get(2).unwrap();
        assert_eq!(sound.name(), "Bells");
        assert!(!sound.allow_random());
        assert_eq!(sound.number(), 2);
    }

    #[test]
    fn snapshot_is_detached_from_later_mutation() {
        let mut collection = collection(&["a", "b", "c"]);
        let job = collection.snapshot();
        collection.remove_number(1);
        collection.swap(0, 1);
        let numbered: Vec<_> = job
            .iter()
            .map(|entry| (entry.number, entry.source.clone()))
            .collect();
        assert_eq!(
            numbered,
            [
                (1, PathBuf::from("a.mp3")),
                (2, PathBuf::from("b.mp3")),
                (3, PathBuf::from("c.mp3")),
            ]
        );
    }
}
