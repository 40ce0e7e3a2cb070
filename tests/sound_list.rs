use std::fs;
use std::path::PathBuf;

use soundpicker::collection::SoundCollection;
use soundpicker::copying::CopyProgress;
use soundpicker::copying::CopyStatus;
use soundpicker::copying::CopyThreadHandle;
use tempfile::TempDir;

fn write_sounds(dir: &TempDir, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            fs::write(&path, name).unwrap();
            path
        })
        .collect()
}

fn destination_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn assert_numbers_match_positions(sounds: &SoundCollection) {
    for (index, sound) in sounds.iter().enumerate() {
        assert_eq!(sound.number(), index + 1);
    }
}

#[test]
fn numbers_follow_every_mutation() {
    let mut sounds = SoundCollection::new();
    sounds.add((1..=6).map(|i| PathBuf::from(format!("{}.mp3", i))));
    assert_numbers_match_positions(&sounds);
    let third = sounds.get(3).unwrap().id();
    let sixth = sounds.get(6).unwrap().id();
    sounds.remove(third);
    assert_numbers_match_positions(&sounds);
    assert_eq!(sounds.find(sixth).unwrap().number(), 5);
    sounds.move_up(sixth);
    assert_eq!(sounds.find(sixth).unwrap().number(), 4);
    sounds.swap(0, 3);
    assert_eq!(sounds.find(sixth).unwrap().number(), 1);
    assert_numbers_match_positions(&sounds);
    sounds.add(vec![PathBuf::from("7.mp3")]);
    assert_eq!(sounds.get(6).unwrap().name(), "7");
    assert_numbers_match_positions(&sounds);
}

#[test]
fn edit_export_and_copy() {
    let source_dir = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    let mut sounds = SoundCollection::new();
    sounds.add(write_sounds(&source_dir, &["Alarm.mp3", "Birds.wav", "Chime.ogg"]));
    sounds.get_mut(2).unwrap().set_allow_random(false);
    let chime = sounds.get(3).unwrap().id();
    sounds.move_up(chime);
    sounds.find_mut(chime).unwrap().set_name("Bell").unwrap();

    let json: serde_json::Value = serde_json::from_str(&sounds.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"number": 1, "name": "Alarm", "allowRandom": 1},
            {"number": 2, "name": "Bell", "allowRandom": 1},
            {"number": 3, "name": "Birds", "allowRandom": 0},
        ])
    );

    let mut status = CopyStatus::new(CopyThreadHandle::start(
        sounds.snapshot(),
        destination.path(),
    ));
    // Edits after the copy started do not change what is copied
    sounds.remove_number(1);
    let received = status.wait();
    assert!(matches!(status, CopyStatus::Completed { copied: 3 }));
    assert_eq!(
        received,
        [
            CopyProgress::new(1, 3),
            CopyProgress::new(2, 3),
            CopyProgress::new(3, 3)
        ]
    );
    assert_eq!(
        destination_files(&destination),
        ["0001.mp3", "0002.ogg", "0003.wav"]
    );
    assert_eq!(
        fs::read_to_string(destination.path().join("0002.ogg")).unwrap(),
        "Chime.ogg"
    );
}

#[test]
fn failed_copy_keeps_earlier_files() {
    let source_dir = TempDir::new().unwrap();
    let destination = TempDir::new().unwrap();
    let mut sounds = SoundCollection::new();
    let files = write_sounds(&source_dir, &["a.mp3", "b.mp3"]);
    sounds.add(files.clone());
    fs::remove_file(&files[1]).unwrap();
    let mut status = CopyStatus::new(CopyThreadHandle::start(
        sounds.snapshot(),
        destination.path(),
    ));
    let received = status.wait();
    assert_eq!(received, [CopyProgress::new(1, 2)]);
    match status {
        CopyStatus::Failed { failure, total } => {
            assert_eq!(failure.copied, 1);
            assert_eq!(total, 2);
        }
        _ => panic!("Copy should fail"),
    }
    assert_eq!(destination_files(&destination), ["0001.mp3"]);
}
