use super::{TrackRecord, list_audio_files, scan};
use crate::config::LibrarySettings;
use crate::manifest::ManifestError;
use std::fs;
use tempfile::tempdir;

const BASE: &str = "https://example.com/tracks/";

#[test]
fn scan_filters_non_audio_and_sorts_by_code_point() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Song_One.mp3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("Another Song.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("track.txt"), b"ignore me").unwrap();

    let tracks = scan(dir.path(), &LibrarySettings::default(), BASE).unwrap();
    assert_eq!(
        tracks,
        vec![
            TrackRecord {
                name: "Another Song".into(),
                file: "Another Song.MP3".into(),
                url: "https://example.com/tracks/Another%20Song.MP3".into(),
            },
            TrackRecord {
                name: "Song One".into(),
                file: "Song_One.mp3".into(),
                url: "https://example.com/tracks/Song_One.mp3".into(),
            },
        ]
    );
}

#[test]
fn scan_orders_uppercase_before_lowercase() {
    let dir = tempdir().unwrap();
    for f in ["beta.mp3", "Alpha.mp3", "alpha.mp3", "Zulu.mp3"] {
        fs::write(dir.path().join(f), b"x").unwrap();
    }

    let tracks = scan(dir.path(), &LibrarySettings::default(), BASE).unwrap();
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zulu", "alpha", "beta"]);
    assert!(tracks.windows(2).all(|w| w[0].name <= w[1].name));
}

#[test]
fn scan_counts_every_audio_file() {
    let dir = tempdir().unwrap();
    let files = ["a.mp3", "b.MP3", "c.Mp3", "d_e_f.mP3", "with space.mp3"];
    for f in files {
        fs::write(dir.path().join(f), b"x").unwrap();
    }

    let tracks = scan(dir.path(), &LibrarySettings::default(), BASE).unwrap();
    assert_eq!(tracks.len(), files.len());
    for t in &tracks {
        assert!(!t.name.contains('_'));
        assert!(!t.name.to_ascii_lowercase().ends_with(".mp3"));
    }
}

#[test]
fn scan_urls_decode_back_to_filenames() {
    let dir = tempdir().unwrap();
    let files = ["My Song.mp3", "Rock & Roll.mp3", "100% Café.mp3", "a+b=c.mp3"];
    for f in files {
        fs::write(dir.path().join(f), b"x").unwrap();
    }

    let tracks = scan(dir.path(), &LibrarySettings::default(), BASE).unwrap();
    assert_eq!(tracks.len(), files.len());
    for t in &tracks {
        let suffix = t.url.strip_prefix(BASE).unwrap();
        assert!(!suffix.contains(' '));
        assert_eq!(urlencoding::decode(suffix).unwrap(), t.file);
    }
    let my_song = tracks.iter().find(|t| t.file == "My Song.mp3").unwrap();
    assert!(my_song.url.ends_with("My%20Song.mp3"));
}

#[test]
fn scan_empty_directory_is_not_an_error() {
    let dir = tempdir().unwrap();
    let tracks = scan(dir.path(), &LibrarySettings::default(), BASE).unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn list_audio_files_rejects_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = list_audio_files(&missing, &LibrarySettings::default()).unwrap_err();
    match err {
        ManifestError::DirectoryNotFound { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn list_audio_files_rejects_plain_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("song.mp3");
    fs::write(&file, b"x").unwrap();

    let err = list_audio_files(&file, &LibrarySettings::default()).unwrap_err();
    assert!(matches!(err, ManifestError::DirectoryNotFound { .. }));
    assert!(err.to_string().contains("song.mp3"));
}
