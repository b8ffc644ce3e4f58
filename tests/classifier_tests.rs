//! Integration tests for the entity classifier.
//!
//! Tests cover:
//! - Loose video files being enclosed in same-named folders
//! - Sample-size filtering inside folders
//! - Reconciliation when a subtitle is already present
//! - The overwrite policy and ambiguous folder contents

use movie_subtitler::core::classifier::classify_entry;
use movie_subtitler::models::config::Config;
use movie_subtitler::models::media::EntryAction;
use movie_subtitler::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn test_config(root: &Path) -> Config {
    Config {
        root_dir: root.to_path_buf(),
        temp_dir: std::env::temp_dir(),
        host: "https://www.opensubtitles.org".to_string(),
        language: "eng".to_string(),
        trusted_only: false,
        hearing_impaired_only: false,
        overwrite_existing: false,
        video_extensions: vec!["mkv".to_string(), "mp4".to_string(), "avi".to_string()],
        // Small threshold so short fixture files count as movies
        min_movie_bytes: 10,
    }
}

fn movie_bytes() -> Vec<u8> {
    vec![0u8; 64]
}

#[test]
fn test_loose_video_file_is_enclosed() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());

    let loose = temp_dir.path().join("Inception.2010.mkv");
    fs::write(&loose, movie_bytes()).unwrap();

    let action = classify_entry(&config, &loose).unwrap();
    match action {
        EntryAction::Process(target) => {
            assert_eq!(target.movie_base, "Inception.2010");
            assert_eq!(target.folder, temp_dir.path().join("Inception.2010"));
        }
        other => panic!("expected Process, got {:?}", other),
    }

    // The loose file no longer exists at its original path
    assert!(!loose.exists());
    assert!(temp_dir
        .path()
        .join("Inception.2010")
        .join("Inception.2010.mkv")
        .is_file());
}

#[test]
fn test_loose_non_video_file_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());

    let note = temp_dir.path().join("readme.txt");
    fs::write(&note, "hello").unwrap();

    let action = classify_entry(&config, &note).unwrap();
    assert!(matches!(action, EntryAction::Skip { .. }));
    assert!(note.exists());
}

#[test]
fn test_folder_with_only_sample_sized_video_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());

    let folder = temp_dir.path().join("Foo");
    fs::create_dir(&folder).unwrap();
    // Below the size threshold
    fs::write(folder.join("foo.mkv"), b"tiny").unwrap();

    let action = classify_entry(&config, &folder).unwrap();
    assert!(matches!(action, EntryAction::Skip { .. }));
    assert!(folder.join("foo.mkv").exists());
}

#[test]
fn test_folder_with_movie_is_processed() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());

    let folder = temp_dir.path().join("Movie");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("movie.mkv"), movie_bytes()).unwrap();

    let action = classify_entry(&config, &folder).unwrap();
    match action {
        EntryAction::Process(target) => {
            assert_eq!(target.movie_base, "movie");
            assert_eq!(target.folder, folder);
        }
        other => panic!("expected Process, got {:?}", other),
    }
}

#[test]
fn test_folder_with_existing_subtitle_reconciles() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());

    let folder = temp_dir.path().join("Bar [1999]");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("bar.mkv"), movie_bytes()).unwrap();
    fs::write(folder.join("bar.srt"), "1\n00:00 --> 00:01\nhi\n").unwrap();

    let action = classify_entry(&config, &folder).unwrap();
    match action {
        EntryAction::Reconcile {
            target,
            subtitle_base,
        } => {
            assert_eq!(target.movie_base, "bar");
            assert_eq!(subtitle_base, "bar");
        }
        other => panic!("expected Reconcile, got {:?}", other),
    }
    // Nothing was deleted
    assert!(folder.join("bar.srt").exists());
}

#[test]
fn test_overwrite_policy_deletes_existing_subtitle() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = test_config(temp_dir.path());
    config.overwrite_existing = true;

    let folder = temp_dir.path().join("Movie");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("movie.mkv"), movie_bytes()).unwrap();
    fs::write(folder.join("old.srt"), "stale").unwrap();

    let action = classify_entry(&config, &folder).unwrap();
    assert!(matches!(action, EntryAction::Process(_)));
    assert!(!folder.join("old.srt").exists());
}

#[test]
fn test_ambiguous_folder_contents_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());

    let folder = temp_dir.path().join("DoubleFeature");
    fs::create_dir(&folder).unwrap();
    fs::write(folder.join("one.mkv"), movie_bytes()).unwrap();
    fs::write(folder.join("two.mkv"), movie_bytes()).unwrap();

    let result = classify_entry(&config, &folder);
    assert!(matches!(result, Err(Error::AmbiguousFolder(_))));
}
