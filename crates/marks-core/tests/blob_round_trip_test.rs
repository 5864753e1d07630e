#![allow(clippy::expect_used, clippy::unwrap_used)]

use marks_core::bookmark::Bookmark;
use marks_core::storage::{BlobStore, BLOB_FILE_NAME};

fn sample() -> Vec<Bookmark> {
    vec![
        Bookmark::new("T1", "http://a", "work"),
        Bookmark::new("T2", "https://b", "home"),
        Bookmark::new("Unfiled", "https://c.example/page", ""),
    ]
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = BlobStore::new(dir.path().join(BLOB_FILE_NAME));

    let entries = sample();
    store.save(&entries).expect("save");
    assert_eq!(store.load(), entries);
}

#[test]
fn save_overwrites_previous_value_wholesale() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = BlobStore::new(dir.path().join(BLOB_FILE_NAME));

    store.save(&sample()).expect("first save");
    let shorter = vec![Bookmark::new("Only", "https://only.example", "misc")];
    store.save(&shorter).expect("second save");
    assert_eq!(store.load(), shorter);
}

#[test]
fn save_empty_list_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = BlobStore::new(dir.path().join(BLOB_FILE_NAME));

    store.save(&[]).expect("save");
    assert!(store.load().is_empty());
}

#[test]
fn blob_is_a_plain_json_array_of_three_field_objects() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = BlobStore::new(dir.path().join(BLOB_FILE_NAME));
    store.save(&sample()).expect("save");

    let raw = std::fs::read_to_string(store.path()).expect("read blob");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse blob");
    let array = value.as_array().expect("blob is an array");
    assert_eq!(array.len(), 3);
    for entry in array {
        let object = entry.as_object().expect("entry is an object");
        assert_eq!(object.len(), 3);
        assert!(object["title"].is_string());
        assert!(object["url"].is_string());
        assert!(object["category"].is_string());
    }
}

#[test]
fn corrupt_blob_recovers_to_empty_and_next_save_repairs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(BLOB_FILE_NAME);
    std::fs::write(&path, "[{\"title\": truncated").expect("write corrupt blob");

    let store = BlobStore::new(path);
    assert!(store.load().is_empty());

    let entries = vec![Bookmark::new("Fresh", "https://fresh.example", "")];
    store.save(&entries).expect("save over corrupt blob");
    assert_eq!(store.load(), entries);
}
