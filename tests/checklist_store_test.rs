use std::collections::HashSet;
use std::fs;

use silvertrail_api::models::checklist::{
    ChecklistCategory, ChecklistData, ChecklistItem, ChecklistRecord,
};
use silvertrail_api::services::checklist_store::{ChecklistStore, ChecklistStoreError};

fn sample_data() -> ChecklistData {
    ChecklistData {
        categories: vec![ChecklistCategory {
            name: "Medication".to_string(),
            items: vec![ChecklistItem {
                name: "Blood pressure pills".to_string(),
                required: true,
                note: "One week supply plus spares".to_string(),
            }],
        }],
        ..Default::default()
    }
}

fn write_record(store_dir: &std::path::Path, id: &str, timestamp: &str) {
    let record = ChecklistRecord {
        id: id.to_string(),
        destination: "Kyoto".to_string(),
        duration: "About a week".to_string(),
        timestamp: timestamp.to_string(),
        data: sample_data(),
    };
    fs::write(
        store_dir.join(format!("{}.json", id)),
        serde_json::to_string_pretty(&record).unwrap(),
    )
    .unwrap();
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());

    let record = store.save("Kyoto", "About a week", sample_data()).unwrap();
    assert!(record.id.starts_with("Kyoto_About-a-week_"));

    let loaded = store.load(&format!("{}.json", record.id)).unwrap();
    assert_eq!(loaded.destination, "Kyoto");
    assert_eq!(loaded.duration, "About a week");
    assert_eq!(loaded.data, sample_data());
    assert_eq!(loaded.timestamp, record.timestamp);
}

#[test]
fn save_creates_the_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("history");
    let store = ChecklistStore::new(&nested);

    store.save("Sanya", "3-5 days", sample_data()).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn list_is_sorted_by_timestamp_descending() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());
    fs::create_dir_all(dir.path()).unwrap();

    write_record(dir.path(), "first", "2024-01-01 08:00:00");
    write_record(dir.path(), "third", "2024-03-01 08:00:00");
    write_record(dir.path(), "second", "2024-02-01 08:00:00");

    let ids: Vec<String> = store.list().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["third", "second", "first"]);
}

#[test]
fn list_skips_corrupt_files_and_checked_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());

    write_record(dir.path(), "good", "2024-01-01 08:00:00");
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
    fs::write(dir.path().join("good_checked.json"), r#"{"checked": []}"#).unwrap();
    fs::write(dir.path().join("notes.txt"), "unrelated").unwrap();

    let summaries = store.list();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, "good");
    assert_eq!(summaries[0].filename, "good.json");
}

#[test]
fn list_on_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path().join("never_created"));
    assert!(store.list().is_empty());
}

#[test]
fn load_missing_record_is_a_not_found_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());

    match store.load("absent.json") {
        Err(ChecklistStoreError::RecordNotFound(key)) => assert_eq!(key, "absent.json"),
        other => panic!("expected RecordNotFound, got {:?}", other.map(|r| r.id)),
    }
}

#[test]
fn delete_semantics() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());

    assert!(!store.delete("absent.json"));

    let record = store.save("Dali", "3-5 days", sample_data()).unwrap();
    let filename = format!("{}.json", record.id);
    assert!(store.delete(&filename));
    assert!(matches!(
        store.load(&filename),
        Err(ChecklistStoreError::RecordNotFound(_))
    ));
}

#[test]
fn delete_does_not_cascade_to_checked_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());

    let record = store.save("Dali", "3-5 days", sample_data()).unwrap();
    let mut checked = HashSet::new();
    checked.insert(format!("{}_0", record.id));
    store.save_checked_state(&record.id, &checked).unwrap();

    assert!(store.delete(&format!("{}.json", record.id)));
    // The orphaned sibling is an accepted inconsistency.
    assert!(dir
        .path()
        .join(format!("{}_checked.json", record.id))
        .is_file());
}

#[test]
fn checked_state_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());

    let mut checked = HashSet::new();
    checked.insert("trip_0".to_string());
    checked.insert("trip_3".to_string());
    store.save_checked_state("trip", &checked).unwrap();

    assert_eq!(store.load_checked_state("trip"), checked);
}

#[test]
fn checked_state_degrades_to_empty_on_missing_or_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = ChecklistStore::new(dir.path());

    assert!(store.load_checked_state("nothing_saved").is_empty());

    fs::create_dir_all(dir.path()).unwrap();
    fs::write(dir.path().join("bad_checked.json"), "not json at all").unwrap();
    assert!(store.load_checked_state("bad").is_empty());
}
