use std::collections::HashSet;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Local;

use crate::models::checklist::{CheckedState, ChecklistData, ChecklistRecord, ChecklistSummary};

const DEFAULT_DATA_DIR: &str = "checklist_data";
const CHECKED_SUFFIX: &str = "_checked";

#[derive(Debug)]
pub enum ChecklistStoreError {
    RecordNotFound(String),
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ChecklistStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecklistStoreError::RecordNotFound(key) => {
                write!(f, "Checklist record not found: {}", key)
            }
            ChecklistStoreError::Io(err) => write!(f, "I/O error: {}", err),
            ChecklistStoreError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ChecklistStoreError {}

impl From<io::Error> for ChecklistStoreError {
    fn from(err: io::Error) -> Self {
        ChecklistStoreError::Io(err)
    }
}

impl From<serde_json::Error> for ChecklistStoreError {
    fn from(err: serde_json::Error) -> Self {
        ChecklistStoreError::Parse(err)
    }
}

/// File-backed checklist history: one `{id}.json` record per generated
/// checklist plus a sibling `{id}_checked.json` for checked-item state.
/// Single-writer by assumption; there is no locking discipline.
#[derive(Clone)]
pub struct ChecklistStore {
    data_dir: PathBuf,
}

impl ChecklistStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_env() -> Self {
        let dir = env::var("CHECKLIST_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::new(dir)
    }

    /// Writes a new record and returns it. The id is derived from destination,
    /// duration and the current unix time, so two identical requests within
    /// the same second collide; accepted as a known limitation of the
    /// single-user store.
    pub fn save(
        &self,
        destination: &str,
        duration: &str,
        data: ChecklistData,
    ) -> Result<ChecklistRecord, ChecklistStoreError> {
        fs::create_dir_all(&self.data_dir)?;

        let now = Local::now();
        let id = derive_id(destination, duration, now.timestamp());
        let record = ChecklistRecord {
            id: id.clone(),
            destination: destination.to_string(),
            duration: duration.to_string(),
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            data,
        };

        let path = self.data_dir.join(format!("{}.json", id));
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;

        Ok(record)
    }

    /// Record summaries sorted newest-first. Unreadable or corrupt files are
    /// skipped and logged, never fatal to the listing.
    pub fn list(&self) -> Vec<ChecklistSummary> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut summaries = Vec::new();
        for entry in entries.flatten() {
            let filename = entry.file_name().to_string_lossy().to_string();
            if !filename.ends_with(".json") || filename.ends_with("_checked.json") {
                continue;
            }
            match self.load(&filename) {
                Ok(record) => summaries.push(ChecklistSummary {
                    id: record.id,
                    destination: record.destination,
                    duration: record.duration,
                    timestamp: record.timestamp,
                    filename,
                }),
                Err(err) => {
                    eprintln!("Skipping unreadable checklist file {}: {}", filename, err);
                }
            }
        }

        summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        summaries
    }

    pub fn load(&self, filename: &str) -> Result<ChecklistRecord, ChecklistStoreError> {
        if !valid_storage_key(filename) {
            return Err(ChecklistStoreError::RecordNotFound(filename.to_string()));
        }

        let path = self.data_dir.join(filename);
        if !path.is_file() {
            return Err(ChecklistStoreError::RecordNotFound(filename.to_string()));
        }

        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Removes a record file; returns whether it existed. Does not cascade to
    /// the checked-state file, so deleting a record can leave an orphaned
    /// `_checked.json` behind.
    pub fn delete(&self, filename: &str) -> bool {
        if !valid_storage_key(filename) {
            return false;
        }

        let path = self.data_dir.join(filename);
        if !path.is_file() {
            return false;
        }

        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("Failed to delete checklist file {}: {}", filename, err);
                false
            }
        }
    }

    /// Checked state is cosmetic, so any read failure degrades to "nothing
    /// checked" instead of surfacing an error.
    pub fn load_checked_state(&self, id: &str) -> HashSet<String> {
        let path = self.checked_path(id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return HashSet::new(),
        };

        match serde_json::from_str::<CheckedState>(&contents) {
            Ok(state) => state.checked.into_iter().collect(),
            Err(_) => HashSet::new(),
        }
    }

    pub fn save_checked_state(
        &self,
        id: &str,
        checked: &HashSet<String>,
    ) -> Result<(), ChecklistStoreError> {
        fs::create_dir_all(&self.data_dir)?;

        let mut ids: Vec<String> = checked.iter().cloned().collect();
        ids.sort();
        let state = CheckedState { checked: ids };
        fs::write(self.checked_path(id), serde_json::to_string_pretty(&state)?)?;

        Ok(())
    }

    fn checked_path(&self, id: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}.json", id, CHECKED_SUFFIX))
    }
}

/// Storage keys double as file names inside the data directory; anything that
/// could escape it is treated as a miss.
fn valid_storage_key(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\')
}

/// Record ids double as file names, so path-hostile characters in the
/// user-supplied fields are flattened before the timestamp is appended.
fn derive_id(destination: &str, duration: &str, unix_time: i64) -> String {
    format!(
        "{}_{}_{}",
        safe_component(destination),
        safe_component(duration),
        unix_time
    )
}

fn safe_component(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_ids_are_safe_file_names() {
        let id = derive_id("San Juan / PR", "3-5 days", 1700000000);
        assert_eq!(id, "San-Juan---PR_3-5-days_1700000000");
    }

    #[test]
    fn traversal_keys_are_rejected() {
        assert!(!valid_storage_key("../secrets.json"));
        assert!(!valid_storage_key("a/b.json"));
        assert!(valid_storage_key("Kyoto_one-week_1700000000.json"));
    }
}
