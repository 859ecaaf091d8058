//! In-memory record store for development and testing.
//!
//! Documents are kept as encoded text so loads go through the same parsing as the
//! file store, and corrupt content can be planted directly. Uses `RwLock::unwrap()`
//! intentionally: poisoning only follows a panic in another thread.

use crate::codec::{decode, encode};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use trainlog_core::ports::{LoadOutcome, RecordStore};
use trainlog_core::Result;

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    files: RwLock<HashMap<PathBuf, String>>,
}

impl MemoryRecordStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw text at `path`, bypassing encoding
    pub fn insert_raw(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.write().unwrap().insert(path.into(), text.into());
    }

    /// Raw text stored at `path`
    pub fn raw(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.files.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryRecordStore {
    fn save(&self, path: &Path, document: &Value) -> Result<()> {
        let text = encode(document)?;
        self.files.write().unwrap().insert(path.to_path_buf(), text);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<LoadOutcome> {
        Ok(match self.files.read().unwrap().get(path) {
            Some(text) => decode(text),
            None => LoadOutcome::Missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_path() {
        let store = MemoryRecordStore::new();
        assert_eq!(store.load(Path::new("ana_workouts.json")).unwrap(), LoadOutcome::Missing);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryRecordStore::new();
        let path = Path::new("ana_workouts.json");
        store.save(path, &json!({"athlete_type": "Biker"})).unwrap();

        assert_eq!(store.load(path).unwrap(), LoadOutcome::Found(json!({"athlete_type": "Biker"})));
        assert!(store.raw(path).unwrap().starts_with("{\n    \"athlete_type\""));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_planted_corrupt_text() {
        let store = MemoryRecordStore::new();
        store.insert_raw("ana_workouts.json", "not json");

        assert!(matches!(
            store.load(Path::new("ana_workouts.json")).unwrap(),
            LoadOutcome::Corrupt { .. }
        ));
    }
}
