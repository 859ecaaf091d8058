//! Filesystem record store.
//!
//! Each call opens, reads or writes, and closes its own handle. There is no locking
//! and no atomic replace: one process owns a workout file at a time.

use crate::codec::{decode, encode};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use trainlog_core::ports::{LoadOutcome, RecordStore};
use trainlog_core::Result;

/// Record store backed by pretty-printed JSON files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileStore;

impl JsonFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl RecordStore for JsonFileStore {
    fn save(&self, path: &Path, document: &Value) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, encode(document)?)?;
        debug!(path = %path.display(), "Wrote record file");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<LoadOutcome> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(decode(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No record file yet");
                Ok(LoadOutcome::Missing)
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                Ok(LoadOutcome::Corrupt { reason: e.to_string() })
            }
            Err(e) => Err(e.into()),
        }
    }
}
