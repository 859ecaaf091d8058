use crate::error::Result;
use serde_json::Value;
use std::path::Path;

/// Result of reading a record file.
///
/// An absent file is a fresh start rather than a failure, and a file that exists but
/// cannot be parsed is reported separately so callers can pick a policy for it.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file existed and parsed into a document
    Found(Value),
    /// No file at the path
    Missing,
    /// The file exists but is not a valid document
    Corrupt { reason: String },
}

impl LoadOutcome {
    /// Collapse the outcome into a document, treating a missing file as an empty mapping.
    ///
    /// Corrupt content yields the reason it could not be read.
    pub fn into_document(self) -> std::result::Result<Value, String> {
        match self {
            LoadOutcome::Found(document) => Ok(document),
            LoadOutcome::Missing => Ok(Value::Object(serde_json::Map::new())),
            LoadOutcome::Corrupt { reason } => Err(reason),
        }
    }
}

/// Port for the flat-file record store
pub trait RecordStore: Send + Sync {
    /// Write a whole document to `path`, replacing any previous content
    fn save(&self, path: &Path, document: &Value) -> Result<()>;

    /// Read the document at `path`
    fn load(&self, path: &Path) -> Result<LoadOutcome>;
}
