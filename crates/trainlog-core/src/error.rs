//! Error types for trainlog

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainlogError {
    // Record store errors
    #[error("Workout file at {path} is corrupt: {reason}")]
    CorruptRecord { path: PathBuf, reason: String },

    // Input errors
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TrainlogError {
    fn from(error: serde_json::Error) -> Self {
        TrainlogError::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrainlogError>;
