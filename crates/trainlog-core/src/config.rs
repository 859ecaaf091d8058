use crate::error::{Result, TrainlogError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with a workout file that exists but cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Stop with an error and leave the file untouched
    #[default]
    Fail,
    /// Warn and start from an empty history; the next save overwrites the file
    Reset,
}

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for trainlog
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Directory holding `<name>_workouts.json` files
    pub data_dir: ConfigValue<PathBuf>,
    pub on_corrupt: ConfigValue<CorruptPolicy>,
    /// Wait for Enter before exiting
    pub pause_on_exit: ConfigValue<bool>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from("."), ConfigSource::Default),
            on_corrupt: ConfigValue::new(CorruptPolicy::Fail, ConfigSource::Default),
            pause_on_exit: ConfigValue::new(true, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| TrainlogError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| TrainlogError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(on_corrupt) = file_config.on_corrupt {
            self.on_corrupt.update(on_corrupt, ConfigSource::File);
        }

        if let Some(pause_on_exit) = file_config.pause_on_exit {
            self.pause_on_exit.update(pause_on_exit, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // TRAINLOG_DATA_DIR
        if let Ok(data_dir) = env::var("TRAINLOG_DATA_DIR") {
            if data_dir.trim().is_empty() {
                tracing::warn!("Ignoring empty TRAINLOG_DATA_DIR");
            } else {
                self.data_dir.update(PathBuf::from(data_dir), ConfigSource::Environment);
            }
        }

        // TRAINLOG_ON_CORRUPT
        if let Ok(policy_str) = env::var("TRAINLOG_ON_CORRUPT") {
            match parse_corrupt_policy(&policy_str) {
                Ok(policy) => self.on_corrupt.update(policy, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid TRAINLOG_ON_CORRUPT value '{}': expected fail or reset",
                    policy_str
                ),
            }
        }

        // TRAINLOG_PAUSE_ON_EXIT
        if let Ok(pause_str) = env::var("TRAINLOG_PAUSE_ON_EXIT") {
            match parse_bool(&pause_str) {
                Some(pause) => self.pause_on_exit.update(pause, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid TRAINLOG_PAUSE_ON_EXIT value '{}': expected true or false",
                    pause_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }

        if let Some(on_corrupt) = overrides.on_corrupt {
            self.on_corrupt.update(on_corrupt, ConfigSource::Cli);
        }

        if let Some(pause_on_exit) = overrides.pause_on_exit {
            self.pause_on_exit.update(pause_on_exit, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        map.insert(
            "on_corrupt".to_string(),
            (format!("{:?}", self.on_corrupt.value).to_lowercase(), self.on_corrupt.source),
        );

        map.insert(
            "pause_on_exit".to_string(),
            (self.pause_on_exit.value.to_string(), self.pause_on_exit.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    on_corrupt: Option<CorruptPolicy>,
    pause_on_exit: Option<bool>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub on_corrupt: Option<CorruptPolicy>,
    pub pause_on_exit: Option<bool>,
}

/// Parse corrupt file policy from string
pub fn parse_corrupt_policy(s: &str) -> Result<CorruptPolicy> {
    match s.trim().to_lowercase().as_str() {
        "fail" => Ok(CorruptPolicy::Fail),
        "reset" => Ok(CorruptPolicy::Reset),
        _ => Err(TrainlogError::ConfigInvalid {
            key: "on_corrupt".to_string(),
            reason: format!("Invalid corrupt file policy: {}. Use fail or reset", s),
        }),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
