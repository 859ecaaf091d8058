//! Configuration loading for the CLI

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use trainlog_core::config::{CliConfigOverrides, LayeredConfig};

/// Config file picked up from the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "trainlog.toml";

/// Find the config file to use, if any
pub fn resolve_config_path(explicit: Option<&Path>, working_dir: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let candidate = working_dir.join(CONFIG_FILE_NAME);
    Ok(candidate.is_file().then_some(candidate))
}

/// Load layered configuration: defaults, then file, then environment, then CLI
pub fn load_config(
    explicit: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;

    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = resolve_config_path(explicit, &working_dir)? {
        tracing::debug!(path = %path.display(), "Loading config file");
        config = config.load_from_file(&path).context("Failed to load configuration file")?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_config_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_config_path(None, dir.path()).unwrap(), None);
    }

    #[test]
    fn test_config_file_in_working_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "pause_on_exit = false\n").unwrap();

        assert_eq!(
            resolve_config_path(None, dir.path()).unwrap(),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("other.toml");
        assert!(resolve_config_path(Some(&missing), dir.path()).is_err());
    }
}
