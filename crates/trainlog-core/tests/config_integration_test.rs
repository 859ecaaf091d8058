//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use trainlog_core::config::{CliConfigOverrides, ConfigSource, CorruptPolicy, LayeredConfig};

fn clear_env() {
    env::remove_var("TRAINLOG_DATA_DIR");
    env::remove_var("TRAINLOG_ON_CORRUPT");
    env::remove_var("TRAINLOG_PAUSE_ON_EXIT");
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_partial_file_configuration() {
    let file = config_file(
        r#"
on_corrupt = "reset"
# Only override the corrupt policy
"#,
    );

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.on_corrupt.value, CorruptPolicy::Reset);
    assert_eq!(config.on_corrupt.source, ConfigSource::File);
    assert_eq!(config.data_dir.source, ConfigSource::Default);
    assert_eq!(config.pause_on_exit.source, ConfigSource::Default);
}

#[test]
fn test_missing_file_is_an_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/trainlog.toml");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    let file = config_file(
        r#"
data_dir = "from-file"
on_corrupt = "reset"
"#,
    );

    env::set_var("TRAINLOG_DATA_DIR", "from-env");

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.data_dir.value, PathBuf::from("from-env"));
    assert_eq!(config.data_dir.source, ConfigSource::Environment);
    assert_eq!(config.on_corrupt.value, CorruptPolicy::Reset);
    assert_eq!(config.on_corrupt.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("TRAINLOG_ON_CORRUPT", "shrug");
    env::set_var("TRAINLOG_PAUSE_ON_EXIT", "maybe");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.on_corrupt.value, CorruptPolicy::Fail);
    assert_eq!(config.on_corrupt.source, ConfigSource::Default);
    assert!(config.pause_on_exit.value);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    clear_env();
    let file = config_file(r#"pause_on_exit = true"#);
    env::set_var("TRAINLOG_PAUSE_ON_EXIT", "true");
    env::set_var("TRAINLOG_ON_CORRUPT", "reset");

    let mut config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();
    config.update_from_cli(CliConfigOverrides {
        data_dir: None,
        on_corrupt: Some(CorruptPolicy::Fail),
        pause_on_exit: Some(false),
    });

    assert!(!config.pause_on_exit.value);
    assert_eq!(config.pause_on_exit.source, ConfigSource::Cli);
    assert_eq!(config.on_corrupt.value, CorruptPolicy::Fail);
    assert_eq!(config.on_corrupt.source, ConfigSource::Cli);

    clear_env();
}
