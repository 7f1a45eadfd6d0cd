//! Integration tests for config file resolution and loading
//!
//! Tests touching `RDTK_CONFIG` are marked `#[serial]` so that they do not
//! race on the process environment.

use rdtk_common::config::{load_tool_config, load_toml, resolve_config_path, CONFIG_ENV_VAR};
use rdtk_common::logging::LoggingConfig;
use rdtk_common::Error;
use serde::Deserialize;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Debug, Default, Deserialize, PartialEq)]
struct SampleConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    workers: Option<usize>,
    #[serde(default)]
    logging: LoggingConfig,
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let config: SampleConfig = load_toml(&path).unwrap();
    assert_eq!(config, SampleConfig::default());
}

#[test]
fn test_file_values_are_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sample.toml");
    fs::write(
        &path,
        "name = \"cadd\"\nworkers = 4\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config: SampleConfig = load_toml(&path).unwrap();
    assert_eq!(config.name.as_deref(), Some("cadd"));
    assert_eq!(config.workers, Some(4));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "workers = [not toml").unwrap();

    let result: Result<SampleConfig, Error> = load_toml(&path);
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("broken.toml")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_env_var_overrides_default_location() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("from-env.toml");
    fs::write(&path, "workers = 7\n").unwrap();

    std::env::set_var(CONFIG_ENV_VAR, &path);
    let resolved = resolve_config_path(None, "rdtk-cadd");
    let config: SampleConfig = load_tool_config(None, "rdtk-cadd").unwrap();
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(resolved, Some(path));
    assert_eq!(config.workers, Some(7));
}

#[test]
#[serial]
fn test_cli_path_beats_env_var() {
    let temp_dir = TempDir::new().unwrap();
    let cli_path = temp_dir.path().join("cli.toml");
    fs::write(&cli_path, "workers = 2\n").unwrap();

    std::env::set_var(CONFIG_ENV_VAR, "/nonexistent/env.toml");
    let resolved = resolve_config_path(Some(&cli_path), "rdtk-cadd");
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(resolved, Some(PathBuf::from(&cli_path)));
}
