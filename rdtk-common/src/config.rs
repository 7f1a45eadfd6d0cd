//! Configuration file resolution and loading
//!
//! Each tool reads an optional TOML file. Resolution priority for the file path:
//! 1. Explicit path (command-line argument)
//! 2. `RDTK_CONFIG` environment variable
//! 3. Platform config directory (`~/.config/rdtk/{tool}.toml` on Linux)
//!
//! Values inside the file are in turn overridden by command-line flags and
//! tool-specific environment variables; see each tool's `config` module.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "RDTK_CONFIG";

/// Resolve the config file path for a tool
///
/// The returned path may not exist; [`load_toml`] treats a missing file as
/// "use defaults".
pub fn resolve_config_path(cli_arg: Option<&Path>, tool: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Platform config directory
    default_config_path(tool)
}

/// Get default configuration file path for the platform
pub fn default_config_path(tool: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rdtk").join(format!("{}.toml", tool)))
}

/// Load a TOML config file, falling back to defaults when the file is absent
pub fn load_toml<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;

    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Resolve and load in one step
pub fn load_tool_config<T>(cli_arg: Option<&Path>, tool: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match resolve_config_path(cli_arg, tool) {
        Some(path) => load_toml(&path),
        None => Ok(T::default()),
    }
}
