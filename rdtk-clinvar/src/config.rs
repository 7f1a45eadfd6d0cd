//! Configuration for rdtk-clinvar
//!
//! ```toml
//! dataset_path = "/data/clinvar_counts.toml"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Without `dataset_path` the built-in sample table is used.

use rdtk_common::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tool name used for the config file (`rdtk-clinvar.toml`)
pub const TOOL_NAME: &str = "rdtk-clinvar";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ClinvarConfig {
    /// TOML gene count table
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClinvarConfig {
    /// Command-line/environment values take precedence over the file
    pub fn apply_overrides(mut self, dataset_path: Option<PathBuf>, log_level: Option<String>) -> Self {
        if dataset_path.is_some() {
            self.dataset_path = dataset_path;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        self
    }
}
