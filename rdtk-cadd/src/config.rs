//! Configuration for rdtk-cadd
//!
//! Resolution priority: command-line flag → `RDTK_CADD_*` environment
//! variable (both handled by clap) → TOML file → built-in defaults.
//!
//! ```toml
//! base_url = "https://cadd.gs.washington.edu/api/v1.0"
//! assembly = "GRCh38-v1.4"
//! chunk_size = 10000
//! concurrency_limit = 10
//! request_timeout_secs = 30
//!
//! [logging]
//! level = "info"
//! ```

use crate::client::{CADD_BASE_URL, DEFAULT_ASSEMBLY, DEFAULT_TIMEOUT};
use crate::coordinator::DEFAULT_CONCURRENCY;
use crate::partition::DEFAULT_CHUNK_SIZE;
use rdtk_common::logging::LoggingConfig;
use rdtk_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tool name used for the config file (`rdtk-cadd.toml`)
pub const TOOL_NAME: &str = "rdtk-cadd";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CaddConfig {
    /// CADD API root, without the assembly segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Genome build and CADD release, e.g. `GRCh38-v1.4`
    #[serde(default = "default_assembly")]
    pub assembly: String,

    /// Maximum width of one range request in base pairs
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u64,

    /// Maximum number of range requests in flight
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,

    /// Per-request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_url() -> String {
    CADD_BASE_URL.to_string()
}

fn default_assembly() -> String {
    DEFAULT_ASSEMBLY.to_string()
}

fn default_chunk_size() -> u64 {
    DEFAULT_CHUNK_SIZE
}

fn default_concurrency_limit() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for CaddConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            assembly: default_assembly(),
            chunk_size: default_chunk_size(),
            concurrency_limit: default_concurrency_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct CaddOverrides {
    pub base_url: Option<String>,
    pub assembly: Option<String>,
    pub chunk_size: Option<u64>,
    pub concurrency_limit: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl CaddConfig {
    /// Apply overrides on top of file/default values
    pub fn apply_overrides(mut self, overrides: CaddOverrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(assembly) = overrides.assembly {
            self.assembly = assembly;
        }
        if let Some(chunk_size) = overrides.chunk_size {
            self.chunk_size = chunk_size;
        }
        if let Some(limit) = overrides.concurrency_limit {
            self.concurrency_limit = limit;
        }
        if let Some(secs) = overrides.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if self.assembly.trim().is_empty() {
            return Err(Error::Config("assembly must not be empty".to_string()));
        }
        if self.chunk_size == 0 {
            return Err(Error::Config("chunk_size must be greater than zero".to_string()));
        }
        if self.concurrency_limit == 0 {
            return Err(Error::Config(
                "concurrency_limit must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_public_service() {
        let config = CaddConfig::default();
        assert_eq!(config.base_url, "https://cadd.gs.washington.edu/api/v1.0");
        assert_eq!(config.assembly, "GRCh38-v1.4");
        assert_eq!(config.chunk_size, 10_000);
        assert_eq!(config.concurrency_limit, 10);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CaddConfig = toml::from_str("chunk_size = 2500\n").unwrap();
        assert_eq!(config.chunk_size, 2500);
        assert_eq!(config.concurrency_limit, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides_win() {
        let config = CaddConfig::default().apply_overrides(CaddOverrides {
            assembly: Some("GRCh37-v1.6".to_string()),
            concurrency_limit: Some(4),
            log_level: Some("debug".to_string()),
            ..Default::default()
        });
        assert_eq!(config.assembly, "GRCh37-v1.6");
        assert_eq!(config.concurrency_limit, 4);
        assert_eq!(config.chunk_size, 10_000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let zero_chunk = CaddConfig {
            chunk_size: 0,
            ..Default::default()
        };
        assert!(matches!(zero_chunk.validate(), Err(Error::Config(_))));

        let zero_workers = CaddConfig {
            concurrency_limit: 0,
            ..Default::default()
        };
        assert!(zero_workers.validate().is_err());

        let blank_url = CaddConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(blank_url.validate().is_err());
    }
}
