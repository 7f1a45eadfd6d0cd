//! Common error types for RDTK

use thiserror::Error;

/// Common result type for RDTK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across RDTK tools
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
