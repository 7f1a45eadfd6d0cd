//! Error types for rdtk-clinvar

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClinvarError {
    /// None of the requested genes is in the dataset
    #[error("No valid genes selected (requested: {requested})")]
    NoValidSelection { requested: String },

    /// Gene table could not be loaded
    #[error("Dataset error: {0}")]
    Dataset(String),
}

/// Result type for rdtk-clinvar operations
pub type Result<T> = std::result::Result<T, ClinvarError>;
