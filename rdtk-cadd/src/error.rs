//! Error types for rdtk-cadd
//!
//! Two layers: [`FetchError`] describes why a single chunk request failed and
//! is recorded per chunk; [`CaddError`] is what an analysis run can return.

use thiserror::Error;

/// Failure of one range request against the CADD service
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Connectivity failure: timeout, refused connection, DNS, reset
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The service answered with a non-success status
    #[error("Request failed with HTTP {status_code}")]
    RequestFailed { status_code: u16 },

    /// The body could not be parsed into score records
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors surfaced by an analysis run
#[derive(Debug, Error)]
pub enum CaddError {
    /// Caller-supplied interval is missing fields, not integral, or empty
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// Partitioning requires a positive chunk size
    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,

    /// No chunk produced any score record
    #[error("No variants found ({chunks_failed} of {chunks_total} chunks failed)")]
    EmptyResult {
        chunks_total: usize,
        chunks_failed: usize,
    },

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// rdtk-common error
    #[error(transparent)]
    Common(#[from] rdtk_common::Error),
}

/// Result type for rdtk-cadd operations
pub type Result<T> = std::result::Result<T, CaddError>;
