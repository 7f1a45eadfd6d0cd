//! # RDTK Common Library
//!
//! Shared code for the RDTK tools including:
//! - Error and result types
//! - TOML configuration loading
//! - Logging configuration and tracing setup
//! - Summary statistics shared by the scoring pipelines

pub mod config;
pub mod error;
pub mod logging;
pub mod stats;

pub use error::{Error, Result};
pub use stats::mean;
