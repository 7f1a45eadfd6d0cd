//! rdtk-cadd library interface
//!
//! Aggregates CADD variant scores over a genomic interval:
//! the interval is split into bounded chunks, chunks are fetched from the
//! CADD range API in parallel, and the merged raw/PHRED series are reduced to
//! means and interpreted.

pub mod analysis;
pub mod classify;
pub mod client;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod interval;
pub mod merge;
pub mod partition;

pub use crate::analysis::{AnalysisReport, AnalysisRequest, CaddAnalyzer};
pub use crate::classify::{PhredCategory, RawCategory, SummaryResult};
pub use crate::client::{CaddClient, RangeFetcher, ScoreRecord};
pub use crate::error::{CaddError, FetchError, Result};
pub use crate::interval::{Chunk, Interval};
pub use crate::merge::{ChunkFailure, Retrieval};
