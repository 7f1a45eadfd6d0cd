//! rdtk-clinvar library interface
//!
//! Composite pathogenicity scoring from per-gene clinical significance
//! counts. Not concurrent; counts come from an injected [`GeneDataset`].

pub mod config;
pub mod counts;
pub mod dataset;
pub mod error;
pub mod scoring;
pub mod selection;

pub use crate::counts::{ClinicalSignificance, GeneCounts};
pub use crate::dataset::{BuiltinDataset, GeneDataset, TableDataset};
pub use crate::error::{ClinvarError, Result};
pub use crate::scoring::{GeneScore, PathogenicityClass, ZERO_TOTAL_SENTINEL};
pub use crate::selection::{analyze_selection, SelectionReport};
