//! Gene count providers
//!
//! The scoring pipeline reads counts through [`GeneDataset`] so that callers
//! choose the table: the built-in sample, a TOML file, or a test fixture.
//!
//! TOML layout accepted by [`TableDataset`]:
//!
//! ```toml
//! [genes]
//! # benign, likely benign, uncertain, likely pathogenic, pathogenic
//! MYO7A = [90, 676, 755, 254, 167]
//! ```

use crate::counts::GeneCounts;
use crate::error::{ClinvarError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only lookup of variant counts by gene symbol
///
/// Keys match by exact, case-sensitive equality.
pub trait GeneDataset: Send + Sync {
    fn lookup(&self, gene: &str) -> Option<GeneCounts>;

    /// Gene symbols available, sorted
    fn genes(&self) -> Vec<String>;
}

/// Sample counts shipped with the tool
const BUILTIN_GENES: [(&str, GeneCounts); 2] = [
    ("MYO7A", GeneCounts::new(90, 676, 755, 254, 167)),
    ("USH2A", GeneCounts::new(160, 1184, 1377, 422, 454)),
];

/// The built-in sample table
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinDataset;

impl GeneDataset for BuiltinDataset {
    fn lookup(&self, gene: &str) -> Option<GeneCounts> {
        BUILTIN_GENES
            .iter()
            .find(|(symbol, _)| *symbol == gene)
            .map(|(_, counts)| *counts)
    }

    fn genes(&self) -> Vec<String> {
        BUILTIN_GENES.iter().map(|(symbol, _)| symbol.to_string()).collect()
    }
}

/// Counts loaded from a TOML table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableDataset {
    #[serde(default)]
    genes: BTreeMap<String, GeneCounts>,
}

impl TableDataset {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ClinvarError::Dataset(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClinvarError::Dataset(format!("Read {} failed: {}", path.display(), e))
        })?;
        let dataset = Self::from_toml_str(&content).map_err(|e| match e {
            ClinvarError::Dataset(msg) => {
                ClinvarError::Dataset(format!("Parse {} failed: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            genes = dataset.len(),
            "Loaded gene count table"
        );
        Ok(dataset)
    }

    pub fn insert(&mut self, gene: impl Into<String>, counts: GeneCounts) {
        self.genes.insert(gene.into(), counts);
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl GeneDataset for TableDataset {
    fn lookup(&self, gene: &str) -> Option<GeneCounts> {
        self.genes.get(gene).copied()
    }

    fn genes(&self) -> Vec<String> {
        self.genes.keys().cloned().collect()
    }
}
