//! Scoring a user's gene selection
//!
//! Across genes, relative densities are summed for display while composite
//! scores are averaged (unweighted) into the overall score.

use crate::counts::ClinicalSignificance;
use crate::dataset::GeneDataset;
use crate::error::{ClinvarError, Result};
use crate::scoring::{GeneScore, PathogenicityClass};
use rdtk_common::stats::mean;
use std::fmt::Write as _;

/// Per-gene result within a selection
#[derive(Debug, Clone, PartialEq)]
pub struct GeneResult {
    pub gene: String,
    pub score: GeneScore,
}

/// Outcome of scoring a gene selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionReport {
    /// Genes found in the dataset, in input order (repeats kept)
    pub valid_genes: Vec<String>,
    /// Requested keys that were not found
    pub unknown_genes: Vec<String>,
    pub gene_results: Vec<GeneResult>,
    /// Element-wise sum of the per-gene relative densities
    pub combined_density: [f64; 5],
    /// Unweighted mean of the per-gene composite scores
    pub overall_score: f64,
    pub classification: PathogenicityClass,
}

impl SelectionReport {
    /// Text report for display
    pub fn render(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Genes: {}", self.valid_genes.join(", "));
        let _ = writeln!(text, "Final Composite Score: {:.2}", self.overall_score);
        let _ = writeln!(text, "Final Interpretation: {}", self.classification);

        text.push_str("\nRelative Density\n");
        for (category, density) in ClinicalSignificance::ALL.iter().zip(self.combined_density.iter()) {
            let _ = writeln!(text, "  {:<18} {:.2}", category.label(), density);
        }

        if !self.unknown_genes.is_empty() {
            let _ = writeln!(
                text,
                "\nSkipped unknown genes: {}",
                self.unknown_genes.join(", ")
            );
        }

        text
    }
}

/// Split comma-separated input into trimmed, non-empty gene keys
pub fn parse_gene_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|gene| !gene.is_empty())
        .map(str::to_string)
        .collect()
}

/// Score every known gene in `input` and combine the results
///
/// Returns [`ClinvarError::NoValidSelection`] when no key matches.
pub fn analyze_selection(input: &str, dataset: &dyn GeneDataset) -> Result<SelectionReport> {
    let mut valid_genes = Vec::new();
    let mut unknown_genes = Vec::new();
    let mut gene_results = Vec::new();
    let mut combined_density = [0.0; 5];
    let mut composites = Vec::new();

    for gene in parse_gene_list(input) {
        let Some(counts) = dataset.lookup(&gene) else {
            tracing::warn!(gene = %gene, "Gene not found in dataset, skipping");
            unknown_genes.push(gene);
            continue;
        };

        let score = GeneScore::from_counts(&counts);
        for (total, density) in combined_density.iter_mut().zip(score.relative_density.iter()) {
            *total += density;
        }
        composites.push(score.composite);

        tracing::debug!(gene = %gene, composite = score.composite, "Scored gene");

        valid_genes.push(gene.clone());
        gene_results.push(GeneResult { gene, score });
    }

    let Some(overall_score) = mean(&composites) else {
        return Err(ClinvarError::NoValidSelection {
            requested: input.trim().to_string(),
        });
    };
    let classification = PathogenicityClass::from_score(overall_score);

    tracing::info!(
        genes = valid_genes.len(),
        unknown = unknown_genes.len(),
        overall_score,
        classification = %classification,
        "Gene selection scored"
    );

    Ok(SelectionReport {
        valid_genes,
        unknown_genes,
        gene_results,
        combined_density,
        overall_score,
        classification,
    })
}
