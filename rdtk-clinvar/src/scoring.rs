//! Composite pathogenicity scoring
//!
//! A gene's counts are normalized to relative densities and combined into a
//! weighted composite score between 1 and 10, which is then banded into one of
//! five classes.

use crate::counts::{ClinicalSignificance, GeneCounts};
use std::fmt;

/// Composite score reported for a gene with no counts at all
///
/// Midpoint of the weight range; a convention, not a measured value.
pub const ZERO_TOTAL_SENTINEL: f64 = 5.0;

/// Relative densities and composite score for one gene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneScore {
    /// Count / total per category, in [`ClinicalSignificance::ALL`] order
    pub relative_density: [f64; 5],
    pub composite: f64,
}

impl GeneScore {
    pub fn from_counts(counts: &GeneCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self {
                relative_density: [0.0; 5],
                composite: ZERO_TOTAL_SENTINEL,
            };
        }

        let total = total as f64;
        let relative_density = ClinicalSignificance::ALL.map(|c| counts.get(c) as f64 / total);
        let composite = ClinicalSignificance::ALL
            .iter()
            .zip(relative_density.iter())
            .map(|(c, density)| density * c.weight())
            .sum();

        Self {
            relative_density,
            composite,
        }
    }
}

/// Final interpretation of a composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathogenicityClass {
    Pathogenic,
    LikelyPathogenic,
    UncertainConflicting,
    LikelyBenign,
    Benign,
}

impl PathogenicityClass {
    /// Band a composite score; bands are checked from the top down
    ///
    /// Anything outside the four upper bands, including scores above 10,
    /// falls through to `Benign`.
    pub fn from_score(score: f64) -> Self {
        if (8.5..=10.0).contains(&score) {
            Self::Pathogenic
        } else if (6.5..8.5).contains(&score) {
            Self::LikelyPathogenic
        } else if (4.5..6.5).contains(&score) {
            Self::UncertainConflicting
        } else if (2.5..4.5).contains(&score) {
            Self::LikelyBenign
        } else {
            Self::Benign
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pathogenic => "Pathogenic",
            Self::LikelyPathogenic => "Likely Pathogenic",
            Self::UncertainConflicting => "Uncertain/Conflicting",
            Self::LikelyBenign => "Likely Benign",
            Self::Benign => "Benign",
        }
    }
}

impl fmt::Display for PathogenicityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
