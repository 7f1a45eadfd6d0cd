//! Clinical significance categories and per-gene variant counts

use serde::Deserialize;
use std::fmt;

/// Clinical significance categories, in fixed order from benign to pathogenic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClinicalSignificance {
    Benign,
    LikelyBenign,
    Uncertain,
    LikelyPathogenic,
    Pathogenic,
}

impl ClinicalSignificance {
    pub const ALL: [ClinicalSignificance; 5] = [
        Self::Benign,
        Self::LikelyBenign,
        Self::Uncertain,
        Self::LikelyPathogenic,
        Self::Pathogenic,
    ];

    /// Weight used for the composite score
    pub fn weight(&self) -> f64 {
        match self {
            Self::Benign => 1.0,
            Self::LikelyBenign => 2.0,
            Self::Uncertain => 5.0,
            Self::LikelyPathogenic => 8.0,
            Self::Pathogenic => 10.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Benign => "Benign",
            Self::LikelyBenign => "Likely Benign",
            Self::Uncertain => "Uncertain",
            Self::LikelyPathogenic => "Likely Pathogenic",
            Self::Pathogenic => "Pathogenic",
        }
    }
}

impl fmt::Display for ClinicalSignificance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Variant counts for one gene, one per [`ClinicalSignificance`]
///
/// Deserializes from a five-element array in category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "[u64; 5]")]
pub struct GeneCounts {
    pub benign: u64,
    pub likely_benign: u64,
    pub uncertain: u64,
    pub likely_pathogenic: u64,
    pub pathogenic: u64,
}

impl GeneCounts {
    pub const fn new(
        benign: u64,
        likely_benign: u64,
        uncertain: u64,
        likely_pathogenic: u64,
        pathogenic: u64,
    ) -> Self {
        Self {
            benign,
            likely_benign,
            uncertain,
            likely_pathogenic,
            pathogenic,
        }
    }

    pub fn get(&self, category: ClinicalSignificance) -> u64 {
        match category {
            ClinicalSignificance::Benign => self.benign,
            ClinicalSignificance::LikelyBenign => self.likely_benign,
            ClinicalSignificance::Uncertain => self.uncertain,
            ClinicalSignificance::LikelyPathogenic => self.likely_pathogenic,
            ClinicalSignificance::Pathogenic => self.pathogenic,
        }
    }

    /// Sum of all five counts; widened so that any table's counts fit
    pub fn total(&self) -> u128 {
        ClinicalSignificance::ALL
            .iter()
            .map(|&c| u128::from(self.get(c)))
            .sum()
    }
}

impl From<[u64; 5]> for GeneCounts {
    fn from(counts: [u64; 5]) -> Self {
        Self::new(counts[0], counts[1], counts[2], counts[3], counts[4])
    }
}

impl From<GeneCounts> for [u64; 5] {
    fn from(counts: GeneCounts) -> Self {
        ClinicalSignificance::ALL.map(|c| counts.get(c))
    }
}
