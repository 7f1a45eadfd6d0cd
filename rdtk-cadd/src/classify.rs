//! Score interpretation
//!
//! Maps mean CADD scores to categories using fixed thresholds. PHRED bands
//! have closed lower bounds and are checked from the top down.

use rdtk_common::stats::mean;
use std::fmt;

/// Interpretation of a mean PHRED-scaled score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhredCategory {
    /// PHRED >= 30
    HighlyDeleterious,
    /// 20 <= PHRED < 30
    LikelyDeleterious,
    /// 10 <= PHRED < 20
    PotentiallyDeleterious,
    /// PHRED < 10
    LikelyBenign,
    NoData,
}

impl PhredCategory {
    pub fn from_mean(mean_phred: Option<f64>) -> Self {
        match mean_phred {
            None => Self::NoData,
            Some(score) if score >= 30.0 => Self::HighlyDeleterious,
            Some(score) if score >= 20.0 => Self::LikelyDeleterious,
            Some(score) if score >= 10.0 => Self::PotentiallyDeleterious,
            Some(_) => Self::LikelyBenign,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyDeleterious => "highly deleterious",
            Self::LikelyDeleterious => "likely deleterious",
            Self::PotentiallyDeleterious => "potentially deleterious",
            Self::LikelyBenign => "likely benign",
            Self::NoData => "no data available",
        }
    }

    /// Rank of the band among all possible substitutions, where one applies
    pub fn percentile_note(&self) -> Option<&'static str> {
        match self {
            Self::HighlyDeleterious => Some("top 0.1% of most deleterious substitutions"),
            Self::LikelyDeleterious => Some("top 1% of most deleterious substitutions"),
            Self::PotentiallyDeleterious => Some("top 10% of most deleterious substitutions"),
            Self::LikelyBenign | Self::NoData => None,
        }
    }
}

impl fmt::Display for PhredCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interpretation of a mean raw score (sign threshold)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawCategory {
    /// Raw > 0
    SomewhatDeleterious,
    /// Raw <= 0
    LikelyBenign,
    NoData,
}

impl RawCategory {
    pub fn from_mean(mean_raw: Option<f64>) -> Self {
        match mean_raw {
            None => Self::NoData,
            Some(score) if score > 0.0 => Self::SomewhatDeleterious,
            Some(_) => Self::LikelyBenign,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SomewhatDeleterious => "somewhat deleterious",
            Self::LikelyBenign => "likely benign",
            Self::NoData => "no data available",
        }
    }
}

impl fmt::Display for RawCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Means and categories for one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    pub mean_raw: Option<f64>,
    pub mean_phred: Option<f64>,
    pub raw_category: RawCategory,
    pub phred_category: PhredCategory,
}

impl SummaryResult {
    pub fn from_series(raw: &[f64], phred: &[f64]) -> Self {
        let mean_raw = mean(raw);
        let mean_phred = mean(phred);
        Self {
            mean_raw,
            mean_phred,
            raw_category: RawCategory::from_mean(mean_raw),
            phred_category: PhredCategory::from_mean(mean_phred),
        }
    }

    /// Interpretation block as shown to the user
    pub fn interpretation(&self) -> String {
        let mut text = String::from("Interpretation of Scores:\n------------------------\n");

        match self.mean_raw {
            Some(score) => text.push_str(&format!(
                "- The average CADD RawScore of {:.4} suggests that the variants are {}.\n",
                score, self.raw_category
            )),
            None => text.push_str("- No RawScore data available.\n"),
        }

        match self.mean_phred {
            Some(score) => {
                let verb = match self.phred_category {
                    PhredCategory::LikelyBenign => "suggests",
                    _ => "indicates",
                };
                text.push_str(&format!(
                    "- The average CADD PHRED score of {:.4} {} that the variants are {}",
                    score, verb, self.phred_category
                ));
                if let Some(note) = self.phred_category.percentile_note() {
                    text.push_str(&format!(" ({})", note));
                }
                text.push_str(".\n");
            }
            None => text.push_str("- No PHRED score data available.\n"),
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phred_boundaries_take_higher_band() {
        assert_eq!(
            PhredCategory::from_mean(Some(30.0)),
            PhredCategory::HighlyDeleterious
        );
        assert_eq!(
            PhredCategory::from_mean(Some(20.0)),
            PhredCategory::LikelyDeleterious
        );
        assert_eq!(
            PhredCategory::from_mean(Some(10.0)),
            PhredCategory::PotentiallyDeleterious
        );
        assert_eq!(PhredCategory::from_mean(Some(20.0)).label(), "likely deleterious");
    }

    #[test]
    fn test_phred_inside_bands() {
        assert_eq!(PhredCategory::from_mean(Some(45.2)), PhredCategory::HighlyDeleterious);
        assert_eq!(PhredCategory::from_mean(Some(29.999)), PhredCategory::LikelyDeleterious);
        assert_eq!(PhredCategory::from_mean(Some(19.99)), PhredCategory::PotentiallyDeleterious);
        assert_eq!(PhredCategory::from_mean(Some(9.99)), PhredCategory::LikelyBenign);
        assert_eq!(PhredCategory::from_mean(Some(0.0)), PhredCategory::LikelyBenign);
    }

    #[test]
    fn test_raw_sign_threshold() {
        assert_eq!(RawCategory::from_mean(Some(0.0001)), RawCategory::SomewhatDeleterious);
        assert_eq!(RawCategory::from_mean(Some(0.0)), RawCategory::LikelyBenign);
        assert_eq!(RawCategory::from_mean(Some(-1.3)), RawCategory::LikelyBenign);
    }

    #[test]
    fn test_absent_means_report_no_data() {
        let summary = SummaryResult::from_series(&[], &[]);
        assert_eq!(summary.mean_raw, None);
        assert_eq!(summary.raw_category.label(), "no data available");
        assert_eq!(summary.phred_category.label(), "no data available");

        let text = summary.interpretation();
        assert!(text.contains("No RawScore data available."));
        assert!(text.contains("No PHRED score data available."));
    }

    #[test]
    fn test_interpretation_text() {
        let summary = SummaryResult::from_series(&[0.5, 1.5], &[18.0, 24.0]);
        assert_eq!(summary.mean_raw, Some(1.0));
        assert_eq!(summary.mean_phred, Some(21.0));

        let text = summary.interpretation();
        assert!(text.contains("RawScore of 1.0000 suggests that the variants are somewhat deleterious."));
        assert!(text.contains(
            "PHRED score of 21.0000 indicates that the variants are likely deleterious (top 1% of most deleterious substitutions)."
        ));
    }
}
