//! Summary statistics

/// Arithmetic mean of a series
///
/// Returns `None` for an empty series. No weighting, no outlier handling.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
