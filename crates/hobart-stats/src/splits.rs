//! Stock split adjustment for per-share metrics.
//!
//! Historical per-share figures are reported against the share count
//! outstanding at the time. Re-expressing them on the current share-count
//! basis keeps per-share trends comparable across splits that occurred
//! partway through the observed window.

use crate::error::{Result, StatsError};

/// Normalize a per-share series for historical stock splits.
///
/// Both series are aligned by year index. A running split factor starts at
/// 1.0; a year with a nonzero split ratio multiplies the factor from that
/// year on, and each adjusted value is `raw * factor`. A zero or missing
/// ratio entry means no split that year.
///
/// # Errors
/// Returns [`StatsError::DimensionMismatch`] when the series differ in
/// length.
pub fn adjust_per_share(raw: &[f64], split_ratios: &[Option<f64>]) -> Result<Vec<f64>> {
    if raw.len() != split_ratios.len() {
        return Err(StatsError::DimensionMismatch {
            expected: raw.len(),
            actual: split_ratios.len(),
        });
    }

    let mut factor = 1.0;
    let mut adjusted = Vec::with_capacity(raw.len());
    for (value, ratio) in raw.iter().zip(split_ratios) {
        if let Some(ratio) = ratio {
            if *ratio != 0.0 {
                factor *= ratio;
            }
        }
        adjusted.push(value * factor);
    }
    Ok(adjusted)
}
