//! History extraction.
//!
//! Projects an ordered sequence of yearly profiles into one numeric series
//! per descriptor. Extraction never reorders or filters; ordering and
//! windowing are the gate's responsibility and happen before extraction.

use crate::error::{Result, StatsError};
use hobart_data::YearlyProfile;

/// One value per year of the (trimmed) history, positionally aligned with
/// it. `None` marks a year where the descriptor was not reported.
pub type MetricSeries = Vec<Option<f64>>;

/// Project `history` onto a single descriptor, keeping missing values
/// visible.
///
/// The result has exactly `history.len()` entries, in year order. A record
/// without the descriptor yields `None`, never zero.
pub fn extract(history: &[YearlyProfile], descriptor: &str) -> MetricSeries {
    history.iter().map(|p| p.metric(descriptor)).collect()
}

/// Project `history` onto a descriptor that must be present every year.
///
/// # Errors
/// Returns [`StatsError::MissingValue`] naming the descriptor and the first
/// year it is absent for.
pub fn extract_required(history: &[YearlyProfile], descriptor: &str) -> Result<Vec<f64>> {
    history
        .iter()
        .map(|p| {
            p.metric(descriptor).ok_or_else(|| StatsError::MissingValue {
                descriptor: descriptor.to_string(),
                year: p.year,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(year: i32, metrics: &[(&str, Option<f64>)]) -> YearlyProfile {
        YearlyProfile {
            cik: "111".to_string(),
            ticker: "ACME".to_string(),
            year,
            metrics: metrics
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn test_extract_keeps_positional_alignment() {
        let history = vec![
            profile(2017, &[("eps", Some(1.0))]),
            profile(2018, &[]),
            profile(2019, &[("eps", Some(3.0))]),
        ];

        let series = extract(&history, "eps");
        assert_eq!(series, vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn test_extract_reports_zero_as_zero() {
        let history = vec![profile(2019, &[("eps", Some(0.0))])];
        assert_eq!(extract(&history, "eps"), vec![Some(0.0)]);
    }

    #[test]
    fn test_extract_required_fails_loudly_on_missing() {
        let history = vec![
            profile(2017, &[("eps", Some(1.0))]),
            profile(2018, &[("eps", None)]),
        ];

        let err = extract_required(&history, "eps").unwrap_err();
        match err {
            StatsError::MissingValue { descriptor, year } => {
                assert_eq!(descriptor, "eps");
                assert_eq!(year, 2018);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extract_required_passes_dense_series_through() {
        let history = vec![
            profile(2018, &[("eps", Some(1.5))]),
            profile(2019, &[("eps", Some(2.5))]),
        ];
        assert_eq!(extract_required(&history, "eps").unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_empty_history_extracts_empty_series() {
        let history: Vec<YearlyProfile> = Vec::new();
        assert!(extract(&history, "eps").is_empty());
    }
}
