//! Data sufficiency gate.
//!
//! Decides whether a company has enough consecutive recent data to analyze,
//! and finds the analyzable trailing window. A year counts as reported iff
//! its metric map is non-empty; the gate only looks at whole years, never at
//! individual descriptors (those surface later as [`crate::StatsError::MissingValue`]).

use hobart_data::YearlyProfile;

/// Default minimum number of trailing fully-reported years.
pub const DEFAULT_MIN_YEARS: usize = 5;

/// Whether each of the most recent `min_years` records carries reported
/// metrics.
///
/// False whenever the history holds fewer than `min_years` records; callers
/// must not proceed to compute statistics in that case.
pub fn is_analyzable(history: &[YearlyProfile], min_years: usize) -> bool {
    trim(history).len() >= min_years.max(1)
}

/// The longest trailing suffix of `history` whose records are all reported.
///
/// Scans the entire history backward from the most recent record and cuts
/// everything at and before the first empty-map record found. Returns the
/// input unchanged when no record has an empty map. Idempotent.
pub fn trim(history: &[YearlyProfile]) -> &[YearlyProfile] {
    let mut start = 0;
    for (i, record) in history.iter().enumerate().rev() {
        if !record.is_reported() {
            start = i + 1;
            break;
        }
    }
    &history[start..]
}
