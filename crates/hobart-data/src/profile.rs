//! Yearly financial profile records.
//!
//! A profile is the set of ratios and measures reported by one filer for one
//! fiscal year, keyed by descriptor name. Absence of a metric (or an explicit
//! null) means "not reported" and is distinct from a reported zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One fiscal year of reported metrics for a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyProfile {
    /// Central Index Key (CIK) - SEC identifier
    pub cik: String,
    /// Ticker symbol
    pub ticker: String,
    /// Fiscal year the metrics were reported for
    pub year: i32,
    /// Reported metrics, keyed by descriptor name. A missing key or a
    /// `None` value means the metric was not reported that year.
    pub metrics: HashMap<String, Option<f64>>,
}

impl YearlyProfile {
    /// Look up a reported metric value.
    ///
    /// Returns `None` both when the descriptor is absent from the map and
    /// when it is present but was stored as null.
    pub fn metric(&self, descriptor: &str) -> Option<f64> {
        self.metrics.get(descriptor).copied().flatten()
    }

    /// Whether this year carries any reported metrics at all.
    ///
    /// Years with an empty metric map are treated as unreported by the
    /// sufficiency gate and trimmed from the analyzed window.
    pub fn is_reported(&self) -> bool {
        !self.metrics.is_empty()
    }
}

/// A company's profile over its available range of years.
///
/// Invariant: strictly ascending by `year`, one record per fiscal year.
/// The repository guarantees this ordering; consumers assume it and do not
/// re-sort. Calendar years may still be absent entirely (a company that
/// skipped a filing has no record for that year).
pub type CompanyHistory = Vec<YearlyProfile>;
