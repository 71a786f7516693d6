//! Report generation for screening results.

use chrono::{DateTime, Utc};
use hobart_stats::CompanyStats;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A timestamped statistics report for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Central Index Key of the company.
    pub cik: String,

    /// Ticker symbol of the company.
    pub ticker: String,

    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// The derived statistics.
    pub stats: CompanyStats,
}

impl Report {
    /// Wrap a statistics record into a report.
    pub fn new(stats: CompanyStats) -> Self {
        Self {
            cik: stats.cik.clone(),
            ticker: stats.ticker.clone(),
            generated_at: Utc::now(),
            stats,
        }
    }

    /// Convert the report to an indented JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Render a statistics record as a plain-text table.
///
/// One row per catalog descriptor with its first and last value and its
/// average, followed by the compound ROI line.
pub fn render_text(stats: &CompanyStats) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Statistics for CIK {} ({}), {}-{}\n\n",
        stats.cik, stats.ticker, stats.begin_year, stats.end_year
    ));
    output.push_str(&format!(
        "{:<42} {:>16} {:>16} {:>14}\n",
        "Descriptor", "First", "Last", "Average"
    ));
    output.push_str(&"-".repeat(92));
    output.push('\n');

    for metric in &stats.metrics {
        let first = metric.history.first().copied().unwrap_or(f64::NAN);
        let last = metric.history.last().copied().unwrap_or(f64::NAN);
        output.push_str(&format!(
            "{:<42} {:>16.4} {:>16.4} {:>14.4}\n",
            metric.descriptor, first, last, metric.average
        ));
    }

    output.push_str(&"-".repeat(92));
    output.push('\n');
    output.push_str(&format!(
        "Compound ROI for period: {:.4}\n",
        stats.compound_roi_for_period
    ));

    output
}
