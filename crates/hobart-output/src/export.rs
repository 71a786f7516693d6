//! CSV export of screening statistics.

use hobart_stats::CompanyStats;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Produced bytes were not valid UTF-8.
    #[error("Invalid UTF-8 in CSV output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One exported row: a single descriptor value in a single year.
#[derive(Debug, Serialize)]
struct StatsRow<'a> {
    cik: &'a str,
    ticker: &'a str,
    year: i32,
    descriptor: &'a str,
    value: f64,
    /// Change against the prior year; empty for the first year of the
    /// window.
    yoy_change: Option<f64>,
}

/// Write a statistics record as CSV rows, one per descriptor-year.
pub fn write_stats_csv<W: Write>(stats: &CompanyStats, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for metric in &stats.metrics {
        for (i, value) in metric.history.iter().enumerate() {
            csv_writer.serialize(StatsRow {
                cik: &stats.cik,
                ticker: &stats.ticker,
                year: stats.years[i],
                descriptor: &metric.descriptor,
                value: *value,
                yoy_change: if i == 0 {
                    None
                } else {
                    Some(metric.yoy_change[i - 1])
                },
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Render a statistics record as a CSV string.
pub fn stats_to_csv(stats: &CompanyStats) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_stats_csv(stats, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
