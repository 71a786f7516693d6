//! Error taxonomy for the statistics core.
//!
//! Every failure aborts the enclosing aggregation step; there are no
//! partial results and nothing transient to retry. Whether to skip the
//! company or halt a batch run is the caller's decision.

use thiserror::Error;

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while deriving company statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// History too short, or gaps in the most recent reporting window
    #[error("Insufficient data: need at least {required} reported years, got {actual}")]
    InsufficientData {
        /// Minimum number of trailing fully-reported years required
        required: usize,
        /// Trailing fully-reported years actually available
        actual: usize,
    },

    /// Two series expected to align by year differ in length
    #[error("Dimension mismatch: expected {expected} entries, got {actual}")]
    DimensionMismatch {
        /// Expected series length
        expected: usize,
        /// Actual series length
        actual: usize,
    },

    /// An operation requiring at least one data point received none
    #[error("Must provide a non-empty collection of data points")]
    EmptyInput,

    /// Non-positive or reversed period count for a compounding computation
    #[error("Invalid period count: {periods}")]
    InvalidPeriod {
        /// The offending period count
        periods: i64,
    },

    /// A denominator was exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// A metric required by a computation was not reported for a year
    #[error("Missing value for {descriptor} in {year}")]
    MissingValue {
        /// Descriptor whose value is absent
        descriptor: String,
        /// Fiscal year the value is absent for
        year: i32,
    },

    /// The discount-rate table lacks an entry for a traversed year
    #[error("No discount rate on record for {year}")]
    MissingRate {
        /// Year with no rate entry
        year: i32,
    },
}
