//! Profile repository: how the rest of the workspace obtains company
//! histories.
//!
//! The trait is the seam between storage and computation. Implementations
//! must return histories strictly ascending by year with at most one record
//! per year; callers rely on that and do not re-sort.

mod sqlite;

pub use sqlite::SqliteProfileRepository;

use crate::error::Result;
use crate::profile::CompanyHistory;

/// Read access to stored company profiles.
pub trait ProfileRepository {
    /// All company keys (CIKs) with at least one stored profile, sorted.
    fn company_keys(&self) -> Result<Vec<String>>;

    /// Full profile history for a CIK, ascending by year.
    ///
    /// # Errors
    /// Returns [`crate::DataError::ProfileNotFound`] when no rows exist for
    /// the CIK.
    fn history_for_cik(&self, cik: &str) -> Result<CompanyHistory>;

    /// Full profile history for a ticker symbol, ascending by year.
    ///
    /// # Errors
    /// Returns [`crate::DataError::ProfileNotFound`] when no rows exist for
    /// the ticker.
    fn history_for_ticker(&self, ticker: &str) -> Result<CompanyHistory>;
}
