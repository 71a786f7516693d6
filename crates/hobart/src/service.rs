//! Screening service.
//!
//! Joins a [`ProfileRepository`] and a [`StatsAggregator`] into the two
//! business operations of the screener: statistics for one company, and a
//! screening pass over every company on record.

use hobart_data::{DataError, ProfileRepository};
use hobart_stats::{CompanyStats, StatsAggregator, StatsError};
use thiserror::Error;

/// Errors surfaced by the screening service.
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// Profile storage failed.
    #[error("Data access error: {0}")]
    Data(#[from] DataError),

    /// Statistics derivation failed for the requested company.
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),
}

/// Result of a whole-database screening pass.
#[derive(Debug)]
pub struct ScreenOutcome {
    /// Statistics for every company that could be analyzed, in key order.
    pub stats: Vec<CompanyStats>,
    /// Companies that were skipped, with the computation error that
    /// disqualified them.
    pub skipped: Vec<(String, StatsError)>,
}

/// Per-company statistics and whole-database screening over a repository.
#[derive(Debug)]
pub struct ScreenerService<R: ProfileRepository> {
    repo: R,
    aggregator: StatsAggregator,
}

impl<R: ProfileRepository> ScreenerService<R> {
    /// Create a service over a repository and a configured aggregator.
    pub const fn new(repo: R, aggregator: StatsAggregator) -> Self {
        Self { repo, aggregator }
    }

    /// All company keys available for screening.
    pub fn company_keys(&self) -> Result<Vec<String>, ScreenerError> {
        Ok(self.repo.company_keys()?)
    }

    /// Full statistics for the company with the given CIK.
    pub fn stats_for_cik(&self, cik: &str) -> Result<CompanyStats, ScreenerError> {
        let history = self.repo.history_for_cik(cik)?;
        Ok(self.aggregator.compute(&history)?)
    }

    /// Full statistics for the company with the given ticker.
    pub fn stats_for_ticker(&self, ticker: &str) -> Result<CompanyStats, ScreenerError> {
        let history = self.repo.history_for_ticker(ticker)?;
        Ok(self.aggregator.compute(&history)?)
    }

    /// Screen every company in the repository.
    ///
    /// Companies whose own data defeats the computation (too little
    /// history, unreported required metrics, degenerate series) are
    /// collected in [`ScreenOutcome::skipped`] rather than halting the run;
    /// storage errors halt immediately.
    pub fn screen(&self) -> Result<ScreenOutcome, ScreenerError> {
        let mut stats = Vec::new();
        let mut skipped = Vec::new();

        for cik in self.repo.company_keys()? {
            let history = self.repo.history_for_cik(&cik)?;
            match self.aggregator.compute(&history) {
                Ok(company) => stats.push(company),
                Err(err) => skipped.push((cik, err)),
            }
        }

        Ok(ScreenOutcome { stats, skipped })
    }
}
