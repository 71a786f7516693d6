//! SQLite-backed profile repository.
//!
//! One row per `(cik, year)`, with the open-ended metric map stored as a
//! JSON blob. Reads always `ORDER BY year ASC`, which is how the ascending
//! history invariant is enforced at the storage boundary.

use crate::error::{DataError, Result};
use crate::profile::{CompanyHistory, YearlyProfile};
use crate::repository::ProfileRepository;
use chrono::Utc;
use rusqlite::{Connection, params};
use std::collections::HashMap;
use std::path::Path;

/// Profile repository stored in a local SQLite database.
#[derive(Debug)]
pub struct SqliteProfileRepository {
    conn: Connection,
}

impl SqliteProfileRepository {
    /// Open (or create) a repository at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize_schema()?;
        Ok(repo)
    }

    /// Create an in-memory repository (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize_schema()?;
        Ok(repo)
    }

    /// Initialize the database schema.
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS profiles (
                cik TEXT NOT NULL,
                ticker TEXT NOT NULL,
                year INTEGER NOT NULL,
                metrics TEXT NOT NULL,
                stored_at TEXT NOT NULL,
                PRIMARY KEY (cik, year)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_profiles_ticker ON profiles(ticker)",
            [],
        )?;

        Ok(())
    }

    /// Store a single yearly profile, replacing any existing row for the
    /// same `(cik, year)`.
    pub fn put_profile(&self, profile: &YearlyProfile) -> Result<()> {
        let stored_at = Utc::now().to_rfc3339();
        let metrics = serde_json::to_string(&profile.metrics)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO profiles (cik, ticker, year, metrics, stored_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![profile.cik, profile.ticker, profile.year, metrics, stored_at],
        )?;

        Ok(())
    }

    /// Store a batch of yearly profiles in a single transaction.
    pub fn put_profiles(&self, profiles: &[YearlyProfile]) -> Result<()> {
        let stored_at = Utc::now().to_rfc3339();
        let tx = self.conn.unchecked_transaction()?;

        for profile in profiles {
            let metrics = serde_json::to_string(&profile.metrics)?;
            tx.execute(
                "INSERT OR REPLACE INTO profiles (cik, ticker, year, metrics, stored_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![profile.cik, profile.ticker, profile.year, metrics, stored_at],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn history_where(&self, column: &str, key: &str) -> Result<CompanyHistory> {
        let sql = format!(
            "SELECT cik, ticker, year, metrics FROM profiles
             WHERE {column} = ?1
             ORDER BY year ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_map(params![key], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut history = CompanyHistory::new();
        for row in rows {
            let (cik, ticker, year, metrics) = row?;
            let metrics: HashMap<String, Option<f64>> = serde_json::from_str(&metrics)?;
            history.push(YearlyProfile {
                cik,
                ticker,
                year,
                metrics,
            });
        }

        if history.is_empty() {
            return Err(DataError::ProfileNotFound {
                key: key.to_string(),
            });
        }

        Ok(history)
    }
}

impl ProfileRepository for SqliteProfileRepository {
    fn company_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT cik FROM profiles ORDER BY cik ASC")?;

        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row?);
        }
        Ok(keys)
    }

    fn history_for_cik(&self, cik: &str) -> Result<CompanyHistory> {
        self.history_where("cik", cik)
    }

    fn history_for_ticker(&self, ticker: &str) -> Result<CompanyHistory> {
        self.history_where("ticker", ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(cik: &str, ticker: &str, year: i32, metrics: &[(&str, Option<f64>)]) -> YearlyProfile {
        YearlyProfile {
            cik: cik.to_string(),
            ticker: ticker.to_string(),
            year,
            metrics: metrics
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    #[test]
    fn test_round_trip() {
        let repo = SqliteProfileRepository::in_memory().unwrap();
        let stored = profile("111", "ACME", 2018, &[("net_income", Some(42.0)), ("goodwill", None)]);
        repo.put_profile(&stored).unwrap();

        let history = repo.history_for_cik("111").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].ticker, "ACME");
        assert_eq!(history[0].metric("net_income"), Some(42.0));
        // null survives storage as "reported but missing", not zero
        assert_eq!(history[0].metric("goodwill"), None);
        assert!(history[0].metrics.contains_key("goodwill"));
    }

    #[test]
    fn test_history_comes_back_ascending() {
        let repo = SqliteProfileRepository::in_memory().unwrap();
        for year in [2019, 2015, 2017, 2016, 2018] {
            repo.put_profile(&profile("111", "ACME", year, &[("eps", Some(1.0))]))
                .unwrap();
        }

        let history = repo.history_for_cik("111").unwrap();
        let years: Vec<i32> = history.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2015, 2016, 2017, 2018, 2019]);
    }

    #[test]
    fn test_one_record_per_year() {
        let repo = SqliteProfileRepository::in_memory().unwrap();
        repo.put_profile(&profile("111", "ACME", 2018, &[("eps", Some(1.0))]))
            .unwrap();
        repo.put_profile(&profile("111", "ACME", 2018, &[("eps", Some(2.0))]))
            .unwrap();

        let history = repo.history_for_cik("111").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].metric("eps"), Some(2.0));
    }

    #[test]
    fn test_lookup_by_ticker() {
        let repo = SqliteProfileRepository::in_memory().unwrap();
        repo.put_profiles(&[
            profile("111", "ACME", 2018, &[("eps", Some(1.0))]),
            profile("222", "GLOBEX", 2018, &[("eps", Some(3.0))]),
        ])
        .unwrap();

        let history = repo.history_for_ticker("GLOBEX").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].cik, "222");
    }

    #[test]
    fn test_missing_company_is_an_error() {
        let repo = SqliteProfileRepository::in_memory().unwrap();
        let err = repo.history_for_cik("999").unwrap_err();
        assert!(matches!(err, DataError::ProfileNotFound { .. }));
    }

    #[test]
    fn test_company_keys_sorted_and_distinct() {
        let repo = SqliteProfileRepository::in_memory().unwrap();
        repo.put_profiles(&[
            profile("222", "GLOBEX", 2017, &[]),
            profile("111", "ACME", 2017, &[]),
            profile("111", "ACME", 2018, &[]),
        ])
        .unwrap();

        assert_eq!(repo.company_keys().unwrap(), vec!["111", "222"]);
    }
}
