//! Database location helpers.
//!
//! The profiles database lives in the platform data directory unless the
//! user points `--db` somewhere else:
//! - Linux: `~/.local/share/hobart/profiles.db`
//! - macOS: `~/Library/Application Support/hobart/profiles.db`
//! - Windows: `%APPDATA%\hobart\profiles.db`

use hobart::data::{DataError, SqliteProfileRepository};
use std::path::PathBuf;

/// Default directory for hobart data files.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hobart")
}

/// Default profiles database path.
fn default_db_path() -> PathBuf {
    default_data_dir().join("profiles.db")
}

/// Open the profile repository, creating parent directories if needed.
pub(crate) fn open_repository(db: Option<PathBuf>) -> Result<SqliteProfileRepository, DataError> {
    let path = db.unwrap_or_else(default_db_path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    SqliteProfileRepository::new(&path)
}
