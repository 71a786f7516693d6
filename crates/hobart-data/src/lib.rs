#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod profile;
pub mod repository;

pub use error::{DataError, Result};
pub use profile::{CompanyHistory, YearlyProfile};
pub use repository::{ProfileRepository, SqliteProfileRepository};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
