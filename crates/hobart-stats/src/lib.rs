#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod discount;
pub mod error;
pub mod gate;
pub mod math;
pub mod series;
pub mod splits;
pub mod stats;

pub use catalog::{AverageBasis, Descriptor, DescriptorCatalog};
pub use discount::{
    DiscountRateTable, compounding_rate, discount_to_base, present_value_of_series,
};
pub use error::{Result, StatsError};
pub use gate::{DEFAULT_MIN_YEARS, is_analyzable, trim};
pub use math::{average, change_rate_history, linear_regression};
pub use series::{MetricSeries, extract, extract_required};
pub use splits::adjust_per_share;
pub use stats::{CompanyStats, DescriptorStats, StatsAggregator, has_been_profitable};
