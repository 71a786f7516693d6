//! Stats aggregation.
//!
//! Orchestrates the gate, extractor, split adjuster, change-rate/average
//! math, and the present-value engine into the final per-company statistics
//! record. Any per-descriptor failure aborts the whole aggregation; there is
//! no partial `CompanyStats`.

use crate::catalog::{
    AverageBasis, DIVIDENDS_PER_SHARE, DescriptorCatalog, EPS, NET_EQUITY_PER_SHARE, NET_INCOME,
    STOCK_SPLIT_RATIO,
};
use crate::discount::{DiscountRateTable, compounding_rate, discount_to_base};
use crate::error::{Result, StatsError};
use crate::gate::{DEFAULT_MIN_YEARS, trim};
use crate::math::{average, change_rate_history, linear_regression};
use crate::series::{extract, extract_required};
use crate::splits::adjust_per_share;
use hobart_data::YearlyProfile;
use serde::{Deserialize, Serialize};

/// Derived time series and aggregate for one descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorStats {
    /// Descriptor name
    pub descriptor: String,
    /// Metric history over the analyzed window (split-adjusted for
    /// per-share descriptors), one value per surviving year
    pub history: Vec<f64>,
    /// Year-over-year change series, one entry shorter than the history
    pub yoy_change: Vec<f64>,
    /// Mean of the history or of its change series, per the catalog's
    /// averaging basis for this descriptor
    pub average: f64,
}

/// Time-series analysis output for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStats {
    /// Central Index Key of the company
    pub cik: String,
    /// Ticker symbol of the company
    pub ticker: String,
    /// First fiscal year of the analyzed window
    pub begin_year: i32,
    /// Last fiscal year of the analyzed window
    pub end_year: i32,
    /// Surviving fiscal years, aligned positionally with every metric
    /// history
    pub years: Vec<i32>,
    /// Per-descriptor statistics, in catalog order
    pub metrics: Vec<DescriptorStats>,
    /// Annualized compound return for the period, modeling reinvested
    /// equity plus discounted dividends
    pub compound_roi_for_period: f64,
}

impl CompanyStats {
    /// Statistics for a single descriptor, if it is in the catalog.
    pub fn metric(&self, descriptor: &str) -> Option<&DescriptorStats> {
        self.metrics.iter().find(|m| m.descriptor == descriptor)
    }
}

/// Derives [`CompanyStats`] from ordered yearly profile histories.
///
/// Holds the descriptor catalog and the discount-rate table as immutable
/// configuration; one aggregator can be shared across any number of
/// per-company computations.
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    catalog: DescriptorCatalog,
    rates: DiscountRateTable,
    min_years: usize,
}

impl StatsAggregator {
    /// Create an aggregator with the default minimum-years threshold.
    pub const fn new(catalog: DescriptorCatalog, rates: DiscountRateTable) -> Self {
        Self {
            catalog,
            rates,
            min_years: DEFAULT_MIN_YEARS,
        }
    }

    /// Override the minimum number of trailing fully-reported years.
    #[must_use]
    pub const fn with_min_years(mut self, min_years: usize) -> Self {
        self.min_years = min_years;
        self
    }

    /// The catalog driving this aggregator.
    pub const fn catalog(&self) -> &DescriptorCatalog {
        &self.catalog
    }

    /// Compute the full statistics record for a company history.
    ///
    /// `history` must be ascending by year with one record per year (the
    /// repository's contract). The history is trimmed to its analyzable
    /// trailing window first; statistics are then derived for every
    /// descriptor in the catalog, and the compound ROI for the period is
    /// attached.
    ///
    /// # Errors
    /// - [`StatsError::InsufficientData`] when fewer than the configured
    ///   minimum of trailing fully-reported years survive trimming.
    /// - [`StatsError::MissingValue`] when any catalog descriptor, the
    ///   dividend flows, or the net equity per share is unreported in a
    ///   surviving year.
    /// - Any error from the underlying series math, unchanged.
    pub fn compute(&self, history: &[YearlyProfile]) -> Result<CompanyStats> {
        let trimmed = self.analyzable_window(history)?;

        let splits = extract(trimmed, STOCK_SPLIT_RATIO);
        let mut metrics = Vec::with_capacity(self.catalog.len());
        for descriptor in self.catalog.descriptors() {
            let raw = extract_required(trimmed, descriptor.name)?;
            let series = if descriptor.per_share {
                adjust_per_share(&raw, &splits)?
            } else {
                raw
            };
            let yoy_change = change_rate_history(&series)?;
            let avg = match descriptor.average {
                AverageBasis::History => average(&series)?,
                AverageBasis::YoyChange => average(&yoy_change)?,
            };
            metrics.push(DescriptorStats {
                descriptor: descriptor.name.to_string(),
                history: series,
                yoy_change,
                average: avg,
            });
        }

        let first = &trimmed[0];
        let last = &trimmed[trimmed.len() - 1];
        let compound_roi = self.compound_roi(trimmed, first.year, last.year)?;

        Ok(CompanyStats {
            cik: first.cik.clone(),
            ticker: first.ticker.clone(),
            begin_year: first.year,
            end_year: last.year,
            years: trimmed.iter().map(|p| p.year).collect(),
            metrics,
            compound_roi_for_period: compound_roi,
        })
    }

    /// Least-squares trend line for a single descriptor over the analyzable
    /// window.
    ///
    /// Returns `(alpha, beta)` for `y = alpha + beta * x` with `x` the
    /// zero-based year offset. Per-share descriptors are split-adjusted
    /// before fitting.
    pub fn regression_for(&self, history: &[YearlyProfile], descriptor: &str) -> Result<(f64, f64)> {
        let trimmed = self.analyzable_window(history)?;

        let raw = extract_required(trimmed, descriptor)?;
        let per_share = self.catalog.get(descriptor).is_some_and(|d| d.per_share);
        let ys = if per_share {
            adjust_per_share(&raw, &extract(trimmed, STOCK_SPLIT_RATIO))?
        } else {
            raw
        };

        let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
        linear_regression(&xs, &ys)
    }

    /// Annualized compound growth rate of the split-adjusted EPS series
    /// over the analyzable window.
    pub fn eps_compound_growth(&self, history: &[YearlyProfile]) -> Result<f64> {
        let trimmed = self.analyzable_window(history)?;

        let raw = extract_required(trimmed, EPS)?;
        let adjusted = adjust_per_share(&raw, &extract(trimmed, STOCK_SPLIT_RATIO))?;

        let begin_year = trimmed[0].year;
        let end_year = trimmed[trimmed.len() - 1].year;
        compounding_rate(
            adjusted[0],
            adjusted[adjusted.len() - 1],
            i64::from(end_year - begin_year),
        )
    }

    /// Trim the history and enforce the sufficiency threshold.
    fn analyzable_window<'a>(&self, history: &'a [YearlyProfile]) -> Result<&'a [YearlyProfile]> {
        let trimmed = trim(history);
        let required = self.min_years.max(1);
        if trimmed.len() < required {
            return Err(StatsError::InsufficientData {
                required,
                actual: trimmed.len(),
            });
        }
        Ok(trimmed)
    }

    /// Annualized total-shareholder-return estimate for the window.
    ///
    /// `initial` is the first net-equity-per-share value; `final` is the
    /// last one restated in base-year terms plus every dividend flow
    /// discounted at its record's own fiscal year, so calendar gaps in the
    /// surviving window are priced at the right year.
    fn compound_roi(
        &self,
        trimmed: &[YearlyProfile],
        begin_year: i32,
        end_year: i32,
    ) -> Result<f64> {
        let net_equity = extract_required(trimmed, NET_EQUITY_PER_SHARE)?;
        let dividends = extract_required(trimmed, DIVIDENDS_PER_SHARE)?;

        let initial = net_equity[0];
        let mut final_value = discount_to_base(
            net_equity[net_equity.len() - 1],
            begin_year,
            end_year,
            &self.rates,
        )?;
        for (record, dividend) in trimmed.iter().zip(&dividends) {
            final_value += discount_to_base(*dividend, begin_year, record.year, &self.rates)?;
        }

        compounding_rate(initial, final_value, i64::from(end_year - begin_year))
    }
}

/// Whether the company reported a positive net income for each of the most
/// recent `years` records.
///
/// False when the history is shorter than `years` or when net income is
/// unreported in any of those years.
pub fn has_been_profitable(history: &[YearlyProfile], years: usize) -> bool {
    if history.len() < years {
        return false;
    }
    history[history.len() - years..]
        .iter()
        .all(|p| p.metric(NET_INCOME).is_some_and(|v| v > 0.0))
}
