//! Present value against a per-year discount-rate table.
//!
//! Discounting is an explicit backward walk, one year at a time, so a
//! non-uniform rate per year is honored exactly and each yearly step stays
//! auditable in tests. The rate table is read-only once built and can be
//! shared freely across concurrent per-company computations.

use crate::error::{Result, StatsError};
use std::collections::BTreeMap;

/// Annual discount/inflation rate per calendar year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountRateTable {
    rates: BTreeMap<i32, f64>,
}

impl DiscountRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rate for a calendar year.
    pub fn insert(&mut self, year: i32, rate: f64) {
        self.rates.insert(year, rate);
    }

    /// Rate for a calendar year, if on record.
    pub fn rate(&self, year: i32) -> Option<f64> {
        self.rates.get(&year).copied()
    }

    /// US CPI-U annual inflation, 2009 through 2020.
    ///
    /// The default table used by the screening binary for histories drawn
    /// from 2010s filings.
    pub fn us_inflation_2010s() -> Self {
        [
            (2009, -0.0036),
            (2010, 0.0164),
            (2011, 0.0316),
            (2012, 0.0207),
            (2013, 0.0146),
            (2014, 0.0162),
            (2015, 0.0012),
            (2016, 0.0126),
            (2017, 0.0213),
            (2018, 0.0244),
            (2019, 0.0181),
            (2020, 0.0123),
        ]
        .into_iter()
        .collect()
    }
}

impl FromIterator<(i32, f64)> for DiscountRateTable {
    fn from_iter<T: IntoIterator<Item = (i32, f64)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

/// Restate `value` from `flow_year` in terms of `base_year`.
///
/// Identity when the years coincide; otherwise walks backward one year at a
/// time from `flow_year` down to `base_year + 1`, multiplying by
/// `1 + rate(year)` at each step.
///
/// # Errors
/// - [`StatsError::InvalidPeriod`] when `flow_year` precedes `base_year`.
/// - [`StatsError::MissingRate`] when the table lacks a traversed year.
pub fn discount_to_base(
    value: f64,
    base_year: i32,
    flow_year: i32,
    rates: &DiscountRateTable,
) -> Result<f64> {
    if flow_year < base_year {
        return Err(StatsError::InvalidPeriod {
            periods: i64::from(flow_year - base_year),
        });
    }

    let mut value = value;
    let mut year = flow_year;
    while year > base_year {
        let rate = rates
            .rate(year)
            .ok_or(StatsError::MissingRate { year })?;
        value *= 1.0 + rate;
        year -= 1;
    }
    Ok(value)
}

/// Present value of a contiguous flow series.
///
/// `flows[i]` is treated as occurring in `base_year + i`; each flow is
/// discounted to `base_year` and the results are summed.
///
/// # Errors
/// Propagates [`StatsError::MissingRate`] for any year the table lacks.
pub fn present_value_of_series(
    flows: &[f64],
    base_year: i32,
    rates: &DiscountRateTable,
) -> Result<f64> {
    let mut total = 0.0;
    for (i, flow) in flows.iter().enumerate() {
        total += discount_to_base(*flow, base_year, base_year + i as i32, rates)?;
    }
    Ok(total)
}

/// Annualized compounding rate between two values.
///
/// `(final / initial)^(1 / periods) - 1`.
///
/// # Errors
/// - [`StatsError::InvalidPeriod`] when `periods <= 0`.
/// - [`StatsError::DivisionByZero`] when `initial` is exactly zero.
pub fn compounding_rate(initial: f64, final_value: f64, periods: i64) -> Result<f64> {
    if periods <= 0 {
        return Err(StatsError::InvalidPeriod { periods });
    }
    if initial == 0.0 {
        return Err(StatsError::DivisionByZero);
    }
    Ok((final_value / initial).powf(1.0 / periods as f64) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_table(rate: f64, years: std::ops::RangeInclusive<i32>) -> DiscountRateTable {
        years.map(|y| (y, rate)).collect()
    }

    #[test]
    fn test_same_year_is_identity() {
        let table = DiscountRateTable::new();
        assert_eq!(discount_to_base(123.45, 2015, 2015, &table).unwrap(), 123.45);
    }

    #[test]
    fn test_backward_walk_compounds_each_year() {
        let mut table = DiscountRateTable::new();
        table.insert(2010, 0.10);
        table.insert(2011, 0.20);

        // 100 in 2011 -> *1.20 (2011) -> *1.10 (2010) -> 132 in 2009
        let value = discount_to_base(100.0, 2009, 2011, &table).unwrap();
        assert_relative_eq!(value, 132.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_uniform_rates_are_honored_exactly() {
        let mut table = flat_table(0.02, 2010..=2012);
        table.insert(2011, 0.05);

        let value = discount_to_base(1.0, 2009, 2012, &table).unwrap();
        assert_relative_eq!(value, 1.02 * 1.05 * 1.02, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_rate_is_an_error() {
        let table = flat_table(0.02, 2011..=2012);
        let err = discount_to_base(1.0, 2009, 2012, &table).unwrap_err();
        assert!(matches!(err, StatsError::MissingRate { year: 2010 }));
    }

    #[test]
    fn test_flow_year_before_base_year_is_rejected() {
        let table = DiscountRateTable::new();
        assert!(matches!(
            discount_to_base(1.0, 2015, 2010, &table),
            Err(StatsError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_present_value_of_series() {
        let table = flat_table(0.10, 2010..=2011);
        // 1.0 at 2009 + 1.0 at 2010 (*1.1) + 1.0 at 2011 (*1.1*1.1)
        let total = present_value_of_series(&[1.0, 1.0, 1.0], 2009, &table).unwrap();
        assert_relative_eq!(total, 1.0 + 1.1 + 1.21, epsilon = 1e-9);
    }

    #[test]
    fn test_present_value_of_empty_series_is_zero() {
        let table = DiscountRateTable::new();
        assert_eq!(present_value_of_series(&[], 2009, &table).unwrap(), 0.0);
    }

    #[test]
    fn test_compounding_rate_positive() {
        let rate = compounding_rate(110.5, 562.9325, 11).unwrap();
        assert_relative_eq!(rate, 0.15952809731470885, max_relative = 1e-12);
    }

    #[test]
    fn test_compounding_rate_negative() {
        let rate = compounding_rate(562.9325, 110.5, 11).unwrap();
        assert_relative_eq!(rate, -0.1375801911865282, max_relative = 1e-12);
    }

    #[test]
    fn test_compounding_rate_invalid_period() {
        assert!(matches!(
            compounding_rate(110.5, 562.9325, 0),
            Err(StatsError::InvalidPeriod { periods: 0 })
        ));
    }

    #[test]
    fn test_compounding_rate_zero_initial() {
        assert!(matches!(
            compounding_rate(0.0, 5.0, 3),
            Err(StatsError::DivisionByZero)
        ));
    }

    #[test]
    fn test_builtin_table_covers_the_2010s() {
        let table = DiscountRateTable::us_inflation_2010s();
        for year in 2009..=2020 {
            assert!(table.rate(year).is_some(), "missing {year}");
        }
        assert!(table.rate(2021).is_none());
    }
}
