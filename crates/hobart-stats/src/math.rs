//! Change rates, averages, and ordinary least squares.
//!
//! These operate on dense series only; missing values are rejected upstream
//! by [`crate::series::extract_required`] and never reach this module as
//! zeros.

use crate::error::{Result, StatsError};

/// Year-over-year percentage change series.
///
/// `result[i] = (series[i+1] - series[i]) / series[i]`, so the output is one
/// entry shorter than the input. The same convention (no leading marker) is
/// used everywhere in [`crate::stats::CompanyStats`].
///
/// # Errors
/// - [`StatsError::EmptyInput`] when `series` is empty.
/// - [`StatsError::DivisionByZero`] when a prior-year value is exactly zero
///   (never a silent infinity or NaN).
pub fn change_rate_history(series: &[f64]) -> Result<Vec<f64>> {
    if series.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut changes = Vec::with_capacity(series.len() - 1);
    for window in series.windows(2) {
        let (prior, current) = (window[0], window[1]);
        if prior == 0.0 {
            return Err(StatsError::DivisionByZero);
        }
        changes.push((current - prior) / prior);
    }
    Ok(changes)
}

/// Arithmetic mean.
///
/// # Errors
/// Returns [`StatsError::EmptyInput`] when `series` is empty.
pub fn average(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Ordinary least squares fit of `y = alpha + beta * x`.
///
/// Standard unweighted OLS, not forced through the origin. For perfectly
/// linear input the exact `(alpha, beta)` comes back up to floating-point
/// rounding.
///
/// # Errors
/// - [`StatsError::DimensionMismatch`] when the slices differ in length.
/// - [`StatsError::EmptyInput`] when both are empty.
/// - [`StatsError::DivisionByZero`] for a degenerate design (all xs equal).
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> Result<(f64, f64)> {
    if xs.len() != ys.len() {
        return Err(StatsError::DimensionMismatch {
            expected: xs.len(),
            actual: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(StatsError::DivisionByZero);
    }

    let beta = (n * sum_xy - sum_x * sum_y) / denominator;
    let alpha = (sum_y - beta * sum_x) / n;
    Ok((alpha, beta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_average_of_singleton_is_the_value() {
        assert_eq!(average(&[7.25]).unwrap(), 7.25);
    }

    #[test]
    fn test_average() {
        assert_relative_eq!(average(&[1.5, 2.0, 3.8, 0.5]).unwrap(), 1.95);
    }

    #[test]
    fn test_average_of_empty_is_an_error() {
        assert!(matches!(average(&[]), Err(StatsError::EmptyInput)));
    }

    #[test]
    fn test_change_rate_history() {
        let changes = change_rate_history(&[100.0, 110.0, 99.0]).unwrap();
        assert_eq!(changes.len(), 2);
        assert_relative_eq!(changes[0], 0.10, epsilon = 1e-12);
        assert_relative_eq!(changes[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_change_rate_of_single_year_is_empty() {
        assert!(change_rate_history(&[42.0]).unwrap().is_empty());
    }

    #[test]
    fn test_change_rate_rejects_zero_prior_year() {
        assert!(matches!(
            change_rate_history(&[0.0, 5.0]),
            Err(StatsError::DivisionByZero)
        ));
    }

    #[test]
    fn test_regression_identity_line() {
        let xs: Vec<f64> = (0..12).map(f64::from).collect();
        let (alpha, beta) = linear_regression(&xs, &xs).unwrap();
        assert_relative_eq!(alpha, 0.0);
        assert_relative_eq!(beta, 1.0);
    }

    #[test]
    fn test_regression_with_offset() {
        let xs: Vec<f64> = (0..12).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x + 3.0).collect();
        let (alpha, beta) = linear_regression(&xs, &ys).unwrap();
        assert_relative_eq!(alpha, 3.0, epsilon = 1e-9);
        assert_relative_eq!(beta, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_regression_negative_slope() {
        let xs: Vec<f64> = (0..12).rev().map(f64::from).collect();
        let ys: Vec<f64> = (0..12).map(f64::from).collect();
        let (alpha, beta) = linear_regression(&xs, &ys).unwrap();
        assert_relative_eq!(alpha, 11.0, epsilon = 1e-9);
        assert_relative_eq!(beta, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_regression_on_noisy_series() {
        let xs: Vec<f64> = (0..12).map(f64::from).collect();
        let ys = [
            10.5, -5.0, -8.5, 7.5, 5.5, -12.3, 15.0, 4.5, -15.8, -0.1, 20.5, -26.4,
        ];
        let (alpha, beta) = linear_regression(&xs, &ys).unwrap();
        assert_relative_eq!(alpha, 3.651282051282051, max_relative = 1e-12);
        assert_relative_eq!(beta, -0.7335664335664336, max_relative = 1e-12);
    }

    #[test]
    fn test_regression_on_large_values() {
        let xs: Vec<f64> = (0..12).map(f64::from).collect();
        let ys = [
            258_429_681.358,
            238_529_388.234,
            259_804_859.123,
            271_002_345.222,
            275_003_245.693,
            293_475_934.2345,
            273_984_385.8348,
            263_457_035.5832,
            281_750_235.3845,
            305_384_693.5834,
            302_385_482.5,
            320_485_932.658,
        ];
        let (alpha, beta) = linear_regression(&xs, &ys).unwrap();
        assert_relative_eq!(alpha, 2.483_335_684_250_551e8, max_relative = 1e-9);
        assert_relative_eq!(beta, 5.510_460_580_420_281e6, max_relative = 1e-9);
    }

    #[test]
    fn test_regression_length_mismatch() {
        let err = linear_regression(&[0.0, 1.0, 2.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            StatsError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_regression_degenerate_design() {
        assert!(matches!(
            linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(StatsError::DivisionByZero)
        ));
    }
}
