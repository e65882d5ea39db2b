//! Compound interest formulas.
//!
//! `FV = P * (1 + R/N)^(N*T)` and its rearrangement for `R`. Both functions
//! are pure and round with [`round_decimal`] (ties to even).

use crate::utils::round_decimal;
use thiserror::Error;

/// Decimal places kept on a future value.
pub const FUTURE_VALUE_DECIMALS: u32 = 2;

/// Decimal places kept on a required rate.
pub const RATE_DECIMALS: u32 = 6;

/// Inputs to the required rate formula were not all strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid input: P, FV, N, and T must be greater than 0")]
pub struct InvalidArgument;

/// Future value of `principal` after `years` of compounding `rate`
/// `periods_per_year` times a year, rounded to cents.
///
/// Inputs are not re-validated here; any `periods_per_year >= 1` is safe.
pub fn calculate_future_value(
    principal: f64,
    rate: f64,
    periods_per_year: i64,
    years: i64,
) -> f64 {
    let periods = periods_per_year as f64;
    let exponent = periods * years as f64;

    round_decimal(
        principal * (1.0 + rate / periods).powf(exponent),
        FUTURE_VALUE_DECIMALS,
    )
}

/// Nominal annual rate that grows `principal` into `future_value` when
/// compounded `periods_per_year` times a year over `years`.
///
/// A target below the principal yields a negative rate; only positivity of
/// each input is checked.
pub fn calculate_required_rate(
    future_value: f64,
    principal: f64,
    periods_per_year: i64,
    years: i64,
) -> Result<f64, InvalidArgument> {
    if !is_positive(principal) || !is_positive(future_value) || periods_per_year <= 0 || years <= 0
    {
        return Err(InvalidArgument);
    }

    let periods = periods_per_year as f64;
    let base = (future_value / principal).powf(1.0 / (periods * years as f64));
    let rate = periods * (base - 1.0);

    Ok(round_decimal(rate, RATE_DECIMALS))
}

// NaN is not positive.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_future_value_basic() {
        let result = calculate_future_value(10000.0, 0.040753, 4, 10);
        assert_eq!(result, 15000.04);
        assert!(result > 10000.0);
    }

    #[test]
    fn test_future_value_edge_cases() {
        // zero rate
        assert_eq!(calculate_future_value(1000.0, 0.0, 1, 5), 1000.0);
        // high rate, monthly
        assert_eq!(calculate_future_value(1000.0, 0.50, 12, 1), 1632.09);
        // daily compounding
        assert_eq!(calculate_future_value(1000.0, 0.05, 365, 1), 1051.27);
        // long horizon
        assert_eq!(calculate_future_value(1000.0, 0.05, 1, 50), 11467.4);
    }

    #[test]
    fn test_zero_rate_keeps_principal_to_the_cent() {
        for (principal, periods, years) in [(1234.567, 4, 3), (0.01, 365, 30), (99.995, 1, 1)] {
            assert_eq!(
                calculate_future_value(principal, 0.0, periods, years),
                round_decimal(principal, 2)
            );
        }
    }

    #[test]
    fn test_future_value_is_monotonic() {
        let base = calculate_future_value(5000.0, 0.03, 4, 10);

        assert!(calculate_future_value(5000.0, 0.04, 4, 10) > base);
        assert!(calculate_future_value(5000.0, 0.03, 12, 10) > base);
        assert!(calculate_future_value(5000.0, 0.03, 4, 11) > base);

        let mut previous = 0.0;
        for periods in 1..=365 {
            let value = calculate_future_value(5000.0, 0.03, periods, 10);
            assert!(value >= previous, "dropped at N={periods}");
            previous = value;
        }
    }

    #[test]
    fn test_future_value_below_principal_for_negative_rate() {
        assert_eq!(calculate_future_value(1000.0, -0.1, 4, 5), 602.69);
    }

    #[test]
    fn test_required_rate_basic() {
        let rate = calculate_required_rate(15000.0, 10000.0, 4, 10).unwrap();
        assert_abs_diff_eq!(rate, 0.040753, epsilon = 1e-12);

        let verification = calculate_future_value(10000.0, rate, 4, 10);
        assert_abs_diff_eq!(verification, 15000.0, epsilon = 0.1);
    }

    #[test]
    fn test_required_rate_edge_cases() {
        // same principal and future value
        assert_eq!(calculate_required_rate(1000.0, 1000.0, 1, 1).unwrap(), 0.0);
        // doubling in one period
        assert_abs_diff_eq!(
            calculate_required_rate(2000.0, 1000.0, 1, 1).unwrap(),
            1.0,
            epsilon = 1e-6
        );
        // doubling over ten years
        assert_abs_diff_eq!(
            calculate_required_rate(2000.0, 1000.0, 1, 10).unwrap(),
            0.071773,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_required_rate_is_zero_when_target_equals_principal() {
        for (principal, periods, years) in [(0.5, 1, 1), (10000.0, 4, 10), (123456.78, 365, 40)] {
            assert_eq!(
                calculate_required_rate(principal, principal, periods, years).unwrap(),
                0.0
            );
        }
    }

    #[test]
    fn test_required_rate_negative_when_target_below_principal() {
        assert_abs_diff_eq!(
            calculate_required_rate(500.0, 1000.0, 1, 1).unwrap(),
            -0.5,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            calculate_required_rate(800.0, 1000.0, 4, 5).unwrap(),
            -0.044381,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_required_rate_error_handling() {
        let cases = [
            ("negative principal", 1000.0, -1000.0, 1, 1),
            ("zero principal", 1000.0, 0.0, 1, 1),
            ("negative future value", -1000.0, 1000.0, 1, 1),
            ("zero future value", 0.0, 1000.0, 1, 1),
            ("zero compounding periods", 1000.0, 1000.0, 0, 1),
            ("negative compounding periods", 1000.0, 1000.0, -4, 1),
            ("zero time period", 1000.0, 1000.0, 1, 0),
            ("negative time period", 1000.0, 1000.0, 1, -1),
            ("nan principal", 1000.0, f64::NAN, 1, 1),
        ];

        for (name, future_value, principal, periods, years) in cases {
            let err = calculate_required_rate(future_value, principal, periods, years)
                .expect_err(name);
            assert!(err.to_string().contains("Invalid input"), "{name}");
        }
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            (10000.0, 0.05, 4, 10),
            (250000.0, 0.0325, 12, 30),
            (50000.0, 0.12, 365, 20),
            (1_000_000.0, -0.1, 4, 5),
        ];

        for (principal, rate, periods, years) in cases {
            let future_value = calculate_future_value(principal, rate, periods, years);
            let recovered = calculate_required_rate(future_value, principal, periods, years).unwrap();
            assert!(
                (recovered - rate).abs() < 1e-6,
                "rate {rate} came back as {recovered}"
            );

            let verification = calculate_future_value(principal, recovered, periods, years);
            assert!((verification - future_value).abs() < 0.01);
        }
    }
}
