// Utility functions for rounding and rendering numbers

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a float to a specific number of decimal places.
///
/// Ties go to the even digit, judged on the exact binary value of `value`:
/// `2.675` is stored as `2.67499999…` and becomes `2.67`, while the exactly
/// representable `0.125` becomes `0.12`. The returned float is the one nearest
/// the rounded decimal.
pub fn round_decimal(value: f64, decimals: u32) -> f64 {
    match Decimal::from_f64_retain(value) {
        Some(exact) => exact
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven)
            .to_string()
            .parse::<f64>()
            .unwrap_or(value),
        // Non-finite, or too large to carry a fractional part.
        None => value,
    }
}

/// Render a value rounded to the nearest whole number, ties to even.
pub fn format_whole(value: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0.
    format!("{:.0}", value.round_ties_even() + 0.0)
}

/// Render a float with the shortest digits that round-trip, always keeping a
/// fractional part (`5.0`). Magnitudes outside `[1e-4, 1e16)` use scientific
/// notation with a signed two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_float(value: f64) -> String {
    let rendered = format!("{:?}", value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => rendered,
    }
}
