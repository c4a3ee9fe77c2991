//! Decimal rounding used when reporting balances

use super::REPORTING_DECIMALS;

/// Round `value` to `decimals` places, ties away from zero
///
/// Computed as `round(value * 10^decimals) / 10^decimals`. Values too large
/// to carry a digit at that precision, and non-finite values, are returned
/// unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    if !scale.is_finite() || value.abs() >= 2f64.powi(52) / scale {
        return value;
    }
    (value * scale).round() / scale
}

/// Round to whole cents
pub fn round_cents(value: f64) -> f64 {
    round_to(value, REPORTING_DECIMALS)
}
