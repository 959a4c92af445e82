/// Decimal places kept for currency amounts.
pub const CURRENCY_DECIMALS: u32 = 3;

/// Decimal places kept for percentages and ratios.
pub const PERCENTAGE_DECIMALS: u32 = 2;

/// Rounds `value` to `decimals` places as `round(value * 10^decimals) / 10^decimals`.
///
/// The scaled value is rounded to the nearest integer with ties going toward
/// positive infinity, and the scaling happens in binary64. Persisted totals
/// were produced this way, so the quirks are kept: `1.005` rounds to `1.0`
/// at two places because `1.005 * 100` is `100.49999999999999`, and `-0.0025`
/// rounds to `-0.002` at three places.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    round_half_up(value * factor) / factor
}

/// Rounds a currency amount to [`CURRENCY_DECIMALS`] places.
pub fn round_currency(value: f64) -> f64 {
    round_to_decimals(value, CURRENCY_DECIMALS)
}

/// Rounds a percentage to [`PERCENTAGE_DECIMALS`] places.
pub fn round_percentage(value: f64) -> f64 {
    round_to_decimals(value, PERCENTAGE_DECIMALS)
}

// `f64::round` breaks ties away from zero; persisted totals break them upward.
fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
