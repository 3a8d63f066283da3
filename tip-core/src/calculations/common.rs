//! Common utility functions for money display.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as dollars with exactly two fraction digits.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(59)), "$59.00");
/// assert_eq!(format_currency(dec!(4.125)), "$4.13");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format!("${:.2}", round_half_up(value))
}
