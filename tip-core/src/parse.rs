//! Conversion of raw user input into calculator values.
//!
//! Input is stored verbatim by the calculator and only interpreted here, at
//! recomputation time.

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a raw amount could not be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("no amount entered")]
    Empty,

    #[error("invalid amount '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("amount {0} is negative")]
    Negative(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`], accepting plain or scientific notation.
fn parse_decimal(normalized: &str) -> Result<Decimal, rust_decimal::Error> {
    normalized
        .parse::<Decimal>()
        .or_else(|e| Decimal::from_scientific(normalized).map_err(|_| e))
}

/// Parses a signed decimal, rejecting empty or non-numeric input.
fn parse_signed(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    parse_decimal(&normalized).map_err(|e| ParseAmountError::Invalid {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a bill amount, which must not be negative.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and scientific
/// notation (`"1.5e2"`). The whole string must be numeric: `"12abc"` is
/// rejected rather than read as 12.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let value = parse_signed(s)?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ParseAmountError::Negative(value));
    }

    Ok(value)
}

/// Parses a tip percentage. Same rules as [`parse_amount`], but negative
/// rates are applied as entered.
pub fn parse_percentage(s: &str) -> Result<Decimal, ParseAmountError> {
    parse_signed(s)
}

/// Parses a party size from its leading integer, falling back to 1 when
/// there is none.
///
/// Reading stops at the first non-digit, so `"2.7"` and `"2,5"` give 2 and
/// `"1e3"` gives 1. Digit runs too long for `i64` saturate. The result is not
/// clamped here; see [`crate::PartySize::new`].
pub fn parse_party_size(s: &str) -> i64 {
    let trimmed = s.trim();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_end = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |i| i + sign_len);

    if digits_end == sign_len {
        return 1;
    }

    match trimmed[..digits_end].parse::<i64>() {
        Ok(count) => count,
        Err(_) if trimmed.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}
