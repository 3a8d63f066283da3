//! Tip, total and per-person calculations.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Tip amount (bill × percentage / 100) |
//! | 2    | Total amount (bill + tip) |
//! | 3    | Per-person amount (total / party size) |
//!
//! No step rounds; rounding is a display concern.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::PartySize;
//! use tip_core::calculations::{TipCalculationInput, calculate};
//!
//! let input = TipCalculationInput {
//!     bill_amount: dec!(100),
//!     tip_percentage: dec!(18),
//!     party_size: PartySize::new(2),
//! };
//!
//! let breakdown = calculate(&input).unwrap();
//!
//! assert_eq!(breakdown.tip_amount, dec!(18));
//! assert_eq!(breakdown.total_amount, dec!(118));
//! assert_eq!(breakdown.per_person_amount, dec!(59));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{PartySize, TipBreakdown};

/// Errors that can occur during a tip calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TipCalculationError {
    /// An intermediate value fell outside the representable decimal range.
    #[error("{0} overflowed the decimal range")]
    Overflow(&'static str),
}

/// Parsed inputs for a single calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipCalculationInput {
    /// Bill before tip.
    pub bill_amount: Decimal,

    /// Tip rate in percent (18 means 18%).
    pub tip_percentage: Decimal,

    /// Number of people sharing the total.
    pub party_size: PartySize,
}

/// Runs every step and returns the derived amounts.
///
/// # Errors
///
/// Returns [`TipCalculationError::Overflow`] when the bill or percentage is
/// large enough that a product or sum cannot be represented.
pub fn calculate(input: &TipCalculationInput) -> Result<TipBreakdown, TipCalculationError> {
    let tip_amount = tip_amount(input.bill_amount, input.tip_percentage)?;
    let total_amount = total_amount(input.bill_amount, tip_amount)?;
    let per_person_amount = per_person_amount(total_amount, input.party_size)?;

    Ok(TipBreakdown {
        tip_amount,
        total_amount,
        per_person_amount,
    })
}

fn tip_amount(
    bill: Decimal,
    percentage: Decimal,
) -> Result<Decimal, TipCalculationError> {
    bill.checked_mul(percentage)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(TipCalculationError::Overflow("tip amount"))
}

fn total_amount(
    bill: Decimal,
    tip: Decimal,
) -> Result<Decimal, TipCalculationError> {
    bill.checked_add(tip)
        .ok_or(TipCalculationError::Overflow("total amount"))
}

fn per_person_amount(
    total: Decimal,
    party_size: PartySize,
) -> Result<Decimal, TipCalculationError> {
    total
        .checked_div(party_size.as_decimal())
        .ok_or(TipCalculationError::Overflow("per-person amount"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_input() -> TipCalculationInput {
        TipCalculationInput {
            bill_amount: dec!(100.00),
            tip_percentage: dec!(18),
            party_size: PartySize::new(2),
        }
    }

    // =========================================================================
    // tip_amount tests
    // =========================================================================

    #[test]
    fn tip_amount_applies_percentage() {
        let result = tip_amount(dec!(50), dec!(10));

        assert_eq!(result, Ok(dec!(5)));
    }

    #[test]
    fn tip_amount_handles_fractional_percentage() {
        let result = tip_amount(dec!(80.00), dec!(17.5));

        assert_eq!(result, Ok(dec!(14.00)));
    }

    #[test]
    fn tip_amount_zero_percentage_is_zero() {
        let result = tip_amount(dec!(42.10), dec!(0));

        assert_eq!(result, Ok(dec!(0)));
    }

    #[test]
    fn tip_amount_reports_overflow() {
        let result = tip_amount(Decimal::MAX, dec!(25));

        assert_eq!(result, Err(TipCalculationError::Overflow("tip amount")));
    }

    // =========================================================================
    // total_amount tests
    // =========================================================================

    #[test]
    fn total_amount_adds_tip_to_bill() {
        let result = total_amount(dec!(100), dec!(18));

        assert_eq!(result, Ok(dec!(118)));
    }

    #[test]
    fn total_amount_reports_overflow() {
        let result = total_amount(Decimal::MAX, dec!(1));

        assert_eq!(result, Err(TipCalculationError::Overflow("total amount")));
    }

    // =========================================================================
    // per_person_amount tests
    // =========================================================================

    #[test]
    fn per_person_amount_splits_evenly() {
        let result = per_person_amount(dec!(118), PartySize::new(2));

        assert_eq!(result, Ok(dec!(59)));
    }

    #[test]
    fn per_person_amount_single_person_pays_total() {
        let result = per_person_amount(dec!(94.40), PartySize::MIN);

        assert_eq!(result, Ok(dec!(94.40)));
    }

    #[test]
    fn per_person_amount_keeps_unrounded_quotient() {
        let result = per_person_amount(dec!(100), PartySize::new(3)).unwrap();

        assert!(result > dec!(33.33));
        assert!(result < dec!(33.34));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_hundred_at_eighteen_for_two() {
        let result = calculate(&test_input()).unwrap();

        assert_eq!(result.tip_amount, dec!(18));
        assert_eq!(result.total_amount, dec!(118));
        assert_eq!(result.per_person_amount, dec!(59));
    }

    #[test]
    fn calculate_custom_ten_percent_for_one() {
        let input = TipCalculationInput {
            bill_amount: dec!(50),
            tip_percentage: dec!(10),
            party_size: PartySize::MIN,
        };

        let result = calculate(&input).unwrap();

        assert_eq!(result.tip_amount, dec!(5));
        assert_eq!(result.total_amount, dec!(55));
        assert_eq!(result.per_person_amount, dec!(55));
    }

    #[test]
    fn calculate_zero_bill_is_all_zero() {
        let input = TipCalculationInput {
            bill_amount: dec!(0),
            ..test_input()
        };

        let result = calculate(&input).unwrap();

        assert!(result.is_zero());
    }

    #[test]
    fn calculate_identities_hold_across_inputs() {
        for (bill, pct, people) in [
            (dec!(12.34), dec!(15), 1),
            (dec!(250.00), dec!(22), 4),
            (dec!(0.99), dec!(33.3), 3),
            (dec!(1000), dec!(0), 7),
        ] {
            let input = TipCalculationInput {
                bill_amount: bill,
                tip_percentage: pct,
                party_size: PartySize::new(people),
            };

            let result = calculate(&input).unwrap();

            assert_eq!(result.tip_amount, bill * pct / dec!(100));
            assert_eq!(result.total_amount, bill + result.tip_amount);
            assert_eq!(
                result.per_person_amount,
                result.total_amount / Decimal::from(people)
            );
        }
    }

    #[test]
    fn calculate_propagates_overflow() {
        let input = TipCalculationInput {
            bill_amount: Decimal::MAX,
            ..test_input()
        };

        assert!(calculate(&input).is_err());
    }
}
