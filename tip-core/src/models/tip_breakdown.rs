use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_currency;

/// The three derived outputs of the calculator.
///
/// Values are stored unrounded; rounding happens only when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TipBreakdown {
    /// Bill amount × effective percentage / 100.
    pub tip_amount: Decimal,

    /// Bill amount + tip amount.
    pub total_amount: Decimal,

    /// Total amount / party size.
    pub per_person_amount: Decimal,
}

impl TipBreakdown {
    pub const ZERO: TipBreakdown = TipBreakdown {
        tip_amount: Decimal::ZERO,
        total_amount: Decimal::ZERO,
        per_person_amount: Decimal::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        self.tip_amount.is_zero() && self.total_amount.is_zero() && self.per_person_amount.is_zero()
    }
}

impl fmt::Display for TipBreakdown {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Tip Amount:   {}", format_currency(self.tip_amount))?;
        writeln!(f, "Total Amount: {}", format_currency(self.total_amount))?;
        write!(f, "Per Person:   {}", format_currency(self.per_person_amount))
    }
}
