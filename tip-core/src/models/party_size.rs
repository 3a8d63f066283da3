use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of people splitting the bill. Never less than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct PartySize(u32);

impl PartySize {
    pub const MIN: PartySize = PartySize(1);

    /// Clamps any integer into the valid range `1..=u32::MAX`.
    pub fn new(count: i64) -> Self {
        Self(count.clamp(1, i64::from(u32::MAX)) as u32)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decremented(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for PartySize {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i64> for PartySize {
    fn from(count: i64) -> Self {
        Self::new(count)
    }
}

impl From<PartySize> for u32 {
    fn from(size: PartySize) -> Self {
        size.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
