use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a number is not one of the offered preset percentages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidTipPreset {
    #[error("{0}% is not a preset tip (choose one of 15, 18, 20, 22, 25)")]
    NotAPreset(u32),

    #[error("'{0}' is not a tip percentage")]
    NotANumber(String),
}

/// One of the fixed one-click tip rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TipPreset {
    Fifteen,
    #[default]
    Eighteen,
    Twenty,
    TwentyTwo,
    TwentyFive,
}

impl TipPreset {
    /// All presets in display order.
    pub const ALL: [TipPreset; 5] = [
        Self::Fifteen,
        Self::Eighteen,
        Self::Twenty,
        Self::TwentyTwo,
        Self::TwentyFive,
    ];

    pub fn percent(&self) -> u32 {
        match self {
            Self::Fifteen => 15,
            Self::Eighteen => 18,
            Self::Twenty => 20,
            Self::TwentyTwo => 22,
            Self::TwentyFive => 25,
        }
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.percent())
    }
}

impl TryFrom<u32> for TipPreset {
    type Error = InvalidTipPreset;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.percent() == value)
            .ok_or(InvalidTipPreset::NotAPreset(value))
    }
}

impl From<TipPreset> for u32 {
    fn from(preset: TipPreset) -> Self {
        preset.percent()
    }
}

/// Accepts `"20"` as well as `"20%"`.
impl FromStr for TipPreset {
    type Err = InvalidTipPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let value: u32 = digits
            .parse()
            .map_err(|_| InvalidTipPreset::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for TipPreset {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
