//! The tip calculator state machine.
//!
//! [`TipCalculator`] owns the raw user inputs for one session and keeps the
//! derived amounts in sync: every mutating method stores its input and then
//! recomputes before returning. No method fails; unusable input degrades to
//! zeroed or clamped values instead.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    CalculatorSnapshot, PartySize, TipBreakdown, TipPreset,
    calculations::{TipCalculationInput, calculate},
    parse::{ParseAmountError, parse_amount, parse_party_size, parse_percentage},
};

/// Inputs and derived outputs for a single calculator session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TipCalculator {
    /// Bill amount exactly as entered. Empty means no bill yet.
    bill_amount: String,

    /// Preset rate, used while no custom percentage is entered.
    selected_preset: TipPreset,

    /// Custom percentage exactly as entered. Non-empty overrides the preset.
    custom_percentage: String,

    party_size: PartySize,

    breakdown: TipBreakdown,
}

impl TipCalculator {
    /// Creates a calculator with no bill, the 18% preset and a party of one.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_bill_amount(
        &mut self,
        raw: impl Into<String>,
    ) {
        self.bill_amount = raw.into();
        self.recompute();
    }

    /// Selects a preset rate and discards any custom percentage.
    pub fn select_preset(
        &mut self,
        preset: TipPreset,
    ) {
        self.selected_preset = preset;
        self.custom_percentage.clear();
        self.recompute();
    }

    /// Stores a custom percentage. Clearing it also resets the preset to 18%.
    pub fn set_custom_percentage(
        &mut self,
        raw: impl Into<String>,
    ) {
        self.custom_percentage = raw.into();
        if self.custom_percentage.is_empty() {
            self.selected_preset = TipPreset::default();
        }
        self.recompute();
    }

    pub fn set_party_size(
        &mut self,
        count: i64,
    ) {
        self.party_size = PartySize::new(count);
        self.recompute();
    }

    /// Sets the party size from typed text; non-numeric text counts as 1.
    pub fn set_party_size_raw(
        &mut self,
        raw: &str,
    ) {
        self.set_party_size(parse_party_size(raw));
    }

    pub fn increment_party_size(&mut self) {
        self.party_size = self.party_size.incremented();
        self.recompute();
    }

    pub fn decrement_party_size(&mut self) {
        self.party_size = self.party_size.decremented();
        self.recompute();
    }

    /// Restores every input to its session-start value.
    pub fn reset(&mut self) {
        self.bill_amount.clear();
        self.selected_preset = TipPreset::default();
        self.custom_percentage.clear();
        self.party_size = PartySize::default();
        self.recompute();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn bill_amount(&self) -> &str {
        &self.bill_amount
    }

    pub fn selected_preset(&self) -> TipPreset {
        self.selected_preset
    }

    pub fn custom_percentage(&self) -> &str {
        &self.custom_percentage
    }

    pub fn party_size(&self) -> PartySize {
        self.party_size
    }

    pub fn breakdown(&self) -> TipBreakdown {
        self.breakdown
    }

    pub fn tip_amount(&self) -> Decimal {
        self.breakdown.tip_amount
    }

    pub fn total_amount(&self) -> Decimal {
        self.breakdown.total_amount
    }

    pub fn per_person_amount(&self) -> Decimal {
        self.breakdown.per_person_amount
    }

    pub fn is_custom_active(&self) -> bool {
        !self.custom_percentage.is_empty()
    }

    /// The rate currently applied, or `None` while the custom percentage
    /// holds something that is not a usable number.
    pub fn effective_percentage(&self) -> Option<Decimal> {
        if self.is_custom_active() {
            parse_percentage(&self.custom_percentage).ok()
        } else {
            Some(self.selected_preset.as_decimal())
        }
    }

    /// Whether `preset` should be shown as the active choice.
    pub fn is_preset_highlighted(
        &self,
        preset: TipPreset,
    ) -> bool {
        self.selected_preset == preset && !self.is_custom_active()
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            bill_amount: self.bill_amount.clone(),
            selected_preset: self.selected_preset,
            custom_percentage: self.custom_percentage.clone(),
            party_size: self.party_size,
            breakdown: self.breakdown,
        }
    }

    // =========================================================================
    // Recomputation
    // =========================================================================

    fn recompute(&mut self) {
        let bill_amount = match parse_amount(&self.bill_amount) {
            Ok(bill) => bill,
            Err(ParseAmountError::Empty) => {
                self.breakdown = TipBreakdown::ZERO;
                return;
            }
            Err(error) => {
                warn!(%error, "bill amount unusable; totals zeroed");
                self.breakdown = TipBreakdown::ZERO;
                return;
            }
        };

        // An unusable custom percentage keeps whatever was computed last.
        let Some(tip_percentage) = self.effective_percentage() else {
            warn!(
                custom = %self.custom_percentage,
                "custom tip percentage is not a number; keeping previous totals"
            );
            return;
        };

        let input = TipCalculationInput {
            bill_amount,
            tip_percentage,
            party_size: self.party_size,
        };

        match calculate(&input) {
            Ok(breakdown) => {
                debug!(
                    bill = %input.bill_amount,
                    percent = %input.tip_percentage,
                    party = %input.party_size,
                    total = %breakdown.total_amount,
                    "recomputed totals"
                );
                self.breakdown = breakdown;
            }
            Err(error) => {
                warn!(%error, bill = %input.bill_amount, "totals zeroed");
                self.breakdown = TipBreakdown::ZERO;
            }
        }
    }
}
