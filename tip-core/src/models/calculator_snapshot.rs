use serde::{Deserialize, Serialize};

use crate::{PartySize, TipBreakdown, TipPreset};

/// Point-in-time copy of a calculator's inputs and outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    // User-provided values (raw, as typed)
    pub bill_amount: String,
    pub selected_preset: TipPreset,
    pub custom_percentage: String,
    pub party_size: PartySize,

    // Derived values
    pub breakdown: TipBreakdown,
}
