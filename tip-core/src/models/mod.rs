mod calculator_snapshot;
mod party_size;
mod tip_breakdown;
mod tip_preset;

pub use calculator_snapshot::CalculatorSnapshot;
pub use party_size::PartySize;
pub use tip_breakdown::TipBreakdown;
pub use tip_preset::{InvalidTipPreset, TipPreset};
