//! Text rendering of calculator state for the terminal.

use tip_core::{TipCalculator, TipPreset};

/// The preset row, in fixed order, with the active preset bracketed.
///
/// No preset is bracketed while a custom percentage is entered.
pub fn preset_bar(calc: &TipCalculator) -> String {
    let presets: Vec<String> = TipPreset::ALL
        .into_iter()
        .map(|preset| {
            if calc.is_preset_highlighted(preset) {
                format!("[{preset}]")
            } else {
                format!(" {preset} ")
            }
        })
        .collect();

    let mut line = format!("Tip:          {}", presets.join(" "));
    if calc.is_custom_active() {
        line.push_str(&format!("  custom {}%", calc.custom_percentage()));
    }
    line
}

/// Full summary: preset row, party size, then the three amounts.
pub fn summary(calc: &TipCalculator) -> String {
    format!(
        "{}\nPeople:       {}\n{}",
        preset_bar(calc),
        calc.party_size(),
        calc.breakdown()
    )
}
