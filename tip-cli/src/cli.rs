//! Command-line definition and the settings resolved from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tip_core::{TipCalculator, TipPreset};

use crate::config::CliConfig;

/// Tip calculator: work out the tip, the total, and each person's share.
#[derive(Debug, Parser)]
#[command(name = "tipcalc", version, about, long_about = None)]
pub struct Cli {
    /// TOML file with logging and output settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `warn,tip_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log output to this file as well as stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate once from flags and print the summary.
    Calc(CalcArgs),

    /// Read commands from stdin and update the summary after each one.
    Session,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CalcArgs {
    /// Bill amount before tip.
    #[arg(long, allow_hyphen_values = true)]
    pub bill: Option<String>,

    /// Preset tip percentage: 15, 18, 20, 22 or 25.
    #[arg(long)]
    pub tip: Option<TipPreset>,

    /// Custom tip percentage; overrides --tip.
    #[arg(long, allow_hyphen_values = true)]
    pub custom: Option<String>,

    /// Number of people splitting the bill.
    #[arg(long, allow_hyphen_values = true)]
    pub people: Option<String>,

    /// Print inputs and results as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    /// Feeds the flags into a fresh calculator.
    ///
    /// The preset is applied before the custom percentage so that a custom
    /// value is not cleared by the preset selection.
    pub fn to_calculator(&self) -> TipCalculator {
        let mut calc = TipCalculator::new();

        if let Some(preset) = self.tip {
            calc.select_preset(preset);
        }
        if let Some(custom) = &self.custom {
            calc.set_custom_percentage(custom.as_str());
        }
        if let Some(people) = &self.people {
            calc.set_party_size_raw(people);
        }
        if let Some(bill) = &self.bill {
            calc.set_bill_amount(bill.as_str());
        }

        calc
    }
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub json: bool,
}

impl Settings {
    /// Flags take precedence over the config file.
    pub fn resolve(
        cli: &Cli,
        config: CliConfig,
    ) -> Self {
        let json_flag = matches!(&cli.command, Some(Command::Calc(args)) if args.json);

        Self {
            log_level: cli.log_level.clone().or(config.log_level),
            log_file: cli.log_file.clone().or(config.log_file),
            json: json_flag || config.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tipcalc").chain(args.iter().copied())).unwrap()
    }

    fn calc_args(cli: &Cli) -> &CalcArgs {
        match &cli.command {
            Some(Command::Calc(args)) => args,
            other => panic!("expected calc command, got {other:?}"),
        }
    }

    #[test]
    fn calc_flags_are_parsed() {
        let cli = parse(&["calc", "--bill", "100", "--tip", "20", "--people", "4"]);
        let args = calc_args(&cli);

        assert_eq!(args.bill.as_deref(), Some("100"));
        assert_eq!(args.tip, Some(TipPreset::Twenty));
        assert_eq!(args.people.as_deref(), Some("4"));
        assert!(!args.json);
    }

    #[test]
    fn tip_flag_rejects_non_presets() {
        let result = Cli::try_parse_from(["tipcalc", "calc", "--tip", "19"]);

        assert!(result.is_err());
    }

    #[test]
    fn negative_values_are_accepted_as_raw_input() {
        let cli = parse(&["calc", "--bill", "-5", "--people", "-2"]);
        let args = calc_args(&cli);

        assert_eq!(args.bill.as_deref(), Some("-5"));
        assert_eq!(args.people.as_deref(), Some("-2"));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = parse(&[]);

        assert!(cli.command.is_none());
    }

    #[test]
    fn to_calculator_custom_survives_preset() {
        let cli = parse(&["calc", "--bill", "50", "--tip", "25", "--custom", "10"]);

        let calc = calc_args(&cli).to_calculator();

        assert_eq!(calc.tip_amount(), dec!(5));
        assert_eq!(calc.selected_preset(), TipPreset::TwentyFive);
    }

    #[test]
    fn to_calculator_without_flags_is_default() {
        let calc = CalcArgs::default().to_calculator();

        assert_eq!(calc, TipCalculator::new());
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&["--log-level", "debug", "calc", "--json"]);
        let config = CliConfig {
            log_level: Some("warn".to_string()),
            log_file: Some(PathBuf::from("from-config.log")),
            json: false,
        };

        let settings = Settings::resolve(&cli, config);

        assert_eq!(
            settings,
            Settings {
                log_level: Some("debug".to_string()),
                log_file: Some(PathBuf::from("from-config.log")),
                json: true,
            }
        );
    }

    #[test]
    fn config_fills_missing_flags() {
        let cli = parse(&["session"]);
        let config = CliConfig {
            log_level: Some("info".to_string()),
            log_file: None,
            json: true,
        };

        let settings = Settings::resolve(&cli, config);

        assert_eq!(settings.log_level.as_deref(), Some("info"));
        assert!(settings.json);
    }
}
