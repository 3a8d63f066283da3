use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use tip_cli::{
    cli::{Cli, Command, Settings},
    config::CliConfig,
    logging,
    render,
    session,
};
use tip_core::TipCalculator;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let settings = Settings::resolve(&cli, config);

    logging::init_logging(settings.log_level.as_deref(), settings.log_file.as_deref())?;
    debug!(?settings, "settings resolved");

    match cli.command {
        Some(Command::Calc(args)) => {
            let calc = args.to_calculator();
            if settings.json {
                let json = serde_json::to_string_pretty(&calc.snapshot())
                    .context("Failed to serialize result")?;
                println!("{json}");
            } else {
                println!("{}", render::summary(&calc));
            }
        }
        Some(Command::Session) | None => {
            let mut calc = TipCalculator::new();
            let stdin = io::stdin();
            session::run_session(&mut calc, stdin.lock(), io::stdout().lock())
                .context("Session I/O failed")?;
        }
    }

    Ok(())
}
