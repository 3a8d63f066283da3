//! Line-oriented interactive session.
//!
//! Each input line is one command. Mutating commands print the updated
//! summary; malformed commands print an error and change nothing.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use thiserror::Error;
use tip_core::{InvalidTipPreset, TipCalculator, TipPreset};
use tracing::{debug, info};

use crate::render;

pub const HELP: &str = "\
Commands:
  bill [amount]     set the bill (empty clears it)
  tip <preset>      choose 15, 18, 20, 22 or 25
  custom [percent]  set a custom tip (empty goes back to 18%)
  people [count]    set the party size
  +  /  -           add or remove a person
  reset             clear everything (alias: clear)
  show              print the summary
  help              print this list
  quit              leave (alias: exit)";

/// Reasons a line could not be turned into a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'tip' needs a preset: 15, 18, 20, 22 or 25")]
    MissingPreset,

    #[error(transparent)]
    Preset(#[from] InvalidTipPreset),

    #[error("'{0}' takes no argument")]
    UnexpectedArgument(String),
}

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetBill(String),
    SelectPreset(TipPreset),
    SetCustom(String),
    SetPeople(String),
    AddPerson,
    RemovePerson,
    Reset,
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(k, r)| (k, r.trim()));

        let no_argument = |command: SessionCommand| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::UnexpectedArgument(keyword.to_string()))
            }
        };

        match keyword.to_ascii_lowercase().as_str() {
            "bill" => Ok(Self::SetBill(rest.to_string())),
            "tip" if rest.is_empty() => Err(CommandError::MissingPreset),
            "tip" => Ok(Self::SelectPreset(rest.parse()?)),
            "custom" => Ok(Self::SetCustom(rest.to_string())),
            "people" => Ok(Self::SetPeople(rest.to_string())),
            "+" => no_argument(Self::AddPerson),
            "-" => no_argument(Self::RemovePerson),
            "reset" | "clear" => no_argument(Self::Reset),
            "show" => no_argument(Self::Show),
            "help" => no_argument(Self::Help),
            "quit" | "exit" => no_argument(Self::Quit),
            _ => Err(CommandError::Unknown(keyword.to_string())),
        }
    }
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    /// Applies the command to the calculator.
    pub fn apply(
        self,
        calc: &mut TipCalculator,
    ) -> Outcome {
        match self {
            Self::SetBill(raw) => calc.set_bill_amount(raw),
            Self::SelectPreset(preset) => calc.select_preset(preset),
            Self::SetCustom(raw) => calc.set_custom_percentage(raw),
            Self::SetPeople(raw) => calc.set_party_size_raw(&raw),
            Self::AddPerson => calc.increment_party_size(),
            Self::RemovePerson => calc.decrement_party_size(),
            Self::Reset => calc.reset(),
            Self::Show => return Outcome::Show,
            Self::Help => return Outcome::Help,
            Self::Quit => return Outcome::Quit,
        }
        Outcome::Changed
    }
}

/// Runs commands from `input` until it ends or a `quit` is read.
///
/// Only I/O failures end the session early.
pub fn run_session<R: BufRead, W: Write>(
    calc: &mut TipCalculator,
    input: R,
    mut output: W,
) -> io::Result<()> {
    info!("session started");
    writeln!(output, "{}", render::summary(calc))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(error) => {
                debug!(%error, line = %line, "rejected session command");
                writeln!(output, "error: {error}")?;
                continue;
            }
        };

        match command.apply(calc) {
            Outcome::Changed | Outcome::Show => {
                writeln!(output, "{}", render::summary(calc))?;
            }
            Outcome::Help => writeln!(output, "{HELP}")?,
            Outcome::Quit => break,
        }
    }

    info!("session ended");
    output.flush()
}
