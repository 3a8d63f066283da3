//! Optional TOML settings for the command-line front end.
//!
//! ```toml
//! log_level = "info,tip_core=debug"
//! log_file = "/tmp/tipcalc.log"
//! json = true
//! ```
//!
//! Settings only affect logging and output format. Calculator defaults are
//! fixed and cannot be configured.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Values read from the config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log filter directive (`"debug"`, `"warn,tip_core=trace"`, ...).
    pub log_level: Option<String>,

    /// File that receives a copy of the log output.
    pub log_file: Option<PathBuf>,

    /// Print `calc` results as JSON by default.
    pub json: bool,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
