//! CLI error types.

use pricer_analytic::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `bscalc` commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Input ended while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("Rejected market parameters: {0}")]
    Validation(#[from] AnalyticalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
