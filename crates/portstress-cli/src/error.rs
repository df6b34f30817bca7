//! CLI error types.

use portstress_sim::SimError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Unknown standard scenario.
    #[error("Unknown scenario: {0}. Run `portstress scenarios` to list them.")]
    UnknownScenario(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Simulation error.
    #[error(transparent)]
    Simulation(#[from] SimError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
