//! Error types for simulation and stress testing.
//!
//! This module defines the error types used throughout the sim crate.

use portstress_core::CoreError;
use thiserror::Error;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while generating, stressing, simulating, or
/// summarizing portfolio data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Portfolio weights do not sum to 100%.
    #[error("Portfolio weights must sum to 100%, got {sum}%")]
    InvalidWeights {
        /// The actual sum, in percent.
        sum: f64,
    },

    /// A weighted asset is absent from the market dataset.
    #[error("Unknown asset '{asset}': not present in market data")]
    UnknownAsset {
        /// The asset name.
        asset: String,
    },

    /// Asset series within one dataset disagree on length or dates.
    #[error("Dimension mismatch: {reason}")]
    DimensionMismatch {
        /// Which series disagree and how.
        reason: String,
    },

    /// A return series has no points.
    #[error("{series} return series is empty")]
    EmptySeries {
        /// Which series was empty.
        series: String,
    },

    /// Division by zero.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },

    /// Invalid generator or configuration parameter.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// Date or calendar failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SimError {
    /// Create an unknown asset error.
    #[must_use]
    pub fn unknown_asset(asset: impl Into<String>) -> Self {
        Self::UnknownAsset {
            asset: asset.into(),
        }
    }

    /// Create a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(reason: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            reason: reason.into(),
        }
    }

    /// Create an empty series error.
    #[must_use]
    pub fn empty_series(series: impl Into<String>) -> Self {
        Self::EmptySeries {
            series: series.into(),
        }
    }

    /// Create a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
