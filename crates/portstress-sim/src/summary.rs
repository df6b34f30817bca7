//! Baseline vs stressed performance summary.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::types::ReturnSeries;

/// Final values of the baseline and stressed runs and the loss between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Final cumulative multiplier of the baseline run.
    pub baseline_final_value: f64,

    /// Final cumulative multiplier of the stressed run.
    pub stressed_final_value: f64,

    /// `(baseline - stressed) / baseline`; positive means the stress lost value.
    pub relative_loss: f64,
}

impl PerformanceSummary {
    /// Relative loss as a percentage.
    #[must_use]
    pub fn relative_loss_pct(&self) -> f64 {
        self.relative_loss * 100.0
    }

    /// Returns true if the stressed run ended below the baseline.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.relative_loss > 0.0
    }

    /// Returns true if the stressed run ended above the baseline.
    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.relative_loss < 0.0
    }
}

/// Compares the final values of a baseline and a stressed return series.
///
/// ## Formula
///
/// ```text
/// relative_loss = (baseline_final - stressed_final) / baseline_final
/// ```
///
/// # Errors
///
/// - `SimError::EmptySeries` if either series is empty (baseline checked first)
/// - `SimError::DivisionByZero` if the baseline ends at exactly 0
pub fn summarize(
    baseline: &ReturnSeries,
    stressed: &ReturnSeries,
) -> SimResult<PerformanceSummary> {
    let baseline_final_value = baseline
        .final_value()
        .ok_or_else(|| SimError::empty_series("Baseline"))?;
    let stressed_final_value = stressed
        .final_value()
        .ok_or_else(|| SimError::empty_series("Stressed"))?;

    if baseline_final_value == 0.0 {
        return Err(SimError::division_by_zero("relative loss"));
    }

    Ok(PerformanceSummary {
        baseline_final_value,
        stressed_final_value,
        relative_loss: (baseline_final_value - stressed_final_value) / baseline_final_value,
    })
}
