//! Portfolio allocation weights.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{SimError, SimResult};

/// Default tolerance when checking that weights sum to 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Fractional allocation per asset class.
///
/// Weights are expected to lie in `[0, 1]` and sum to 1.0. The simulator
/// uses them as given; call [`PortfolioWeights::validate`] at the boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioWeights(BTreeMap<String, f64>);

impl PortfolioWeights {
    /// Creates an empty allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates weights from `(asset, fraction)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self(pairs.iter().map(|(a, w)| ((*a).to_string(), *w)).collect())
    }

    /// Creates weights from whole-number percentages (60 -> 0.6).
    #[must_use]
    pub fn from_percentages(percentages: &BTreeMap<String, u32>) -> Self {
        Self(
            percentages
                .iter()
                .map(|(a, pct)| (a.clone(), f64::from(*pct) / 100.0))
                .collect(),
        )
    }

    /// Sets the weight of one asset.
    #[must_use]
    pub fn with_weight(mut self, asset: impl Into<String>, weight: f64) -> Self {
        self.0.insert(asset.into(), weight);
        self
    }

    /// Weight of `asset`, if allocated.
    #[must_use]
    pub fn get(&self, asset: &str) -> Option<f64> {
        self.0.get(asset).copied()
    }

    /// Iterates over `(asset, weight)` pairs in asset-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(a, w)| (a.as_str(), *w))
    }

    /// Number of allocated assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Checks every weight is in `[0, 1]` and the total is 1.0 within `epsilon`.
    ///
    /// # Errors
    ///
    /// - `SimError::InvalidParameter` for a weight outside `[0, 1]` or NaN
    /// - `SimError::InvalidWeights` if the total is off by more than `epsilon`
    pub fn validate(&self, epsilon: f64) -> SimResult<()> {
        if let Some((asset, weight)) = self.iter().find(|(_, w)| !(0.0..=1.0).contains(w)) {
            return Err(SimError::invalid_parameter(
                format!("weight[{asset}]"),
                format!("{weight} is outside [0, 1]"),
            ));
        }

        let total = self.total();
        if (total - 1.0).abs() > epsilon {
            return Err(SimError::InvalidWeights { sum: total * 100.0 });
        }
        Ok(())
    }
}

impl FromIterator<(String, f64)> for PortfolioWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
