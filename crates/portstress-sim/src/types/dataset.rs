//! Market dataset: a set of asset series sharing one date index.

use portstress_core::Date;
use serde::{Deserialize, Serialize};

use super::AssetSeries;
use crate::error::{SimError, SimResult};

/// Price-level histories for a set of asset classes.
///
/// Series keep insertion order. A dataset built by the generator is
/// consistent (every series shares one date index); hand-built datasets
/// may not be, and [`MarketDataset::check_consistent`] reports that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketDataset {
    series: Vec<AssetSeries>,
}

impl MarketDataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset from series; later duplicates replace earlier ones.
    #[must_use]
    pub fn from_series(series: impl IntoIterator<Item = AssetSeries>) -> Self {
        let mut dataset = Self::new();
        for s in series {
            dataset.insert(s);
        }
        dataset
    }

    /// Adds a series, replacing any series with the same name in place.
    pub fn insert(&mut self, series: AssetSeries) {
        match self.series.iter_mut().find(|s| s.name == series.name) {
            Some(existing) => *existing = series,
            None => self.series.push(series),
        }
    }

    /// Adds a series (builder form).
    #[must_use]
    pub fn with_series(mut self, series: AssetSeries) -> Self {
        self.insert(series);
        self
    }

    /// Looks up a series by asset name.
    #[must_use]
    pub fn get(&self, asset: &str) -> Option<&AssetSeries> {
        self.series.iter().find(|s| s.name == asset)
    }

    /// Returns true if the dataset has a series for `asset`.
    #[must_use]
    pub fn contains(&self, asset: &str) -> bool {
        self.get(asset).is_some()
    }

    /// Asset names in insertion order.
    pub fn asset_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    /// All series in insertion order.
    #[must_use]
    pub fn series(&self) -> &[AssetSeries] {
        &self.series
    }

    /// Number of asset series.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.series.len()
    }

    /// Returns true if the dataset has no series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Observation count of the first series (0 for an empty dataset).
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.series.first().map_or(0, AssetSeries::len)
    }

    /// Date index of the first series.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        self.series.first().map_or(&[], AssetSeries::dates)
    }

    /// Verifies that every series has the same length and date index.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DimensionMismatch` naming the first offending series.
    pub fn check_consistent(&self) -> SimResult<()> {
        let Some(reference) = self.series.first() else {
            return Ok(());
        };

        for s in &self.series {
            if s.dates().len() != s.values().len() {
                return Err(SimError::dimension_mismatch(format!(
                    "series '{}' has {} dates but {} values",
                    s.name,
                    s.dates().len(),
                    s.values().len()
                )));
            }
            if s.len() != reference.len() {
                return Err(SimError::dimension_mismatch(format!(
                    "series '{}' has {} observations, '{}' has {}",
                    s.name,
                    s.len(),
                    reference.name,
                    reference.len()
                )));
            }
            if s.dates() != reference.dates() {
                return Err(SimError::dimension_mismatch(format!(
                    "series '{}' is not indexed by the same dates as '{}'",
                    s.name, reference.name
                )));
            }
        }
        Ok(())
    }

    /// Returns a dataset holding only the first `n` observations of each series.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        Self {
            series: self.series.iter().map(|s| s.head(n)).collect(),
        }
    }

    /// Returns a new dataset with `f` applied to every series.
    #[must_use]
    pub fn map_series<F>(&self, f: F) -> Self
    where
        F: FnMut(&AssetSeries) -> AssetSeries,
    {
        Self {
            series: self.series.iter().map(f).collect(),
        }
    }
}
