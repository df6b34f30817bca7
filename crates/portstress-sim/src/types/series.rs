//! Dated numeric series.

use portstress_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Price-level history of one asset class.
///
/// Dates and values are stored as parallel vectors of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSeries {
    /// Asset-class name (e.g. "Stocks").
    pub name: String,
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl AssetSeries {
    /// Creates a series from parallel date and value vectors.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DimensionMismatch` if the vectors differ in length.
    pub fn new(name: impl Into<String>, dates: Vec<Date>, values: Vec<f64>) -> SimResult<Self> {
        let name = name.into();
        if dates.len() != values.len() {
            return Err(SimError::dimension_mismatch(format!(
                "series '{}' has {} dates but {} values",
                name,
                dates.len(),
                values.len()
            )));
        }
        Ok(Self {
            name,
            dates,
            values,
        })
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The price levels, in date order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(date, level)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// Returns a copy with every level multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            dates: self.dates.clone(),
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }

    /// Returns a copy truncated to the first `n` observations.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.len());
        Self {
            name: self.name.clone(),
            dates: self.dates[..n].to_vec(),
            values: self.values[..n].to_vec(),
        }
    }
}

/// Cumulative return multipliers of a portfolio, one per period.
///
/// A multiplier of 1.0 means no change from the implicit starting value;
/// the series has no explicit 1.0 anchor point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a series from parallel date and value vectors.
    ///
    /// # Errors
    ///
    /// Returns `SimError::DimensionMismatch` if the vectors differ in length.
    pub fn new(dates: Vec<Date>, values: Vec<f64>) -> SimResult<Self> {
        if dates.len() != values.len() {
            return Err(SimError::dimension_mismatch(format!(
                "return series has {} dates but {} values",
                dates.len(),
                values.len()
            )));
        }
        Ok(Self { dates, values })
    }

    /// Creates an empty series.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// The cumulative multipliers, in date order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(date, multiplier)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }

    /// The last `(date, multiplier)` pair.
    #[must_use]
    pub fn last(&self) -> Option<(Date, f64)> {
        Some((*self.dates.last()?, *self.values.last()?))
    }

    /// The final cumulative multiplier.
    #[must_use]
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}
