//! Synthetic market data generation.
//!
//! Each asset's price level is a random walk: the cumulative sum of
//! independent normal draws with asset-specific mean and standard
//! deviation, indexed by consecutive business days.

use portstress_core::calendars::{Calendar, WeekendCalendar};
use chrono::NaiveDate;
use portstress_core::Date;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::assets::{BONDS, REAL_ESTATE, STOCKS};
use crate::error::{SimError, SimResult};
use crate::types::{AssetSeries, MarketDataset};

/// Trading days per year.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Years of history generated by default.
pub const DEFAULT_HISTORY_YEARS: usize = 20;

/// Default observation count (20 years of business days).
pub const DEFAULT_PERIOD_COUNT: usize = TRADING_DAYS_PER_YEAR * DEFAULT_HISTORY_YEARS;

/// Distribution of daily increments for one asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetParams {
    /// Asset-class name.
    pub name: String,
    /// Mean daily increment.
    pub mean: f64,
    /// Standard deviation of the daily increment.
    pub std_dev: f64,
}

impl AssetParams {
    /// Creates asset parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            std_dev,
        }
    }

    /// Checks that the mean is finite and the standard deviation is
    /// finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidParameter` naming the offending field.
    pub fn validate(&self) -> SimResult<()> {
        if !self.mean.is_finite() {
            return Err(SimError::invalid_parameter(
                format!("{}.mean", self.name),
                format!("{} is not finite", self.mean),
            ));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(SimError::invalid_parameter(
                format!("{}.std_dev", self.name),
                format!("{} must be finite and non-negative", self.std_dev),
            ));
        }
        Ok(())
    }
}

/// Default parameters: Stocks, Bonds and RealEstate.
#[must_use]
pub fn default_asset_params() -> Vec<AssetParams> {
    vec![
        AssetParams::new(STOCKS, 0.0003, 0.02),
        AssetParams::new(BONDS, 0.0001, 0.01),
        AssetParams::new(REAL_ESTATE, 0.0002, 0.015),
    ]
}

/// First calendar date of the default history.
const DEFAULT_START: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// Default start of the history, 2000-01-01.
#[must_use]
pub fn default_start_date() -> Date {
    Date::from(DEFAULT_START)
}

/// Checks a period count and asset list before generation.
///
/// # Errors
///
/// Returns `SimError::InvalidParameter` if `period_count` is zero, an
/// asset name is repeated, or an asset's distribution is invalid.
pub fn validate_generator_inputs(
    period_count: usize,
    asset_params: &[AssetParams],
) -> SimResult<()> {
    if period_count == 0 {
        return Err(SimError::invalid_parameter("period_count", "must be positive"));
    }

    let mut seen = HashSet::new();
    for params in asset_params {
        params.validate()?;
        if !seen.insert(params.name.as_str()) {
            return Err(SimError::invalid_parameter(
                "assets",
                format!("duplicate asset '{}'", params.name),
            ));
        }
    }
    Ok(())
}

/// Generates a synthetic market dataset.
///
/// The date index holds `period_count` business days starting on the first
/// business day on or after `start_date`. Draws are taken asset by asset in
/// `asset_params` order from a single generator, so a given `seed` always
/// yields the same dataset. Without a seed the generator is seeded from OS
/// entropy.
///
/// # Errors
///
/// - `SimError::InvalidParameter` if `period_count` is zero, an asset name
///   is repeated, or an asset's distribution is invalid
/// - `SimError::Core` if the date index runs past the last representable date
pub fn generate_market_data(
    start_date: Date,
    period_count: usize,
    asset_params: &[AssetParams],
    seed: Option<u64>,
) -> SimResult<MarketDataset> {
    validate_generator_inputs(period_count, asset_params)?;

    debug!(
        start = %start_date,
        period_count,
        assets = asset_params.len(),
        seeded = seed.is_some(),
        "generating market data"
    );

    let dates = WeekendCalendar.business_day_range(start_date, period_count)?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut dataset = MarketDataset::new();
    for params in asset_params {
        let normal = Normal::new(params.mean, params.std_dev).map_err(|e| {
            SimError::invalid_parameter(format!("{}.std_dev", params.name), e.to_string())
        })?;

        let values: Vec<f64> = normal
            .sample_iter(&mut rng)
            .take(period_count)
            .scan(0.0_f64, |level, step| {
                *level += step;
                Some(*level)
            })
            .collect();

        dataset.insert(AssetSeries::new(
            params.name.clone(),
            dates.clone(),
            values,
        )?);
    }

    Ok(dataset)
}
