//! Configuration for a stress test run.
//!
//! The configuration mirrors what an interactive front end collects: whole
//! percentage allocations and percentage shocks. It is validated here, at the
//! boundary, before anything reaches the simulator.

use portstress_core::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{MarketDataset, PortfolioWeights};
use crate::assets::{BONDS, REAL_ESTATE, STOCKS};
use crate::error::{SimError, SimResult};
use crate::market::{
    default_asset_params, default_start_date, generate_market_data, validate_generator_inputs,
    AssetParams, DEFAULT_PERIOD_COUNT,
};
use crate::stress::StressScenario;

/// Parameters of the synthetic market history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// First calendar date of the history (rolled forward to a business day).
    pub start_date: Date,

    /// Number of business-day observations.
    pub period_count: usize,

    /// Per-asset increment distributions, in generation order.
    pub assets: Vec<AssetParams>,

    /// Seed for reproducible data. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            period_count: DEFAULT_PERIOD_COUNT,
            assets: default_asset_params(),
            seed: None,
        }
    }
}

impl MarketDataConfig {
    /// Sets the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the start date.
    #[must_use]
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the number of observations.
    #[must_use]
    pub fn with_period_count(mut self, period_count: usize) -> Self {
        self.period_count = period_count;
        self
    }

    /// Replaces the asset list.
    #[must_use]
    pub fn with_assets(mut self, assets: Vec<AssetParams>) -> Self {
        self.assets = assets;
        self
    }

    /// Returns true if `asset` is generated by this configuration.
    #[must_use]
    pub fn has_asset(&self, asset: &str) -> bool {
        self.assets.iter().any(|a| a.name == asset)
    }

    /// Validates the generator parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidParameter` if `period_count` is zero, an
    /// asset name is repeated, or an asset's distribution is invalid.
    pub fn validate(&self) -> SimResult<()> {
        validate_generator_inputs(self.period_count, &self.assets)
    }

    /// Generates the market dataset described by this configuration.
    ///
    /// # Errors
    ///
    /// Same as [`generate_market_data`]: invalid parameters, or a date index
    /// that runs past the last representable date.
    pub fn generate(&self) -> SimResult<MarketDataset> {
        generate_market_data(self.start_date, self.period_count, &self.assets, self.seed)
    }
}

/// Complete configuration of a baseline vs stressed comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressTestConfig {
    /// Display name of the stress scenario.
    pub scenario_name: String,

    /// Market history parameters.
    pub market: MarketDataConfig,

    /// Whole-percent allocation per asset; must total 100.
    pub allocation_pct: BTreeMap<String, u32>,

    /// Percent shock per asset (-30 = -30%); must be finite and >= -100.
    pub shocks_pct: BTreeMap<String, f64>,
}

impl Default for StressTestConfig {
    fn default() -> Self {
        Self {
            scenario_name: "Custom Scenario".to_string(),
            market: MarketDataConfig::default(),
            allocation_pct: [(STOCKS, 60), (BONDS, 30), (REAL_ESTATE, 10)]
                .into_iter()
                .map(|(a, p)| (a.to_string(), p))
                .collect(),
            shocks_pct: [(STOCKS, -30.0), (BONDS, -10.0), (REAL_ESTATE, -20.0)]
                .into_iter()
                .map(|(a, s)| (a.to_string(), s))
                .collect(),
        }
    }
}

impl StressTestConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the market data parameters.
    #[must_use]
    pub fn with_market(mut self, market: MarketDataConfig) -> Self {
        self.market = market;
        self
    }

    /// Sets the market data seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.market.seed = Some(seed);
        self
    }

    /// Sets the allocation of one asset, in whole percent.
    #[must_use]
    pub fn with_allocation(mut self, asset: impl Into<String>, pct: u32) -> Self {
        self.allocation_pct.insert(asset.into(), pct);
        self
    }

    /// Sets the shock of one asset, in percent.
    #[must_use]
    pub fn with_shock_pct(mut self, asset: impl Into<String>, pct: f64) -> Self {
        self.shocks_pct.insert(asset.into(), pct);
        self
    }

    /// Replaces the scenario name and every shock with those of `scenario`.
    #[must_use]
    pub fn with_scenario(mut self, scenario: &StressScenario) -> Self {
        self.scenario_name = scenario.name.clone();
        self.shocks_pct = scenario
            .shocks
            .iter()
            .map(|(a, s)| (a.clone(), s * 100.0))
            .collect();
        self
    }

    /// Total allocation in percent.
    #[must_use]
    pub fn allocation_total(&self) -> u64 {
        self.allocation_pct.values().map(|pct| u64::from(*pct)).sum()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `SimError::InvalidParameter` for bad market parameters, a single
    ///   allocation above 100%, or a shock that is not finite or is below -100%
    /// - `SimError::InvalidWeights` if the allocation does not total 100%
    /// - `SimError::UnknownAsset` if an allocated asset is not generated
    pub fn validate(&self) -> SimResult<()> {
        self.market.validate()?;

        if let Some((asset, pct)) = self.allocation_pct.iter().find(|(_, pct)| **pct > 100) {
            return Err(SimError::invalid_parameter(
                format!("allocation[{asset}]"),
                format!("{pct}% exceeds 100%"),
            ));
        }

        let total = self.allocation_total();
        if total != 100 {
            return Err(SimError::InvalidWeights { sum: total as f64 });
        }

        if let Some(asset) = self
            .allocation_pct
            .keys()
            .find(|a| !self.market.has_asset(a))
        {
            return Err(SimError::unknown_asset(asset.as_str()));
        }

        for (asset, shock) in &self.shocks_pct {
            if !shock.is_finite() || *shock < -100.0 {
                return Err(SimError::invalid_parameter(
                    format!("shock[{asset}]"),
                    format!("{shock}% must be finite and at least -100%"),
                ));
            }
        }

        Ok(())
    }

    /// Portfolio weights as fractions.
    #[must_use]
    pub fn weights(&self) -> PortfolioWeights {
        PortfolioWeights::from_percentages(&self.allocation_pct)
    }

    /// The stress scenario described by the shock percentages.
    #[must_use]
    pub fn scenario(&self) -> StressScenario {
        self.shocks_pct
            .iter()
            .fold(StressScenario::new(self.scenario_name.clone()), |s, (a, pct)| {
                s.with_shock_pct(a.clone(), *pct)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stress::standard;
    use approx::assert_relative_eq;

    #[test]
    fn test_default() {
        let config = StressTestConfig::default();
        assert_eq!(config.market.period_count, 5040);
        assert_eq!(config.market.assets.len(), 3);
        assert!(config.market.seed.is_none());
        assert_eq!(config.allocation_total(), 100);
        assert_eq!(config.allocation_pct["Stocks"], 60);
        assert_relative_eq!(config.shocks_pct["RealEstate"], -20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_weights_and_scenario() {
        let config = StressTestConfig::default();

        let weights = config.weights();
        assert_relative_eq!(weights.get("Stocks").unwrap(), 0.6);
        assert_relative_eq!(weights.get("RealEstate").unwrap(), 0.1);

        let scenario = config.scenario();
        assert_eq!(scenario.name, "Custom Scenario");
        assert_relative_eq!(scenario.shock("Stocks").unwrap(), -0.3);
        assert_relative_eq!(scenario.shock("Bonds").unwrap(), -0.1);
    }

    #[test]
    fn test_allocation_must_total_100() {
        let config = StressTestConfig::new().with_allocation("Stocks", 70);
        assert_eq!(
            config.validate().unwrap_err(),
            SimError::InvalidWeights { sum: 110.0 }
        );
    }

    #[test]
    fn test_single_allocation_above_100_is_rejected() {
        // Would wrap to 100 if summed as u32
        let config = StressTestConfig::new()
            .with_allocation("Stocks", u32::MAX)
            .with_allocation("Bonds", 91)
            .with_allocation("RealEstate", 10);

        match config.validate() {
            Err(SimError::InvalidParameter { name, .. }) => assert_eq!(name, "allocation[Stocks]"),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
        assert_eq!(config.allocation_total(), u64::from(u32::MAX) + 101);

        let config = StressTestConfig::new()
            .with_allocation("Stocks", 101)
            .with_allocation("Bonds", 0)
            .with_allocation("RealEstate", 0);
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_allocation_asset_must_exist() {
        let config = StressTestConfig::new()
            .with_allocation("Stocks", 50)
            .with_allocation("Gold", 10);
        assert_eq!(config.validate().unwrap_err(), SimError::unknown_asset("Gold"));
    }

    #[test]
    fn test_shock_bounds() {
        let config = StressTestConfig::new().with_shock_pct("Stocks", -100.0);
        assert!(config.validate().is_ok());

        let config = StressTestConfig::new().with_shock_pct("Stocks", 250.0);
        assert!(config.validate().is_ok());

        let config = StressTestConfig::new().with_shock_pct("Stocks", -100.5);
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidParameter { .. })
        ));

        let config = StressTestConfig::new().with_shock_pct("Bonds", f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_market_parameters() {
        let market = MarketDataConfig::default().with_period_count(0);
        let config = StressTestConfig::new().with_market(market);
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_with_standard_scenario() {
        let config = StressTestConfig::new().with_scenario(&standard::equity_crash());
        assert_eq!(config.scenario_name, "Equity Crash");
        assert_eq!(config.shocks_pct.len(), 2);
        assert_relative_eq!(config.shocks_pct["Stocks"], -50.0);
        assert!(!config.shocks_pct.contains_key("Bonds"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = r#"
            scenario_name = "Bond rout"

            [market]
            period_count = 252
            seed = 11

            [allocation_pct]
            Stocks = 40
            Bonds = 60

            [shocks_pct]
            Bonds = -25.0
        "#;
        let config: StressTestConfig = toml::from_str(text).unwrap();

        assert_eq!(config.scenario_name, "Bond rout");
        assert_eq!(config.market.period_count, 252);
        assert_eq!(config.market.seed, Some(11));
        assert_eq!(config.market.assets.len(), 3);
        assert_eq!(config.market.start_date, default_start_date());
        assert_eq!(config.allocation_pct.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let config = StressTestConfig::new().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: StressTestConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
