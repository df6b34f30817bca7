//! Stress scenario definitions.
//!
//! A scenario is a named set of per-asset shocks. A shock is a fractional
//! change applied multiplicatively to price levels: -0.3 scales an asset's
//! levels by 0.7, -1.0 wipes the asset out.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named set of per-asset shocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    /// Scenario name.
    pub name: String,

    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Shock fraction per asset, in `[-1, +inf)`.
    #[serde(default)]
    pub shocks: BTreeMap<String, f64>,
}

impl StressScenario {
    /// Creates a scenario with no shocks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            shocks: BTreeMap::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Sets the shock for one asset as a fraction (-0.3 = -30%).
    #[must_use]
    pub fn with_shock(mut self, asset: impl Into<String>, shock: f64) -> Self {
        self.shocks.insert(asset.into(), shock);
        self
    }

    /// Sets the shock for one asset as a percentage (-30 = -30%).
    #[must_use]
    pub fn with_shock_pct(self, asset: impl Into<String>, shock_pct: f64) -> Self {
        self.with_shock(asset, shock_pct / 100.0)
    }

    /// Shock for `asset`, if the scenario names it.
    #[must_use]
    pub fn shock(&self, asset: &str) -> Option<f64> {
        self.shocks.get(asset).copied()
    }

    /// Returns true if no asset is shocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shocks.is_empty()
    }

    /// A URL-friendly form of the name ("Market Downturn" -> "market-downturn").
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Standard stress scenarios for a stocks/bonds/real-estate portfolio.
pub mod standard {
    use super::*;
    use crate::assets::{BONDS, REAL_ESTATE, STOCKS};

    /// Broad downturn: stocks -30%, bonds -10%, real estate -20%.
    #[must_use]
    pub fn market_downturn() -> StressScenario {
        StressScenario::new("Market Downturn")
            .with_description("Broad sell-off: stocks -30%, bonds -10%, real estate -20%")
            .with_shock_pct(STOCKS, -30.0)
            .with_shock_pct(BONDS, -10.0)
            .with_shock_pct(REAL_ESTATE, -20.0)
    }

    /// Equity crash: stocks -50%, real estate -25%.
    #[must_use]
    pub fn equity_crash() -> StressScenario {
        StressScenario::new("Equity Crash")
            .with_description(
                "Equity collapse with real estate contagion: stocks -50%, real estate -25%",
            )
            .with_shock_pct(STOCKS, -50.0)
            .with_shock_pct(REAL_ESTATE, -25.0)
    }

    /// Rate shock: bonds -15%, real estate -10%.
    #[must_use]
    pub fn rate_shock() -> StressScenario {
        StressScenario::new("Rate Shock")
            .with_description("Sharp rise in rates: bonds -15%, real estate -10%")
            .with_shock_pct(BONDS, -15.0)
            .with_shock_pct(REAL_ESTATE, -10.0)
    }

    /// Real estate slump: real estate -35%.
    #[must_use]
    pub fn real_estate_slump() -> StressScenario {
        StressScenario::new("Real Estate Slump")
            .with_description("Property market correction: real estate -35%")
            .with_shock_pct(REAL_ESTATE, -35.0)
    }

    /// Total loss: every standard asset -100%.
    #[must_use]
    pub fn total_loss() -> StressScenario {
        StressScenario::new("Total Loss")
            .with_description("Every asset wiped out: -100% across the board")
            .with_shock_pct(STOCKS, -100.0)
            .with_shock_pct(BONDS, -100.0)
            .with_shock_pct(REAL_ESTATE, -100.0)
    }

    /// Returns all standard scenarios.
    #[must_use]
    pub fn all() -> Vec<StressScenario> {
        vec![
            market_downturn(),
            equity_crash(),
            rate_shock(),
            real_estate_slump(),
            total_loss(),
        ]
    }

    /// Finds a standard scenario by name or slug, ignoring case.
    #[must_use]
    pub fn find(name: &str) -> Option<StressScenario> {
        all()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name) || s.slug().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stress_scenario_builder() {
        let scenario = StressScenario::new("Test Scenario")
            .with_description("A test scenario")
            .with_shock("Stocks", -0.3)
            .with_shock_pct("Bonds", -10.0);

        assert_eq!(scenario.name, "Test Scenario");
        assert_eq!(scenario.description.as_deref(), Some("A test scenario"));
        assert_relative_eq!(scenario.shock("Stocks").unwrap(), -0.3);
        assert_relative_eq!(scenario.shock("Bonds").unwrap(), -0.1);
        assert!(scenario.shock("Gold").is_none());
        assert!(!scenario.is_empty());
    }

    #[test]
    fn test_slug() {
        assert_eq!(StressScenario::new("Market Downturn").slug(), "market-downturn");
        assert_eq!(StressScenario::new("  Rate / Shock ").slug(), "rate-shock");
    }

    #[test]
    fn test_standard_scenarios() {
        let scenarios = standard::all();
        assert_eq!(scenarios.len(), 5);

        let downturn = &scenarios[0];
        assert_eq!(downturn.name, "Market Downturn");
        assert_relative_eq!(downturn.shock("Stocks").unwrap(), -0.3);
        assert_relative_eq!(downturn.shock("Bonds").unwrap(), -0.1);
        assert_relative_eq!(downturn.shock("RealEstate").unwrap(), -0.2);

        let total = standard::total_loss();
        assert!(total.shocks.values().all(|s| (*s + 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_find_standard_scenario() {
        assert_eq!(standard::find("equity-crash").unwrap().name, "Equity Crash");
        assert_eq!(standard::find("RATE SHOCK").unwrap().name, "Rate Shock");
        assert!(standard::find("alien-invasion").is_none());
    }

    #[test]
    fn test_serde_roundtrip_keeps_shocks() {
        let scenario = standard::rate_shock();
        let json = serde_json::to_string(&scenario).unwrap();
        let parsed: StressScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scenario);
    }
}
