//! Applying a stress scenario to market data.

use tracing::debug;

use super::scenarios::StressScenario;
use crate::types::MarketDataset;

/// Returns a stressed copy of `dataset`.
///
/// Every price level of an asset named in both the dataset and the scenario
/// is multiplied by `(1 + shock)`. Assets the scenario does not mention are
/// copied unchanged. Scenario assets missing from the dataset are ignored.
/// Shocks are not clamped. The input dataset is never modified.
#[must_use]
pub fn apply_stress(dataset: &MarketDataset, scenario: &StressScenario) -> MarketDataset {
    for asset in scenario.shocks.keys().filter(|a| !dataset.contains(a)) {
        debug!(
            scenario = %scenario.name,
            asset = %asset,
            "ignoring shock for asset not in dataset"
        );
    }

    dataset.map_series(|series| match scenario.shock(&series.name) {
        Some(shock) => series.scaled(1.0 + shock),
        None => series.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetSeries;
    use approx::assert_relative_eq;
    use portstress_core::Date;

    fn dataset() -> MarketDataset {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let dates: Vec<Date> = (0..3).map(|i| start.add_days(i).unwrap()).collect();
        MarketDataset::from_series([
            AssetSeries::new("Stocks", dates.clone(), vec![10.0, 11.0, 12.0]).unwrap(),
            AssetSeries::new("Bonds", dates, vec![5.0, 5.5, 6.0]).unwrap(),
        ])
    }

    #[test]
    fn test_shocked_asset_is_scaled() {
        let original = dataset();
        let scenario = StressScenario::new("Test").with_shock("Stocks", -0.3);
        let stressed = apply_stress(&original, &scenario);

        let stocks = stressed.get("Stocks").unwrap().values();
        assert_relative_eq!(stocks[0], 7.0, epsilon = 1e-12);
        assert_relative_eq!(stocks[1], 7.7, epsilon = 1e-12);
        assert_relative_eq!(stocks[2], 8.4, epsilon = 1e-12);

        // Unshocked asset copied as is
        assert_eq!(stressed.get("Bonds"), original.get("Bonds"));
        // Input untouched
        assert_eq!(original, dataset());
    }

    #[test]
    fn test_zero_shocks_are_identity() {
        let original = dataset();
        let scenario = StressScenario::new("Flat")
            .with_shock("Stocks", 0.0)
            .with_shock("Bonds", 0.0);
        assert_eq!(apply_stress(&original, &scenario), original);
    }

    #[test]
    fn test_unknown_scenario_assets_ignored() {
        let original = dataset();
        let scenario = StressScenario::new("Gold crash").with_shock("Gold", -0.5);
        let stressed = apply_stress(&original, &scenario);
        assert_eq!(stressed, original);
        assert!(!stressed.contains("Gold"));
    }

    #[test]
    fn test_total_loss_zeroes_levels() {
        let scenario = StressScenario::new("Wipeout")
            .with_shock("Stocks", -1.0)
            .with_shock("Bonds", -1.0);
        let stressed = apply_stress(&dataset(), &scenario);
        assert!(stressed
            .series()
            .iter()
            .all(|s| s.values().iter().all(|v| *v == 0.0)));
    }

    #[test]
    fn test_shocks_below_minus_one_are_not_clamped() {
        let scenario = StressScenario::new("Overshoot").with_shock("Stocks", -1.5);
        let stressed = apply_stress(&dataset(), &scenario);
        assert_relative_eq!(stressed.get("Stocks").unwrap().values()[0], -5.0);
    }
}
