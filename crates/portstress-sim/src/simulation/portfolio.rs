//! Portfolio return simulation.
//!
//! ## Model
//!
//! ```text
//! r[t, a] = p[t, a] / p[t-1, a] - 1            t = 1..N-1
//! w[t]    = sum_a weight[a] * r[t, a]
//! cum[t]  = cum[t-1] * (1 + w[t]),  cum[0] = 1 + w[0]
//! ```
//!
//! The first observation has no predecessor and produces no return, so the
//! cumulative series has one point fewer than the price series.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::types::{AssetSeries, MarketDataset, PortfolioWeights, ReturnSeries};

/// Simple return between two consecutive price levels.
///
/// Two consecutive zero levels describe a position that has been wiped out
/// and count as a -100% period. Any other zero denominator follows IEEE-754
/// division.
#[must_use]
pub fn simple_return(previous: f64, current: f64) -> f64 {
    if previous == 0.0 && current == 0.0 {
        -1.0
    } else {
        current / previous - 1.0
    }
}

/// Simple period returns of a price-level series (`levels.len() - 1` values).
#[must_use]
pub fn period_returns(levels: &[f64]) -> Vec<f64> {
    levels
        .windows(2)
        .map(|w| simple_return(w[0], w[1]))
        .collect()
}

/// Weighted portfolio return for each period.
///
/// The result is aligned to `dataset.dates()[1..]`. Only weighted assets
/// contribute; dataset assets without a weight are left out.
///
/// # Errors
///
/// - `SimError::DimensionMismatch` if the dataset's series disagree on
///   length or dates
/// - `SimError::UnknownAsset` if a weighted asset is not in the dataset
pub fn portfolio_returns(
    weights: &PortfolioWeights,
    dataset: &MarketDataset,
) -> SimResult<Vec<f64>> {
    dataset.check_consistent()?;

    let columns: Vec<(&AssetSeries, f64)> = weights
        .iter()
        .map(|(asset, weight)| {
            dataset
                .get(asset)
                .map(|series| (series, weight))
                .ok_or_else(|| SimError::unknown_asset(asset))
        })
        .collect::<SimResult<_>>()?;

    let periods = dataset.observation_count().saturating_sub(1);
    if columns.is_empty() || periods == 0 {
        return Ok(vec![0.0; periods]);
    }

    let mut returns = Array2::<f64>::zeros((periods, columns.len()));
    let mut weight_vector = Array1::<f64>::zeros(columns.len());
    for (j, (series, weight)) in columns.iter().enumerate() {
        for (i, r) in period_returns(series.values()).into_iter().enumerate() {
            returns[[i, j]] = r;
        }
        weight_vector[j] = *weight;
    }

    Ok(returns.dot(&weight_vector).to_vec())
}

/// Simulates the cumulative return of a weighted portfolio.
///
/// Weights are used as given; they are not renormalized.
///
/// # Errors
///
/// Same as [`portfolio_returns`].
pub fn simulate(weights: &PortfolioWeights, dataset: &MarketDataset) -> SimResult<ReturnSeries> {
    let weighted = portfolio_returns(weights, dataset)?;

    let dates = dataset.dates().iter().skip(1).copied().collect();
    let cumulative = weighted
        .iter()
        .scan(1.0_f64, |cum, r| {
            *cum *= 1.0 + r;
            Some(*cum)
        })
        .collect();

    let series = ReturnSeries::new(dates, cumulative)?;
    debug!(
        periods = series.len(),
        final_value = series.final_value(),
        "simulated portfolio"
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use portstress_core::Date;

    fn dates(n: usize) -> Vec<Date> {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        (0..n).map(|i| start.add_days(i as i64).unwrap()).collect()
    }

    fn two_asset_dataset() -> MarketDataset {
        MarketDataset::from_series([
            AssetSeries::new("Stocks", dates(3), vec![100.0, 110.0, 121.0]).unwrap(),
            AssetSeries::new("Bonds", dates(3), vec![50.0, 50.0, 45.0]).unwrap(),
        ])
    }

    #[test]
    fn test_period_returns() {
        let r = period_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0], 0.1, epsilon = 1e-12);
        assert_relative_eq!(r[1], -0.1, epsilon = 1e-12);

        assert!(period_returns(&[1.0]).is_empty());
        assert!(period_returns(&[]).is_empty());
    }

    #[test]
    fn test_simple_return_edge_cases() {
        assert_eq!(simple_return(0.0, 0.0), -1.0);
        assert!(simple_return(0.0, 1.0).is_infinite());
        assert_relative_eq!(simple_return(-2.0, -1.0), -0.5);
    }

    #[test]
    fn test_simulate_compounds() {
        let weights = PortfolioWeights::from_pairs(&[("Stocks", 0.5), ("Bonds", 0.5)]);
        let series = simulate(&weights, &two_asset_dataset()).unwrap();

        // t1: 0.5*0.1 + 0.5*0.0 = 0.05; t2: 0.5*0.1 + 0.5*(-0.1) = 0.0
        assert_eq!(series.len(), 2);
        assert_eq!(series.dates(), &dates(3)[1..]);
        assert_relative_eq!(series.values()[0], 1.05, epsilon = 1e-12);
        assert_relative_eq!(series.values()[1], 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_unweighted_assets_do_not_contribute() {
        let weights = PortfolioWeights::from_pairs(&[("Stocks", 1.0)]);
        let series = simulate(&weights, &two_asset_dataset()).unwrap();
        assert_relative_eq!(series.values()[1], 1.21, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_asset() {
        let weights = PortfolioWeights::from_pairs(&[("Stocks", 0.5), ("Gold", 0.5)]);
        let err = simulate(&weights, &two_asset_dataset()).unwrap_err();
        assert_eq!(err, SimError::unknown_asset("Gold"));
    }

    #[test]
    fn test_dimension_mismatch() {
        let dataset = MarketDataset::from_series([
            AssetSeries::new("Stocks", dates(3), vec![1.0, 2.0, 3.0]).unwrap(),
            AssetSeries::new("Bonds", dates(2), vec![1.0, 2.0]).unwrap(),
        ]);
        let weights = PortfolioWeights::from_pairs(&[("Stocks", 1.0)]);
        assert!(matches!(
            simulate(&weights, &dataset),
            Err(SimError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_single_observation_gives_empty_series() {
        let dataset =
            MarketDataset::from_series([AssetSeries::new("Stocks", dates(1), vec![1.0]).unwrap()]);
        let weights = PortfolioWeights::from_pairs(&[("Stocks", 1.0)]);
        assert!(simulate(&weights, &dataset).unwrap().is_empty());
    }

    #[test]
    fn test_empty_weights_flat_series() {
        let series = simulate(&PortfolioWeights::new(), &two_asset_dataset()).unwrap();
        assert_eq!(series.values(), &[1.0, 1.0]);
    }

    #[test]
    fn test_weights_not_renormalized() {
        let weights = PortfolioWeights::from_pairs(&[("Stocks", 2.0)]);
        let series = simulate(&weights, &two_asset_dataset()).unwrap();
        assert_relative_eq!(series.values()[0], 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_wiped_out_portfolio() {
        let dataset = MarketDataset::from_series([AssetSeries::new(
            "Stocks",
            dates(4),
            vec![0.0; 4],
        )
        .unwrap()]);
        let weights = PortfolioWeights::from_pairs(&[("Stocks", 1.0)]);
        let series = simulate(&weights, &dataset).unwrap();
        assert_eq!(series.values(), &[0.0, 0.0, 0.0]);
    }
}
