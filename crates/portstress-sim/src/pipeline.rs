//! End-to-end stress test run.
//!
//! Generator -> simulator (baseline), generator -> applier -> simulator
//! (stressed), then the summary. Every stage is a pure function; a run
//! carries no state over to the next.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SimResult;
use crate::simulation::simulate;
use crate::stress::{apply_stress, StressScenario};
use crate::summary::{summarize, PerformanceSummary};
use crate::types::{MarketDataset, PortfolioWeights, ReturnSeries, StressTestConfig};

/// Everything produced by one stress test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestReport {
    /// The generated (unstressed) market data.
    pub market_data: MarketDataset,

    /// The scenario that was applied.
    pub scenario: StressScenario,

    /// The portfolio weights that were simulated.
    pub weights: PortfolioWeights,

    /// Cumulative returns on the original market data.
    pub baseline: ReturnSeries,

    /// Cumulative returns on the stressed market data.
    pub stressed: ReturnSeries,

    /// Final values and relative loss.
    pub summary: PerformanceSummary,
}

/// Compares a portfolio on given market data with and without a scenario.
///
/// # Errors
///
/// Propagates errors from [`simulate`] and [`summarize`].
pub fn compare_scenario(
    market_data: MarketDataset,
    weights: PortfolioWeights,
    scenario: StressScenario,
) -> SimResult<StressTestReport> {
    let baseline = simulate(&weights, &market_data)?;
    let stressed_data = apply_stress(&market_data, &scenario);
    let stressed = simulate(&weights, &stressed_data)?;
    let summary = summarize(&baseline, &stressed)?;

    info!(
        scenario = %scenario.name,
        baseline_final = summary.baseline_final_value,
        stressed_final = summary.stressed_final_value,
        relative_loss = summary.relative_loss,
        "stress test complete"
    );

    Ok(StressTestReport {
        market_data,
        scenario,
        weights,
        baseline,
        stressed,
        summary,
    })
}

/// Validates `config`, generates its market data, and runs the comparison.
///
/// # Errors
///
/// Returns the first validation, generation, simulation, or summary error.
pub fn run_stress_test(config: &StressTestConfig) -> SimResult<StressTestReport> {
    config.validate()?;
    let market_data = config.market.generate()?;
    compare_scenario(market_data, config.weights(), config.scenario())
}
