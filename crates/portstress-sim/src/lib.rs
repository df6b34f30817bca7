//! # Portstress Sim
//!
//! Portfolio return simulation and stress scenario analysis.
//!
//! This crate turns synthetic market data, portfolio weights, and a stress
//! scenario into baseline and stressed cumulative return series plus a loss
//! summary.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Every stage takes explicit inputs and returns new data
//! - **Explicit randomness**: Market data generation takes an optional seed
//! - **Boundary validation**: [`StressTestConfig`] validates user input; the
//!   core stages use their inputs as given
//!
//! ## Quick Start
//!
//! ```rust
//! use portstress_sim::prelude::*;
//!
//! let start = Date::from_ymd(2000, 1, 1).unwrap();
//! let market = generate_market_data(start, 252, &default_asset_params(), Some(42)).unwrap();
//!
//! let weights =
//!     PortfolioWeights::from_pairs(&[("Stocks", 0.6), ("Bonds", 0.3), ("RealEstate", 0.1)]);
//! let baseline = simulate(&weights, &market).unwrap();
//!
//! let stressed_market = apply_stress(&market, &stress_scenarios::market_downturn());
//! let stressed = simulate(&weights, &stressed_market).unwrap();
//!
//! let summary = summarize(&baseline, &stressed).unwrap();
//! assert_eq!(baseline.len(), 251);
//! assert!(summary.baseline_final_value.is_finite());
//! ```
//!
//! ## Module Overview
//!
//! - [`market`] - Synthetic market data generation
//! - [`stress`] - Stress scenarios and their application
//! - [`simulation`] - Weighted, compounded portfolio returns
//! - [`summary`] - Baseline vs stressed comparison
//! - [`pipeline`] - End-to-end runs driven by [`StressTestConfig`]
//! - [`types`] - Series, datasets, weights, configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod assets;
pub mod error;
pub mod market;
pub mod pipeline;
pub mod simulation;
pub mod stress;
pub mod summary;
pub mod types;

// Re-export error types at crate root
pub use error::{SimError, SimResult};

// Re-export main types
pub use types::{
    AssetSeries, MarketDataConfig, MarketDataset, PortfolioWeights, ReturnSeries,
    StressTestConfig, WEIGHT_TOLERANCE,
};

// Re-export pipeline stages
pub use market::{
    default_asset_params, default_start_date, generate_market_data, AssetParams,
    DEFAULT_PERIOD_COUNT, TRADING_DAYS_PER_YEAR,
};
pub use pipeline::{compare_scenario, run_stress_test, StressTestReport};
pub use simulation::{period_returns, portfolio_returns, simulate};
pub use stress::{apply_stress, standard as stress_scenarios, StressScenario};
pub use summary::{summarize, PerformanceSummary};

/// Prelude module for convenient imports.
///
/// ```rust
/// use portstress_sim::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{SimError, SimResult};

    // Data types
    pub use crate::types::{
        AssetSeries, MarketDataConfig, MarketDataset, PortfolioWeights, ReturnSeries,
        StressTestConfig,
    };

    // Generation
    pub use crate::market::{default_asset_params, generate_market_data, AssetParams};

    // Stress testing
    pub use crate::stress::{apply_stress, standard as stress_scenarios, StressScenario};

    // Simulation and summary
    pub use crate::pipeline::{run_stress_test, StressTestReport};
    pub use crate::simulation::simulate;
    pub use crate::summary::{summarize, PerformanceSummary};

    // Re-export commonly used types from dependencies
    pub use portstress_core::Date;
}
