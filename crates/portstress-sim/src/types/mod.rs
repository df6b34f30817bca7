//! Domain types for simulation and stress testing.
//!
//! This module provides:
//!
//! - [`AssetSeries`]: Price-level history of one asset class
//! - [`MarketDataset`]: Asset series sharing one date index
//! - [`PortfolioWeights`]: Fractional allocation per asset class
//! - [`ReturnSeries`]: Cumulative return multipliers
//! - [`StressTestConfig`]: Boundary configuration for a full run

mod config;
mod dataset;
mod series;
mod weights;

pub use config::{MarketDataConfig, StressTestConfig};
pub use dataset::MarketDataset;
pub use series::{AssetSeries, ReturnSeries};
pub use weights::{PortfolioWeights, WEIGHT_TOLERANCE};
