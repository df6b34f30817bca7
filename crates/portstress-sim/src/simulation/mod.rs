//! Portfolio simulation.
//!
//! Converts price levels to period returns, weights them by allocation, and
//! compounds the result into a cumulative return series.

mod portfolio;

pub use portfolio::*;
