//! Stress testing for portfolios.
//!
//! This module provides:
//! - Scenario definitions (per-asset multiplicative shocks)
//! - A library of standard scenarios
//! - Application of a scenario to a market dataset
//!
//! Stressing never mutates its input; it produces a sibling dataset.

mod apply;
mod scenarios;

pub use apply::*;
pub use scenarios::*;
