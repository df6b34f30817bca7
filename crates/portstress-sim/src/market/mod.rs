//! Synthetic market data.

mod generator;

pub use generator::*;
