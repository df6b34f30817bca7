//! Domain types shared across Portstress crates.
//!
//! - [`Date`]: Calendar date used to index market data

mod date;

pub use date::Date;
