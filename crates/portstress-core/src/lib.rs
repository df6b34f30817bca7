//! # Portstress Core
//!
//! Core types for the Portstress portfolio stress testing toolkit.
//!
//! - **Types**: the [`Date`](types::Date) newtype used to index market data
//! - **Business Day Calendars**: weekday calendars that build series date indices
//! - **Errors**: [`CoreError`](error::CoreError) for date failures
//!
//! ## Example
//!
//! ```rust
//! use portstress_core::prelude::*;
//!
//! let start = Date::from_ymd(2000, 1, 1).unwrap();
//! let index = WeekendCalendar.business_day_range(start, 3).unwrap();
//! assert_eq!(index[0].to_string(), "2000-01-03");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod calendars;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::Date;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, WeekendCalendar};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::Date;
}
