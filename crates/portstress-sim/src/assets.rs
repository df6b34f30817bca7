//! Standard asset-class names.

/// Equities.
pub const STOCKS: &str = "Stocks";

/// Fixed income.
pub const BONDS: &str = "Bonds";

/// Real estate.
pub const REAL_ESTATE: &str = "RealEstate";

/// The standard asset classes, in display order.
pub const STANDARD_ASSETS: [&str; 3] = [STOCKS, BONDS, REAL_ESTATE];
