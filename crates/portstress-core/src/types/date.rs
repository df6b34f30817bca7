//! Date type for market data indices.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date used to index price-level and return series.
///
/// This is a newtype wrapper around `chrono::NaiveDate` that serializes
/// as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Example
///
/// ```rust
/// use portstress_core::types::Date;
///
/// let date = Date::from_ymd(2000, 1, 1).unwrap();
/// assert!(date.is_weekend());
/// assert_eq!(date.add_days(2).unwrap(), Date::from_ymd(2000, 1, 3).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result falls outside the
    /// representable date range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| {
                CoreError::invalid_date(format!("{self} {days:+} days is out of range"))
            })
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.to_string(), "2025-06-15");
        assert_eq!(date.as_naive_date(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let date: Date = "2000-01-03".parse().unwrap();
        assert_eq!(date, Date::from_ymd(2000, 1, 3).unwrap());
        assert_eq!(date.to_string(), "2000-01-03");

        assert!(Date::parse("03/01/2000").is_err());
    }

    #[test]
    fn test_weekends() {
        // 2000-01-01 was a Saturday
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_weekend());
        assert!(Date::from_ymd(2000, 1, 2).unwrap().is_weekend());
        assert!(!Date::from_ymd(2000, 1, 3).unwrap().is_weekend());
    }

    #[test]
    fn test_add_days() {
        let date = Date::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(date.add_days(1).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
        assert_eq!(date.add_days(-28).unwrap(), Date::from_ymd(2024, 1, 31).unwrap());
        assert_eq!(date.add_days(0).unwrap(), date);
    }

    #[test]
    fn test_add_days_out_of_range() {
        let last = Date::from(NaiveDate::MAX);
        assert!(matches!(last.add_days(1), Err(CoreError::InvalidDate { .. })));

        let first = Date::from(NaiveDate::MIN);
        assert!(first.add_days(-1).is_err());
        assert!(first.add_days(i64::MAX).is_err());
    }

    #[test]
    fn test_serde_as_iso_string() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-02-29\"");

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
