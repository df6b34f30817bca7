//! Business day calendars.
//!
//! Market data series are indexed by business days. The synthetic history
//! uses a weekday-only calendar with no holidays, matching a plain
//! business-day frequency.

use crate::error::CoreResult;
use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days for a market. Date
/// arithmetic that would leave the representable range returns
/// `CoreError::InvalidDate`.
pub trait Calendar: Send + Sync {
    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> CoreResult<Date> {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1)?;
        }
        Ok(result)
    }

    /// Advances a date by a number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> CoreResult<Date> {
        let mut result = date;
        let mut remaining = days.unsigned_abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction)?;
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        Ok(result)
    }

    /// Returns `count` consecutive business days.
    ///
    /// The first element is the first business day on or after `start`;
    /// a weekend start rolls forward. The result is strictly increasing.
    fn business_day_range(&self, start: Date, count: usize) -> CoreResult<Vec<Date>> {
        let mut dates = Vec::with_capacity(count);
        if count == 0 {
            return Ok(dates);
        }

        let mut current = self.next_business_day(start)?;
        dates.push(current);
        while dates.len() < count {
            current = self.add_business_days(current, 1)?;
            dates.push(current);
        }
        Ok(dates)
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}
