//! Date type for depreciation calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Day arithmetic (`Date - Date` in days, `pred`, `succ`, `add_days`)
//! - Period anchors (`end_of_month`, `end_of_year`)
//!
//! # Examples
//!
//! ```
//! use asset_core::types::time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 15).unwrap();
//! let end = start.end_of_month().unwrap();
//!
//! assert_eq!(end, Date::from_ymd(2024, 1, 31).unwrap());
//! assert_eq!(end - start, 16);
//! ```

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation and the day arithmetic needed for
/// period proration.
///
/// # Examples
///
/// ```
/// use asset_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// The earliest representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);

    /// The latest representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the previous calendar day, or `None` at the minimum date.
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Date)
    }

    /// Returns the next calendar day, or `None` at the maximum date.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }

    /// Shifts the date by a signed number of days.
    ///
    /// Returns `None` if the result falls outside the supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(date.add_days(2), Some(Date::from_ymd(2024, 3, 1).unwrap()));
    /// assert_eq!(date.add_days(-28), Some(Date::from_ymd(2024, 1, 31).unwrap()));
    /// ```
    pub fn add_days(self, days: i64) -> Option<Self> {
        let shift = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(shift)
        } else {
            self.0.checked_sub_days(shift)
        };
        shifted.map(Date)
    }

    /// Returns whether the date's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's calendar month.
    pub fn days_in_month(&self) -> u32 {
        u32::from(self.0.num_days_in_month())
    }

    /// Returns the number of days in the date's calendar year (365 or 366).
    pub fn days_in_year(&self) -> u32 {
        365 + u32::from(self.is_leap_year())
    }

    /// Returns the last day of the date's calendar month.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2023, 2, 3).unwrap();
    /// assert_eq!(date.end_of_month(), Date::from_ymd(2023, 2, 28).ok());
    /// ```
    pub fn end_of_month(&self) -> Option<Self> {
        self.0.with_day(self.days_in_month()).map(Date)
    }

    /// Returns December 31 of the date's calendar year.
    pub fn end_of_year(&self) -> Option<Self> {
        NaiveDate::from_ymd_opt(self.year(), 12, 31).map(Date)
    }

    /// Returns whether the date is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_date_from_ymd_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert_eq!(
            Date::from_ymd(2024, 4, 31),
            Err(DateError::InvalidDate {
                year: 2024,
                month: 4,
                day: 31
            })
        );
    }

    #[test]
    fn test_date_parse() {
        assert_eq!(Date::parse("2024-06-15").unwrap(), ymd(2024, 6, 15));
        assert_eq!(Date::parse(" 2024-06-15 ").unwrap(), ymd(2024, 6, 15));
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("2024/06/15").is_err());
    }

    #[test]
    fn test_date_display() {
        assert_eq!(format!("{}", ymd(2024, 6, 5)), "2024-06-05");
    }

    #[test]
    fn test_date_subtraction() {
        let start = ymd(2023, 12, 31);
        let end = ymd(2024, 12, 31);
        assert_eq!(end - start, 366);
        assert_eq!(start - end, -366);
    }

    #[test]
    fn test_pred_succ() {
        assert_eq!(ymd(2024, 3, 1).pred(), Some(ymd(2024, 2, 29)));
        assert_eq!(ymd(2024, 12, 31).succ(), Some(ymd(2025, 1, 1)));
        assert_eq!(Date::from(NaiveDate::MIN).pred(), None);
        assert_eq!(Date::from(NaiveDate::MAX).succ(), None);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(ymd(2024, 1, 1).add_days(0), Some(ymd(2024, 1, 1)));
        assert_eq!(ymd(2024, 1, 1).add_days(366), Some(ymd(2025, 1, 1)));
        assert_eq!(ymd(2024, 1, 1).add_days(-1), Some(ymd(2023, 12, 31)));
        assert_eq!(Date::from(NaiveDate::MAX).add_days(1), None);
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(ymd(2024, 1, 1).end_of_month(), Some(ymd(2024, 1, 31)));
        assert_eq!(ymd(2024, 2, 10).end_of_month(), Some(ymd(2024, 2, 29)));
        assert_eq!(ymd(2023, 2, 10).end_of_month(), Some(ymd(2023, 2, 28)));
        assert_eq!(ymd(2024, 4, 30).end_of_month(), Some(ymd(2024, 4, 30)));
    }

    #[test]
    fn test_end_of_month_every_month() {
        let common = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in (1..=12).zip(common) {
            assert_eq!(ymd(2100, month, 1).end_of_month(), Some(ymd(2100, month, days)));
            let leap_days = if month == 2 { 29 } else { days };
            assert_eq!(ymd(2000, month, 1).end_of_month(), Some(ymd(2000, month, leap_days)));
        }
    }

    #[test]
    fn test_end_of_year() {
        assert_eq!(ymd(2024, 2, 29).end_of_year(), Some(ymd(2024, 12, 31)));
        assert_eq!(ymd(2023, 12, 31).end_of_year(), Some(ymd(2023, 12, 31)));
    }

    #[test]
    fn test_period_ends_at_bounds() {
        assert_eq!(Date::MAX.end_of_month(), Some(Date::MAX));
        assert_eq!(Date::MAX.end_of_year(), Some(Date::MAX));
        assert!(Date::MIN.end_of_month().is_some());
    }

    #[test]
    fn test_is_end_of_month() {
        assert!(ymd(2024, 2, 29).is_end_of_month());
        assert!(!ymd(2024, 2, 28).is_end_of_month());
        assert!(ymd(2023, 2, 28).is_end_of_month());
    }

    #[test]
    fn test_period_lengths() {
        assert!(ymd(2024, 7, 1).is_leap_year());
        assert_eq!(ymd(2024, 2, 1).days_in_month(), 29);
        assert_eq!(ymd(2100, 6, 1).days_in_year(), 365);
        assert!(!ymd(2100, 1, 1).is_leap_year());
        assert_eq!(ymd(2100, 2, 1).days_in_month(), 28);
        assert_eq!(ymd(2000, 2, 1).days_in_month(), 29);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_date_serde_is_iso_string() {
            let json = serde_json::to_string(&ymd(2024, 6, 15)).unwrap();
            assert_eq!(json, "\"2024-06-15\"");

            let parsed: Date = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, ymd(2024, 6, 15));
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (1900i32..2200i32, 1u32..13u32, 1u32..32u32)
                .prop_filter_map("valid date", |(year, month, day)| {
                    Date::from_ymd(year, month, day).ok()
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_end_of_month_is_followed_by_first_of_month(date in date_strategy()) {
                let end = date.end_of_month().unwrap();
                prop_assert!(end >= date);
                prop_assert_eq!(end.month(), date.month());
                prop_assert_eq!(end.succ().unwrap().day(), 1);
            }

            #[test]
            fn test_add_days_matches_subtraction(date in date_strategy(), days in -5000i64..5000i64) {
                let shifted = date.add_days(days).unwrap();
                prop_assert_eq!(shifted - date, days);
            }
        }
    }
}
