//! Calendar queries and period-end recurrence rules.
//!
//! Provides the Gregorian day counts used for partial-period weighting and
//! the recurrence rules that anchor depreciation dates to the end of each
//! month or year.
//!
//! # Examples
//!
//! ```
//! use asset_core::types::calendar::{days_in_month, Recurrence};
//! use asset_core::types::Date;
//!
//! assert_eq!(days_in_month(2024, 2), Some(29));
//!
//! let from = Date::from_ymd(2024, 1, 15).unwrap();
//! let until = Date::from_ymd(2024, 4, 15).unwrap();
//! let month_ends = Recurrence::MonthEnd.occurrences(from, until);
//! assert_eq!(month_ends.len(), 3); // Jan 31, Feb 29, Mar 31
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::time::Date;

/// Returns whether `year` is a Gregorian leap year.
///
/// Years outside chrono's supported range are reported as common years.
///
/// # Examples
///
/// ```
/// use asset_core::types::calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_yo_opt(year, 1).is_some_and(|date| date.leap_year())
}

/// Returns the number of days in `month` (1-12) of `year`.
///
/// Returns `None` if `month` is outside 1-12 or `year` is out of range.
///
/// # Examples
///
/// ```
/// use asset_core::types::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2100, 2), Some(28));
/// assert_eq!(days_in_month(2024, 13), None);
/// ```
#[inline]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|first| u32::from(first.num_days_in_month()))
}

/// Returns the number of days in `year` (365, or 366 for leap years).
#[inline]
pub fn days_in_year(year: i32) -> u32 {
    365 + u32::from(is_leap_year(year))
}

/// Recurrence rule anchoring dates to period ends.
///
/// # Variants
/// - `MonthEnd`: The last day of every calendar month
/// - `YearEnd`: December 31 of every year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recurrence {
    /// Last day of each calendar month.
    MonthEnd,
    /// December 31 of each year.
    YearEnd,
}

impl Recurrence {
    /// Returns the first occurrence on or after `date`.
    ///
    /// Returns `None` when no such date is representable.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::{Date, Recurrence};
    ///
    /// let date = Date::from_ymd(2024, 3, 31).unwrap();
    /// assert_eq!(Recurrence::MonthEnd.first_on_or_after(date), Some(date));
    /// assert_eq!(
    ///     Recurrence::YearEnd.first_on_or_after(date),
    ///     Date::from_ymd(2024, 12, 31).ok()
    /// );
    /// ```
    #[inline]
    pub fn first_on_or_after(&self, date: Date) -> Option<Date> {
        match self {
            Recurrence::MonthEnd => date.end_of_month(),
            Recurrence::YearEnd => date.end_of_year(),
        }
    }

    /// Returns the first occurrence strictly after `date`.
    ///
    /// Returns `None` when no later date is representable.
    #[inline]
    pub fn next_after(&self, date: Date) -> Option<Date> {
        date.succ().and_then(|next| self.first_on_or_after(next))
    }

    /// Returns every occurrence in the half-open range `[from, until)`,
    /// in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::{Date, Recurrence};
    ///
    /// let from = Date::from_ymd(2023, 6, 1).unwrap();
    /// let until = Date::from_ymd(2025, 12, 31).unwrap();
    ///
    /// // 2025-12-31 is excluded by the half-open range
    /// let year_ends = Recurrence::YearEnd.occurrences(from, until);
    /// assert_eq!(
    ///     year_ends,
    ///     vec![
    ///         Date::from_ymd(2023, 12, 31).unwrap(),
    ///         Date::from_ymd(2024, 12, 31).unwrap(),
    ///     ]
    /// );
    /// ```
    pub fn occurrences(&self, from: Date, until: Date) -> Vec<Date> {
        let mut dates = Vec::new();
        let mut current = self.first_on_or_after(from);

        while let Some(date) = current {
            if date >= until {
                break;
            }
            dates.push(date);
            current = self.next_after(date);
        }

        dates
    }

    /// Returns the number of days in the period that ends on the
    /// occurrence containing `date` (its month or its year).
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::{Date, Recurrence};
    ///
    /// let date = Date::from_ymd(2024, 2, 15).unwrap();
    /// assert_eq!(Recurrence::MonthEnd.period_days(date), 29);
    /// assert_eq!(Recurrence::YearEnd.period_days(date), 366);
    /// ```
    #[inline]
    pub fn period_days(&self, date: Date) -> u32 {
        match self {
            Recurrence::MonthEnd => date.days_in_month(),
            Recurrence::YearEnd => date.days_in_year(),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::MonthEnd => write!(f, "month-end"),
            Recurrence::YearEnd => write!(f, "year-end"),
        }
    }
}
