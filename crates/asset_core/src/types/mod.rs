//! Core time, calendar and monetary types.
//!
//! This module provides:
//! - `time`: Type-safe `Date` wrapper with day arithmetic
//! - `calendar`: Leap-year and days-in-period queries, month-end/year-end recurrences
//! - `currency`: ISO 4217 currency codes with decimal precision
//! - `rounding`: Rounding modes and precision for monetary amounts
//! - `error`: Structured error types for date, currency and rounding parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`Recurrence`] from `calendar`
//! - [`Currency`] from `currency`
//! - [`Rounding`], [`RoundingMode`] from `rounding`
//! - [`DateError`], [`CurrencyError`], [`RoundingError`] from `error`

pub mod calendar;
pub mod currency;
pub mod error;
pub mod rounding;
pub mod time;

pub use calendar::Recurrence;
pub use currency::Currency;
pub use error::{CurrencyError, DateError, RoundingError};
pub use rounding::{Rounding, RoundingMode};
pub use time::Date;
