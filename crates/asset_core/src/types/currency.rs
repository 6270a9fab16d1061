//! Currency types for monetary amounts.
//!
//! This module provides ISO 4217 currency codes with the decimal precision
//! that depreciation amounts are rounded to.
//!
//! # Examples
//!
//! ```
//! use asset_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.decimal_places(), 2);
//!
//! let jpy = Currency::JPY;
//! assert_eq!(jpy.decimal_places(), 0);  // Yen has no decimal places
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;
use super::rounding::Rounding;

/// ISO 4217 currency codes with decimal precision metadata.
///
/// # Variants
/// - `USD`: United States Dollar (2 decimal places)
/// - `EUR`: Euro (2 decimal places)
/// - `GBP`: British Pound Sterling (2 decimal places)
/// - `JPY`: Japanese Yen (0 decimal places)
/// - `CHF`: Swiss Franc (2 decimal places)
///
/// # Examples
///
/// ```
/// use asset_core::types::currency::Currency;
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,

    /// Euro
    EUR,

    /// British Pound Sterling
    GBP,

    /// Japanese Yen (no minor units)
    JPY,

    /// Swiss Franc
    CHF,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::EUR.decimal_places(), 2);
    /// assert_eq!(Currency::JPY.decimal_places(), 0);
    /// ```
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD | Currency::EUR | Currency::GBP | Currency::CHF => 2,
            Currency::JPY => 0,
        }
    }

    /// Returns the currency's standard rounding (its precision, half-up).
    pub fn rounding(&self) -> Rounding {
        Rounding::for_currency(*self)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses ISO 4217 currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
