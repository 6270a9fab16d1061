//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency parsing
//! - `RoundingError`: Errors from rounding mode parsing

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use asset_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Currency-related errors.
///
/// # Examples
/// ```
/// use asset_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Rounding-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundingError {
    /// Unknown rounding mode name.
    #[error("Unknown rounding mode: {0}. Must be one of: half-up, half-even, down")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad input".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad input");
    }

    #[test]
    fn test_rounding_error_display() {
        let err = RoundingError::UnknownMode("ceil".to_string());
        assert!(err.to_string().contains("ceil"));
        assert!(err.to_string().contains("half-even"));
    }
}
