//! # asset_core: Foundation Types for Asset Depreciation
//!
//! ## Foundation Layer Role
//!
//! asset_core is the bottom layer of the assetflow workspace, providing:
//! - Time types: `Date` and calendar utilities (`types::time`, `types::calendar`)
//! - Currency types: `Currency` (`types::currency`)
//! - Monetary rounding: `Rounding`, `RoundingMode` (`types::rounding`)
//! - The `MonetaryRounding` trait consumed by schedule generators (`traits`)
//! - Error types: `DateError`, `CurrencyError`, `RoundingError` (`types::error`)
//!
//! ## Dependencies
//!
//! asset_core has no dependencies on other assetflow crates:
//! - chrono: Date arithmetic
//! - rust_decimal: Exact decimal monetary amounts
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use asset_core::traits::MonetaryRounding;
//! use asset_core::types::{calendar, Currency, Date};
//! use rust_decimal::Decimal;
//!
//! // Calendar queries
//! let date = Date::from_ymd(2024, 2, 10).unwrap();
//! assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).ok());
//! assert_eq!(calendar::days_in_year(2024), 366);
//!
//! // Currency rounding
//! let amount = Decimal::new(103_915, 3); // 103.915
//! assert_eq!(Currency::USD.round(amount), Decimal::new(10392, 2));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, Currency, RoundingMode

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
