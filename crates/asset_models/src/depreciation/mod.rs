//! Depreciation schedule generation for fixed assets.
//!
//! This module provides:
//! - [`AssetSchedule`]: Validated input aggregate (value, dates, frequency, posted lines)
//! - [`AssetScheduleBuilder`]: Builder pattern with configuration-time validation
//! - [`Frequency`] and [`DepreciationMethod`]: Closed configuration enumerations
//! - [`depreciation_dates`]: The remaining dates at which depreciation is recognised
//! - [`Proration`]: Partial-period weighting of the first and last periods
//! - [`DepreciationScheduler`]: Amount computation and schedule assembly
//! - [`ScheduleLine`] and [`DepreciationSchedule`]: The computed output
//!
//! # Examples
//!
//! ```
//! use asset_core::types::{Currency, Date};
//! use asset_models::depreciation::{AssetScheduleBuilder, DepreciationScheduler, Frequency};
//! use rust_decimal::Decimal;
//!
//! let asset = AssetScheduleBuilder::new()
//!     .value(Decimal::new(1_000_00, 2))
//!     .residual_value(Decimal::new(200_00, 2))
//!     .start(Date::from_ymd(2024, 1, 1).unwrap())
//!     .end(Date::from_ymd(2027, 12, 31).unwrap())
//!     .frequency(Frequency::Yearly)
//!     .build()
//!     .unwrap();
//!
//! let schedule = DepreciationScheduler::new(&asset, Currency::EUR).depreciate();
//!
//! assert_eq!(schedule.len(), 4);
//! let last = schedule.last().unwrap();
//! assert_eq!(last.accumulated_depreciation, Decimal::new(800_00, 2));
//! assert_eq!(last.actual_value, Decimal::new(200_00, 2));
//! ```

mod asset;
mod dates;
mod error;
mod frequency;
mod line;
mod method;
mod proration;
mod scheduler;

pub use asset::{AssetSchedule, AssetScheduleBuilder};
pub use dates::depreciation_dates;
pub use error::AssetError;
pub use frequency::Frequency;
pub use line::{DepreciationSchedule, ScheduleLine};
pub use method::DepreciationMethod;
pub use proration::Proration;
pub use scheduler::DepreciationScheduler;
