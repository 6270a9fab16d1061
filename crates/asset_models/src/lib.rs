//! # asset_models: Depreciation Schedules
//!
//! ## Model Layer Role
//!
//! asset_models builds on asset_core and provides:
//! - Asset configuration with validation (`depreciation::AssetSchedule`)
//! - Depreciation date sequences anchored to month or year ends
//! - Linear depreciation with partial first and last periods
//! - Schedule assembly with early-payoff and residual-sweep handling
//!
//! ## Usage Examples
//!
//! ```rust
//! use asset_core::types::{Currency, Date};
//! use asset_models::depreciation::{AssetScheduleBuilder, DepreciationScheduler, Frequency};
//! use rust_decimal::Decimal;
//!
//! let asset = AssetScheduleBuilder::new()
//!     .value(Decimal::new(120_000, 2))
//!     .start(Date::from_ymd(2024, 1, 1).unwrap())
//!     .end(Date::from_ymd(2024, 12, 31).unwrap())
//!     .frequency(Frequency::Monthly)
//!     .build()
//!     .unwrap();
//!
//! let schedule = DepreciationScheduler::new(&asset, Currency::USD).depreciate();
//! assert_eq!(schedule.len(), 12);
//! assert_eq!(schedule.total_depreciation(), Decimal::new(120_000, 2));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for schedule lines and enums

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod depreciation;
