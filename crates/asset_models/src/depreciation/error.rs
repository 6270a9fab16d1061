//! Asset configuration error types.

use asset_core::types::Date;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while configuring an asset for depreciation.
///
/// Schedule computation itself never fails; every precondition it relies
/// on is checked here, when the asset is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Acquisition value must be strictly positive.
    #[error("Asset value must be positive, got {value}")]
    NonPositiveValue {
        /// The rejected value.
        value: Decimal,
    },

    /// Residual value must lie between zero and the acquisition value.
    #[error("Residual value {residual_value} must be between 0 and the asset value {value}")]
    InvalidResidualValue {
        /// The rejected residual value.
        residual_value: Decimal,
        /// The asset's acquisition value.
        value: Decimal,
    },

    /// Start date must not be after end date.
    #[error("Start date {start} must not be after end date {end}")]
    InvalidDateRange {
        /// The start date.
        start: Date,
        /// The end date.
        end: Date,
    },

    /// Posted lines must be strictly increasing by date.
    #[error("Posted line dated {next} does not follow posted line dated {previous}")]
    UnorderedPostedLines {
        /// Date of the earlier line in input order.
        previous: Date,
        /// Date of the offending line.
        next: Date,
    },

    /// A posted line falls after the end of depreciation.
    #[error("Posted line dated {date} is after the depreciation end date {end}")]
    PostedLineAfterEnd {
        /// Date of the offending line.
        date: Date,
        /// The end date.
        end: Date,
    },

    /// Unknown depreciation frequency name.
    #[error("Unknown frequency: {0}. Must be one of: monthly, yearly")]
    UnknownFrequency(String),

    /// Unknown depreciation method name.
    #[error("Unknown depreciation method: {0}. Must be one of: linear")]
    UnknownMethod(String),
}
