//! Asset configuration and its builder.

use asset_core::types::Date;
use rust_decimal::Decimal;

use super::error::AssetError;
use super::frequency::Frequency;
use super::line::ScheduleLine;
use super::method::DepreciationMethod;

/// Validated depreciation inputs for one asset.
///
/// Holds the configuration values and the immutable history of posted
/// lines. Instances are only obtainable through [`AssetScheduleBuilder`],
/// so every invariant the scheduler relies on holds by construction:
/// - `value > 0` and `0 <= residual_value <= value`
/// - `start_date <= end_date`
/// - posted lines strictly increasing by date and not after `end_date`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSchedule {
    value: Decimal,
    residual_value: Decimal,
    start_date: Date,
    end_date: Date,
    frequency: Frequency,
    depreciation_method: DepreciationMethod,
    posted_lines: Vec<ScheduleLine>,
}

impl AssetSchedule {
    /// Returns a builder for a new asset.
    pub fn builder() -> AssetScheduleBuilder {
        AssetScheduleBuilder::new()
    }

    /// Returns the acquisition value.
    #[inline]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns the value below which depreciation stops.
    #[inline]
    pub fn residual_value(&self) -> Decimal {
        self.residual_value
    }

    /// Returns the first day of depreciation.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of depreciation.
    #[inline]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the depreciation frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the depreciation method.
    #[inline]
    pub fn depreciation_method(&self) -> DepreciationMethod {
        self.depreciation_method
    }

    /// Returns the already-posted lines in date order.
    #[inline]
    pub fn posted_lines(&self) -> &[ScheduleLine] {
        &self.posted_lines
    }

    /// Returns the date of the latest posted line.
    pub fn last_posted_date(&self) -> Option<Date> {
        self.posted_lines.last().map(|line| line.date)
    }

    /// Returns the depreciation already recognised by posted lines.
    pub fn depreciated_amount(&self) -> Decimal {
        self.posted_lines.iter().map(|line| line.depreciation).sum()
    }

    /// Returns the amount still to spread: value less posted depreciation
    /// less residual value.
    ///
    /// A result `<= 0` means nothing is left to depreciate.
    pub fn depreciable_basis(&self) -> Decimal {
        self.value - self.depreciated_amount() - self.residual_value
    }

    /// Returns the later of the start date and the latest posted date.
    pub fn effective_start(&self) -> Date {
        match self.last_posted_date() {
            Some(posted) if posted > self.start_date => posted,
            _ => self.start_date,
        }
    }

    /// Returns the first day whose depreciation is not yet recognised.
    ///
    /// This is the start date, or the day after the latest posted line when
    /// that line is on or after the start date. `None` only when the latest
    /// posted line sits on the last representable date.
    pub fn first_unposted_day(&self) -> Option<Date> {
        match self.last_posted_date() {
            Some(posted) if posted >= self.start_date => posted.succ(),
            _ => Some(self.start_date),
        }
    }

    /// Returns the number of days from the end of the recognised window
    /// (the day before the start date, or the latest posted date if later)
    /// up to and including `date`.
    pub(crate) fn days_since_recognised(&self, date: Date) -> i64 {
        match self.last_posted_date() {
            Some(posted) if posted >= self.start_date => date - posted,
            _ => date - self.start_date + 1,
        }
    }
}

/// Builder for constructing assets with configuration-time validation.
///
/// # Examples
///
/// ```
/// use asset_core::types::Date;
/// use asset_models::depreciation::{AssetError, AssetScheduleBuilder, Frequency, ScheduleLine};
/// use rust_decimal::Decimal;
///
/// let asset = AssetScheduleBuilder::new()
///     .value(Decimal::new(1200, 0))
///     .start(Date::from_ymd(2024, 1, 1).unwrap())
///     .end(Date::from_ymd(2024, 12, 31).unwrap())
///     .frequency(Frequency::Monthly)
///     .posted_line(ScheduleLine::posted(Date::from_ymd(2024, 1, 31).unwrap(), Decimal::new(100, 0)))
///     .build()
///     .unwrap();
/// assert_eq!(asset.depreciable_basis(), Decimal::new(1100, 0));
///
/// // Residual value above the acquisition value is rejected
/// let invalid = AssetScheduleBuilder::new()
///     .value(Decimal::new(1000, 0))
///     .residual_value(Decimal::new(1500, 0))
///     .start(Date::from_ymd(2024, 1, 1).unwrap())
///     .end(Date::from_ymd(2024, 12, 31).unwrap())
///     .frequency(Frequency::Monthly)
///     .build();
/// assert!(matches!(invalid, Err(AssetError::InvalidResidualValue { .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetScheduleBuilder {
    value: Option<Decimal>,
    residual_value: Decimal,
    start_date: Option<Date>,
    end_date: Option<Date>,
    frequency: Option<Frequency>,
    depreciation_method: DepreciationMethod,
    posted_lines: Vec<ScheduleLine>,
}

impl AssetScheduleBuilder {
    /// Creates a builder with a zero residual value and linear depreciation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the acquisition value.
    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the residual value.
    pub fn residual_value(mut self, residual_value: Decimal) -> Self {
        self.residual_value = residual_value;
        self
    }

    /// Sets the first day of depreciation.
    pub fn start(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the last day of depreciation.
    pub fn end(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the depreciation frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the depreciation method.
    pub fn method(mut self, method: DepreciationMethod) -> Self {
        self.depreciation_method = method;
        self
    }

    /// Appends one posted line to the history.
    pub fn posted_line(mut self, line: ScheduleLine) -> Self {
        self.posted_lines.push(line);
        self
    }

    /// Appends several posted lines to the history.
    pub fn posted_lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = ScheduleLine>,
    {
        self.posted_lines.extend(lines);
        self
    }

    /// Builds the asset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Value, start date, end date or frequency is missing
    /// - Value is not positive
    /// - Residual value is negative or exceeds the value
    /// - Start date is after end date
    /// - Posted lines are not strictly increasing by date
    /// - A posted line is dated after the end date
    pub fn build(self) -> Result<AssetSchedule, AssetError> {
        let value = self
            .value
            .ok_or(AssetError::MissingField { field: "value" })?;
        let start = self
            .start_date
            .ok_or(AssetError::MissingField { field: "start" })?;
        let end = self
            .end_date
            .ok_or(AssetError::MissingField { field: "end" })?;
        let frequency = self
            .frequency
            .ok_or(AssetError::MissingField { field: "frequency" })?;

        if value <= Decimal::ZERO {
            return Err(AssetError::NonPositiveValue { value });
        }

        if self.residual_value < Decimal::ZERO || self.residual_value > value {
            return Err(AssetError::InvalidResidualValue {
                residual_value: self.residual_value,
                value,
            });
        }

        if start > end {
            return Err(AssetError::InvalidDateRange { start, end });
        }

        for pair in self.posted_lines.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(AssetError::UnorderedPostedLines {
                    previous: pair[0].date,
                    next: pair[1].date,
                });
            }
        }

        if let Some(last) = self.posted_lines.last() {
            if last.date > end {
                return Err(AssetError::PostedLineAfterEnd {
                    date: last.date,
                    end,
                });
            }
        }

        Ok(AssetSchedule {
            value,
            residual_value: self.residual_value,
            start_date: start,
            end_date: end,
            frequency,
            depreciation_method: self.depreciation_method,
            posted_lines: self.posted_lines,
        })
    }
}
