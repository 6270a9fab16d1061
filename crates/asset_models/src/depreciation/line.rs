//! Schedule lines and the ordered schedule they form.

use asset_core::types::Date;
use rust_decimal::Decimal;
use std::collections::btree_map::{BTreeMap, Values};
use std::fmt;

/// One depreciation entry recognised at a date.
///
/// Used both for computed lines and for the already-posted history that
/// feeds a computation. Only `date` and `depreciation` of posted lines are
/// read by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleLine {
    /// Date at which the amount is recognised.
    pub date: Date,
    /// The asset's acquisition value.
    #[cfg_attr(feature = "serde", serde(default))]
    pub acquired_value: Decimal,
    /// Amount spread over the remaining schedule of the computation that
    /// produced this line.
    #[cfg_attr(feature = "serde", serde(default))]
    pub depreciable_basis: Decimal,
    /// Amount recognised at `date`.
    pub depreciation: Decimal,
    /// Running total of depreciation up to and including this line.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accumulated_depreciation: Decimal,
    /// Acquisition value less accumulated depreciation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub actual_value: Decimal,
}

impl ScheduleLine {
    /// Creates a history line carrying only what a computation reads.
    ///
    /// # Examples
    ///
    /// ```
    /// use asset_core::types::Date;
    /// use asset_models::depreciation::ScheduleLine;
    /// use rust_decimal::Decimal;
    ///
    /// let line = ScheduleLine::posted(Date::from_ymd(2024, 1, 31).unwrap(), Decimal::new(100, 0));
    /// assert_eq!(line.accumulated_depreciation, Decimal::new(100, 0));
    /// ```
    pub fn posted(date: Date, depreciation: Decimal) -> Self {
        Self {
            date,
            acquired_value: Decimal::ZERO,
            depreciable_basis: Decimal::ZERO,
            depreciation,
            accumulated_depreciation: depreciation,
            actual_value: Decimal::ZERO,
        }
    }
}

impl fmt::Display for ScheduleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: depreciation {} (accumulated {}, actual {})",
            self.date, self.depreciation, self.accumulated_depreciation, self.actual_value
        )
    }
}

/// Computed depreciation lines keyed and ordered by date.
///
/// # Examples
///
/// ```
/// use asset_core::types::{Currency, Date};
/// use asset_models::depreciation::{AssetScheduleBuilder, DepreciationScheduler, Frequency};
/// use rust_decimal::Decimal;
///
/// let asset = AssetScheduleBuilder::new()
///     .value(Decimal::new(600, 0))
///     .start(Date::from_ymd(2024, 1, 1).unwrap())
///     .end(Date::from_ymd(2024, 6, 30).unwrap())
///     .frequency(Frequency::Monthly)
///     .build()
///     .unwrap();
///
/// let schedule = DepreciationScheduler::new(&asset, Currency::USD).depreciate();
/// let march = schedule.get(Date::from_ymd(2024, 3, 31).unwrap()).unwrap();
/// assert_eq!(march.depreciation, Decimal::new(100, 0));
/// assert_eq!(march.accumulated_depreciation, Decimal::new(300, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepreciationSchedule {
    lines: BTreeMap<Date, ScheduleLine>,
}

impl DepreciationSchedule {
    /// Creates an empty schedule (nothing left to depreciate).
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, line: ScheduleLine) {
        self.lines.insert(line.date, line);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut ScheduleLine> {
        self.lines.values_mut().next_back()
    }

    pub(crate) fn lines_mut(&mut self) -> impl Iterator<Item = &mut ScheduleLine> {
        self.lines.values_mut()
    }

    /// Returns the number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns whether the schedule has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line recognised at `date`, if any.
    pub fn get(&self, date: Date) -> Option<&ScheduleLine> {
        self.lines.get(&date)
    }

    /// Returns the earliest line.
    pub fn first(&self) -> Option<&ScheduleLine> {
        self.lines.values().next()
    }

    /// Returns the latest line.
    pub fn last(&self) -> Option<&ScheduleLine> {
        self.lines.values().next_back()
    }

    /// Returns the line dates in increasing order.
    pub fn dates(&self) -> Vec<Date> {
        self.lines.keys().copied().collect()
    }

    /// Returns an iterator over the lines in date order.
    pub fn iter(&self) -> Values<'_, Date, ScheduleLine> {
        self.lines.values()
    }

    /// Returns the sum of depreciation over all lines.
    pub fn total_depreciation(&self) -> Decimal {
        self.lines.values().map(|line| line.depreciation).sum()
    }

    /// Consumes the schedule, returning its lines in date order.
    pub fn into_lines(self) -> Vec<ScheduleLine> {
        self.lines.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a DepreciationSchedule {
    type Item = &'a ScheduleLine;
    type IntoIter = Values<'a, Date, ScheduleLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
