//! Partial-period weighting for linear depreciation.

use asset_core::types::Date;
use rust_decimal::Decimal;

use super::asset::AssetSchedule;

/// Weights of the periods in a depreciation date sequence.
///
/// Full periods weigh 1. The first period weighs the days elapsed since
/// the recognised window ended over the days of its month (or year), and
/// the last period weighs the days since the previous date over the days
/// of its month (or year). With a single date the one period is both
/// first and last.
///
/// All ratios are exact decimal quotients of integer day counts.
///
/// # Examples
///
/// ```
/// use asset_core::types::Date;
/// use asset_models::depreciation::{depreciation_dates, AssetScheduleBuilder, Frequency, Proration};
/// use rust_decimal::Decimal;
///
/// let asset = AssetScheduleBuilder::new()
///     .value(Decimal::new(1200, 0))
///     .start(Date::from_ymd(2024, 1, 1).unwrap())
///     .end(Date::from_ymd(2024, 12, 31).unwrap())
///     .frequency(Frequency::Monthly)
///     .build()
///     .unwrap();
///
/// let dates = depreciation_dates(&asset);
/// let proration = Proration::new(&asset, &dates).unwrap();
/// assert_eq!(proration.first_ratio(), Decimal::ONE);
/// assert_eq!(proration.last_ratio(), Decimal::ONE);
/// assert_eq!(proration.denominator(), Decimal::from(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proration {
    first_date: Date,
    last_date: Date,
    periods: usize,
    first_ratio: Decimal,
    last_ratio: Decimal,
}

impl Proration {
    /// Computes the weights of `dates` for `asset`.
    ///
    /// `dates` is expected to be the asset's depreciation date sequence.
    /// Returns `None` if `dates` is empty.
    pub fn new(asset: &AssetSchedule, dates: &[Date]) -> Option<Self> {
        let first_date = *dates.first()?;
        let last_date = *dates.last()?;
        let recurrence = asset.frequency().recurrence();

        let first_ratio = day_ratio(
            asset.days_since_recognised(first_date),
            recurrence.period_days(first_date),
        );
        let last_ratio = match dates.len() {
            1 => first_ratio,
            n => day_ratio(
                last_date - dates[n - 2],
                recurrence.period_days(last_date),
            ),
        };

        Some(Self {
            first_date,
            last_date,
            periods: dates.len(),
            first_ratio,
            last_ratio,
        })
    }

    /// Returns the weight of the first period.
    #[inline]
    pub fn first_ratio(&self) -> Decimal {
        self.first_ratio
    }

    /// Returns the weight of the last period.
    #[inline]
    pub fn last_ratio(&self) -> Decimal {
        self.last_ratio
    }

    /// Returns the number of periods (dates) weighted.
    #[inline]
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Returns the total weight of the sequence: full periods count 1 each
    /// and the first and last periods count their ratios.
    ///
    /// A single period counts its ratio once.
    pub fn denominator(&self) -> Decimal {
        match self.periods {
            1 => self.first_ratio,
            n => Decimal::from(n - 2) + self.first_ratio + self.last_ratio,
        }
    }

    /// Returns the weight of the period ending at `date`.
    ///
    /// Dates other than the first and last are full periods.
    pub fn ratio_for(&self, date: Date) -> Decimal {
        if date == self.first_date {
            self.first_ratio
        } else if date == self.last_date {
            self.last_ratio
        } else {
            Decimal::ONE
        }
    }

    /// Returns the unrounded share of `basis` recognised at `date`.
    ///
    /// A single-period sequence recognises the whole basis.
    pub fn amount_for(&self, basis: Decimal, date: Date) -> Decimal {
        if self.periods == 1 {
            return basis;
        }
        basis / self.denominator() * self.ratio_for(date)
    }
}

fn day_ratio(days: i64, period_days: u32) -> Decimal {
    Decimal::from(days) / Decimal::from(period_days)
}
