//! Linear depreciation scheduler.

use asset_core::traits::MonetaryRounding;
use asset_core::types::Date;
use rust_decimal::Decimal;
use tracing::debug;

use super::asset::AssetSchedule;
use super::dates::depreciation_dates;
use super::line::{DepreciationSchedule, ScheduleLine};
use super::proration::Proration;

/// Computes the remaining depreciation schedule of an asset.
///
/// The scheduler is a pure function of the asset and the rounding policy:
/// it never mutates the asset's posted history and repeated calls return
/// identical schedules.
///
/// # Type Parameters
///
/// * `R` - Rounding policy applied to each line's amount
///
/// # Examples
///
/// ```
/// use asset_core::types::{Date, Rounding, RoundingMode};
/// use asset_models::depreciation::{AssetScheduleBuilder, DepreciationScheduler, Frequency};
/// use rust_decimal::Decimal;
///
/// let asset = AssetScheduleBuilder::new()
///     .value(Decimal::new(1000, 0))
///     .start(Date::from_ymd(2024, 1, 1).unwrap())
///     .end(Date::from_ymd(2024, 3, 31).unwrap())
///     .frequency(Frequency::Monthly)
///     .build()
///     .unwrap();
///
/// let scheduler = DepreciationScheduler::new(&asset, Rounding::new(2, RoundingMode::HalfUp));
/// let schedule = scheduler.depreciate();
///
/// // 333.33 + 333.33 + 333.34
/// assert_eq!(schedule.len(), 3);
/// assert_eq!(schedule.last().unwrap().depreciation, Decimal::new(33334, 2));
/// assert_eq!(schedule.total_depreciation(), Decimal::new(1000, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DepreciationScheduler<'a, R> {
    asset: &'a AssetSchedule,
    rounding: R,
}

impl<'a, R: MonetaryRounding> DepreciationScheduler<'a, R> {
    /// Creates a scheduler for `asset` rounding each line with `rounding`.
    pub fn new(asset: &'a AssetSchedule, rounding: R) -> Self {
        Self { asset, rounding }
    }

    /// Returns the asset being scheduled.
    #[inline]
    pub fn asset(&self) -> &AssetSchedule {
        self.asset
    }

    /// Returns the remaining depreciation dates.
    pub fn dates(&self) -> Vec<Date> {
        depreciation_dates(self.asset)
    }

    /// Returns the amount left to spread over the remaining dates.
    #[inline]
    pub fn depreciable_basis(&self) -> Decimal {
        self.asset.depreciable_basis()
    }

    /// Returns the rounded depreciation recognised at `date`.
    ///
    /// `dates` is the sequence returned by [`Self::dates`]. Returns zero if
    /// nothing is left to depreciate or `dates` is empty. The overshoot
    /// guard and residual sweep of [`Self::depreciate`] are not applied.
    pub fn depreciation_at(&self, date: Date, dates: &[Date]) -> Decimal {
        let basis = self.depreciable_basis();
        if basis <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        match Proration::new(self.asset, dates) {
            Some(proration) => self.rounding.round(proration.amount_for(basis, date)),
            None => Decimal::ZERO,
        }
    }

    /// Computes the remaining schedule.
    ///
    /// Each line's amount is prorated and rounded individually. A line that
    /// would exceed what is left to depreciate is clamped and ends the
    /// schedule early. Otherwise any rounding remainder is added to the
    /// last line, so the new lines always sum to the depreciable basis.
    ///
    /// Returns an empty schedule when the basis is already exhausted.
    pub fn depreciate(&self) -> DepreciationSchedule {
        let mut schedule = DepreciationSchedule::new();

        let basis = self.depreciable_basis();
        if basis <= Decimal::ZERO {
            debug!(%basis, "nothing left to depreciate");
            return schedule;
        }

        let dates = self.dates();
        let Some(proration) = Proration::new(self.asset, &dates) else {
            return schedule;
        };
        debug!(
            %basis,
            periods = proration.periods(),
            first_ratio = %proration.first_ratio(),
            last_ratio = %proration.last_ratio(),
            "computing depreciation schedule"
        );

        let value = self.asset.value();
        let prior = self.asset.depreciated_amount();
        let mut remaining = basis;
        let mut accumulated = Decimal::ZERO;
        let mut paid_off = false;

        for &date in &dates {
            let amount = self.rounding.round(proration.amount_for(basis, date));

            let depreciation = if amount > remaining {
                debug!(%date, %amount, %remaining, "clamping final depreciation");
                paid_off = true;
                remaining
            } else {
                amount
            };
            remaining -= depreciation;
            accumulated += depreciation;

            schedule.insert(ScheduleLine {
                date,
                acquired_value: value,
                depreciable_basis: basis,
                depreciation,
                accumulated_depreciation: prior + accumulated,
                actual_value: Decimal::ZERO,
            });

            if paid_off {
                break;
            }
        }

        if !paid_off && remaining > Decimal::ZERO {
            if let Some(last) = schedule.last_mut() {
                debug!(date = %last.date, %remaining, "sweeping rounding remainder");
                last.depreciation += remaining;
                last.accumulated_depreciation += remaining;
            }
        }

        for line in schedule.lines_mut() {
            line.actual_value = value - line.accumulated_depreciation;
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depreciation::{AssetScheduleBuilder, Frequency};
    use asset_core::types::{Currency, Rounding, RoundingMode};
    use rust_decimal_macros::dec;

    fn ymd(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn monthly(value: Decimal, start: Date, end: Date) -> AssetScheduleBuilder {
        AssetScheduleBuilder::new()
            .value(value)
            .start(start)
            .end(end)
            .frequency(Frequency::Monthly)
    }

    /// Rounds every amount up to the next whole unit.
    struct Ceiling;

    impl MonetaryRounding for Ceiling {
        fn round(&self, amount: Decimal) -> Decimal {
            amount.ceil()
        }
    }

    #[test]
    fn test_even_split() {
        let asset = monthly(dec!(1200.00), ymd(2024, 1, 1), ymd(2024, 12, 31))
            .build()
            .unwrap();
        let schedule = DepreciationScheduler::new(&asset, Currency::USD).depreciate();

        assert_eq!(schedule.len(), 12);
        for line in &schedule {
            assert_eq!(line.depreciation, dec!(100.00));
            assert_eq!(line.acquired_value, dec!(1200.00));
            assert_eq!(line.depreciable_basis, dec!(1200.00));
        }
        let last = schedule.last().unwrap();
        assert_eq!(last.accumulated_depreciation, dec!(1200.00));
        assert_eq!(last.actual_value, dec!(0.00));
    }

    #[test]
    fn test_residual_sweep_absorbs_rounding() {
        let asset = monthly(dec!(100), ymd(2024, 1, 1), ymd(2024, 3, 31))
            .build()
            .unwrap();
        let schedule = DepreciationScheduler::new(&asset, Currency::USD).depreciate();
        let lines = schedule.into_lines();

        assert_eq!(lines[0].depreciation, dec!(33.33));
        assert_eq!(lines[1].depreciation, dec!(33.33));
        assert_eq!(lines[2].depreciation, dec!(33.34));
        assert_eq!(lines[2].accumulated_depreciation, dec!(100));
        assert_eq!(lines[2].actual_value, dec!(0));
    }

    #[test]
    fn test_overshoot_guard_stops_early() {
        // 100 / 3 rounds up to 34 each: 34 + 34 + 32
        let asset = monthly(dec!(100), ymd(2024, 1, 1), ymd(2024, 3, 31))
            .build()
            .unwrap();
        let schedule = DepreciationScheduler::new(&asset, Ceiling).depreciate();
        let lines = schedule.into_lines();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].depreciation, dec!(34));
        assert_eq!(lines[1].depreciation, dec!(34));
        assert_eq!(lines[2].depreciation, dec!(32));
        assert_eq!(lines[2].accumulated_depreciation, dec!(100));
    }

    #[test]
    fn test_overshoot_guard_drops_remaining_dates() {
        // 10 / 12 rounds up to 1 per month, exhausted after ten lines
        let asset = monthly(dec!(10), ymd(2024, 1, 1), ymd(2024, 12, 31))
            .build()
            .unwrap();
        let schedule = DepreciationScheduler::new(&asset, Ceiling).depreciate();

        assert!(schedule.len() < 12);
        assert_eq!(schedule.total_depreciation(), dec!(10));
        assert_eq!(schedule.last().unwrap().actual_value, dec!(0));
    }

    #[test]
    fn test_residual_value_is_kept() {
        let asset = AssetScheduleBuilder::new()
            .value(dec!(1000.00))
            .residual_value(dec!(200.00))
            .start(ymd(2024, 1, 1))
            .end(ymd(2027, 12, 31))
            .frequency(Frequency::Yearly)
            .build()
            .unwrap();
        let schedule = DepreciationScheduler::new(&asset, Currency::EUR).depreciate();

        assert_eq!(schedule.len(), 4);
        assert!(schedule.iter().all(|l| l.depreciation == dec!(200.00)));
        assert_eq!(schedule.last().unwrap().actual_value, dec!(200.00));
    }

    #[test]
    fn test_continues_after_posted_lines() {
        let asset = monthly(dec!(1200.00), ymd(2024, 1, 1), ymd(2024, 12, 31))
            .posted_lines([
                ScheduleLine::posted(ymd(2024, 1, 31), dec!(100.00)),
                ScheduleLine::posted(ymd(2024, 2, 29), dec!(100.00)),
            ])
            .build()
            .unwrap();
        let scheduler = DepreciationScheduler::new(&asset, Currency::USD);
        assert_eq!(scheduler.depreciable_basis(), dec!(1000.00));

        let schedule = scheduler.depreciate();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule.first().unwrap().date, ymd(2024, 3, 31));
        assert_eq!(schedule.first().unwrap().depreciation, dec!(100.00));
        assert_eq!(
            schedule.first().unwrap().accumulated_depreciation,
            dec!(300.00)
        );
        assert_eq!(
            schedule.last().unwrap().accumulated_depreciation,
            dec!(1200.00)
        );
    }

    #[test]
    fn test_exhausted_basis_is_empty() {
        let asset = monthly(dec!(1000.00), ymd(2024, 1, 1), ymd(2024, 12, 31))
            .residual_value(dec!(200.00))
            .posted_line(ScheduleLine::posted(ymd(2024, 3, 31), dec!(900.00)))
            .build()
            .unwrap();
        let scheduler = DepreciationScheduler::new(&asset, Currency::USD);

        assert!(scheduler.depreciable_basis() < Decimal::ZERO);
        assert!(scheduler.depreciate().is_empty());
        assert_eq!(
            scheduler.depreciation_at(ymd(2024, 4, 30), &scheduler.dates()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_depreciation_at() {
        let asset = monthly(dec!(1200.00), ymd(2024, 1, 15), ymd(2024, 12, 31))
            .build()
            .unwrap();
        let scheduler = DepreciationScheduler::new(&asset, Currency::USD);
        let dates = scheduler.dates();

        let first = scheduler.depreciation_at(dates[0], &dates);
        let middle = scheduler.depreciation_at(dates[5], &dates);
        assert!(first < middle);
        assert_eq!(scheduler.depreciation_at(dates[11], &dates), middle);
        assert_eq!(scheduler.depreciation_at(dates[0], &[]), Decimal::ZERO);
    }

    #[test]
    fn test_rounding_mode_changes_amounts() {
        // 0.05 / 2 = 0.025 per month
        let asset = monthly(dec!(0.05), ymd(2024, 1, 1), ymd(2024, 2, 29))
            .build()
            .unwrap();

        let half_up = DepreciationScheduler::new(&asset, Rounding::new(2, RoundingMode::HalfUp))
            .depreciate()
            .into_lines();
        assert_eq!(half_up[0].depreciation, dec!(0.03));
        assert_eq!(half_up[1].depreciation, dec!(0.02));

        let half_even =
            DepreciationScheduler::new(&asset, Rounding::new(2, RoundingMode::HalfEven))
                .depreciate()
                .into_lines();
        assert_eq!(half_even[0].depreciation, dec!(0.02));
        assert_eq!(half_even[1].depreciation, dec!(0.03));
    }

    #[test]
    fn test_deterministic() {
        let asset = monthly(dec!(12345.67), ymd(2023, 5, 17), ymd(2031, 8, 9))
            .residual_value(dec!(345.67))
            .build()
            .unwrap();
        let scheduler = DepreciationScheduler::new(&asset, Currency::USD);
        assert_eq!(scheduler.depreciate(), scheduler.depreciate());
    }
}
