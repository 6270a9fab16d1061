//! Remaining depreciation dates.

use asset_core::types::Date;

use super::asset::AssetSchedule;

/// Returns the dates at which the remaining depreciation is recognised.
///
/// Dates are the frequency's period ends (month ends or December 31)
/// from the first unposted day up to, but excluding, the end date,
/// followed by the end date itself. When the effective start (the later
/// of the start date and the latest posted date) equals the end date the
/// result is just `[end_date]`.
///
/// The result is non-empty, strictly increasing and always ends with the
/// asset's end date.
///
/// # Examples
///
/// ```
/// use asset_core::types::Date;
/// use asset_models::depreciation::{depreciation_dates, AssetScheduleBuilder, Frequency};
/// use rust_decimal::Decimal;
///
/// let asset = AssetScheduleBuilder::new()
///     .value(Decimal::new(1000, 0))
///     .start(Date::from_ymd(2024, 1, 15).unwrap())
///     .end(Date::from_ymd(2024, 4, 10).unwrap())
///     .frequency(Frequency::Monthly)
///     .build()
///     .unwrap();
///
/// let dates = depreciation_dates(&asset);
/// assert_eq!(
///     dates,
///     vec![
///         Date::from_ymd(2024, 1, 31).unwrap(),
///         Date::from_ymd(2024, 2, 29).unwrap(),
///         Date::from_ymd(2024, 3, 31).unwrap(),
///         Date::from_ymd(2024, 4, 10).unwrap(),
///     ]
/// );
/// ```
pub fn depreciation_dates(asset: &AssetSchedule) -> Vec<Date> {
    let end = asset.end_date();

    if asset.effective_start() == end {
        return vec![end];
    }

    let recurrence = asset.frequency().recurrence();
    let mut dates = asset
        .first_unposted_day()
        .map(|from| recurrence.occurrences(from, end))
        .unwrap_or_default();
    dates.push(end);
    dates
}
