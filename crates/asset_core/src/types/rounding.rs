//! Monetary rounding rules.
//!
//! A [`Rounding`] pairs a decimal precision with a [`RoundingMode`]. It is
//! applied to each computed depreciation amount individually, never to an
//! aggregate.
//!
//! # Examples
//!
//! ```
//! use asset_core::types::{Rounding, RoundingMode};
//! use rust_decimal::Decimal;
//!
//! let bankers = Rounding::new(2, RoundingMode::HalfEven);
//! assert_eq!(bankers.apply(Decimal::new(1_005, 3)), Decimal::new(100, 2)); // 1.005 -> 1.00
//!
//! let half_up = Rounding::new(2, RoundingMode::HalfUp);
//! assert_eq!(half_up.apply(Decimal::new(1_005, 3)), Decimal::new(101, 2)); // 1.005 -> 1.01
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::RoundingError;

/// How a midpoint (or any excess digit) is resolved when rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Midpoints round away from zero (commercial rounding).
    #[default]
    HalfUp,
    /// Midpoints round to the nearest even digit (banker's rounding).
    HalfEven,
    /// Excess digits are truncated toward zero.
    Down,
}

impl RoundingMode {
    /// Returns the canonical name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::Down => "down",
        }
    }

    fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Down => RoundingStrategy::ToZero,
        }
    }
}

impl FromStr for RoundingMode {
    type Err = RoundingError;

    /// Parses a rounding mode (case-insensitive).
    ///
    /// - HalfUp: "half-up", "halfup", "commercial"
    /// - HalfEven: "half-even", "halfeven", "bankers", "banker"
    /// - Down: "down", "truncate"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' ', '\''], "").as_str() {
            "halfup" | "commercial" => Ok(RoundingMode::HalfUp),
            "halfeven" | "bankers" | "banker" => Ok(RoundingMode::HalfEven),
            "down" | "truncate" => Ok(RoundingMode::Down),
            _ => Err(RoundingError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::RoundingMode;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for RoundingMode {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for RoundingMode {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            RoundingMode::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Decimal precision plus rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rounding {
    decimal_places: u32,
    mode: RoundingMode,
}

impl Rounding {
    /// Creates a rounding rule with an explicit precision and mode.
    pub fn new(decimal_places: u32, mode: RoundingMode) -> Self {
        Self {
            decimal_places,
            mode,
        }
    }

    /// Returns the standard rounding of `currency` (its precision, half-up).
    pub fn for_currency(currency: Currency) -> Self {
        Self::new(currency.decimal_places(), RoundingMode::HalfUp)
    }

    /// Replaces the rounding mode, keeping the precision.
    pub fn with_mode(self, mode: RoundingMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns the number of decimal places kept.
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Returns the rounding mode.
    pub fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Rounds `amount` to this rule's precision.
    #[inline]
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.decimal_places, self.mode.strategy())
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Self::for_currency(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_up() {
        let rounding = Rounding::new(2, RoundingMode::HalfUp);
        assert_eq!(rounding.apply(dec!(2.345)), dec!(2.35));
        assert_eq!(rounding.apply(dec!(2.355)), dec!(2.36));
        assert_eq!(rounding.apply(dec!(-2.345)), dec!(-2.35));
        assert_eq!(rounding.apply(dec!(2.344)), dec!(2.34));
    }

    #[test]
    fn test_half_even() {
        let rounding = Rounding::new(2, RoundingMode::HalfEven);
        assert_eq!(rounding.apply(dec!(2.345)), dec!(2.34));
        assert_eq!(rounding.apply(dec!(2.355)), dec!(2.36));
        assert_eq!(rounding.apply(dec!(2.3451)), dec!(2.35));
    }

    #[test]
    fn test_down() {
        let rounding = Rounding::new(2, RoundingMode::Down);
        assert_eq!(rounding.apply(dec!(2.349)), dec!(2.34));
        assert_eq!(rounding.apply(dec!(-2.349)), dec!(-2.34));
    }

    #[test]
    fn test_zero_decimal_places() {
        let rounding = Rounding::for_currency(Currency::JPY);
        assert_eq!(rounding.apply(dec!(1234.5)), dec!(1235));
        assert_eq!(rounding.apply(dec!(1234.4)), dec!(1234));
    }

    #[test]
    fn test_with_mode() {
        let rounding = Rounding::for_currency(Currency::EUR).with_mode(RoundingMode::HalfEven);
        assert_eq!(rounding.decimal_places(), 2);
        assert_eq!(rounding.mode(), RoundingMode::HalfEven);
    }

    #[test]
    fn test_default_rounding() {
        let rounding = Rounding::default();
        assert_eq!(rounding.decimal_places(), 2);
        assert_eq!(rounding.mode(), RoundingMode::HalfUp);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("half-up".parse::<RoundingMode>().unwrap(), RoundingMode::HalfUp);
        assert_eq!("HALF_EVEN".parse::<RoundingMode>().unwrap(), RoundingMode::HalfEven);
        assert_eq!("banker's".parse::<RoundingMode>().unwrap(), RoundingMode::HalfEven);
        assert_eq!("truncate".parse::<RoundingMode>().unwrap(), RoundingMode::Down);
        assert!("ceiling".parse::<RoundingMode>().is_err());
    }

    #[test]
    fn test_mode_display_roundtrip() {
        for mode in [RoundingMode::HalfUp, RoundingMode::HalfEven, RoundingMode::Down] {
            assert_eq!(mode.to_string().parse::<RoundingMode>().unwrap(), mode);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&RoundingMode::HalfEven).unwrap();
        assert_eq!(json, "\"half-even\"");
        let parsed: RoundingMode = serde_json::from_str("\"bankers\"").unwrap();
        assert_eq!(parsed, RoundingMode::HalfEven);
    }
}
