//! Monetary rounding trait.

use rust_decimal::Decimal;

use crate::types::{Currency, Rounding};

/// Rounds a computed monetary amount to the precision of a currency.
///
/// Schedule generators are generic over this trait so the surrounding
/// system can supply its own company or currency rounding policy.
///
/// # Examples
///
/// ```
/// use asset_core::traits::MonetaryRounding;
/// use asset_core::types::{Currency, Rounding, RoundingMode};
/// use rust_decimal::Decimal;
///
/// let amount = Decimal::new(12_345, 3); // 12.345
/// assert_eq!(Currency::USD.round(amount), Decimal::new(1_235, 2));
///
/// let bankers = Rounding::new(2, RoundingMode::HalfEven);
/// assert_eq!(bankers.round(amount), Decimal::new(1_234, 2));
/// ```
pub trait MonetaryRounding {
    /// Returns `amount` rounded to this policy's precision.
    fn round(&self, amount: Decimal) -> Decimal;
}

impl MonetaryRounding for Rounding {
    #[inline]
    fn round(&self, amount: Decimal) -> Decimal {
        self.apply(amount)
    }
}

impl MonetaryRounding for Currency {
    #[inline]
    fn round(&self, amount: Decimal) -> Decimal {
        self.rounding().apply(amount)
    }
}

impl<R: MonetaryRounding + ?Sized> MonetaryRounding for &R {
    #[inline]
    fn round(&self, amount: Decimal) -> Decimal {
        (**self).round(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoundingMode;
    use rust_decimal_macros::dec;

    struct WholeUnits;

    impl MonetaryRounding for WholeUnits {
        fn round(&self, amount: Decimal) -> Decimal {
            amount.trunc()
        }
    }

    fn round_with<R: MonetaryRounding>(rounding: R, amount: Decimal) -> Decimal {
        rounding.round(amount)
    }

    #[test]
    fn test_currency_rounding() {
        assert_eq!(Currency::EUR.round(dec!(99.995)), dec!(100.00));
        assert_eq!(Currency::JPY.round(dec!(99.5)), dec!(100));
    }

    #[test]
    fn test_custom_policy() {
        assert_eq!(round_with(WholeUnits, dec!(12.99)), dec!(12));
    }

    #[test]
    fn test_reference_forwarding() {
        let rounding = Rounding::new(1, RoundingMode::Down);
        assert_eq!(round_with(&rounding, dec!(3.99)), dec!(3.9));
    }
}
