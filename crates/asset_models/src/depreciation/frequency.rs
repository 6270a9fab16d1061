//! Depreciation frequency enumeration.

use asset_core::types::Recurrence;
use std::fmt;
use std::str::FromStr;

use super::error::AssetError;

/// How often depreciation is recognised.
///
/// # Examples
///
/// ```
/// use asset_models::depreciation::Frequency;
/// use asset_core::types::Recurrence;
///
/// let freq: Frequency = "monthly".parse().unwrap();
/// assert_eq!(freq.recurrence(), Recurrence::MonthEnd);
/// assert_eq!(freq.periods_per_year(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// Depreciation recognised on the last day of every month.
    Monthly,
    /// Depreciation recognised on December 31 of every year.
    Yearly,
}

impl Frequency {
    /// Returns the recurrence rule anchoring this frequency's dates.
    #[inline]
    pub fn recurrence(&self) -> Recurrence {
        match self {
            Frequency::Monthly => Recurrence::MonthEnd,
            Frequency::Yearly => Recurrence::YearEnd,
        }
    }

    /// Returns the number of depreciation periods per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Monthly => 12,
            Frequency::Yearly => 1,
        }
    }

    /// Returns the standard name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = AssetError;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Monthly: "monthly", "month", "1m"
    /// - Yearly: "yearly", "year", "annual", "1y", "12m"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "monthly" | "month" | "1m" => Ok(Frequency::Monthly),
            "yearly" | "year" | "annual" | "1y" | "12m" => Ok(Frequency::Yearly),
            _ => Err(AssetError::UnknownFrequency(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Frequency;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Frequency {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Frequency {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Frequency::from_str(&s).map_err(de::Error::custom)
        }
    }
}
