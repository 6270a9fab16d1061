//! Depreciation method enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::AssetError;

/// Rule used to spread the depreciable basis over the schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DepreciationMethod {
    /// Straight-line: equal amounts per full period, partial first and
    /// last periods weighted by their share of days.
    #[default]
    Linear,
}

impl DepreciationMethod {
    /// Returns the standard name for this method.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            DepreciationMethod::Linear => "linear",
        }
    }
}

impl fmt::Display for DepreciationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DepreciationMethod {
    type Err = AssetError;

    /// Parses a method name (case-insensitive): "linear", "straight-line", "sln".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "linear" | "straightline" | "sln" => Ok(DepreciationMethod::Linear),
            _ => Err(AssetError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DepreciationMethod;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DepreciationMethod {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DepreciationMethod {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DepreciationMethod::from_str(&s).map_err(de::Error::custom)
        }
    }
}
