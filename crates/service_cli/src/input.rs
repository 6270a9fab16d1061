//! Asset file loading
//!
//! Asset files are TOML or JSON, selected by extension:
//!
//! ```toml
//! value = "1200.00"
//! residual_value = "0"
//! start_date = "2024-01-01"
//! end_date = "2024-12-31"
//! frequency = "monthly"
//! currency = "EUR"
//!
//! [[posted_lines]]
//! date = "2024-01-31"
//! depreciation = "100.00"
//! ```

use std::path::Path;

use asset_core::types::{Currency, Date};
use asset_models::depreciation::{
    AssetSchedule, AssetScheduleBuilder, DepreciationMethod, Frequency, ScheduleLine,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, Result};

/// Asset definition as written in an asset file.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFile {
    pub value: Decimal,
    #[serde(default)]
    pub residual_value: Decimal,
    pub start_date: Date,
    pub end_date: Date,
    pub frequency: Frequency,
    #[serde(default)]
    pub depreciation_method: Option<DepreciationMethod>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub posted_lines: Vec<PostedLineFile>,
}

/// An already-recognised line in an asset file.
#[derive(Debug, Clone, Deserialize)]
pub struct PostedLineFile {
    pub date: Date,
    pub depreciation: Decimal,
    #[serde(default)]
    pub accumulated_depreciation: Option<Decimal>,
}

impl From<PostedLineFile> for ScheduleLine {
    fn from(line: PostedLineFile) -> Self {
        let mut posted = ScheduleLine::posted(line.date, line.depreciation);
        if let Some(accumulated) = line.accumulated_depreciation {
            posted.accumulated_depreciation = accumulated;
        }
        posted
    }
}

impl AssetFile {
    /// Reads and parses an asset file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |message: String| CliError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let asset: AssetFile = match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            other => return Err(CliError::UnsupportedFileType(other.to_string())),
        };

        debug!(
            path = %path.display(),
            posted_lines = asset.posted_lines.len(),
            "loaded asset file"
        );
        Ok(asset)
    }

    /// Validates the definition into an [`AssetSchedule`].
    pub fn into_schedule(self) -> Result<AssetSchedule> {
        let mut builder = AssetScheduleBuilder::new()
            .value(self.value)
            .residual_value(self.residual_value)
            .start(self.start_date)
            .end(self.end_date)
            .frequency(self.frequency)
            .posted_lines(self.posted_lines.into_iter().map(ScheduleLine::from));
        if let Some(method) = self.depreciation_method {
            builder = builder.method(method);
        }
        Ok(builder.build()?)
    }
}

/// Loads an asset file, returning the validated asset and the currency it
/// names, if any.
pub fn load_asset(path: &Path) -> Result<(AssetSchedule, Option<Currency>)> {
    let file = AssetFile::load(path)?;
    let currency = file.currency;
    Ok((file.into_schedule()?, currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_models::depreciation::AssetError;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_toml() {
        let file = write_file(
            ".toml",
            r#"
                value = "1200.00"
                start_date = "2024-01-01"
                end_date = "2024-12-31"
                frequency = "monthly"
                currency = "EUR"

                [[posted_lines]]
                date = "2024-01-31"
                depreciation = "100.00"

                [[posted_lines]]
                date = "2024-02-29"
                depreciation = "100.00"
                accumulated_depreciation = "200.00"
            "#,
        );

        let (asset, currency) = load_asset(file.path()).unwrap();
        assert_eq!(asset.value(), dec!(1200.00));
        assert_eq!(asset.residual_value(), Decimal::ZERO);
        assert_eq!(asset.frequency(), Frequency::Monthly);
        assert_eq!(asset.depreciation_method(), DepreciationMethod::Linear);
        assert_eq!(currency, Some(Currency::EUR));
        assert_eq!(asset.posted_lines().len(), 2);
        assert_eq!(asset.posted_lines()[1].accumulated_depreciation, dec!(200.00));
        assert_eq!(asset.depreciated_amount(), dec!(200.00));
    }

    #[test]
    fn test_load_json() {
        let file = write_file(
            ".json",
            r#"{
                "value": "1000.00",
                "residual_value": "200.00",
                "start_date": "2024-01-01",
                "end_date": "2027-12-31",
                "frequency": "yearly",
                "depreciation_method": "straight-line"
            }"#,
        );

        let (asset, currency) = load_asset(file.path()).unwrap();
        assert_eq!(asset.residual_value(), dec!(200.00));
        assert_eq!(asset.frequency(), Frequency::Yearly);
        assert_eq!(currency, None);
        assert!(asset.posted_lines().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = AssetFile::load(Path::new("/nonexistent/asset.toml"));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_file(".yaml", "value: 1");
        let result = AssetFile::load(file.path());
        assert!(matches!(result, Err(CliError::UnsupportedFileType(ext)) if ext == "yaml"));
    }

    #[test]
    fn test_parse_error() {
        let file = write_file(
            ".toml",
            r#"
                value = "1200.00"
                start_date = "2024-01-01"
                end_date = "2024-12-31"
                frequency = "weekly"
            "#,
        );
        assert!(matches!(
            AssetFile::load(file.path()),
            Err(CliError::Parse { .. })
        ));
    }

    #[test]
    fn test_validation_error() {
        let file = write_file(
            ".toml",
            r#"
                value = "1200.00"
                residual_value = "1500.00"
                start_date = "2024-01-01"
                end_date = "2024-12-31"
                frequency = "monthly"
            "#,
        );
        assert!(matches!(
            load_asset(file.path()),
            Err(CliError::Asset(AssetError::InvalidResidualValue { .. }))
        ));
    }
}
