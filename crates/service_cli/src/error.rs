//! CLI error types.

use std::path::PathBuf;

use asset_models::depreciation::AssetError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported asset file extension: {0}. Expected .toml or .json")]
    UnsupportedFileType(String),

    #[error("Invalid asset: {0}")]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::FileNotFound(PathBuf::from("missing.toml"));
        assert_eq!(err.to_string(), "File not found: missing.toml");

        let err = CliError::UnsupportedFileType("yaml".to_string());
        assert!(err.to_string().contains(".toml or .json"));
    }

    #[test]
    fn test_asset_error_conversion() {
        let err: CliError = AssetError::MissingField { field: "value" }.into();
        assert!(matches!(err, CliError::Asset(_)));
        assert!(err.to_string().starts_with("Invalid asset:"));
    }
}
