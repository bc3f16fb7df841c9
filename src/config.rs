//! API configuration loaded from TOML.
//!
//! ```
//! use cricrecords::ApiConfig;
//!
//! let config = ApiConfig::from_toml_str(r#"
//!     csv_separator = ";"
//!     max_page_size = 200
//! "#).unwrap();
//!
//! assert_eq!(config.csv_separator, ';');
//! assert_eq!(config.default_page_size, 50);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PageLimits;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings of the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Field separator of CSV exports.
    pub csv_separator: char,

    /// Leading part of export file names: `<prefix>-<category>-<slice>.csv`.
    pub export_file_prefix: String,

    /// Page size used when `pageSize` is absent.
    pub default_page_size: u32,

    /// Largest accepted `pageSize`.
    pub max_page_size: u32,

    /// Origins allowed by CORS. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let limits = PageLimits::default();
        Self {
            csv_separator: ',',
            export_file_prefix: "records".to_owned(),
            default_page_size: limits.default_page_size,
            max_page_size: limits.max_page_size,
            allowed_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.csv_separator, '"' | '\n' | '\r') {
            return Err(ConfigError::Invalid(format!(
                "csv_separator {:?} cannot delimit fields",
                self.csv_separator
            )));
        }
        let prefix_ok = !self.export_file_prefix.is_empty()
            && self
                .export_file_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !prefix_ok {
            return Err(ConfigError::Invalid(format!(
                "export_file_prefix {:?} must be non-empty ASCII letters, digits, '-', '_' or '.'",
                self.export_file_prefix
            )));
        }
        if self.allowed_origins.iter().any(|origin| origin.trim() == "*") {
            return Err(ConfigError::Invalid(
                "allowed_origins must list explicit origins; leave it empty to allow any"
                    .to_owned(),
            ));
        }
        if self.max_page_size == 0 {
            return Err(ConfigError::Invalid(
                "max_page_size must be positive".to_owned(),
            ));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::Invalid(format!(
                "default_page_size {} must be within 1..={}",
                self.default_page_size, self.max_page_size
            )));
        }
        Ok(())
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = ApiConfig::from_toml_str("").unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.csv_separator, ',');
        assert_eq!(config.export_file_prefix, "records");
        assert_eq!(config.page_limits(), PageLimits::default());
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn overrides_are_applied() {
        let config = ApiConfig::from_toml_str(
            r#"
            export_file_prefix = "cricket"
            default_page_size = 25
            max_page_size = 100
            allowed_origins = ["https://records.example"]
            "#,
        )
        .unwrap();
        assert_eq!(config.export_file_prefix, "cricket");
        assert_eq!(config.page_limits().default_page_size, 25);
        assert_eq!(config.allowed_origins, vec!["https://records.example"]);
    }

    #[test]
    fn inconsistent_page_sizes_are_rejected() {
        let err = ApiConfig::from_toml_str("default_page_size = 500\nmax_page_size = 100")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn header_unsafe_prefix_is_rejected() {
        let err = ApiConfig::from_toml_str("export_file_prefix = \"a\\\"b\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn wildcard_origin_is_rejected() {
        let err = ApiConfig::from_toml_str("allowed_origins = [\"*\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = ApiConfig::from_toml_str("max_page_size = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ApiConfig::load("/definitely/not/here/cricrecords.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
