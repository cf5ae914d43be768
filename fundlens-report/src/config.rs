//! Serializable report configuration.

use std::path::{Path, PathBuf};

use fundlens_core::{DrillDownLimits, TrendMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`ReportConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings shared by every view.
///
/// Every field has a default, so an empty TOML file is a valid config:
///
/// ```toml
/// data_path = "startup_funding_cleaned.csv"
/// recent_limit = 5
/// top_limit = 5
/// currency_label = "Cr"
/// trend_mode = "total"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Funding CSV to load when none is given on the command line.
    pub data_path: Option<PathBuf>,

    /// Rows in "recent investments" tables.
    pub recent_limit: usize,

    /// Entries in "top startups" rankings.
    pub top_limit: usize,

    /// Unit suffix printed after amounts.
    pub currency_label: String,

    /// Default month-over-month mode for the overview.
    pub trend_mode: TrendMode,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let limits = DrillDownLimits::default();
        Self {
            data_path: None,
            recent_limit: limits.recent,
            top_limit: limits.top,
            currency_label: "Cr".to_string(),
            trend_mode: TrendMode::Total,
        }
    }
}

impl ReportConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: ReportConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_limit == 0 {
            return Err(ConfigError::Invalid("recent_limit must be at least 1".into()));
        }
        if self.top_limit == 0 {
            return Err(ConfigError::Invalid("top_limit must be at least 1".into()));
        }
        Ok(())
    }

    pub fn limits(&self) -> DrillDownLimits {
        DrillDownLimits {
            recent: self.recent_limit,
            top: self.top_limit,
        }
    }
}
