//! Calculator configuration
//!
//! Presentation settings loaded from YAML or JSON. Every field has a default,
//! so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default entry length above which the compact font is used
pub const DEFAULT_COMPACT_THRESHOLD: usize = 12;
/// Default font size for short entries
pub const DEFAULT_NORMAL_FONT_SIZE: &str = "2.5em";
/// Default font size for long entries
pub const DEFAULT_COMPACT_FONT_SIZE: &str = "1.8em";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// YAML could not be deserialized
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON could not be deserialized
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not a known format
    #[error("Unsupported config format: {path}")]
    UnsupportedFormat {
        /// Offending path
        path: String,
    },

    /// Values parsed but are not usable
    #[error("Invalid config: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

/// Display presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Entries longer than this many characters use the compact font
    pub compact_threshold: usize,
    /// CSS font size for short entries
    pub normal_font_size: String,
    /// CSS font size for long entries
    pub compact_font_size: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compact_threshold: DEFAULT_COMPACT_THRESHOLD,
            normal_font_size: DEFAULT_NORMAL_FONT_SIZE.to_string(),
            compact_font_size: DEFAULT_COMPACT_FONT_SIZE.to_string(),
        }
    }
}

/// Top-level calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display settings
    pub display: DisplayConfig,
}

impl CalculatorConfig {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> CalculatorConfigBuilder {
        CalculatorConfigBuilder::default()
    }

    /// Parses a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a JSON document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, choosing the format from its extension
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Checks that values are usable
    pub fn validate(&self) -> ConfigResult<()> {
        let display = &self.display;
        if display.compact_threshold == 0 {
            return Err(ConfigError::Invalid {
                message: "display.compact_threshold must be at least 1".to_string(),
            });
        }
        if display.normal_font_size.trim().is_empty() || display.compact_font_size.trim().is_empty()
        {
            return Err(ConfigError::Invalid {
                message: "display font sizes must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for `CalculatorConfig`
#[derive(Debug, Clone, Default)]
pub struct CalculatorConfigBuilder {
    config: CalculatorConfig,
}

impl CalculatorConfigBuilder {
    /// Set the compact-font threshold
    #[must_use]
    pub fn compact_threshold(mut self, threshold: usize) -> Self {
        self.config.display.compact_threshold = threshold;
        self
    }

    /// Set the normal font size
    #[must_use]
    pub fn normal_font_size(mut self, size: impl Into<String>) -> Self {
        self.config.display.normal_font_size = size.into();
        self
    }

    /// Set the compact font size
    #[must_use]
    pub fn compact_font_size(mut self, size: impl Into<String>) -> Self {
        self.config.display.compact_font_size = size.into();
        self
    }

    /// Build the configuration, validating it
    pub fn build(self) -> ConfigResult<CalculatorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
