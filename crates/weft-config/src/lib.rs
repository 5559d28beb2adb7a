//! Weft configuration system
//!
//! Loads settings from `weft.toml`, with environment variables taking
//! precedence over file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name looked up by [`WeftConfig::load_or_default`].
pub const DEFAULT_CONFIG_FILE: &str = "weft.toml";

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeftConfig {
    /// Text conversion settings
    pub text: TextConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Text conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Buffers at least this many UTF-16 code units long get a precomputed
    /// boundary table instead of a rescan per query
    pub boundary_cache_threshold: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter directive, e.g. "warn" or "weft_text=trace"
    pub filter: Option<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            boundary_cache_threshold: 4096,
        }
    }
}

impl WeftConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or is not valid TOML
    /// for this structure.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `weft.toml` in the current directory, or
    /// return the defaults if it is missing or invalid
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("WEFT_CACHE_THRESHOLD") {
            if let Ok(threshold) = val.parse::<usize>() {
                self.text.boundary_cache_threshold = threshold;
            }
        }
        if let Ok(filter) = std::env::var("WEFT_LOG") {
            self.logging.filter = Some(filter);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from weft.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WeftConfig::default();
        assert_eq!(config.text.boundary_cache_threshold, 4096);
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let config = WeftConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: WeftConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.text.boundary_cache_threshold, 4096);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed: WeftConfig = toml::from_str("[logging]\nfilter = \"debug\"\n").unwrap();
        assert_eq!(parsed.logging.filter.as_deref(), Some("debug"));
        assert_eq!(parsed.text.boundary_cache_threshold, 4096);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WeftConfig::load_from_file("does-not-exist/weft.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("WEFT_CACHE_THRESHOLD", "16");
            std::env::set_var("WEFT_LOG", "weft_text=trace");
        }

        let mut config = WeftConfig::default();
        config.merge_with_env();

        assert_eq!(config.text.boundary_cache_threshold, 16);
        assert_eq!(config.logging.filter.as_deref(), Some("weft_text=trace"));

        unsafe {
            std::env::remove_var("WEFT_CACHE_THRESHOLD");
            std::env::remove_var("WEFT_LOG");
        }
    }
}
