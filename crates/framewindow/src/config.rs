//! Configuration management for framewindow.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "framewindow";

/// Environment variable prefix.
const ENV_PREFIX: &str = "FRAMEWINDOW_";

/// Frames retained by default: the previous frame and the current one.
const DEFAULT_CAPACITY: usize = 2;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FRAMEWINDOW_`)
/// 2. TOML config file at `~/.config/framewindow/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sliding window configuration.
    pub window: WindowConfig,
}

/// Sliding window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of most recent frames to retain. Must be at least 1.
    pub capacity: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl WindowConfig {
    /// The configured capacity, or `None` if it is zero.
    #[must_use]
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.capacity)
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `FRAMEWINDOW_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        debug!("Loading configuration from {}", config_file.display());

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed(ENV_PREFIX).split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.window.capacity == 0 {
            return Err(Error::ConfigValidation {
                message: "window.capacity must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.capacity, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_capacity_nonzero() {
        let window = WindowConfig { capacity: 5 };
        assert_eq!(window.capacity(), NonZeroUsize::new(5));

        let window = WindowConfig { capacity: 0 };
        assert!(window.capacity().is_none());
    }

    #[test]
    fn test_validate_zero_capacity() {
        let mut config = Config::default();
        config.window.capacity = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("window.capacity"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("framewindow"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r"
                [window]
                capacity = 8
                ",
            )?;

            let config = Config::load_from(Some(jail.directory().join("config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.window.capacity, 8);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r"
                [window]
                capacity = 8
                ",
            )?;
            jail.set_env("FRAMEWINDOW_WINDOW_CAPACITY", "16");

            let config = Config::load_from(Some(jail.directory().join("config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.window.capacity, 16);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_zero_capacity() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r"
                [window]
                capacity = 0
                ",
            )?;

            let result = Config::load_from(Some(jail.directory().join("config.toml")));
            assert!(matches!(result, Err(Error::ConfigValidation { .. })));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_malformed_value() {
        Jail::expect_with(|jail| {
            jail.set_env("FRAMEWINDOW_WINDOW_CAPACITY", "lots");

            let result = Config::load_from(Some(jail.directory().join("missing.toml")));
            assert!(matches!(result, Err(Error::ConfigLoad(_))));
            Ok(())
        });
    }

    #[test]
    fn test_window_config_serialize() {
        let window = WindowConfig::default();
        let json = serde_json::to_string(&window).unwrap();
        assert!(json.contains("capacity"));
    }

    #[test]
    fn test_window_config_deserialize_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"window": {"capacity": 4}}"#).unwrap();
        assert_eq!(config.window.capacity, 4);
    }
}
