use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Largest accepted `display.max_digits`.
const MAX_DIGITS_LIMIT: usize = 32;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// Nothing at this path; built-in defaults are in use.
    Defaults(PathBuf),
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/lcdcalc/config.toml` on Linux, or the equivalent
    /// on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lcdcalc").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// See [`Config::load_or_default`].
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_or_default(&Self::config_path())
    }

    /// Loads `path` if it exists, otherwise returns `Config::default()`.
    ///
    /// The returned [`ConfigSource`] says which happened, so the caller can
    /// log it once its subscriber is installed.
    pub fn load_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if !path.exists() {
            return Ok((Config::default(), ConfigSource::Defaults(path.to_path_buf())));
        }

        let config = Self::load_from(path)?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Loads configuration from an explicit path.
    ///
    /// The file must exist; it is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `display.max_digits` is between 1 and 32
    /// - `ui.tick_rate_ms` is positive
    /// - `logging.level` is a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_digits = self.display.max_digits;
        if max_digits == 0 || max_digits > MAX_DIGITS_LIMIT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "display.max_digits must be between 1 and {}, got {}",
                    MAX_DIGITS_LIMIT, max_digits
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::ValidationError {
                message: format!("logging.level '{}' is invalid: {}", self.logging.level, err),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_max_digits_is_rejected() {
        let mut config = Config::default();
        config.display.max_digits = 0;
        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("display.max_digits"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let mut config = Config::default();
        config.ui.tick_rate_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = Path::new("/nonexistent/lcdcalc/config.toml");
        let (config, source) = Config::load_or_default(path).expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Defaults(path.to_path_buf()));
    }

    #[test]
    fn config_path_ends_with_expected() {
        assert!(Config::config_path().ends_with("lcdcalc/config.toml"));
    }
}
