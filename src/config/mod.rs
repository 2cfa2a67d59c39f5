//! Configuration loading and validation.
//!
//! Configuration lives in `<config dir>/lcdcalc/config.toml`. A missing
//! file means defaults; every section and field is optional.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigSource};
pub use types::{
    Config, DisplayConfig, DisplayStyle, HexColor, LoggingConfig, ThemeConfig, UiConfig,
};
