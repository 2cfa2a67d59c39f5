use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the main display is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// Seven-segment glyphs, three rows tall.
    #[default]
    Segments,
    /// Plain text, one row.
    Plain,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters shown of the display and register text (default: 10).
    #[serde(default = "default_max_digits")]
    pub max_digits: usize,
    #[serde(default)]
    pub style: DisplayStyle,
}

/// Colors, as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_display_fill")]
    pub display_fill: HexColor,
    #[serde(default = "default_register_fill")]
    pub register_fill: HexColor,
    #[serde(default = "default_accent")]
    pub accent: HexColor,
}

/// Interaction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds; a pressed key stays lit for one tick.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on the keypad.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `LCDCALC_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path (default: `<cache dir>/lcdcalc/lcdcalc.log`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// An RGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color '{value}', expected #RRGGBB"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_max_digits() -> usize {
    10
}

fn default_display_fill() -> HexColor {
    HexColor::new(0xaa, 0xaa, 0xaa)
}

fn default_register_fill() -> HexColor {
    HexColor::new(0x99, 0x99, 0x99)
}

fn default_accent() -> HexColor {
    HexColor::new(0xda, 0x77, 0x56)
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_digits: default_max_digits(),
            style: DisplayStyle::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            display_fill: default_display_fill(),
            register_fill: default_register_fill(),
            accent: default_accent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_parses_both_cases() {
        assert_eq!(HexColor::parse("#aaBB10"), Some(HexColor::new(0xaa, 0xbb, 0x10)));
        assert_eq!(HexColor::new(0xda, 0x77, 0x56).to_string(), "#DA7756");
    }

    #[test]
    fn hex_color_rejects_malformed_text() {
        assert_eq!(HexColor::parse("aabbcc"), None);
        assert_eq!(HexColor::parse("#abc"), None);
        assert_eq!(HexColor::parse("#gg0000"), None);
        assert_eq!(HexColor::parse("#ééé"), None);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").expect("parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.display.max_digits, 10);
        assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r##"
[display]
style = "plain"

[theme]
accent = "#00FF00"
"##,
        )
        .expect("parse");
        assert_eq!(config.display.style, DisplayStyle::Plain);
        assert_eq!(config.display.max_digits, 10);
        assert_eq!(config.theme.accent, HexColor::new(0, 0xff, 0));
        assert_eq!(config.theme.display_fill, default_display_fill());
    }
}
