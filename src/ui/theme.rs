use crate::config::{HexColor, ThemeConfig};
use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const KEY_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const FUNCTION_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Colors that come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub display_fill: Color,
    pub register_fill: Color,
    pub accent: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            display_fill: to_color(config.display_fill),
            register_fill: to_color(config.register_fill),
            accent: to_color(config.accent),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

fn to_color(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
