use crate::ui::calculator::Mode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints as `(key, action)`. The Enter hint depends on the mode and
/// goes before Quit.
const HINTS: [(&str, &str); 3] = [("~", "±"), ("Bksp", "AC"), ("q", "Quit")];

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, mode: Mode, accent: Color) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let key_style = Style::default().fg(accent);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let equals = match mode {
            Mode::ResultShown => ("Enter", "repeat"),
            _ => ("Enter", "="),
        };

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (index, (key, action)) in HINTS[..2]
            .iter()
            .chain(std::iter::once(&equals))
            .chain(&HINTS[2..])
            .enumerate()
        {
            if index > 0 {
                spans.push(Span::styled(" │ ", separator_style));
                used += 3;
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {action}"), text_style));
            used += key.chars().count() + action.chars().count() + 2;
        }

        // Version sits flush right when there is room for it.
        let version = format!("v{VERSION} ");
        let inner_width = area.width.saturating_sub(2) as usize;
        let version_width = version.chars().count();
        if used + version_width <= inner_width {
            spans.push(Span::raw(" ".repeat(inner_width - used - version_width)));
            spans.push(Span::styled(version, text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
