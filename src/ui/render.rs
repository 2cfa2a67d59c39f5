use crate::config::DisplayStyle;
use crate::ui::app::App;
use crate::ui::calculator::CalcIntent;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::keypad::{self, ButtonKind, KeypadButton};
use crate::ui::layout::layout_regions;
use crate::ui::lcd;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, FUNCTION_TEXT, GLOBAL_BORDER, KEY_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let theme = app.appearance().theme;

    let header = Header::new();
    frame.render_widget(
        header.widget(app.calculator().mode, theme.accent),
        regions.header,
    );
    draw_display(frame, app, regions.display);
    draw_keypad(frame, app, regions.keypad);
    let footer = Footer::new();
    frame.render_widget(
        footer.widget(regions.footer, app.calculator().mode, theme.accent),
        regions.footer,
    );
}

fn draw_display(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.calculator();
    let appearance = app.appearance();
    let theme = appearance.theme;
    let register_style = Style::default().fg(theme.register_fill);
    let display_style = Style::default().fg(theme.display_fill);

    // The register line is blank while a result is shown.
    let register_line = match state.pending_operation() {
        Some(op) => Line::from(vec![
            Span::styled(
                lcd::visible_text(&state.register, appearance.max_digits),
                register_style,
            ),
            Span::styled(format!(" {}", op.symbol()), Style::default().fg(theme.accent)),
        ]),
        None => Line::from(""),
    };

    let visible = lcd::visible_text(&state.display, appearance.max_digits);
    let mut lines = vec![register_line];
    match appearance.style {
        DisplayStyle::Segments => {
            lines.extend(
                lcd::render_rows(&visible)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, display_style))),
            );
        }
        DisplayStyle::Plain => {
            let text = if visible.is_empty() { "0".to_string() } else { visible };
            lines.push(Line::from(Span::styled(
                text,
                display_style.add_modifier(Modifier::BOLD),
            )));
        }
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn draw_keypad(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let pending = app.calculator().pending_operation();
    let accent = app.appearance().theme.accent;

    for (rect, button) in keypad::button_rects(area) {
        let mut style = Style::default().fg(key_color(button, accent));
        let is_pending_operator = button.kind == ButtonKind::Operator
            && button
                .intent()
                .zip(pending)
                .is_some_and(|(intent, op)| intent == CalcIntent::SetOperator(op));
        if is_pending_operator {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        if app.pressed() == Some(button) {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }

        let widget = Paragraph::new(button.label)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            );
        frame.render_widget(widget, rect);
    }
}

fn key_color(button: &KeypadButton, accent: Color) -> Color {
    match button.kind {
        ButtonKind::Digit => KEY_TEXT,
        ButtonKind::Function => FUNCTION_TEXT,
        ButtonKind::Operator | ButtonKind::Equals => accent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::app::Appearance;
    use crate::ui::calculator::{Digit, Operation};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn buffer_text(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(48, 30)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    fn digit(value: u8) -> CalcIntent {
        CalcIntent::NumberInput(Digit::new(value).expect("digit"))
    }

    #[test]
    fn keypad_labels_are_drawn() {
        let app = App::new(Appearance::default());
        let screen = render(&app).join("\n");
        for label in ["AC", "+/-", "%", "=", "lcdcalc", "entry"] {
            assert!(screen.contains(label), "missing {label}");
        }
    }

    #[test]
    fn register_line_shows_pending_operator() {
        let mut app = App::new(Appearance::default());
        app.dispatch(digit(1));
        app.dispatch(digit(2));
        app.dispatch(CalcIntent::SetOperator(Operation::Add));
        let screen = render(&app);
        // Header is 3 rows; the register line is the first row inside the display box.
        assert!(screen[4].trim_end_matches('│').trim_end().ends_with("12 +"));
    }

    #[test]
    fn segments_are_drawn_for_display() {
        let mut app = App::new(Appearance::default());
        app.dispatch(digit(8));
        let screen = render(&app);
        assert!(screen[5].contains(" _ "));
        assert!(screen[6].contains("|_|"));
        assert!(screen[7].contains("|_|"));
    }

    #[test]
    fn plain_style_draws_text() {
        let mut config = Config::default();
        config.display.style = DisplayStyle::Plain;
        let mut app = App::new(Appearance::from_config(&config));
        for value in [4, 2] {
            app.dispatch(digit(value));
        }
        let screen = render(&app);
        assert!(screen[5].contains("42"));
    }

    #[test]
    fn display_is_truncated_to_max_digits() {
        let mut config = Config::default();
        config.display.style = DisplayStyle::Plain;
        config.display.max_digits = 3;
        let mut app = App::new(Appearance::from_config(&config));
        for value in [1, 2, 3, 4, 5] {
            app.dispatch(digit(value));
        }
        let screen = render(&app);
        assert!(screen[5].contains("123"));
        assert!(!screen[5].contains("1234"));
    }
}
