//! Keyboard and mouse normalization.
//!
//! Every input source ends up as a key name (`"5"`, `"Enter"`,
//! `"Backspace"`, ...) which maps onto one calculator intent.

use crate::ui::app::App;
use crate::ui::calculator::{CalcIntent, Digit, Operation};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Calc(CalcIntent),
    Quit,
}

/// Map a key name onto a calculator intent.
///
/// `*` is accepted as an alias for the `x` multiply key.
pub fn intent_for_key_name(name: &str) -> Option<CalcIntent> {
    match name {
        "." => Some(CalcIntent::AddDecimal),
        "=" | "Enter" => Some(CalcIntent::RunCalc),
        "*" => Some(CalcIntent::SetOperator(Operation::Multiply)),
        "Backspace" => Some(CalcIntent::ClearAll),
        "~" => Some(CalcIntent::SwitchSign),
        "%" => Some(CalcIntent::MakePercent),
        other => {
            if let Some(op) = Operation::from_symbol(other) {
                return Some(CalcIntent::SetOperator(op));
            }
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Digit::from_char(ch).map(CalcIntent::NumberInput),
                _ => None,
            }
        }
    }
}

/// Key name for a crossterm key code, if it has one.
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(ch) => Some(ch.to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        _ => None,
    }
}

/// Interpret a key event. Only presses count; repeats and releases are
/// ignored.
pub fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return Some(KeyCommand::Quit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return None;
    }
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        return Some(KeyCommand::Quit);
    }

    key_name(key.code)
        .and_then(|name| intent_for_key_name(&name))
        .map(KeyCommand::Calc)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key_command(key) {
        Some(KeyCommand::Quit) => app.request_quit(),
        Some(KeyCommand::Calc(intent)) => {
            app.press(intent);
        }
        None => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
