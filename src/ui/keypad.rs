//! Clickable keypad.
//!
//! Each button carries the key name it emulates, so a click goes through
//! the same normalization as the keyboard.

use crate::ui::calculator::CalcIntent;
use crate::ui::input::intent_for_key_name;
use ratatui::layout::{Constraint, Layout, Rect};

pub const ROWS: u16 = 5;
pub const COLUMNS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Function,
    Operator,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    /// Key name fed to the normalizer when clicked.
    pub key: &'static str,
    pub kind: ButtonKind,
    pub row: u16,
    pub col: u16,
    /// Number of grid columns covered.
    pub span: u16,
}

impl KeypadButton {
    const fn new(
        label: &'static str,
        key: &'static str,
        kind: ButtonKind,
        row: u16,
        col: u16,
        span: u16,
    ) -> Self {
        Self {
            label,
            key,
            kind,
            row,
            col,
            span,
        }
    }

    pub fn intent(&self) -> Option<CalcIntent> {
        intent_for_key_name(self.key)
    }
}

use ButtonKind::{Digit, Equals, Function, Operator};

pub static BUTTONS: [KeypadButton; 19] = [
    KeypadButton::new("AC", "Backspace", Function, 0, 0, 1),
    KeypadButton::new("+/-", "~", Function, 0, 1, 1),
    KeypadButton::new("%", "%", Function, 0, 2, 1),
    KeypadButton::new("/", "/", Operator, 0, 3, 1),
    KeypadButton::new("7", "7", Digit, 1, 0, 1),
    KeypadButton::new("8", "8", Digit, 1, 1, 1),
    KeypadButton::new("9", "9", Digit, 1, 2, 1),
    KeypadButton::new("x", "x", Operator, 1, 3, 1),
    KeypadButton::new("4", "4", Digit, 2, 0, 1),
    KeypadButton::new("5", "5", Digit, 2, 1, 1),
    KeypadButton::new("6", "6", Digit, 2, 2, 1),
    KeypadButton::new("-", "-", Operator, 2, 3, 1),
    KeypadButton::new("1", "1", Digit, 3, 0, 1),
    KeypadButton::new("2", "2", Digit, 3, 1, 1),
    KeypadButton::new("3", "3", Digit, 3, 2, 1),
    KeypadButton::new("+", "+", Operator, 3, 3, 1),
    KeypadButton::new("0", "0", Digit, 4, 0, 2),
    KeypadButton::new(".", ".", Digit, 4, 2, 1),
    KeypadButton::new("=", "=", Equals, 4, 3, 1),
];

/// Screen rectangle of every button inside `area`.
pub fn button_rects(area: Rect) -> Vec<(Rect, &'static KeypadButton)> {
    let rows = Layout::vertical([Constraint::Ratio(1, ROWS as u32); ROWS as usize]).split(area);
    BUTTONS
        .iter()
        .map(|button| {
            let columns = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS as usize])
                .split(rows[button.row as usize]);
            let first = columns[button.col as usize];
            let last = columns[(button.col + button.span - 1) as usize];
            (first.union(last), button)
        })
        .collect()
}

/// Button under a terminal cell, if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<&'static KeypadButton> {
    button_rects(area)
        .into_iter()
        .find(|(rect, _)| {
            column >= rect.x
                && column < rect.x.saturating_add(rect.width)
                && row >= rect.y
                && row < rect.y.saturating_add(rect.height)
        })
        .map(|(_, button)| button)
}

/// Button that produces `intent`, used to light up the key that was hit.
pub fn button_for(intent: CalcIntent) -> Option<&'static KeypadButton> {
    BUTTONS.iter().find(|button| button.intent() == Some(intent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::calculator::Operation;

    #[test]
    fn every_button_maps_to_an_intent() {
        for button in BUTTONS.iter() {
            assert!(button.intent().is_some(), "button {} is unmapped", button.label);
        }
    }

    #[test]
    fn grid_is_fully_covered_once() {
        let mut covered = [[0u8; COLUMNS as usize]; ROWS as usize];
        for button in BUTTONS.iter() {
            for col in button.col..button.col + button.span {
                covered[button.row as usize][col as usize] += 1;
            }
        }
        assert!(covered.iter().flatten().all(|count| *count == 1));
    }

    #[test]
    fn click_hits_button_under_cursor() {
        let area = Rect::new(0, 0, 40, 15);
        // Top-left cell is AC, bottom-right is =.
        assert_eq!(button_at(area, 1, 1).map(|b| b.label), Some("AC"));
        assert_eq!(button_at(area, 39, 14).map(|b| b.label), Some("="));
        // 0 spans the first two columns of the last row.
        assert_eq!(button_at(area, 15, 13).map(|b| b.label), Some("0"));
    }

    #[test]
    fn click_outside_keypad_misses() {
        let area = Rect::new(5, 5, 40, 15);
        assert!(button_at(area, 0, 0).is_none());
        assert!(button_at(area, 45, 10).is_none());
        assert!(button_at(area, 10, 20).is_none());
    }

    #[test]
    fn button_for_resolves_aliases() {
        let multiply = CalcIntent::SetOperator(Operation::Multiply);
        assert_eq!(button_for(multiply).map(|b| b.label), Some("x"));
        assert_eq!(button_for(CalcIntent::ClearAll).map(|b| b.label), Some("AC"));
    }
}
