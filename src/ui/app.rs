use crate::config::{Config, DisplayStyle};
use crate::ui::calculator::{CalcIntent, CalcReducer, CalculatorState};
use crate::ui::keypad::{self, KeypadButton};
use crate::ui::layout::layout_regions;
use crate::ui::mvi::Store;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;

/// Rendering settings fixed for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub max_digits: usize,
    pub style: DisplayStyle,
    pub theme: Theme,
}

impl Appearance {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_digits: config.display.max_digits,
            style: config.display.style,
            theme: Theme::from_config(&config.theme),
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct App {
    should_quit: bool,
    /// Calculator state (MVI pattern). The store is the only writer.
    calculator: Store<CalcReducer>,
    appearance: Appearance,
    size: Option<(u16, u16)>,
    /// Keypad button lit until the next tick.
    pressed: Option<&'static KeypadButton>,
    needs_redraw: bool,
}

impl App {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            should_quit: false,
            calculator: Store::default(),
            appearance,
            size: None,
            pressed: None,
            needs_redraw: true,
        }
    }

    pub fn calculator(&self) -> &CalculatorState {
        self.calculator.state()
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn pressed(&self) -> Option<&'static KeypadButton> {
        self.pressed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply one calculator intent. Returns whether it was accepted.
    pub fn dispatch(&mut self, intent: CalcIntent) -> bool {
        let applied = self.calculator.dispatch(intent);
        let state = self.calculator.state();
        if applied {
            tracing::debug!(
                action = intent.action_name(),
                payload = ?intent.payload(),
                display = %state.display,
                register = %state.register,
                mode = ?state.mode,
                "Action applied"
            );
            self.needs_redraw = true;
        }
        applied
    }

    /// Keyboard entry: light up the matching keypad button, then dispatch.
    pub fn press(&mut self, intent: CalcIntent) -> bool {
        self.set_pressed(keypad::button_for(intent));
        self.dispatch(intent)
    }

    /// Pointer entry at a terminal cell.
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        let Some((cols, rows)) = self.size else {
            return false;
        };
        let regions = layout_regions(Rect::new(0, 0, cols, rows));
        let Some(button) = keypad::button_at(regions.keypad, column, row) else {
            return false;
        };
        let Some(intent) = button.intent() else {
            return false;
        };
        self.set_pressed(Some(button));
        self.dispatch(intent)
    }

    pub fn on_tick(&mut self) {
        if self.pressed.take().is_some() {
            self.needs_redraw = true;
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.needs_redraw = true;
    }

    /// True once per change that needs a new frame.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn set_pressed(&mut self, button: Option<&'static KeypadButton>) {
        if self.pressed != button {
            self.pressed = button;
            self.needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::calculator::{Digit, Mode, Operation};

    fn digit(value: u8) -> CalcIntent {
        CalcIntent::NumberInput(Digit::new(value).expect("digit"))
    }

    #[test]
    fn first_frame_is_requested() {
        let mut app = App::new(Appearance::default());
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn rejected_action_does_not_request_redraw() {
        let mut app = App::new(Appearance::default());
        let _ = app.take_redraw();
        assert!(!app.dispatch(CalcIntent::RunCalc));
        assert!(!app.take_redraw());
        assert_eq!(app.calculator(), &CalculatorState::default());
    }

    #[test]
    fn applied_action_requests_redraw() {
        let mut app = App::new(Appearance::default());
        let _ = app.take_redraw();
        assert!(app.dispatch(digit(4)));
        assert!(app.take_redraw());
        assert_eq!(app.calculator().display, "4");
    }

    #[test]
    fn press_lights_button_until_tick() {
        let mut app = App::new(Appearance::default());
        app.press(CalcIntent::SetOperator(Operation::Multiply));
        assert_eq!(app.pressed().map(|b| b.label), Some("x"));
        let _ = app.take_redraw();
        app.on_tick();
        assert!(app.pressed().is_none());
        assert!(app.take_redraw());
    }

    #[test]
    fn click_without_known_size_is_ignored() {
        let mut app = App::new(Appearance::default());
        assert!(!app.on_click(1, 10));
        assert!(app.pressed().is_none());
    }

    #[test]
    fn clicks_drive_the_calculator() {
        let mut app = App::new(Appearance::default());
        app.on_resize(48, 30);
        let keypad = layout_regions(Rect::new(0, 0, 48, 30)).keypad;
        let center_of = |label: &str| {
            keypad::button_rects(keypad)
                .into_iter()
                .find(|(_, button)| button.label == label)
                .map(|(rect, _)| (rect.x + rect.width / 2, rect.y + rect.height / 2))
                .expect("button on keypad")
        };

        for label in ["7", "x", "6", "="] {
            let (column, row) = center_of(label);
            app.on_click(column, row);
        }
        assert_eq!(app.calculator().display, "42");
        assert_eq!(app.calculator().mode, Mode::ResultShown);
        assert_eq!(app.pressed().map(|b| b.label), Some("="));
    }
}
