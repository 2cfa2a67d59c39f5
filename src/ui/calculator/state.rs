use serde::Serialize;

use crate::ui::mvi::UiState;

use super::number::parse_operand;

/// Input phase of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Mode {
    /// Typing digits into `display`.
    #[default]
    DigitEntry,
    /// An operator was just chosen; the next digit starts a fresh operand.
    OperatorSelected,
    /// `display` holds a computed result.
    ResultShown,
}

/// Binary operation applied between `register` and `display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "x")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Payload symbol used by keys and keypad labels.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "x",
            Operation::Divide => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// IEEE-754 arithmetic; division by zero and overflow are not guarded.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        }
    }
}

/// Complete calculator state. Replaced wholesale on every applied action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CalculatorState {
    /// Operand being entered, or the last result.
    pub display: String,
    /// Left-hand operand of the pending or last-applied operation.
    pub register: String,
    pub mode: Mode,
    pub operation: Option<Operation>,
}

impl UiState for CalculatorState {}

impl CalculatorState {
    /// Numeric value of `display`, read from its longest numeric prefix.
    pub fn display_value(&self) -> f64 {
        parse_operand(&self.display)
    }

    /// Numeric value of `register`, read from its longest numeric prefix.
    pub fn register_value(&self) -> f64 {
        parse_operand(&self.register)
    }

    /// Operator to show next to the register line. Hidden once a result
    /// is on screen.
    pub fn pending_operation(&self) -> Option<Operation> {
        match self.mode {
            Mode::ResultShown => None,
            _ => self.operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_empty_digit_entry() {
        let state = CalculatorState::default();
        assert_eq!(state.display, "");
        assert_eq!(state.register, "");
        assert_eq!(state.mode, Mode::DigitEntry);
        assert_eq!(state.operation, None);
    }

    #[test]
    fn derived_values_are_nan_for_unparseable_text() {
        let state = CalculatorState {
            display: "-".to_string(),
            ..CalculatorState::default()
        };
        assert!(state.display_value().is_nan());
        assert!(state.register_value().is_nan());
    }

    #[test]
    fn operation_symbols_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol("*"), None);
    }

    #[test]
    fn pending_operation_hidden_while_result_shown() {
        let state = CalculatorState {
            display: "8".to_string(),
            register: "3".to_string(),
            mode: Mode::ResultShown,
            operation: Some(Operation::Add),
        };
        assert_eq!(state.pending_operation(), None);

        let state = CalculatorState {
            mode: Mode::OperatorSelected,
            ..state
        };
        assert_eq!(state.pending_operation(), Some(Operation::Add));
    }

    #[test]
    fn state_serializes_with_symbols() {
        let state = CalculatorState {
            display: "".to_string(),
            register: "5".to_string(),
            mode: Mode::OperatorSelected,
            operation: Some(Operation::Multiply),
        };
        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["mode"], "OperatorSelected");
        assert_eq!(json["operation"], "x");
        assert_eq!(json["register"], "5");
    }
}
