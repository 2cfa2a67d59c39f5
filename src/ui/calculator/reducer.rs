//! Reducer for the calculator.

use crate::ui::mvi::{Reducer, Reduction};

use super::intent::{CalcIntent, Digit};
use super::number::format_number;
use super::state::{CalculatorState, Mode, Operation};

/// Reducer for calculator state transitions.
///
/// Pure function. Rejected keystrokes (a second decimal point, `=` with
/// nothing pending, an operator before any operand) come back as
/// `Reduction::NoOp` and never touch the state.
pub struct CalcReducer;

impl Reducer for CalcReducer {
    type State = CalculatorState;
    type Intent = CalcIntent;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Reduction<Self::State> {
        match intent {
            CalcIntent::NumberInput(digit) => number_input(state, digit),
            CalcIntent::AddDecimal => add_decimal(state),
            CalcIntent::SetOperator(op) => set_operator(state, op),
            CalcIntent::RunCalc => run_calc(state),
            CalcIntent::ClearAll => Reduction::Next(CalculatorState::default()),
            CalcIntent::SwitchSign => Reduction::Next(CalculatorState {
                display: switch_sign(&state.display),
                register: state.register.clone(),
                mode: state.mode,
                operation: state.operation,
            }),
            CalcIntent::MakePercent => Reduction::Next(CalculatorState {
                display: format_number(state.display_value() / 100.0),
                register: state.register.clone(),
                mode: state.mode,
                operation: state.operation,
            }),
        }
    }
}

fn number_input(state: &CalculatorState, digit: Digit) -> Reduction<CalculatorState> {
    if digit.is_zero() && state.display == "0" {
        return Reduction::NoOp;
    }

    match state.mode {
        Mode::DigitEntry => {
            let mut display = state.display.clone();
            display.push(digit.as_char());
            Reduction::Next(CalculatorState {
                display,
                register: state.register.clone(),
                mode: Mode::DigitEntry,
                operation: state.operation,
            })
        }
        Mode::OperatorSelected => Reduction::Next(CalculatorState {
            display: digit.to_string(),
            register: state.register.clone(),
            mode: Mode::DigitEntry,
            operation: state.operation,
        }),
        // New, unchained entry.
        Mode::ResultShown => Reduction::Next(CalculatorState {
            display: digit.to_string(),
            register: String::new(),
            mode: Mode::DigitEntry,
            operation: None,
        }),
    }
}

fn add_decimal(state: &CalculatorState) -> Reduction<CalculatorState> {
    if state.mode == Mode::ResultShown {
        return Reduction::Next(CalculatorState {
            display: "0.".to_string(),
            register: String::new(),
            mode: Mode::DigitEntry,
            operation: None,
        });
    }
    if state.display.contains('.') {
        return Reduction::NoOp;
    }
    if state.display.is_empty() {
        return Reduction::Next(CalculatorState {
            display: "0.".to_string(),
            register: state.register.clone(),
            mode: Mode::DigitEntry,
            operation: state.operation,
        });
    }
    Reduction::Next(CalculatorState {
        display: format!("{}.", state.display),
        register: state.register.clone(),
        mode: state.mode,
        operation: state.operation,
    })
}

fn set_operator(state: &CalculatorState, op: Operation) -> Reduction<CalculatorState> {
    if state.mode != Mode::OperatorSelected && state.display.is_empty() {
        return Reduction::NoOp;
    }

    // Operator pressed twice with nothing typed in between: re-target only.
    if state.mode == Mode::OperatorSelected && state.display.is_empty() {
        return Reduction::Next(CalculatorState {
            display: state.display.clone(),
            register: state.register.clone(),
            mode: state.mode,
            operation: Some(op),
        });
    }

    let register = match (state.mode, state.operation) {
        (Mode::DigitEntry, Some(pending)) => {
            debug_assert!(
                !state.register.is_empty(),
                "pending operation without a register operand"
            );
            format_number(pending.apply(state.register_value(), state.display_value()))
        }
        _ => state.display.clone(),
    };

    Reduction::Next(CalculatorState {
        display: String::new(),
        register,
        mode: Mode::OperatorSelected,
        operation: Some(op),
    })
}

fn run_calc(state: &CalculatorState) -> Reduction<CalculatorState> {
    let Some(op) = state.operation else {
        return Reduction::NoOp;
    };
    if state.display.is_empty() {
        return Reduction::NoOp;
    }

    // Repeat-equals keeps the second operand frozen in the register.
    let (register, first, second) = if state.mode == Mode::ResultShown {
        (
            state.register.clone(),
            state.display_value(),
            state.register_value(),
        )
    } else {
        (
            state.display.clone(),
            state.register_value(),
            state.display_value(),
        )
    };

    Reduction::Next(CalculatorState {
        display: format_number(op.apply(first, second)),
        register,
        mode: Mode::ResultShown,
        operation: state.operation,
    })
}

fn switch_sign(display: &str) -> String {
    match display.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{display}"),
    }
}
