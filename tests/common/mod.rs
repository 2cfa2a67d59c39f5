//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use lcdcalc::ui::calculator::{CalcIntent, CalcReducer, CalculatorState, Digit, Mode, Operation};
use lcdcalc::ui::input::intent_for_key_name;
use lcdcalc::ui::mvi::Store;

/// Fresh calculator store.
pub fn store() -> Store<CalcReducer> {
    Store::default()
}

/// Press keys by name, one character each, returning how many were applied.
pub fn press(store: &mut Store<CalcReducer>, keys: &str) -> usize {
    keys.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            let intent = intent_for_key_name(&ch.to_string())
                .unwrap_or_else(|| panic!("no intent for key {ch:?}"));
            store.dispatch(intent)
        })
        .filter(|applied| *applied)
        .count()
}

pub fn digit(value: u8) -> CalcIntent {
    CalcIntent::NumberInput(Digit::new(value).expect("digit"))
}

pub fn op(symbol: &str) -> CalcIntent {
    CalcIntent::SetOperator(Operation::from_symbol(symbol).expect("operator"))
}

pub fn state(display: &str, register: &str, mode: Mode, operation: Option<Operation>) -> CalculatorState {
    CalculatorState {
        display: display.to_string(),
        register: register.to_string(),
        mode,
        operation,
    }
}
