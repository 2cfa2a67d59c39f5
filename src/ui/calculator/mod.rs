//! Calculator feature module.
//!
//! The four-function calculator state machine: digit entry, operator
//! selection, chained operations and repeat-equals.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Calculator state (display, register, mode, operation)
//! - `intent.rs` - The seven calculator actions
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `number.rs` - Operand parsing and result formatting

mod intent;
mod number;
mod reducer;
mod state;

pub use intent::{CalcIntent, Digit, IntentError};
pub use number::{format_number, parse_operand};
pub use reducer::CalcReducer;
pub use state::{CalculatorState, Mode, Operation};
