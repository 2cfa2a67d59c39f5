//! Four-function calculator with a seven-segment terminal UI.
//!
//! The calculator itself is a pure reducer in [`ui::calculator`]; the rest
//! of the crate normalizes input, renders state and wires up config,
//! logging and shutdown.

pub mod config;
pub mod logging;
pub mod replay;
pub mod shutdown;
pub mod ui;
