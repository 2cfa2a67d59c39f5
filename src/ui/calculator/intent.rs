use std::fmt;

use thiserror::Error;

use crate::ui::mvi::Intent;

use super::state::Operation;

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|value| Self(value as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from parsing an external `(action, payload)` pair.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Action '{action}' requires a payload")]
    MissingPayload { action: &'static str },

    #[error("Invalid digit '{0}': expected a single character 0-9")]
    InvalidDigit(String),

    #[error("Invalid operator '{0}': expected one of +, -, x, /")]
    InvalidOperator(String),
}

/// Actions the calculator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcIntent {
    NumberInput(Digit),
    AddDecimal,
    RunCalc,
    SetOperator(Operation),
    ClearAll,
    SwitchSign,
    MakePercent,
}

impl Intent for CalcIntent {
    fn name(&self) -> &'static str {
        self.action_name()
    }
}

impl CalcIntent {
    /// Parse an external action name and its optional payload.
    ///
    /// Payloads of actions that do not take one are ignored.
    pub fn from_action(name: &str, payload: Option<&str>) -> Result<Self, IntentError> {
        match name {
            "NUMBER_INPUT" => {
                let payload = payload.ok_or(IntentError::MissingPayload {
                    action: "NUMBER_INPUT",
                })?;
                let mut chars = payload.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(digit), None) => Ok(Self::NumberInput(digit)),
                    _ => Err(IntentError::InvalidDigit(payload.to_string())),
                }
            }
            "SET_OPERATOR" => {
                let payload = payload.ok_or(IntentError::MissingPayload {
                    action: "SET_OPERATOR",
                })?;
                Operation::from_symbol(payload)
                    .map(Self::SetOperator)
                    .ok_or_else(|| IntentError::InvalidOperator(payload.to_string()))
            }
            "ADD_DECIMAL" => Ok(Self::AddDecimal),
            "RUN_CALC" => Ok(Self::RunCalc),
            "CLEAR_ALL" => Ok(Self::ClearAll),
            "SWITCH_SIGN" => Ok(Self::SwitchSign),
            "MAKE_PERCENT" => Ok(Self::MakePercent),
            other => Err(IntentError::UnknownAction(other.to_string())),
        }
    }

    pub fn action_name(&self) -> &'static str {
        match self {
            Self::NumberInput(_) => "NUMBER_INPUT",
            Self::AddDecimal => "ADD_DECIMAL",
            Self::RunCalc => "RUN_CALC",
            Self::SetOperator(_) => "SET_OPERATOR",
            Self::ClearAll => "CLEAR_ALL",
            Self::SwitchSign => "SWITCH_SIGN",
            Self::MakePercent => "MAKE_PERCENT",
        }
    }

    pub fn payload(&self) -> Option<String> {
        match self {
            Self::NumberInput(digit) => Some(digit.to_string()),
            Self::SetOperator(op) => Some(op.symbol().to_string()),
            _ => None,
        }
    }
}
