//! Headless replay of keys or action records through the calculator.
//!
//! Runs the same store and normalizer as the terminal UI, one intent at a
//! time, and writes the final display (plus an optional JSON trace).

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::calculator::{CalcIntent, CalcReducer, CalculatorState, IntentError};
use crate::ui::input::intent_for_key_name;
use crate::ui::mvi::Store;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Unmapped key '{key}' at position {position}")]
    UnmappedKey { key: char, position: usize },

    #[error("Malformed action record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid action on line {line}: {source}")]
    InvalidAction {
        line: usize,
        #[source]
        source: IntentError,
    },

    #[error("Failed to encode trace step: {0}")]
    Trace(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One external `(action, payload)` pair, as read from a JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionRecord {
    pub action: String,
    #[serde(default)]
    pub payload: Option<String>,
}

#[derive(Debug, Serialize)]
struct TraceStep<'a> {
    step: usize,
    action: &'static str,
    payload: Option<String>,
    applied: bool,
    state: &'a CalculatorState,
}

/// Every non-whitespace character is one key name. Positions are 1-based.
pub fn intents_from_keys(keys: &str) -> Result<Vec<CalcIntent>, ReplayError> {
    keys.chars()
        .enumerate()
        .filter(|(_, key)| !key.is_whitespace())
        .map(|(index, key)| {
            intent_for_key_name(&key.to_string()).ok_or(ReplayError::UnmappedKey {
                key,
                position: index + 1,
            })
        })
        .collect()
}

/// Read JSON-lines action records. Blank lines are skipped.
pub fn intents_from_records<R: BufRead>(reader: R) -> Result<Vec<CalcIntent>, ReplayError> {
    let mut intents = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        let record: ActionRecord =
            serde_json::from_str(&line).map_err(|source| ReplayError::MalformedRecord {
                line: line_number,
                source,
            })?;
        let intent = CalcIntent::from_action(&record.action, record.payload.as_deref())
            .map_err(|source| ReplayError::InvalidAction {
                line: line_number,
                source,
            })?;
        intents.push(intent);
    }
    Ok(intents)
}

/// Apply `intents` to a fresh calculator and write the result to `out`.
///
/// With `trace`, each step is written as a JSON object before the final
/// display line.
pub fn run<W, I>(intents: I, trace: bool, out: &mut W) -> Result<CalculatorState, ReplayError>
where
    W: Write,
    I: IntoIterator<Item = CalcIntent>,
{
    let mut store = Store::<CalcReducer>::default();
    let mut rejected = 0usize;

    for (index, intent) in intents.into_iter().enumerate() {
        let applied = store.dispatch(intent);
        if !applied {
            rejected += 1;
        }
        tracing::debug!(
            step = index + 1,
            action = intent.action_name(),
            applied,
            "Replayed action"
        );
        if trace {
            let step = TraceStep {
                step: index + 1,
                action: intent.action_name(),
                payload: intent.payload(),
                applied,
                state: store.state(),
            };
            let encoded = serde_json::to_string(&step).map_err(ReplayError::Trace)?;
            writeln!(out, "{encoded}")?;
        }
    }

    let state = store.state().clone();
    writeln!(out, "{}", state.display)?;
    tracing::info!(rejected, display = %state.display, "Replay finished");
    Ok(state)
}
