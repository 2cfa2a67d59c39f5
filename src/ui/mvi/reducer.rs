//! Reducer trait for MVI architecture.

use super::{Intent, UiState};

/// Outcome of reducing one intent.
///
/// `NoOp` means the intent was rejected for the current state: the caller
/// keeps the previous state value and must not re-derive or re-render
/// anything from it.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Reduction<S> {
    /// The intent was accepted and produced this state.
    Next(S),
    /// The intent was rejected; state stays as it was.
    NoOp,
}

impl<S> Reduction<S> {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Resolve against the state the intent was applied to.
    pub fn unwrap_or(self, previous: S) -> S {
        match self {
            Self::Next(state) => state,
            Self::NoOp => previous,
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (&State, Intent) -> Reduction<State>
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state, or `NoOp`.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: &Self::State, intent: Self::Intent) -> Reduction<Self::State>;
}
