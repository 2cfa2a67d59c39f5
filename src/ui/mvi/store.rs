//! Single-owner state container.

use std::marker::PhantomData;

use super::reducer::{Reducer, Reduction};
use super::Intent;

/// Owns the current state of one reducer and applies intents to it.
///
/// `dispatch` takes `&mut self`, so at most one intent is in flight and
/// intents are applied in the order they are dispatched. Readers only
/// ever borrow the latest published state.
pub struct Store<R: Reducer> {
    state: R::State,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State) -> Self {
        Self {
            state,
            _reducer: PhantomData,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply an intent. Returns `true` if the state was replaced, `false`
    /// if the reducer rejected the intent.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        match R::reduce(&self.state, intent) {
            Reduction::Next(next) => {
                self.state = next;
                true
            }
            Reduction::NoOp => {
                tracing::trace!(intent = intent.name(), "Intent rejected by reducer");
                false
            }
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::UiState;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u8);

    impl UiState for Counter {}

    #[derive(Debug, Clone, Copy)]
    enum CounterIntent {
        Increment,
        Reset,
    }

    impl Intent for CounterIntent {
        fn name(&self) -> &'static str {
            match self {
                CounterIntent::Increment => "INCREMENT",
                CounterIntent::Reset => "RESET",
            }
        }
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: &Counter, intent: CounterIntent) -> Reduction<Counter> {
            match intent {
                CounterIntent::Increment => match state.0.checked_add(1) {
                    Some(next) => Reduction::Next(Counter(next)),
                    None => Reduction::NoOp,
                },
                CounterIntent::Reset => Reduction::Next(Counter(0)),
            }
        }
    }

    #[test]
    fn dispatch_replaces_state_when_applied() {
        let mut store = Store::<CounterReducer>::default();
        assert!(store.dispatch(CounterIntent::Increment));
        assert!(store.dispatch(CounterIntent::Increment));
        assert_eq!(store.state(), &Counter(2));
    }

    #[test]
    fn dispatch_keeps_state_on_noop() {
        let mut store = Store::<CounterReducer>::new(Counter(u8::MAX));
        assert!(!store.dispatch(CounterIntent::Increment));
        assert_eq!(store.state(), &Counter(u8::MAX));
        assert!(store.dispatch(CounterIntent::Reset));
        assert_eq!(store.state(), &Counter(0));
    }

    #[test]
    fn reduction_unwrap_or_falls_back_to_previous() {
        let previous = Counter(7);
        assert_eq!(Reduction::NoOp.unwrap_or(previous.clone()), previous);
        assert_eq!(Reduction::Next(Counter(1)).unwrap_or(previous), Counter(1));
        assert!(Reduction::<Counter>::NoOp.is_noop());
    }
}
