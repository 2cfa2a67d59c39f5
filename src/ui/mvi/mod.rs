//! Model-View-Intent primitives.
//!
//! ```text
//! key / click / record ──→ Intent ──→ Store ──(Reducer)──→ State ──→ render
//! ```
//!
//! A reducer is a pure `(&State, Intent) -> Reduction<State>` function. The
//! [`Store`] is the only place a state value is replaced, so the render
//! loop and the replay driver both see exactly the states the reducer
//! produced, in dispatch order.

use std::fmt::Debug;

mod reducer;
mod store;

pub use reducer::{Reducer, Reduction};
pub use store::Store;

/// An action a reducer understands.
pub trait Intent: Copy + Debug + Send + 'static {
    /// Stable name used in logs and traces.
    fn name(&self) -> &'static str;
}

/// State owned by a [`Store`]. Transitions build a new value; equality is
/// used by tests and callers to detect changes.
pub trait UiState: Clone + PartialEq + Debug + Default + Send + 'static {}
