//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Dialog state only changes inside a reducer, so every transition is a
//! pure `(State, Intent) -> State` function that can be tested without a
//! terminal.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to derive a new state, compared to
/// detect changes, and defaulted to their initial state on mount.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user actions and system events fed to a reducer.
pub trait Intent: Send + 'static {}

/// Transforms state based on intents. Must have no side effects.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Fold a sequence of intents over `state`.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
