//! Model-View-Intent (MVI) architecture primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Views dispatch intents, a reducer computes the next state
//! synchronously, and views re-render from the result. Reducers are the
//! only place where state transitions happen.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions or system events, consumed
/// once by a reducer to produce the next state.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// `reduce` must be a pure total function: no I/O, no panics, and an
/// intent that does not apply in the current state returns the state
/// unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
