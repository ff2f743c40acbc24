//! MVI plumbing: immutable state, intents, pure reducers.
//!
//! State transitions happen in exactly one place, the reducer. Everything
//! else either produces intents or reads state.

/// Marker trait for state objects.
///
/// State is immutable: reducers consume the old value and return a new one.
/// It must carry everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// An intent is a user action (keystroke, submission) or a system event
/// (fetch completion) addressed to a reducer.
pub trait Intent: Send + 'static {}

/// Transforms state based on intents.
///
/// `reduce` must be a pure function: no side effects, no failure.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
