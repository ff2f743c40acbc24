use crate::mvi::Intent;
use crate::remote::FetchError;
use crate::todo::model::{Filter, Todo};

/// The closed vocabulary of events the reducer handles.
///
/// Matched exhaustively with no wildcard arm, so adding a variant is a
/// compile error until every transition is defined.
#[derive(Debug)]
pub enum TodoIntent {
    /// The draft text changed. Carries the full new text, verbatim.
    InputChanged { text: String },
    /// The draft was submitted as a new todo.
    FormSubmitted,
    /// Flip the completed flag on one todo.
    TodoToggled { id: u64 },
    /// Remove one todo.
    TodoDeleted { id: u64 },
    /// Switch the display lens.
    FilterChanged { filter: Filter },
    /// The remote fetch finished, one way or the other.
    TodosFetched { result: Result<Vec<Todo>, FetchError> },
}

impl Intent for TodoIntent {}
