use crate::mvi::Reducer;
use crate::todo::intent::TodoIntent;
use crate::todo::model::{next_id_after, RemoteTodos, Todo, TodoListState};

/// Shown when a remote load fails, whatever the underlying cause.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch todos.";

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Intent = TodoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let TodoListState {
            todos,
            draft,
            next_id,
            filter,
        } = state;

        match intent {
            TodoIntent::InputChanged { text } => TodoListState {
                todos,
                draft: text,
                next_id,
                filter,
            },
            TodoIntent::FormSubmitted => {
                let description = draft.trim().to_string();
                if description.is_empty() {
                    return TodoListState {
                        todos,
                        draft,
                        next_id,
                        filter,
                    };
                }
                match todos {
                    RemoteTodos::Loaded(mut list) => {
                        // Most-recently-added first.
                        list.insert(
                            0,
                            Todo {
                                id: next_id,
                                description,
                                completed: false,
                            },
                        );
                        TodoListState {
                            todos: RemoteTodos::Loaded(list),
                            draft: String::new(),
                            next_id: next_id + 1,
                            filter,
                        }
                    }
                    other => TodoListState {
                        todos: other,
                        draft,
                        next_id,
                        filter,
                    },
                }
            }
            TodoIntent::TodoToggled { id } => {
                let todos = match todos {
                    RemoteTodos::Loaded(list) => RemoteTodos::Loaded(
                        list.into_iter()
                            .map(|todo| {
                                if todo.id == id {
                                    Todo {
                                        completed: !todo.completed,
                                        ..todo
                                    }
                                } else {
                                    todo
                                }
                            })
                            .collect(),
                    ),
                    other => other,
                };
                TodoListState {
                    todos,
                    draft,
                    next_id,
                    filter,
                }
            }
            TodoIntent::TodoDeleted { id } => {
                let todos = match todos {
                    RemoteTodos::Loaded(list) => {
                        RemoteTodos::Loaded(list.into_iter().filter(|todo| todo.id != id).collect())
                    }
                    other => other,
                };
                TodoListState {
                    todos,
                    draft,
                    next_id,
                    filter,
                }
            }
            TodoIntent::FilterChanged { filter } => TodoListState {
                todos,
                draft,
                next_id,
                filter,
            },
            TodoIntent::TodosFetched { result } => match result {
                Ok(list) => {
                    let next_id = next_id_after(&list);
                    TodoListState {
                        todos: RemoteTodos::Loaded(list),
                        draft,
                        next_id,
                        filter,
                    }
                }
                Err(_) => TodoListState {
                    todos: RemoteTodos::Failed(FETCH_FAILED_MESSAGE.to_string()),
                    draft,
                    next_id,
                    filter,
                },
            },
        }
    }
}
