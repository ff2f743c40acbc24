use crate::mvi::UiState;

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub description: String,
    pub completed: bool,
}

/// View-only lens over the todo list. Never mutates the list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }

    pub fn admits(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// The three outcomes of a remote load, wrapping the todo list.
///
/// Mutating transitions are no-ops unless the wrapper is `Loaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteTodos {
    Loading,
    Loaded(Vec<Todo>),
    Failed(String),
}

impl RemoteTodos {
    /// The loaded list, if there is one.
    pub fn loaded(&self) -> Option<&[Todo]> {
        match self {
            RemoteTodos::Loaded(todos) => Some(todos),
            _ => None,
        }
    }
}

/// The whole application model. Single source of truth; the view only reads
/// snapshots of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListState {
    pub todos: RemoteTodos,
    /// In-progress, uncommitted text for a new todo. Trimmed only at
    /// submission so whitespace survives while typing.
    pub draft: String,
    /// Strictly greater than every existing todo id.
    pub next_id: u64,
    pub filter: Filter,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self {
            todos: RemoteTodos::Loaded(Vec::new()),
            draft: String::new(),
            next_id: 1,
            filter: Filter::All,
        }
    }
}

impl UiState for TodoListState {}

impl TodoListState {
    /// Starting state for the network variant: a fetch is in flight.
    pub fn loading() -> Self {
        Self {
            todos: RemoteTodos::Loading,
            ..Self::default()
        }
    }

    /// Starting state seeded with an existing list.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = next_id_after(&todos);
        Self {
            todos: RemoteTodos::Loaded(todos),
            next_id,
            ..Self::default()
        }
    }

    /// Unfiltered count.
    pub fn total(&self) -> usize {
        self.todos.loaded().map(|todos| todos.len()).unwrap_or(0)
    }

    /// Count of incomplete todos over the unfiltered list, independent of
    /// the active filter.
    pub fn remaining(&self) -> usize {
        self.todos
            .loaded()
            .map(|todos| todos.iter().filter(|todo| !todo.completed).count())
            .unwrap_or(0)
    }

    /// The displayed subset under the active filter. Display-only: the
    /// stored list is untouched.
    pub fn visible(&self) -> Vec<&Todo> {
        self.todos
            .loaded()
            .map(|todos| {
                todos
                    .iter()
                    .filter(|todo| self.filter.admits(todo))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Summary line over the unfiltered list, e.g. "3 of 4 todos remaining".
    pub fn summary(&self) -> String {
        let total = self.total();
        let unit = if total == 1 { "todo" } else { "todos" };
        format!("{} of {} {} remaining", self.remaining(), total, unit)
    }
}

/// `max(ids) + 1`, or 1 for an empty list.
pub fn next_id_after(todos: &[Todo]) -> u64 {
    todos.iter().map(|todo| todo.id).max().map_or(1, |id| id + 1)
}
