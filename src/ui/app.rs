use crate::mvi::Reducer;
use crate::todo::{TodoIntent, TodoListState, TodoReducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The application shell.
///
/// Owns the model and routes every intent through the reducer. Navigation
/// state that the model deliberately does not know about (the selection
/// cursor, the quit flag) lives here, outside MVI.
pub struct App {
    should_quit: bool,
    model: TodoListState,
    /// Index into the currently visible (filtered) list.
    selection: usize,
}

impl App {
    pub fn new(model: TodoListState) -> Self {
        Self {
            should_quit: false,
            model,
            selection: 0,
        }
    }

    pub fn model(&self) -> &TodoListState {
        &self.model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Dispatch an intent to the todo reducer, then re-clamp the cursor:
    /// the visible list may have shrunk or changed shape.
    pub fn dispatch(&mut self, intent: TodoIntent) {
        dispatch_mvi!(self, model, TodoReducer, intent);
        self.clamp_selection();
    }

    /// Id of the todo under the cursor, if any.
    pub fn selected_todo_id(&self) -> Option<u64> {
        self.model.visible().get(self.selection).map(|todo| todo.id)
    }

    /// Move the cursor with wrap-around over the visible list.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.model.visible().len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Append one character to the draft. The model only ever sees whole
    /// replacement texts, like a DOM input event.
    pub fn push_draft_char(&mut self, c: char) {
        let mut text = self.model.draft.clone();
        text.push(c);
        self.dispatch(TodoIntent::InputChanged { text });
    }

    /// Drop the last character from the draft.
    pub fn pop_draft_char(&mut self) {
        let mut text = self.model.draft.clone();
        if text.pop().is_none() {
            return;
        }
        self.dispatch(TodoIntent::InputChanged { text });
    }

    fn clamp_selection(&mut self) {
        let len = self.model.visible().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        if self.selection >= len {
            self.selection = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{Filter, Todo};

    fn todo(id: u64, description: &str, completed: bool) -> Todo {
        Todo {
            id,
            description: description.to_string(),
            completed,
        }
    }

    fn make_app() -> App {
        App::new(TodoListState::with_todos(vec![
            todo(1, "Learn Elm", false),
            todo(2, "Write app", false),
            todo(3, "Coffee", true),
        ]))
    }

    // -- selection cursor ---------------------------------------------------

    #[test]
    fn selection_starts_at_zero() {
        let app = make_app();
        assert_eq!(app.selection(), 0);
        assert_eq!(app.selected_todo_id(), Some(1));
    }

    #[test]
    fn move_selection_wraps_both_ways() {
        let mut app = make_app();
        app.move_selection(-1);
        assert_eq!(app.selected_todo_id(), Some(3));
        app.move_selection(1);
        assert_eq!(app.selected_todo_id(), Some(1));
    }

    #[test]
    fn move_selection_on_empty_list_stays_at_zero() {
        let mut app = App::new(TodoListState::default());
        app.move_selection(1);
        assert_eq!(app.selection(), 0);
        assert_eq!(app.selected_todo_id(), None);
    }

    #[test]
    fn selection_clamps_after_delete() {
        let mut app = make_app();
        app.move_selection(-1); // last entry
        assert_eq!(app.selection(), 2);
        app.dispatch(TodoIntent::TodoDeleted { id: 3 });
        assert_eq!(app.selection(), 1);
        assert_eq!(app.selected_todo_id(), Some(2));
    }

    #[test]
    fn selection_clamps_after_filter_change() {
        let mut app = make_app();
        app.move_selection(-1); // index 2
        app.dispatch(TodoIntent::FilterChanged {
            filter: Filter::Completed,
        });
        assert_eq!(app.selected_todo_id(), Some(3));
    }

    // -- draft editing ------------------------------------------------------

    #[test]
    fn push_draft_char_builds_text() {
        let mut app = make_app();
        app.push_draft_char('h');
        app.push_draft_char('i');
        assert_eq!(app.model().draft, "hi");
    }

    #[test]
    fn pop_draft_char_removes_last() {
        let mut app = make_app();
        app.push_draft_char('h');
        app.push_draft_char('i');
        app.pop_draft_char();
        assert_eq!(app.model().draft, "h");
    }

    #[test]
    fn pop_on_empty_draft_is_noop() {
        let mut app = make_app();
        let before = app.model().clone();
        app.pop_draft_char();
        assert_eq!(app.model(), &before);
    }

    #[test]
    fn draft_keeps_whitespace_while_typing() {
        let mut app = make_app();
        app.push_draft_char(' ');
        app.push_draft_char('x');
        app.push_draft_char(' ');
        assert_eq!(app.model().draft, " x ");
    }
}
