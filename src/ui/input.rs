use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::todo::TodoIntent;
use crate::ui::app::App;

/// Translate one key event into intents (or shell actions) on the app.
///
/// The input field is always focused: printable keys edit the draft, so
/// list commands live on control chords and navigation keys.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 't') {
        if let Some(id) = app.selected_todo_id() {
            app.dispatch(TodoIntent::TodoToggled { id });
        }
        return;
    }

    if is_ctrl_char(key, 'd') {
        if let Some(id) = app.selected_todo_id() {
            app.dispatch(TodoIntent::TodoDeleted { id });
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            let filter = app.model().filter.next();
            app.dispatch(TodoIntent::FilterChanged { filter });
        }
        KeyCode::BackTab => {
            let filter = app.model().filter.prev();
            app.dispatch(TodoIntent::FilterChanged { filter });
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => app.dispatch(TodoIntent::FormSubmitted),
        KeyCode::Backspace => app.pop_draft_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_draft_char(c);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
