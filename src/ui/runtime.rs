use std::io;
use std::time::Duration;

use crate::remote::spawn_fetch;
use crate::todo::{TodoIntent, TodoListState};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// The run loop: draw, block on the next event, apply it fully, repeat.
/// One event at a time; no two transitions ever interleave.
pub fn run(remote_url: Option<String>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let model = if remote_url.is_some() {
        TodoListState::loading()
    } else {
        TodoListState::default()
    };
    let mut app = App::new(model);
    let events = EventHandler::new(tick_rate);

    if let Some(url) = remote_url {
        spawn_fetch(url, events.sender());
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {
                // Next draw picks up the new size from the backend.
            }
            Ok(AppEvent::TodosFetched(result)) => {
                app.dispatch(TodoIntent::TodosFetched { result });
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
