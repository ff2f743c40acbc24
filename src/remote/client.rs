//! Remote todo listing: a single GET, decoded and handed back as one event.
//!
//! The fetch is fire-and-forget and non-cancellable. Whatever happens, the
//! UI loop receives exactly one `TodosFetched` event; the reducer collapses
//! any failure to a fixed user-facing message, so detail only reaches the
//! logs here.

use serde::Deserialize;
use std::sync::mpsc::Sender;
use std::thread;
use thiserror::Error;

use crate::todo::Todo;
use crate::ui::events::AppEvent;

/// Errors from the remote load. Internal only: the view never sees these.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or decode failure from the HTTP client
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Server returned status {status}")]
    Status { status: u16 },

    /// The fetch runtime could not be started
    #[error("Failed to start fetch runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Wire shape of one todo. The endpoint calls the text `todo`; we map it to
/// `description`.
#[derive(Debug, Deserialize)]
struct TodoPayload {
    id: u64,
    todo: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct TodoListPayload {
    todos: Vec<TodoPayload>,
}

impl From<TodoPayload> for Todo {
    fn from(payload: TodoPayload) -> Self {
        Todo {
            id: payload.id,
            description: payload.todo,
            completed: payload.completed,
        }
    }
}

/// GET the todo listing and decode it.
pub async fn fetch_todos(client: &reqwest::Client, url: &str) -> Result<Vec<Todo>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }
    let payload: TodoListPayload = response.json().await?;
    Ok(payload.todos.into_iter().map(Todo::from).collect())
}

/// Run the fetch on a background thread and deliver the outcome as a single
/// terminal event. The UI loop stays synchronous; the thread owns its own
/// current-thread runtime for the duration of the request.
pub fn spawn_fetch(url: String, events: Sender<AppEvent>) {
    thread::spawn(move || {
        tracing::info!(%url, "fetching todos");
        let result = fetch_blocking(&url);
        if let Err(err) = &result {
            tracing::warn!(error = %err, "todo fetch failed");
        }
        // Receiver gone means the app already quit; nothing to deliver.
        let _ = events.send(AppEvent::TodosFetched(result));
    });
}

fn fetch_blocking(url: &str) -> Result<Vec<Todo>, FetchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let client = reqwest::Client::new();
        fetch_todos(&client, url).await
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_maps_todo_field_to_description() {
        let json = r#"{"todos":[{"id":5,"todo":"Walk the dog","completed":false}]}"#;
        let payload: TodoListPayload = serde_json::from_str(json).unwrap();
        let todos: Vec<Todo> = payload.todos.into_iter().map(Todo::from).collect();
        assert_eq!(
            todos,
            vec![Todo {
                id: 5,
                description: "Walk the dog".to_string(),
                completed: false,
            }]
        );
    }

    #[test]
    fn payload_tolerates_extra_fields() {
        let json = r#"{"todos":[{"id":1,"todo":"x","completed":true,"userId":26}],"total":1}"#;
        let payload: TodoListPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.todos.len(), 1);
        assert!(payload.todos[0].completed);
    }

    #[test]
    fn payload_with_empty_list_decodes() {
        let payload: TodoListPayload = serde_json::from_str(r#"{"todos":[]}"#).unwrap();
        assert!(payload.todos.is_empty());
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let json = r#"{"todos":[{"id":1,"completed":true}]}"#;
        assert!(serde_json::from_str::<TodoListPayload>(json).is_err());
    }

    #[test]
    fn status_error_displays_code() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "Server returned status 503");
    }
}
