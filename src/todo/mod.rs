pub mod intent;
pub mod model;
pub mod reducer;

pub use intent::TodoIntent;
pub use model::{Filter, RemoteTodos, Todo, TodoListState};
pub use reducer::TodoReducer;
