pub mod client;

pub use client::{fetch_todos, spawn_fetch, FetchError};
