pub mod cli;
pub mod logging;
pub mod mvi;
pub mod remote;
pub mod todo;
pub mod ui;
