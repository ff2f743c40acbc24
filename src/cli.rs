use clap::Parser;

/// A todo list for the terminal.
#[derive(Debug, Parser)]
#[command(name = "tudu", version, about)]
pub struct Cli {
    /// Load the initial todo list from a remote endpoint (GET, JSON).
    #[arg(long, value_name = "URL")]
    pub remote: Option<String>,
}
