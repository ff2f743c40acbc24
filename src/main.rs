use clap::Parser;
use tudu::cli::Cli;
use tudu::logging::init_tracing;
use tudu::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    tracing::info!(remote = ?cli.remote, "starting tudu");
    runtime::run(cli.remote)?;
    Ok(())
}
