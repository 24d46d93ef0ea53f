use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gambit_console::{Console, ConsoleConfig};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("GAMBIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config =
        ConsoleConfig::from_args(std::env::args().skip(1)).context("failed to parse command-line arguments")?;
    info!(fen = %config.start_fen, "gambit starting");

    let mut console = Console::new(config).context("failed to set up the console")?;
    console
        .run(io::stdin().lock(), io::stdout().lock())
        .context("console session failed")?;
    Ok(())
}
