//! Mancala terminal client binary.

use anyhow::Result;
use clap::Parser;
use mancala_tui::{Cli, ClientConfig, init_logging, run_tui};
use std::io::{self, IsTerminal};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ClientConfig::load(&cli.config)?
        .with_env()
        .with_overrides(cli.server_url, cli.log_file);

    if !io::stdout().is_terminal() {
        println!(
            "mancala_tui requires a real terminal (TTY). Server: {}",
            config.server_url()
        );
        return Ok(());
    }

    init_logging(&config)?;
    info!(server_url = %config.server_url(), "Configuration resolved");

    run_tui(config).await
}
