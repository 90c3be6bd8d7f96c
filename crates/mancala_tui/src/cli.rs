//! Command-line interface for mancala_tui.

use clap::Parser;
use std::path::PathBuf;

/// Mancala - play a two-player game hosted on a remote server
#[derive(Parser, Debug)]
#[command(name = "mancala_tui")]
#[command(about = "Terminal client for a remote Mancala game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "mancala.toml")]
    pub config: PathBuf,

    /// Game API base URL, e.g. http://localhost:8080/mancala/api/v1
    #[arg(long)]
    pub server_url: Option<String>,

    /// Log file (the terminal is used by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
