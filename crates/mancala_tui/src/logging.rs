//! Tracing setup. Logs go to a file so they do not corrupt the TUI.

use crate::config::ClientConfig;
use anyhow::{Context, Result};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to the configured log file.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice keeps the
/// first subscriber.
#[instrument(skip_all)]
pub fn init_logging(config: &ClientConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
