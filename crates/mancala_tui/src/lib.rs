//! Mancala terminal client
//!
//! A thin client for a two-player Mancala game whose rules run on a remote
//! HTTP server. The client renders the board, sends moves, and shows the
//! server's verdicts.
//!
//! # Architecture
//!
//! - **Client**: [`HttpGameClient`] wraps create, move and reset requests
//! - **Controller**: [`Controller`] owns the displayed snapshot and decides
//!   which request to send next
//! - **Alerts**: [`AlertPresenter`] shows rule warnings, failures and the winner
//! - **UI**: ratatui rendering of the 14 pits in [`ui`]
//!
//! # Example
//!
//! ```no_run
//! use mancala_tui::{ClientConfig, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::load("mancala.toml")?.with_env();
//! run_tui(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod alert;
mod app;
mod cli;
mod client;
mod config;
mod controller;
mod error;
mod input;
mod logging;
mod runtime;

pub mod ui;

// Crate-level exports - Alerts
pub use alert::{Alert, AlertPresenter, ModalAlerts};

// Crate-level exports - Application state and input
pub use app::App;
pub use input::{Action, action_for, move_cursor};

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ClientConfig, ConfigError, LOG_FILE_ENV, SERVER_URL_ENV};
pub use logging::init_logging;

// Crate-level exports - Server client
pub use client::{GameApi, HttpGameClient, MoveRequest};
pub use error::{ClientError, ErrorResponse, GENERIC_FAILURE_MESSAGE};

// Crate-level exports - Controller
pub use controller::{Command, Controller, Outcome, Pending, Phase, Ticket};

// Crate-level exports - Runtime
pub use runtime::run_tui;
