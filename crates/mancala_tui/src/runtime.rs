//! Terminal event loop.
//!
//! The loop is the only owner of [`App`]. Requests run as tokio tasks and
//! report back over a channel, so the board keeps redrawing while one is in
//! flight.

use crate::app::App;
use crate::client::{GameApi, HttpGameClient};
use crate::config::ClientConfig;
use crate::controller::{Command, Outcome};
use crate::input::action_for;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK: Duration = Duration::from_millis(50);

/// Runs the terminal client against the configured server.
#[instrument(skip_all, fields(server_url = %config.server_url()))]
pub async fn run_tui(config: ClientConfig) -> Result<()> {
    info!("Starting Mancala TUI");

    let mut terminal = setup_terminal()?;
    let client = Arc::new(HttpGameClient::new(config.server_url()));

    let res = run_app(&mut terminal, client).await;

    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

#[instrument]
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

#[instrument(skip_all)]
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[instrument(skip_all)]
async fn run_app<C: GameApi + 'static>(terminal: &mut Tui, api: Arc<C>) -> Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let mut app = App::new();

    dispatch(&api, &outcome_tx, app.start());

    while !app.should_quit() {
        let mut layout = None;
        terminal.draw(|f| layout = ui::draw(f, &app))?;
        app.set_board_layout(layout);

        while let Ok(outcome) = outcome_rx.try_recv() {
            if let Some(command) = app.resolve(outcome) {
                dispatch(&api, &outcome_tx, command);
            }
        }

        if event::poll(TICK)? {
            let event = event::read()?;
            if let Some(action) = action_for(&event, app.alert().is_some()) {
                debug!(?action, "User action");
                if let Some(command) = app.handle_action(action) {
                    dispatch(&api, &outcome_tx, command);
                }
            }
        }
    }

    info!("User quit");
    Ok(())
}

/// Runs `command` on its own task; the outcome comes back over `outcome_tx`.
#[instrument(skip_all, fields(ticket = command.ticket()))]
fn dispatch<C: GameApi + 'static>(
    api: &Arc<C>,
    outcome_tx: &mpsc::UnboundedSender<Outcome>,
    command: Command,
) {
    debug!(?command, "Dispatching");
    let api = Arc::clone(api);
    let outcome_tx = outcome_tx.clone();
    tokio::spawn(async move {
        let outcome = command.execute(api.as_ref()).await;
        if outcome_tx.send(outcome).is_err() {
            warn!("Event loop gone, outcome dropped");
        }
    });
}
