//! Interaction controller: keeps the displayed snapshot in sync with the server.
//!
//! The controller is a synchronous state machine. Anything that needs the
//! network is returned as a [`Command`]; the runtime executes it and feeds the
//! [`Outcome`] back through [`Controller::resolve`]. Each command carries a
//! ticket, and only the outcome for the ticket the controller is waiting on
//! is applied. That gives two guarantees:
//!
//! - at most one move is in flight; selecting a pit while one is pending is
//!   refused without a request
//! - a response that arrives after a reset (or any newer command) is dropped
//!
//! ```text
//!   start / reset / winner acknowledged
//!        │
//!        ▼
//!   ┌─────────┐ created, no winner ┌───────┐ move with winner ┌───────┐
//!   │ Loading │ ─────────────────▶ │ Ready │ ───────────────▶ │ Ended │
//!   └─────────┘                    └───────┘                  └───────┘
//!        ▲  create failed: alert,      │ move ok: replace snapshot
//!        └─ stay Loading               │ move failed: alert, keep snapshot
//! ```

use crate::alert::AlertPresenter;
use crate::client::GameApi;
use crate::error::ClientError;
use derive_more::Display;
use mancala_board::{GameId, GameSnapshot, PitPlace};
use tracing::{debug, info, instrument, warn};

/// Identifies one issued command.
pub type Ticket = u64;

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// Waiting for a new game from the server.
    Loading,
    /// A game is displayed and accepts moves.
    Ready,
    /// The server declared a winner.
    Ended,
}

/// Network work requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch a new game.
    CreateGame {
        /// Command ticket.
        ticket: Ticket,
    },
    /// Submit a move.
    SubmitMove {
        /// Command ticket.
        ticket: Ticket,
        /// Game the move belongs to.
        game_id: GameId,
        /// Pit to sow from.
        pit: PitPlace,
    },
    /// End the game server-side.
    ResetGame {
        /// Command ticket.
        ticket: Ticket,
        /// Game to end.
        game_id: GameId,
    },
}

impl Command {
    /// Ticket of this command.
    #[instrument]
    pub fn ticket(&self) -> Ticket {
        match self {
            Command::CreateGame { ticket }
            | Command::SubmitMove { ticket, .. }
            | Command::ResetGame { ticket, .. } => *ticket,
        }
    }

    /// Runs the command against the server. Makes exactly one request.
    #[instrument(skip(api))]
    pub async fn execute<C: GameApi + ?Sized>(self, api: &C) -> Outcome {
        match self {
            Command::CreateGame { ticket } => Outcome::Created {
                ticket,
                result: api.create_game().await,
            },
            Command::SubmitMove {
                ticket,
                game_id,
                pit,
            } => Outcome::Moved {
                ticket,
                result: api.submit_move(&game_id, pit).await,
            },
            Command::ResetGame { ticket, game_id } => Outcome::Reset {
                ticket,
                result: api.reset_game(&game_id).await,
            },
        }
    }
}

/// Result of an executed [`Command`].
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Result of [`Command::CreateGame`].
    Created {
        /// Ticket of the command.
        ticket: Ticket,
        /// New game or failure.
        result: Result<GameSnapshot, ClientError>,
    },
    /// Result of [`Command::SubmitMove`].
    Moved {
        /// Ticket of the command.
        ticket: Ticket,
        /// Game after the move or failure.
        result: Result<GameSnapshot, ClientError>,
    },
    /// Result of [`Command::ResetGame`].
    Reset {
        /// Ticket of the command.
        ticket: Ticket,
        /// Success or failure.
        result: Result<(), ClientError>,
    },
}

impl Outcome {
    /// Ticket of the command this answers.
    #[instrument(skip(self))]
    pub fn ticket(&self) -> Ticket {
        match self {
            Outcome::Created { ticket, .. }
            | Outcome::Moved { ticket, .. }
            | Outcome::Reset { ticket, .. } => *ticket,
        }
    }
}

/// Request the controller is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Create in flight.
    Create,
    /// Move from this pit in flight.
    Move(PitPlace),
    /// Reset in flight.
    Reset,
}

/// Owns the single displayed snapshot and decides what to request next.
#[derive(Debug)]
pub struct Controller<A: AlertPresenter> {
    phase: Phase,
    snapshot: Option<GameSnapshot>,
    alerts: A,
    next_ticket: Ticket,
    pending: Option<(Ticket, Pending)>,
}

impl<A: AlertPresenter> Controller<A> {
    /// Creates a controller that has not loaded anything yet.
    #[instrument(skip(alerts))]
    pub fn new(alerts: A) -> Self {
        Self {
            phase: Phase::Loading,
            snapshot: None,
            alerts,
            next_ticket: 0,
            pending: None,
        }
    }

    /// Current phase.
    #[instrument(skip(self))]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The snapshot on display.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }

    /// The alert presenter.
    #[instrument(skip(self))]
    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    /// What the controller is waiting for, if anything.
    #[instrument(skip(self))]
    pub fn pending(&self) -> Option<Pending> {
        self.pending.map(|(_, pending)| pending)
    }

    /// Enters Loading and requests the first game.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Command {
        info!("Starting");
        self.reinitialize()
    }

    /// Requests a move from `pit`.
    ///
    /// Returns `None` unless a game is on display, no move is pending and the
    /// game has not ended.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn select_pit(&mut self, pit: PitPlace) -> Option<Command> {
        if self.phase != Phase::Ready {
            debug!("No game accepting moves");
            return None;
        }
        if let Some((ticket, pending)) = self.pending {
            warn!(ticket, ?pending, "Request in flight, move ignored");
            return None;
        }
        let game_id = self.snapshot.as_ref()?.game_id().clone();
        let ticket = self.issue(Pending::Move(pit));
        info!(ticket, game_id = %game_id, "Submitting move");
        Some(Command::SubmitMove {
            ticket,
            game_id,
            pit,
        })
    }

    /// Ends the current game and starts over.
    ///
    /// With a game on display the server is asked to delete it first and the
    /// new game is requested once that answer arrives. Any in-flight move is
    /// abandoned.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) -> Option<Command> {
        if matches!(self.pending, Some((_, Pending::Reset))) {
            debug!("Reset already in flight");
            return None;
        }
        match self.snapshot.take() {
            Some(snapshot) => {
                self.phase = Phase::Loading;
                let game_id = snapshot.game_id().clone();
                let ticket = self.issue(Pending::Reset);
                info!(ticket, game_id = %game_id, "Resetting game");
                Some(Command::ResetGame { ticket, game_id })
            }
            None => Some(self.reinitialize()),
        }
    }

    /// Closes the visible alert. Closing the winner alert starts a new game.
    #[instrument(skip(self))]
    pub fn acknowledge_alert(&mut self) -> Option<Command> {
        let alert = self.alerts.dismiss()?;
        debug!(?alert, "Alert acknowledged");
        if alert.is_winner() {
            Some(self.reinitialize())
        } else {
            None
        }
    }

    /// Applies a command outcome. May return a follow-up command.
    #[instrument(skip(self, outcome), fields(ticket = outcome.ticket()))]
    pub fn resolve(&mut self, outcome: Outcome) -> Option<Command> {
        match self.pending {
            Some((ticket, _)) if ticket == outcome.ticket() => self.pending = None,
            _ => {
                debug!(expected = ?self.pending, "Stale outcome dropped");
                return None;
            }
        }

        match outcome {
            Outcome::Created { result, .. } | Outcome::Moved { result, .. } => {
                match result {
                    Ok(snapshot) => self.accept(snapshot),
                    Err(err) => {
                        warn!(error = %err, phase = %self.phase, "Request failed");
                        self.alerts.show_error(&err);
                    }
                }
                None
            }
            Outcome::Reset { result, .. } => {
                if let Err(err) = result {
                    warn!(error = %err, "Reset failed");
                    self.alerts.show_error(&err);
                }
                Some(self.reinitialize())
            }
        }
    }

    /// Replaces the displayed snapshot wholesale.
    #[instrument(skip_all, fields(game_id = %snapshot.game_id()))]
    fn accept(&mut self, snapshot: GameSnapshot) {
        info!(
            game_id = %snapshot.game_id(),
            player = %snapshot.player(),
            winner = ?snapshot.player_winner(),
            "Snapshot applied"
        );
        match snapshot.player_winner() {
            Some(winner) => {
                self.phase = Phase::Ended;
                self.alerts.show_winner(winner);
            }
            None => self.phase = Phase::Ready,
        }
        self.snapshot = Some(snapshot);
    }

    #[instrument(skip(self))]
    fn reinitialize(&mut self) -> Command {
        self.phase = Phase::Loading;
        self.snapshot = None;
        let ticket = self.issue(Pending::Create);
        Command::CreateGame { ticket }
    }

    #[instrument(skip(self))]
    fn issue(&mut self, pending: Pending) -> Ticket {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending = Some((ticket, pending));
        ticket
    }
}
