//! Blocking notifications: rule warnings, server failures and the winner.

use crate::error::{ClientError, GENERIC_FAILURE_MESSAGE};
use mancala_board::Player;
use tracing::{debug, info, instrument};

/// A notification waiting for the user to acknowledge it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The server refused the move; the message is the server's own.
    Warning {
        /// Server-provided reason.
        message: String,
    },
    /// Any other failure; always the generic message.
    Failure,
    /// The game is over. Acknowledging it starts a new game.
    Winner {
        /// Who won.
        player: Player,
    },
}

impl Alert {
    /// Chooses the alert for a failed request.
    #[instrument(skip(err), fields(error = %err))]
    pub fn from_error(err: &ClientError) -> Self {
        match err {
            ClientError::RuleViolation { response } => Alert::Warning {
                message: response.error_message().clone(),
            },
            _ => Alert::Failure,
        }
    }

    /// Text shown to the user.
    #[instrument]
    pub fn message(&self) -> String {
        match self {
            Alert::Warning { message } => message.clone(),
            Alert::Failure => GENERIC_FAILURE_MESSAGE.to_string(),
            Alert::Winner { player } => format!("{} is the Winner!!", player),
        }
    }

    /// Dialog title.
    #[instrument]
    pub fn title(&self) -> &'static str {
        match self {
            Alert::Warning { .. } => "Warning",
            Alert::Failure => "Error",
            Alert::Winner { .. } => "Game Over",
        }
    }

    /// True for the end-of-game alert.
    #[instrument]
    pub fn is_winner(&self) -> bool {
        matches!(self, Alert::Winner { .. })
    }
}

/// Surfaces alerts to the user.
pub trait AlertPresenter {
    /// Shows an alert.
    fn present(&mut self, alert: Alert);

    /// Closes the visible alert and returns it.
    fn dismiss(&mut self) -> Option<Alert>;

    /// The alert currently shown, if any.
    fn current(&self) -> Option<&Alert>;

    /// Shows the warning or generic failure for `err`.
    #[instrument(skip(self))]
    fn show_error(&mut self, err: &ClientError) {
        self.present(Alert::from_error(err));
    }

    /// Shows the winner confirmation.
    #[instrument(skip(self))]
    fn show_winner(&mut self, player: Player) {
        self.present(Alert::Winner { player });
    }
}

/// Single modal dialog drawn over the board.
///
/// A newer alert replaces the visible one, except that nothing replaces a
/// winner confirmation: it has to be acknowledged to start the next game.
#[derive(Debug, Default)]
pub struct ModalAlerts {
    current: Option<Alert>,
}

impl ModalAlerts {
    /// Creates an empty presenter.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertPresenter for ModalAlerts {
    #[instrument(skip(self))]
    fn present(&mut self, alert: Alert) {
        if self.current.as_ref().is_some_and(Alert::is_winner) && !alert.is_winner() {
            debug!(?alert, "Winner dialog open, dropping alert");
            return;
        }
        info!(message = %alert.message(), "Showing alert");
        self.current = Some(alert);
    }

    #[instrument]
    fn dismiss(&mut self) -> Option<Alert> {
        self.current.take()
    }

    #[instrument]
    fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}
