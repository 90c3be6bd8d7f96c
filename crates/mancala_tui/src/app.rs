//! Application state: the controller plus what only the terminal needs.

use crate::alert::{Alert, AlertPresenter, ModalAlerts};
use crate::controller::{Command, Controller, Outcome};
use crate::input::{Action, move_cursor};
use crate::ui::BoardLayout;
use mancala_board::PitPlace;
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller<ModalAlerts>,
    cursor: PitPlace,
    board_layout: Option<BoardLayout>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the application; call [`App::start`] to load the first game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            controller: Controller::new(ModalAlerts::new()),
            cursor: PitPlace::PlayerOneA,
            board_layout: None,
            should_quit: false,
        }
    }

    /// Requests the first game.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Command {
        self.controller.start()
    }

    /// The interaction controller.
    #[instrument(skip(self))]
    pub fn controller(&self) -> &Controller<ModalAlerts> {
        &self.controller
    }

    /// Pit under the keyboard cursor.
    #[instrument(skip(self))]
    pub fn cursor(&self) -> PitPlace {
        self.cursor
    }

    /// The open alert, if any.
    #[instrument(skip(self))]
    pub fn alert(&self) -> Option<&Alert> {
        self.controller.alerts().current()
    }

    /// True once the user asked to quit.
    #[instrument(skip(self))]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Remembers where the last frame drew the pits, for mouse hit-testing.
    #[instrument(skip_all)]
    pub fn set_board_layout(&mut self, layout: Option<BoardLayout>) {
        self.board_layout = layout;
    }

    /// Applies a user action. Returns the request to send, if any.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Dismiss => self.controller.acknowledge_alert(),
            _ if self.alert().is_some() => {
                debug!("Alert open, action ignored");
                None
            }
            Action::CursorLeft | Action::CursorRight | Action::CursorUp | Action::CursorDown => {
                self.cursor = move_cursor(self.cursor, action);
                None
            }
            Action::SelectCursor => self.controller.select_pit(self.cursor),
            Action::SelectNumber(n) => {
                let player = self.controller.snapshot()?.player();
                let pit = *player.small_pits().get(usize::from(n).checked_sub(1)?)?;
                self.cursor = pit;
                self.controller.select_pit(pit)
            }
            Action::Click { column, row } => {
                let pit = self
                    .board_layout
                    .as_ref()?
                    .pit_at(column, row)
                    .filter(|pit| !pit.is_big())?;
                self.cursor = pit;
                self.controller.select_pit(pit)
            }
            Action::Reset => self.controller.reset(),
        }
    }

    /// Applies a finished request and keeps the cursor on the side to move.
    #[instrument(skip(self, outcome), fields(ticket = outcome.ticket()))]
    pub fn resolve(&mut self, outcome: Outcome) -> Option<Command> {
        let next = self.controller.resolve(outcome);
        self.follow_turn();
        next
    }

    #[instrument(skip(self))]
    fn follow_turn(&mut self) {
        let Some(snapshot) = self.controller.snapshot() else {
            return;
        };
        if self.cursor.owner() != snapshot.player() {
            let mirrored = 12 - self.cursor.index().min(12);
            if let Some(pit) = PitPlace::from_index(mirrored) {
                debug!(from = %self.cursor, to = %pit, "Cursor follows turn");
                self.cursor = pit;
            }
        }
    }
}
