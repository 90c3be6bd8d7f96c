//! Keyboard and mouse input mapping.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use mancala_board::PitPlace;
use tracing::instrument;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor left on screen.
    CursorLeft,
    /// Move the cursor right on screen.
    CursorRight,
    /// Move the cursor to the top row.
    CursorUp,
    /// Move the cursor to the bottom row.
    CursorDown,
    /// Sow from the pit under the cursor.
    SelectCursor,
    /// Sow from the n-th (1-6) pit of the player to move.
    SelectNumber(u8),
    /// Mouse click at a terminal cell.
    Click {
        /// Column of the click.
        column: u16,
        /// Row of the click.
        row: u16,
    },
    /// End this game and start a new one.
    Reset,
    /// Close the open alert.
    Dismiss,
    /// Leave the program.
    Quit,
}

/// Maps a terminal event to an action. While an alert is open only
/// dismissing and quitting are possible.
#[instrument]
pub fn action_for(event: &Event, alert_open: bool) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if alert_open {
                return match key.code {
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::Dismiss),
                    KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
                    _ => None,
                };
            }
            match key.code {
                KeyCode::Left => Some(Action::CursorLeft),
                KeyCode::Right => Some(Action::CursorRight),
                KeyCode::Up => Some(Action::CursorUp),
                KeyCode::Down => Some(Action::CursorDown),
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
                KeyCode::Char(c @ '1'..='6') => Some(Action::SelectNumber(c as u8 - b'0')),
                KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
                KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
                _ => None,
            }
        }
        Event::Mouse(mouse) if !alert_open => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Moves the cursor across the 12 playable pits as they appear on screen.
///
/// The top row shows pits 12 down to 7, the bottom row 0 up to 5, so pit `i`
/// sits directly below pit `12 - i`.
#[instrument]
pub fn move_cursor(cursor: PitPlace, action: Action) -> PitPlace {
    let index = cursor.index();
    let top = index > PitPlace::PlayerOneBig.index();
    let next = match (action, top) {
        (Action::CursorLeft, false) => index.saturating_sub(1),
        (Action::CursorRight, false) => (index + 1).min(5),
        (Action::CursorLeft, true) => (index + 1).min(12),
        (Action::CursorRight, true) => index.saturating_sub(1).max(7),
        (Action::CursorUp, false) | (Action::CursorDown, true) => 12 - index.min(12),
        _ => index,
    };
    PitPlace::from_index(next).unwrap_or(cursor)
}
