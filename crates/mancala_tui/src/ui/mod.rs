//! UI rendering using ratatui.

mod board;
mod modal;

use crate::app::App;
use crate::controller::{Pending, Phase};
use mancala_board::GameSnapshot;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

pub use board::{BoardLayout, render_board};
pub use modal::render_alert;

/// Draws the whole screen and returns where the pits ended up.
#[instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) -> Option<BoardLayout> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Mancala")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[1]);

    let controller = app.controller();
    let cursor = (controller.phase() == Phase::Ready).then(|| app.cursor());
    let layout = render_board(f, chunks[2], controller.snapshot(), cursor);

    let help = Paragraph::new("←→↑↓ Move | Enter/Click: Sow | 1-6: Pit | R: Reset | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    if let Some(alert) = app.alert() {
        render_alert(f, f.area(), alert);
    }

    layout
}

/// Whose turn it is, e.g. `Player 2's turn`.
#[instrument(skip(snapshot))]
pub fn turn_text(snapshot: &GameSnapshot) -> String {
    format!("Player {}'s turn", snapshot.player().number())
}

/// Status line for the current phase.
#[instrument(skip(app))]
pub fn status_text(app: &App) -> String {
    let controller = app.controller();
    let Some(snapshot) = controller.snapshot() else {
        return "Loading game...".to_string();
    };
    let (one, two) = snapshot.store_totals();
    let headline = match (controller.phase(), controller.pending()) {
        (Phase::Ended, _) => match snapshot.player_winner() {
            Some(winner) => format!("{} is the Winner!!", winner),
            None => "Game over".to_string(),
        },
        (_, Some(Pending::Move(pit))) => {
            format!("{} - sowing from {}...", turn_text(snapshot), pit.label())
        }
        _ => turn_text(snapshot),
    };
    format!("{}   |   Store P1: {}   Store P2: {}", headline, one, two)
}

/// Centers a `width` x `height` rectangle in `area`, clipped to it.
#[instrument]
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
