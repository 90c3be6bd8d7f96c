//! Mancala board rendering.
//!
//! ```text
//!  ┌P2───┐┌Z───┐┌Y───┐ ... ┌U───┐┌P1───┐
//!  │     ││ 4  ││ 4  │     │ 4  ││     │
//!  │  0  │└────┘└────┘     └────┘│  0  │
//!  │     │┌A───┐┌B───┐ ... ┌F───┐│     │
//!  │     ││ 4  ││ 4  │     │ 4  ││     │
//!  └─────┘└────┘└────┘     └────┘└─────┘
//! ```

use mancala_board::{GameSnapshot, Pit, PitPlace, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use tracing::instrument;

/// Width of one pit cell.
const CELL_WIDTH: u16 = 8;
/// Height of one small pit.
const CELL_HEIGHT: u16 = 3;
/// Store, six pits, store.
const COLUMNS: u16 = 8;

/// Screen rectangle of every pit, used to draw and to hit-test clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    cells: Vec<(PitPlace, Rect)>,
}

impl BoardLayout {
    /// Places the board centered in `area`. Cells are clipped to `area`.
    #[instrument]
    pub fn compute(area: Rect) -> Self {
        let width = CELL_WIDTH * COLUMNS;
        let height = CELL_HEIGHT * 2;
        let x0 = area.x + area.width.saturating_sub(width) / 2;
        let y0 = area.y + area.height.saturating_sub(height) / 2;

        let column_x = |column: u16| x0 + column * CELL_WIDTH;
        let mut cells = Vec::with_capacity(14);

        cells.push((
            PitPlace::PlayerTwoBig,
            Rect::new(column_x(0), y0, CELL_WIDTH, height),
        ));
        for (column, place) in (1..).zip(PitPlace::PLAYER_TWO_SMALL.iter().rev()) {
            cells.push((*place, Rect::new(column_x(column), y0, CELL_WIDTH, CELL_HEIGHT)));
        }
        for (column, place) in (1..).zip(PitPlace::PLAYER_ONE_SMALL.iter()) {
            cells.push((
                *place,
                Rect::new(column_x(column), y0 + CELL_HEIGHT, CELL_WIDTH, CELL_HEIGHT),
            ));
        }
        cells.push((
            PitPlace::PlayerOneBig,
            Rect::new(column_x(COLUMNS - 1), y0, CELL_WIDTH, height),
        ));

        let cells = cells
            .into_iter()
            .map(|(place, rect)| (place, rect.intersection(area)))
            .collect();
        Self { cells }
    }

    /// Rectangle of one pit.
    #[instrument(skip(self))]
    pub fn rect(&self, place: PitPlace) -> Option<Rect> {
        self.cells
            .iter()
            .find(|(p, _)| *p == place)
            .map(|(_, rect)| *rect)
    }

    /// The pit drawn at a terminal cell, if any.
    #[instrument(skip(self))]
    pub fn pit_at(&self, column: u16, row: u16) -> Option<PitPlace> {
        let position = Position::new(column, row);
        self.cells
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(place, _)| *place)
    }

    /// Pits in drawing order: stores, top row left to right, bottom row.
    #[instrument(skip(self))]
    pub fn cells(&self) -> &[(PitPlace, Rect)] {
        &self.cells
    }
}

/// Renders the board. Draws nothing and returns `None` before a game has
/// loaded.
#[instrument(skip(frame, snapshot))]
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&GameSnapshot>,
    cursor: Option<PitPlace>,
) -> Option<BoardLayout> {
    let snapshot = snapshot?;
    let layout = BoardLayout::compute(area);
    for (place, rect) in layout.cells() {
        if rect.is_empty() {
            continue;
        }
        let pit = snapshot.pit(*place);
        let selected = cursor == Some(*place);
        render_pit(frame, *rect, pit, snapshot.player(), selected);
    }
    Some(layout)
}

#[instrument]
fn side_color(player: Player) -> Color {
    match player {
        Player::One => Color::Cyan,
        Player::Two => Color::Magenta,
    }
}

#[instrument(skip(frame))]
fn render_pit(frame: &mut Frame, area: Rect, pit: Pit, to_move: Player, selected: bool) {
    let place = pit.pit_place();
    let owner = place.owner();

    let mut border = Style::default().fg(side_color(owner));
    if owner == to_move {
        border = border.add_modifier(Modifier::BOLD);
    }
    let mut text = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if selected {
        text = text.bg(Color::White).fg(Color::Black);
        border = border.fg(Color::Yellow);
    }

    let mut lines = Vec::new();
    if place.is_big() {
        // Stores span both rows; drop the count to the middle.
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(pit.stones().to_string(), text));

    let block = Block::bordered().title(place.label()).border_style(border);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
