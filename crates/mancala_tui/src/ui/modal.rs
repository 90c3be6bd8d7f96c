//! Alert dialog drawn over the board.

use super::center_rect;
use crate::alert::Alert;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph, Wrap},
};
use tracing::instrument;

/// Renders `alert` as a centered modal.
#[instrument(skip(frame))]
pub fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let color = match alert {
        Alert::Warning { .. } => Color::Yellow,
        Alert::Failure => Color::Red,
        Alert::Winner { .. } => Color::Green,
    };
    let hint = if alert.is_winner() {
        "[Enter] New game"
    } else {
        "[Enter] OK"
    };

    let popup = center_rect(area, 54, 7);
    let lines = vec![
        Line::from(""),
        Line::styled(alert.message(), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled(hint, Style::default().fg(Color::DarkGray)),
    ];
    let block = Block::bordered()
        .title(alert.title())
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}
