//! Input mapping and application state tests.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mancala_board::{GameId, GameSnapshot, PitPlace, Player};
use mancala_tui::ui::BoardLayout;
use mancala_tui::{Action, Alert, App, ClientError, Command, Outcome, action_for, move_cursor};
use ratatui::layout::Rect;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn loaded(player: Player) -> App {
    let mut app = App::new();
    let command = app.start();
    app.resolve(Outcome::Created {
        ticket: command.ticket(),
        result: Ok(GameSnapshot::initial(GameId::new("g1"), player, 4)),
    });
    app
}

fn move_pit(command: Option<Command>) -> Option<PitPlace> {
    match command? {
        Command::SubmitMove { pit, .. } => Some(pit),
        _ => None,
    }
}

#[test]
fn test_keys_map_to_actions() {
    assert_eq!(action_for(&key(KeyCode::Left), false), Some(Action::CursorLeft));
    assert_eq!(action_for(&key(KeyCode::Up), false), Some(Action::CursorUp));
    assert_eq!(action_for(&key(KeyCode::Enter), false), Some(Action::SelectCursor));
    assert_eq!(
        action_for(&key(KeyCode::Char('4')), false),
        Some(Action::SelectNumber(4))
    );
    assert_eq!(action_for(&key(KeyCode::Char('7')), false), None);
    assert_eq!(action_for(&key(KeyCode::Char('r')), false), Some(Action::Reset));
    assert_eq!(action_for(&key(KeyCode::Char('q')), false), Some(Action::Quit));
}

#[test]
fn test_key_release_ignored() {
    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(action_for(&Event::Key(release), false), None);
}

#[test]
fn test_open_alert_only_dismisses_or_quits() {
    assert_eq!(action_for(&key(KeyCode::Enter), true), Some(Action::Dismiss));
    assert_eq!(action_for(&key(KeyCode::Esc), true), Some(Action::Dismiss));
    assert_eq!(action_for(&key(KeyCode::Char('q')), true), Some(Action::Quit));
    assert_eq!(action_for(&key(KeyCode::Char('1')), true), None);
    assert_eq!(action_for(&click(10, 10), true), None);
}

#[test]
fn test_left_click_maps_to_position() {
    assert_eq!(
        action_for(&click(12, 7), false),
        Some(Action::Click { column: 12, row: 7 })
    );
}

#[test]
fn test_cursor_moves_along_rows() {
    assert_eq!(move_cursor(PitPlace::PlayerOneA, Action::CursorLeft), PitPlace::PlayerOneA);
    assert_eq!(move_cursor(PitPlace::PlayerOneA, Action::CursorRight), PitPlace::PlayerOneB);
    assert_eq!(move_cursor(PitPlace::PlayerOneF, Action::CursorRight), PitPlace::PlayerOneF);
    // Top row reads Z..U left to right.
    assert_eq!(move_cursor(PitPlace::PlayerTwoU, Action::CursorLeft), PitPlace::PlayerTwoV);
    assert_eq!(move_cursor(PitPlace::PlayerTwoZ, Action::CursorLeft), PitPlace::PlayerTwoZ);
    assert_eq!(move_cursor(PitPlace::PlayerTwoU, Action::CursorRight), PitPlace::PlayerTwoU);
}

#[test]
fn test_cursor_crosses_rows_to_facing_pit() {
    assert_eq!(move_cursor(PitPlace::PlayerOneA, Action::CursorUp), PitPlace::PlayerTwoZ);
    assert_eq!(move_cursor(PitPlace::PlayerTwoU, Action::CursorDown), PitPlace::PlayerOneF);
    assert_eq!(move_cursor(PitPlace::PlayerOneC, Action::CursorDown), PitPlace::PlayerOneC);
}

#[test]
fn test_number_selects_own_pit() {
    let mut app = loaded(Player::One);
    assert_eq!(
        move_pit(app.handle_action(Action::SelectNumber(2))),
        Some(PitPlace::PlayerOneB)
    );

    let mut app = loaded(Player::Two);
    assert_eq!(
        move_pit(app.handle_action(Action::SelectNumber(6))),
        Some(PitPlace::PlayerTwoZ)
    );
}

#[test]
fn test_number_out_of_range_ignored() {
    let mut app = loaded(Player::One);
    assert!(app.handle_action(Action::SelectNumber(0)).is_none());
    assert!(app.handle_action(Action::SelectNumber(9)).is_none());
}

#[test]
fn test_click_selects_pit_and_ignores_stores() {
    let mut app = loaded(Player::One);
    let layout = BoardLayout::compute(Rect::new(0, 0, 80, 12));
    let store = layout.rect(PitPlace::PlayerOneBig).unwrap();
    let pit = layout.rect(PitPlace::PlayerOneD).unwrap();
    app.set_board_layout(Some(layout));

    assert!(
        app.handle_action(Action::Click {
            column: store.x + 1,
            row: store.y + 1
        })
        .is_none()
    );
    assert_eq!(
        move_pit(app.handle_action(Action::Click {
            column: pit.x + 1,
            row: pit.y + 1
        })),
        Some(PitPlace::PlayerOneD)
    );
    assert_eq!(app.cursor(), PitPlace::PlayerOneD);
}

#[test]
fn test_click_without_layout_ignored() {
    let mut app = loaded(Player::One);
    assert!(app.handle_action(Action::Click { column: 5, row: 5 }).is_none());
}

#[test]
fn test_alert_blocks_moves_until_dismissed() {
    let mut app = loaded(Player::One);
    let command = app.handle_action(Action::SelectCursor).expect("move issued");
    app.resolve(Outcome::Moved {
        ticket: command.ticket(),
        result: Err(ClientError::Network {
            message: "connection refused".to_string(),
        }),
    });
    assert_eq!(app.alert(), Some(&Alert::Failure));

    assert!(app.handle_action(Action::SelectNumber(1)).is_none());
    assert!(app.handle_action(Action::Dismiss).is_none());
    assert!(app.alert().is_none());
    assert!(app.handle_action(Action::SelectNumber(1)).is_some());
}

#[test]
fn test_quit_sets_flag() {
    let mut app = App::new();
    assert!(!app.should_quit());
    app.handle_action(Action::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_cursor_follows_side_to_move() {
    let mut app = loaded(Player::One);
    app.handle_action(Action::CursorRight);
    assert_eq!(app.cursor(), PitPlace::PlayerOneB);

    let command = app.handle_action(Action::SelectCursor).expect("move issued");
    app.resolve(Outcome::Moved {
        ticket: command.ticket(),
        result: Ok(GameSnapshot::initial(GameId::new("g1"), Player::Two, 4)),
    });
    assert_eq!(app.cursor(), PitPlace::PlayerTwoY);
}
