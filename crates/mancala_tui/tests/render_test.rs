//! Rendering tests using ratatui's test backend.

use mancala_board::{GameId, GameSnapshot, Pit, PitPlace, Player};
use mancala_tui::ui::{self, BoardLayout};
use mancala_tui::{App, ClientError, ErrorResponse, Outcome};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

fn render(app: &App) -> (Buffer, Option<BoardLayout>) {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut layout = None;
    terminal.draw(|f| layout = ui::draw(f, app)).unwrap();
    (terminal.backend().buffer().clone(), layout)
}

fn text_in(buffer: &Buffer, rect: Rect) -> String {
    let mut text = String::new();
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            text.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        text.push('\n');
    }
    text
}

/// Text inside a pit's border, whitespace removed.
fn pit_text(buffer: &Buffer, layout: &BoardLayout, place: PitPlace) -> String {
    let rect = layout.rect(place).expect("pit drawn");
    let inner = Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2);
    text_in(buffer, inner).split_whitespace().collect()
}

fn loaded(snapshot: GameSnapshot) -> App {
    let mut app = App::new();
    let command = app.start();
    app.resolve(Outcome::Created {
        ticket: command.ticket(),
        result: Ok(snapshot),
    });
    app
}

fn initial() -> GameSnapshot {
    GameSnapshot::initial(GameId::new("g1"), Player::One, 4)
}

#[test]
fn test_nothing_drawn_before_load() {
    let mut app = App::new();
    app.start();
    let (buffer, layout) = render(&app);
    assert!(layout.is_none());
    assert!(text_in(&buffer, buffer.area).contains("Loading game..."));
}

#[test]
fn test_initial_board_shows_stones() {
    let app = loaded(initial());
    let (buffer, layout) = render(&app);
    let layout = layout.expect("board drawn");

    for place in PitPlace::ALL {
        let expected = if place.is_big() { "0" } else { "4" };
        assert_eq!(pit_text(&buffer, &layout, place), expected, "pit {}", place);
    }
    assert!(text_in(&buffer, buffer.area).contains("Player 1's turn"));
}

#[test]
fn test_layout_order_left_to_right() {
    let layout = BoardLayout::compute(Rect::new(0, 0, 80, 12));
    let x = |place: PitPlace| layout.rect(place).unwrap().x;
    let y = |place: PitPlace| layout.rect(place).unwrap().y;

    let top: Vec<u16> = [12, 11, 10, 9, 8, 7]
        .into_iter()
        .map(|i| x(PitPlace::from_index(i).unwrap()))
        .collect();
    assert!(top.windows(2).all(|w| w[0] < w[1]));

    let bottom: Vec<u16> = (0..6).map(|i| x(PitPlace::from_index(i).unwrap())).collect();
    assert!(bottom.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(top, bottom);

    assert!(y(PitPlace::PlayerTwoU) < y(PitPlace::PlayerOneF));
    assert!(x(PitPlace::PlayerTwoBig) < x(PitPlace::PlayerTwoZ));
    assert!(x(PitPlace::PlayerOneBig) > x(PitPlace::PlayerOneF));
}

#[test]
fn test_pit_at_hits_each_cell() {
    let layout = BoardLayout::compute(Rect::new(0, 0, 80, 12));
    for (place, rect) in layout.cells() {
        assert_eq!(layout.pit_at(rect.x + 1, rect.y + 1), Some(*place));
    }
    assert_eq!(layout.pit_at(0, 0), None);
}

#[test]
fn test_header_follows_turn() {
    let mut app = loaded(initial());
    let command = app
        .handle_action(mancala_tui::Action::SelectNumber(3))
        .expect("move issued");

    let pits = PitPlace::ALL
        .iter()
        .map(|place| {
            let stones = match place.index() {
                2 | 13 => 0,
                3 | 4 | 5 => 5,
                6 => 1,
                _ => 4,
            };
            Pit::new(*place, stones)
        })
        .collect();
    let after = GameSnapshot::new(GameId::new("g1"), Player::Two, pits, None).unwrap();
    app.resolve(Outcome::Moved {
        ticket: command.ticket(),
        result: Ok(after),
    });

    let (buffer, layout) = render(&app);
    assert!(text_in(&buffer, buffer.area).contains("Player 2's turn"));
    assert_eq!(pit_text(&buffer, &layout.unwrap(), PitPlace::PlayerOneC), "0");
}

#[test]
fn test_warning_dialog_shows_server_message() {
    let mut app = loaded(initial());
    let command = app
        .handle_action(mancala_tui::Action::SelectCursor)
        .expect("move issued");
    app.resolve(Outcome::Moved {
        ticket: command.ticket(),
        result: Err(ClientError::RuleViolation {
            response: ErrorResponse::new(403, "Not your turn"),
        }),
    });

    let (buffer, _) = render(&app);
    let screen = text_in(&buffer, buffer.area);
    assert!(screen.contains("Not your turn"));
    assert!(screen.contains("Warning"));
}

#[test]
fn test_winner_dialog() {
    let mut app = loaded(initial());
    let command = app
        .handle_action(mancala_tui::Action::SelectCursor)
        .expect("move issued");
    let pits = PitPlace::ALL
        .iter()
        .map(|place| {
            let stones = match place.index() {
                6 => 30,
                13 => 18,
                _ => 0,
            };
            Pit::new(*place, stones)
        })
        .collect();
    let over = GameSnapshot::new(GameId::new("g1"), Player::Two, pits, Some(Player::One)).unwrap();
    app.resolve(Outcome::Moved {
        ticket: command.ticket(),
        result: Ok(over),
    });

    let (buffer, _) = render(&app);
    let screen = text_in(&buffer, buffer.area);
    assert!(screen.contains("PLAYER_1 is the Winner!!"));
    assert!(screen.contains("[Enter] New game"));
}
