//! Rendering tests using ratatui's test backend.

use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier},
};
use tictactoe_core::Position;
use tictactoe_tui::{Action, App, UiConfig, ui};

fn render(app: &App) -> Vec<String> {
    lines(&render_sized(app, 80, 24).0)
}

fn render_sized(app: &App, width: u16, height: u16) -> (Buffer, ui::BoardLayout) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    let mut layout = ui::BoardLayout::default();
    terminal.draw(|f| layout = ui::draw(f, app)).expect("draw");
    (terminal.backend().buffer().clone(), layout)
}

/// The cell where a square's mark or digit is drawn.
fn centre(buffer: &Buffer, rect: Rect) -> &Cell {
    &buffer[(rect.x + rect.width / 2, rect.y + rect.height / 2)]
}

/// Top-left border corner of a square.
fn corner(buffer: &Buffer, rect: Rect) -> &Cell {
    &buffer[(rect.x, rect.y)]
}

fn played(config: &UiConfig, moves: &[usize]) -> App {
    let mut app = App::new(config).unwrap();
    for &index in moves {
        app.dispatch(Action::Place(index));
    }
    app
}

fn lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|line| line.contains(needle))
}

#[test]
fn test_fresh_screen() {
    let app = App::new(&UiConfig::default()).unwrap();
    let screen = render(&app);
    assert!(contains(&screen, "Tic Tac Toe"));
    assert!(contains(&screen, "Next Player: X"));
    assert!(contains(&screen, "Play Again"));
    // Empty cells show their key.
    for digit in 1..=9 {
        assert!(contains(&screen, &digit.to_string()), "missing cell {}", digit);
    }
}

#[test]
fn test_marks_drawn_in_their_colours() {
    let app = played(&UiConfig::default(), &[0, 3]);
    let (buffer, layout) = render_sized(&app, 80, 24);

    let x = centre(&buffer, layout.cell(Position::TopLeft));
    assert_eq!(x.symbol(), "X");
    assert_eq!(x.fg, Color::Blue);
    assert!(x.modifier.contains(Modifier::BOLD));

    let o = centre(&buffer, layout.cell(Position::MiddleLeft));
    assert_eq!(o.symbol(), "O");
    assert_eq!(o.fg, Color::Red);
}

#[test]
fn test_configured_mark_colour() {
    let config = UiConfig::from_toml("x_color = \"magenta\"\no_color = \"#102030\"").unwrap();
    let app = played(&config, &[4, 8]);
    let (buffer, layout) = render_sized(&app, 80, 24);

    assert_eq!(centre(&buffer, layout.cell(Position::Center)).fg, Color::Magenta);
    assert_eq!(
        centre(&buffer, layout.cell(Position::BottomRight)).fg,
        Color::Rgb(0x10, 0x20, 0x30)
    );
}

#[test]
fn test_winning_line_highlighted() {
    let app = played(&UiConfig::default(), &[0, 3, 1, 4, 2]);
    let (buffer, layout) = render_sized(&app, 80, 24);
    assert!(contains(&lines(&buffer), "Winner: X"));

    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(corner(&buffer, layout.cell(pos)).fg, Color::Green, "{}", pos);
    }
    for pos in [Position::MiddleLeft, Position::Center, Position::BottomRight] {
        assert_eq!(corner(&buffer, layout.cell(pos)).fg, Color::Gray, "{}", pos);
    }
}

#[test]
fn test_empty_cells_blank_once_game_over() {
    let app = played(&UiConfig::default(), &[0, 3]);
    let (buffer, layout) = render_sized(&app, 80, 24);
    let open = centre(&buffer, layout.cell(Position::BottomRight));
    assert_eq!(open.symbol(), "9");
    assert_eq!(open.fg, Color::DarkGray);

    let app = played(&UiConfig::default(), &[0, 3, 1, 4, 2]);
    let (buffer, layout) = render_sized(&app, 80, 24);
    assert_eq!(centre(&buffer, layout.cell(Position::BottomRight)).symbol(), " ");
}

#[test]
fn test_cursor_highlighted_while_playing() {
    let app = App::new(&UiConfig::default()).unwrap();
    let (buffer, layout) = render_sized(&app, 80, 24);
    assert_eq!(centre(&buffer, layout.cell(Position::Center)).bg, Color::White);
    assert_ne!(centre(&buffer, layout.cell(Position::TopLeft)).bg, Color::White);

    // The cursor follows the last move, but is hidden after the game ends.
    let app = played(&UiConfig::default(), &[0, 3, 1, 4, 2]);
    let (buffer, layout) = render_sized(&app, 80, 24);
    assert_ne!(centre(&buffer, layout.cell(Position::TopRight)).bg, Color::White);
}

#[test]
fn test_hover_highlights_open_cells_only() {
    let mut app = played(&UiConfig::default(), &[0]);
    app.dispatch(Action::Hover(Some(ui::Target::Cell(Position::BottomLeft))));
    let (buffer, layout) = render_sized(&app, 80, 24);
    assert_eq!(corner(&buffer, layout.cell(Position::BottomLeft)).fg, Color::Yellow);
    assert_eq!(corner(&buffer, layout.cell(Position::BottomRight)).fg, Color::Gray);

    app.dispatch(Action::Hover(Some(ui::Target::Cell(Position::TopLeft))));
    let (buffer, layout) = render_sized(&app, 80, 24);
    assert_eq!(corner(&buffer, layout.cell(Position::TopLeft)).fg, Color::Gray);
}

#[test]
fn test_short_terminal_shows_notice_and_status() {
    let app = App::new(&UiConfig::default()).unwrap();
    let (buffer, layout) = render_sized(&app, 40, 16);
    assert!(layout.too_small);
    let screen = lines(&buffer);
    assert!(contains(&screen, "Terminal too small"));
    assert!(contains(&screen, "Next Player: X"));
}

#[test]
fn test_draw_status() {
    let mut app = App::new(&UiConfig::default()).unwrap();
    for pos in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
        app.dispatch(Action::Place(pos));
    }
    assert!(contains(&render(&app), "Draw!"));
}

#[test]
fn test_help_can_be_hidden() {
    let config = UiConfig::default().with_show_help(false);
    let app = App::new(&config).unwrap();
    assert!(!contains(&render(&app), "r reset"));

    let app = App::new(&UiConfig::default()).unwrap();
    assert!(contains(&render(&app), "r reset"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = App::new(&UiConfig::default()).unwrap();
    let (_, layout) = render_sized(&app, 12, 6);
    assert!(layout.too_small);
}
