//! Translates terminal events into UI actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_core::Position;

use crate::ui::{BoardLayout, Target};

/// Direction of a keyboard cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark at a board index.
    Place(usize),
    /// Place the current mark under the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(CursorMove),
    /// The mouse pointer is now over this target, or over nothing.
    Hover(Option<Target>),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
    /// Nothing to do (redraw only).
    None,
}

/// Maps one terminal event to an action.
///
/// Mouse coordinates are resolved against the layout of the last frame.
pub fn map_event(event: &Event, layout: &BoardLayout) -> Action {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, layout),
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(CursorMove::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(CursorMove::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char(c @ '1'..='9') => Action::Place(c as usize - '1' as usize),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Reset,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent, layout: &BoardLayout) -> Action {
    let target = layout.hit(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match target {
            Some(Target::Cell(pos)) => Action::Place(pos.to_index()),
            Some(Target::ResetButton) => Action::Reset,
            None => Action::None,
        },
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Action::Hover(target),
        _ => Action::None,
    }
}

/// Moves the cursor one square, staying put at the board edge.
pub fn move_cursor(cursor: Position, step: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match step {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(2), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
