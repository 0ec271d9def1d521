//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Position as ScreenPos, Rect};
use tictactoe_core::Position;

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the Play Again button.
pub const BUTTON_WIDTH: u16 = 16;
/// Smallest area that fits the grid and every bordered row.
pub const MIN_WIDTH: u16 = CELL_WIDTH * 3;
/// Title, grid, status, button and hint rows.
pub const MIN_HEIGHT: u16 = 3 + CELL_HEIGHT * 3 + 3 + 3 + 1;

/// Something on screen the mouse can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The Play Again button.
    ResetButton,
}

/// Where each part of the screen was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    /// Title line.
    pub title: Rect,
    /// Cells in board index order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Play Again button.
    pub button: Rect,
    /// Key hints.
    pub help: Rect,
    /// The area was below [`MIN_WIDTH`] x [`MIN_HEIGHT`]; every other rect is empty.
    pub too_small: bool,
}

impl BoardLayout {
    /// Lays the screen out inside `area`. Every rect is clipped to `area`.
    pub fn new(area: Rect) -> Self {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Self {
                too_small: true,
                ..Self::default()
            };
        }

        let [title, grid, status, button_row, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(CELL_HEIGHT * 3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let grid = center_rect(grid, CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * CELL_WIDTH,
                grid.y + pos.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });

        Self {
            title,
            cells,
            status,
            button: center_rect(button_row, BUTTON_WIDTH, 3),
            help,
            too_small: false,
        }
    }

    /// The rect of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// What lies under a terminal coordinate.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let point = ScreenPos::new(column, row);
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cell(*pos).contains(point))
        {
            return Some(Target::Cell(pos));
        }
        self.button.contains(point).then_some(Target::ResetButton)
    }
}

/// Centers a `width` x `height` rect in `area`, shrinking it to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = BoardLayout::new(Rect::new(0, 0, 80, 24));
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_finds_each_cell() {
        let layout = BoardLayout::new(Rect::new(0, 0, 80, 24));
        for pos in Position::ALL {
            let rect = layout.cell(pos);
            assert_eq!(layout.hit(rect.x + 1, rect.y + 1), Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_finds_button() {
        let layout = BoardLayout::new(Rect::new(0, 0, 80, 24));
        let b = layout.button;
        assert_eq!(layout.hit(b.x + 2, b.y + 1), Some(Target::ResetButton));
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_tiny_area_lays_out_nothing() {
        let layout = BoardLayout::new(Rect::new(0, 0, 10, 5));
        assert!(layout.too_small);
        assert!(layout.cells.iter().all(|r| r.is_empty()));
        assert!(layout.button.is_empty());
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_short_terminal_is_too_small() {
        assert!(BoardLayout::new(Rect::new(0, 0, 40, 16)).too_small);
        assert!(BoardLayout::new(Rect::new(0, 0, MIN_WIDTH - 1, 24)).too_small);
    }

    #[test]
    fn test_minimum_area_keeps_bordered_rows_whole() {
        let layout = BoardLayout::new(Rect::new(0, 0, 40, MIN_HEIGHT));
        assert!(!layout.too_small);
        assert_eq!(layout.status.height, 3);
        assert_eq!(layout.button.height, 3);
        assert_eq!(layout.button.width, BUTTON_WIDTH);
        for rect in layout.cells {
            assert_eq!((rect.width, rect.height), (CELL_WIDTH, CELL_HEIGHT));
        }
    }

    #[test]
    fn test_default_layout_hits_nothing() {
        assert_eq!(BoardLayout::default().hit(0, 0), None);
    }
}
