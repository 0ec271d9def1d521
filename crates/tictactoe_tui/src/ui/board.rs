//! Board cell rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Mark, Position, Square, rules};

use super::layout::{BoardLayout, Target};
use crate::app::App;

/// Draws the nine cells.
pub(super) fn draw_board(frame: &mut Frame, layout: &BoardLayout, app: &App) {
    let state = app.state();
    let winning = rules::winning_line(state.board()).map(|(_, line)| line);

    for pos in Position::ALL {
        let area = layout.cell(pos);
        if area.is_empty() {
            continue;
        }

        let square = state.board().get(pos);
        let disabled = square != Square::Empty || state.is_over();
        let in_line = winning.is_some_and(|line| line.contains(&pos));

        let content = match square {
            Square::Occupied(mark) => Span::styled(
                mark.to_string(),
                Style::default()
                    .fg(mark_color(app, mark))
                    .add_modifier(Modifier::BOLD),
            ),
            Square::Empty if disabled => Span::raw(""),
            Square::Empty => Span::styled(
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let border = if in_line {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if !disabled && app.hover() == Some(Target::Cell(pos)) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut style = Style::default();
        if !state.is_over() && app.cursor() == pos {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let cell = Paragraph::new(Line::from(content))
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(cell, area);
    }
}

fn mark_color(app: &App, mark: Mark) -> Color {
    match mark {
        Mark::X => app.theme().x,
        Mark::O => app.theme().o,
    }
}
