//! Stateless rendering of the game screen.

mod board;
mod layout;

pub use layout::{
    BUTTON_WIDTH, BoardLayout, CELL_HEIGHT, CELL_WIDTH, MIN_HEIGHT, MIN_WIDTH, Target,
};

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Draws the whole screen and returns the layout it used.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let layout = BoardLayout::new(frame.area());
    if layout.too_small {
        draw_too_small(frame, app);
        return layout;
    }

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    board::draw_board(frame, &layout, app);

    let status = Paragraph::new(app.state().status_text())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_button(frame, &layout, app.hover() == Some(Target::ResetButton));

    if app.show_help() {
        let help = Paragraph::new("arrows move · enter/space place · 1-9 place · r reset · q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);
    }

    layout
}

fn draw_button(frame: &mut Frame, layout: &BoardLayout, hovered: bool) {
    let bg = if hovered { Color::Blue } else { Color::LightBlue };
    let button = Paragraph::new("Play Again")
        .style(
            Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, layout.button);
}

/// Shown instead of the board when the terminal cannot hold it.
fn draw_too_small(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let text = format!(
        "Terminal too small ({}x{}), need {}x{}\n{}",
        area.width,
        area.height,
        MIN_WIDTH,
        MIN_HEIGHT,
        app.state().status_text()
    );
    let notice = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}
