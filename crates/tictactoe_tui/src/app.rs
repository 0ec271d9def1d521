//! Application state: the game plus what the UI needs to draw it.

use crossterm::event::Event;
use tictactoe_core::{GameState, Position};
use tracing::{debug, info, instrument};

use crate::config::{ConfigError, Theme, UiConfig};
use crate::input::{self, Action};
use crate::ui::{BoardLayout, Target};

/// Main application state.
#[derive(Debug)]
pub struct App {
    state: GameState,
    cursor: Position,
    hover: Option<Target>,
    layout: BoardLayout,
    theme: Theme,
    show_help: bool,
    running: bool,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &UiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::reset(),
            cursor: Position::Center,
            hover: None,
            layout: BoardLayout::default(),
            theme: config.theme()?,
            show_help: *config.show_help(),
            running: true,
        })
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// What the mouse is over.
    pub fn hover(&self) -> Option<Target> {
        self.hover
    }

    /// Mark colours.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether key hints are drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Records the layout of the frame just drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
    }

    /// Maps a terminal event and applies it.
    pub fn handle_event(&mut self, event: &Event) {
        let action = input::map_event(event, &self.layout);
        self.dispatch(action);
    }

    /// Applies one action. Every action completes synchronously.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Place(index) => self.place(index),
            Action::PlaceAtCursor => self.place(self.cursor.to_index()),
            Action::MoveCursor(step) => self.cursor = input::move_cursor(self.cursor, step),
            Action::Hover(target) => self.hover = target,
            Action::Reset => {
                info!("Starting a new game");
                self.state = GameState::reset();
            }
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
            Action::None => {}
        }
    }

    fn place(&mut self, index: usize) {
        let player = self.state.current_player();
        let was_over = self.state.is_over();
        self.state = std::mem::take(&mut self.state).apply_move(index);
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
        debug!(index, %player, status = %self.state.status_text(), "Cell selected");
        if !was_over && self.state.is_over() {
            info!(outcome = ?self.state.outcome(), "Game over");
        }
    }
}
