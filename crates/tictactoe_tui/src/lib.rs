//! Terminal UI for tic-tac-toe.
//!
//! Renders the board with ratatui, maps crossterm key and mouse events to
//! [`Action`]s, and feeds them to a [`tictactoe_core::GameState`] owned by
//! [`App`]. Rendering and input mapping work on any ratatui backend, so
//! they can be exercised against `TestBackend`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;
mod terminal;
pub mod ui;

pub use app::App;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Theme, UiConfig};
pub use input::{Action, CursorMove, map_event, move_cursor};
pub use terminal::{
    install_panic_hook, leave_terminal, restore_terminal, run_app, setup_terminal,
};
