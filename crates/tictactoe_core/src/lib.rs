//! Tic-tac-toe rule engine.
//!
//! Holds a 3x3 board, alternates turns between [`Mark::X`] and [`Mark::O`],
//! and classifies the game after each move. The engine performs no I/O;
//! a view layer drives it through three calls:
//!
//! ```
//! use tictactoe_core::{GameState, Mark, Outcome};
//!
//! let state = GameState::reset();
//! assert_eq!(state.status_text(), "Next Player: X");
//!
//! let state = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(state, GameState::apply_move);
//! assert_eq!(state.outcome(), Outcome::Win(Mark::X));
//! assert_eq!(state.status_text(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::MoveError;
pub use position::Position;
pub use state::{GameState, Outcome, status_text};
pub use types::{Board, Mark, Square};
