//! Move rejection reasons.

use super::Position;

/// Why a move was not applied.
///
/// [`GameState::apply_move`](crate::GameState::apply_move) swallows these;
/// [`GameState::try_move`](crate::GameState::try_move) returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
