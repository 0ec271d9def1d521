//! Game state and its transitions.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::action::MoveError;
use super::rules;
use super::{Board, Mark, Position, Square};

/// Classification of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Complete game state.
///
/// Created by [`GameState::reset`], advanced only by
/// [`GameState::apply_move`] / [`GameState::try_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    outcome: Outcome,
    history: Vec<Position>,
}

impl GameState {
    /// A fresh game: empty board, X to move.
    #[instrument]
    pub fn reset() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn is next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Accepted moves in play order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Squares that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Rejected moves (out of range, occupied square, finished game) leave
    /// the state untouched. The turn passes after every accepted move,
    /// including the one that ends the game.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&self, index: usize) -> Result<Self, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = self.clone();
        next.board.set(pos, Square::Occupied(next.current_player));
        next.history.push(pos);
        next.outcome = Self::evaluate(&next.board);
        next.current_player = next.current_player.opponent();

        debug!(position = %pos, outcome = ?next.outcome, "Move applied");
        Ok(next)
    }

    /// Like [`try_move`](Self::try_move), but a rejected move returns the
    /// state unchanged.
    pub fn apply_move(self, index: usize) -> Self {
        match self.try_move(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(index, reason = %e, "Move ignored");
                self
            }
        }
    }

    /// Plays `indices` from a fresh game.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        indices
            .iter()
            .fold(Self::reset(), |state, &index| state.apply_move(index))
    }

    /// Status line for display.
    pub fn status_text(&self) -> String {
        status_text(self)
    }

    fn evaluate(board: &Board) -> Outcome {
        if let Some(winner) = rules::check_winner(board) {
            Outcome::Win(winner)
        } else if rules::is_full(board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::reset()
    }
}

/// Status line for a game: winner, draw, or whose turn it is.
pub fn status_text(state: &GameState) -> String {
    match state.outcome() {
        Outcome::Win(mark) => format!("Winner: {}", mark),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::InProgress => format!("Next Player: {}", state.current_player()),
    }
}
