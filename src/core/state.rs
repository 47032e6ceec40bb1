//! Game state: board, side to move, and decided winner.
//!
//! `GameState` is a value. Every rules operation that changes it returns a
//! new state with its own board; two live states never share a board.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::Color;

/// A Breakthrough position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    pub board: Board,

    /// Side to move. Frozen on the winning side once `winner` is set.
    pub turn: Color,

    /// Side that has reached its goal rank, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,
}

impl GameState {
    /// Create a state from its parts.
    #[must_use]
    pub fn new(board: Board, turn: Color, winner: Option<Color>) -> Self {
        Self { board, turn, winner }
    }

    /// Side length of the board.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Whether a winner has been recorded.
    #[inline]
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}
