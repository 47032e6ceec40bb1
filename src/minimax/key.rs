//! Compact canonical position key.
//!
//! Two bits per cell (empty / White / Black), 32 cells per word, plus the
//! side to move. An 8×8 board fits in two words without heap allocation.

use smallvec::SmallVec;

use crate::core::{Color, GameState};

const CELLS_PER_WORD: usize = 32;

/// Hashable encoding of board contents and side to move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey {
    cells: SmallVec<[u64; 2]>,
    size: u8,
    turn: Color,
}

impl StateKey {
    /// Encode a state.
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        let size = state.size();
        let words = (size * size).div_ceil(CELLS_PER_WORD);
        let mut cells: SmallVec<[u64; 2]> = SmallVec::from_elem(0, words);

        for (i, cell) in state.board.cells().enumerate() {
            let bits = match cell {
                None => 0u64,
                Some(p) if p.color == Color::White => 1,
                Some(_) => 2,
            };
            cells[i / CELLS_PER_WORD] |= bits << ((i % CELLS_PER_WORD) * 2);
        }

        Self {
            cells,
            size: size as u8,
            turn: state.turn,
        }
    }

    /// Side to move in the encoded position.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }
}
