//! Advancement evaluator.
//!
//! Each piece is worth the square of how many rows it has covered, counting
//! its starting rank as one. Sums are taken from `perspective`'s point of
//! view, so a negamax caller never has to flip signs.

use crate::core::{Color, GameState};

use super::WIN_SCORE;

/// Score `state` for `perspective`.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Color) -> i32 {
    if let Some(winner) = state.winner {
        return if winner == perspective { WIN_SCORE } else { -WIN_SCORE };
    }

    let size = state.size();
    state
        .board
        .pieces()
        .map(|(sq, piece)| {
            let advance = match piece.color {
                Color::White => size - sq.row,
                Color::Black => sq.row + 1,
            } as i32;
            let value = advance * advance;
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}
