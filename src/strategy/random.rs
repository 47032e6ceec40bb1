//! Uniform random mover.

use crate::core::{GameRng, GameState, Move};
use crate::rules::all_legal_moves;

/// Plays a uniformly random legal move.
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random mover with its own stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Pick a move, or `None` if there is no legal move.
    pub fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = all_legal_moves(state);
        self.rng.choose(&moves).copied()
    }
}
