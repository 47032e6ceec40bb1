//! Core value types: sides, pieces, board, state, moves, RNG.
//!
//! Everything here is plain data. Game logic lives in [`crate::rules`].

pub mod board;
pub mod color;
pub mod moves;
pub mod rng;
pub mod state;

pub use board::{Board, Square, MAX_SIZE, MIN_SIZE};
pub use color::{Color, Piece};
pub use moves::Move;
pub use rng::GameRng;
pub use state::GameState;
