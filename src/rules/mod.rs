//! Breakthrough rules engine.
//!
//! Leaf dependency of every strategy:
//! - Initial setup for an N×N board
//! - Legal move generation
//! - Move application and win detection
//!
//! The searches call into these functions and never interpret the board
//! themselves beyond evaluation.

pub mod engine;

pub use engine::{
    all_legal_moves, apply_move, check_winner, initial_state, legal_moves_from, outcome,
    GameResult,
};
