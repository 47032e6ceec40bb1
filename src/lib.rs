//! # breakthrough-ai
//!
//! A Breakthrough rules engine and three computer opponents.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: every rules function takes a `GameState` by reference
//!    and returns a new value. Nothing is mutated in place.
//!
//! 2. **Budgets, not clocks**: searches are bounded by depth or by a count of
//!    state applications, so a fixed seed reproduces a move exactly.
//!
//! 3. **No shared search state**: each call builds its own memo tables, tree
//!    and RNG. Concurrent calls need no locks.
//!
//! ## Modules
//!
//! - `core`: Colors, pieces, board, state, moves, RNG
//! - `rules`: Setup, move generation, move application, win detection
//! - `eval`: Static evaluators for the two alpha-beta searches
//! - `minimax`: Budgeted iterative-deepening alpha-beta
//! - `pvs`: Heuristic principal variation search
//! - `mcts`: Monte Carlo Tree Search
//! - `strategy`: Strategy registry and dispatch
//! - `protocol`: JSON move request/response boundary
//! - `arena`: Round-robin benchmark harness
//! - `logging`: Tracing subscriber setup for the binary

pub mod arena;
pub mod core;
pub mod error;
pub mod eval;
pub mod logging;
pub mod mcts;
pub mod minimax;
pub mod protocol;
pub mod pvs;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Board, Color, GameRng, GameState, Move, Piece, Square};

pub use crate::error::{Error, Result};

pub use crate::rules::{
    all_legal_moves, apply_move, check_winner, initial_state, legal_moves_from, outcome,
    GameResult,
};

pub use crate::strategy::{
    build_strategy, AnyStrategy, Strategy, StrategyKind, StrategyOptions,
};

pub use crate::minimax::{MinimaxConfig, MinimaxSearch};
pub use crate::pvs::{PvsConfig, PvsSearch};
pub use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};

pub use crate::protocol::{handle_request, MoveRequest, MoveResponse};

pub use crate::arena::{ArenaConfig, ArenaReport};
