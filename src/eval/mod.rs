//! Static position evaluation.
//!
//! - `simple`: squared advancement, scored for a given side. Drives the
//!   budgeted minimax.
//! - `heuristic`: weighted positional terms with passed-pawn ("runner")
//!   detection, White-positive. Drives the PVS searcher and its move
//!   ordering helpers.
//!
//! Both return `i32` centipawn-like scores; a decided game scores
//! `±WIN_SCORE`.

pub mod heuristic;
pub mod simple;

/// Score of a decided position.
pub const WIN_SCORE: i32 = 100_000;

pub use heuristic::{distance_to_goal, is_likely_unstoppable, is_passed, most_advanced};
