//! Heuristic principal variation search.
//!
//! Negamax with a full window on the first move of each node and null-window
//! probes on the rest, re-searched only when a probe lands inside the
//! window. Promotions and passed advances extend one ply; quiet late moves
//! at depth 3 or more are reduced one ply. Children are ordered by
//! [`order_moves`] everywhere, and the root re-seeds its order after each
//! iterative deepening pass.

pub mod config;
pub mod ordering;
pub mod search;

pub use config::PvsConfig;
pub use ordering::{move_priority, order_moves};
pub use search::{PvsSearch, PvsStats};
