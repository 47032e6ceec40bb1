//! Budgeted iterative-deepening alpha-beta.
//!
//! The budget counts state applications, not wall time, so results are
//! reproducible for a fixed seed.

pub mod config;
pub mod key;
pub mod search;

pub use config::MinimaxConfig;
pub use key::StateKey;
pub use search::{MinimaxSearch, MinimaxStats, Scored};
