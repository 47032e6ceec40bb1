//! Strategy capability and registry.
//!
//! Names resolve to a [`StrategyKind`]; building a kind yields a fresh
//! [`AnyStrategy`] that owns all its search state, so instances are never
//! shared between calls or threads.

pub mod kind;
pub mod options;
pub mod random;

pub use kind::{build_strategy, AnyStrategy, Strategy, StrategyKind, DEFAULT_SEED};
pub use options::StrategyOptions;
pub use random::RandomStrategy;
