//! Budgeted minimax configuration.

use serde::{Deserialize, Serialize};

/// Budgeted minimax parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Maximum state applications per `choose_move` call, summed over all
    /// iterative deepening passes. Memoized applications are free.
    pub move_budget: u32,

    /// Deepest iterative deepening pass.
    pub max_depth: u32,

    /// Seed for the random fallback move.
    pub seed: u64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            move_budget: 10_000,
            max_depth: 100,
            seed: 42,
        }
    }
}

impl MinimaxConfig {
    /// Set the application budget.
    pub fn with_move_budget(mut self, budget: u32) -> Self {
        self.move_budget = budget;
        self
    }

    /// Set the depth cap.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
