//! Per-call strategy options.

use serde::{Deserialize, Serialize};

/// Overrides applied when a strategy is built. Each strategy reads only the
/// fields it understands; unset fields keep the strategy's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyOptions {
    /// Search depth cap (minimax and PVS).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,

    /// Application budget (minimax and MCTS).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_budget: Option<u32>,

    /// RNG seed for any randomness the strategy uses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl StrategyOptions {
    /// Set the depth cap.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the application budget.
    pub fn with_move_budget(mut self, budget: u32) -> Self {
        self.move_budget = Some(budget);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
