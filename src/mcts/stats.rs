//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during MCTS search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total iterations performed.
    pub iterations: u32,

    /// Nodes expanded (added to tree).
    pub nodes_expanded: u32,

    /// Playouts that completed and were backpropagated.
    pub simulations: u32,

    /// State applications charged against the budget.
    pub moves_used: u32,

    /// Whether the last playout ran out of budget.
    pub interrupted: bool,

    /// Maximum depth reached during search.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate simulations per second.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.simulations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average budget spent per completed simulation.
    #[must_use]
    pub fn moves_per_simulation(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.moves_used as f64 / self.simulations as f64
        }
    }
}
