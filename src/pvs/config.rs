//! PVS configuration.

use serde::{Deserialize, Serialize};

/// Heuristic PVS parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PvsConfig {
    /// Deepest iterative deepening pass at the root. With 0 no search runs
    /// and the best statically ordered move is played.
    pub max_depth: u32,
}

impl Default for PvsConfig {
    fn default() -> Self {
        Self { max_depth: 4 }
    }
}

impl PvsConfig {
    /// Set the depth cap.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}
