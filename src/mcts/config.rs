//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Maximum state applications per search, counting both tree
    /// expansions and playout moves.
    pub move_budget: u32,

    /// UCB1 exploration constant `c` in `mean + sqrt(c * ln(N) / n)`.
    pub exploration_constant: f64,

    /// Random seed for move shuffling, playouts and the fallback move.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            move_budget: 1000,
            exploration_constant: 2.0,
            seed: 42,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with custom move budget.
    pub fn with_move_budget(mut self, budget: u32) -> Self {
        self.move_budget = budget;
        self
    }

    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert_eq!(config.move_budget, 1000);
        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default()
            .with_move_budget(5000)
            .with_exploration(1.0)
            .with_seed(123);

        assert_eq!(config.move_budget, 5000);
        assert_eq!(config.exploration_constant, 1.0);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.move_budget, deserialized.move_budget);
    }
}
