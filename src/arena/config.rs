//! Benchmark configuration.

use serde::{Deserialize, Serialize};

use crate::core::{MAX_SIZE, MIN_SIZE};
use crate::error::{Error, Result};
use crate::strategy::StrategyOptions;

/// Benchmark parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaConfig {
    /// Target number of games, split evenly over every ordered pairing.
    pub total_games: u32,

    /// Fewest random opening moves before the strategies take over.
    pub min_opening_moves: u32,

    /// Most random opening moves.
    pub max_opening_moves: u32,

    /// Move cap per game after the opening; unfinished games are draws.
    pub max_moves: u32,

    /// Board side length.
    pub board_size: usize,

    /// Master seed. Every game derives its own stream from it.
    pub seed: u64,

    /// Options passed to every strategy.
    #[serde(default)]
    pub options: StrategyOptions,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            total_games: 100,
            min_opening_moves: 4,
            max_opening_moves: 12,
            max_moves: 200,
            board_size: 8,
            seed: 42,
            options: StrategyOptions::default(),
        }
    }
}

impl ArenaConfig {
    /// Set the total game count.
    pub fn with_total_games(mut self, games: u32) -> Self {
        self.total_games = games;
        self
    }

    /// Set the random opening range.
    pub fn with_opening(mut self, min: u32, max: u32) -> Self {
        self.min_opening_moves = min;
        self.max_opening_moves = max;
        self
    }

    /// Set the per-game move cap.
    pub fn with_max_moves(mut self, moves: u32) -> Self {
        self.max_moves = moves;
        self
    }

    /// Set the board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the strategy options.
    pub fn with_options(mut self, options: StrategyOptions) -> Self {
        self.options = options;
        self
    }

    /// Games each ordered pairing plays when `contestants` strategies take
    /// part. At least one.
    #[must_use]
    pub fn games_per_matchup(&self, contestants: usize) -> u32 {
        let pairings = (contestants * contestants).max(1) as u32;
        (self.total_games / pairings).max(1)
    }

    /// Reject settings no game could be played with.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.board_size) {
            return Err(Error::InvalidSize(self.board_size));
        }
        if self.min_opening_moves > self.max_opening_moves {
            return Err(Error::InvalidOpening {
                min: self.min_opening_moves as usize,
                max: self.max_opening_moves as usize,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArenaConfig::default();
        assert_eq!(config.total_games, 100);
        assert_eq!(config.min_opening_moves, 4);
        assert_eq!(config.max_opening_moves, 12);
        assert_eq!(config.max_moves, 200);
        assert_eq!(config.board_size, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_games_per_matchup() {
        let config = ArenaConfig::default();
        // 4 contestants: 100 / 16 = 6.
        assert_eq!(config.games_per_matchup(4), 6);
        // Never zero.
        assert_eq!(config.with_total_games(3).games_per_matchup(4), 1);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            ArenaConfig::default().with_opening(5, 2).validate(),
            Err(Error::InvalidOpening { min: 5, max: 2 })
        ));
        assert!(matches!(
            ArenaConfig::default().with_board_size(1).validate(),
            Err(Error::InvalidSize(1))
        ));
        assert!(matches!(
            ArenaConfig::default().with_board_size(3).validate(),
            Err(Error::InvalidSize(3))
        ));
        assert!(ArenaConfig::default().with_board_size(4).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = ArenaConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"totalGames\":100"));

        let back: ArenaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 9);
    }
}
