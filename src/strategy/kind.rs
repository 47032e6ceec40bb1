//! Strategy registry.
//!
//! Strategies are a closed set: adding one means adding a `StrategyKind`
//! variant, an `AnyStrategy` variant, and the match arms the compiler then
//! asks for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move};
use crate::error::{Error, Result};
use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::minimax::{MinimaxConfig, MinimaxSearch};
use crate::pvs::{PvsConfig, PvsSearch};

use super::options::StrategyOptions;
use super::random::RandomStrategy;

/// Seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Move selection capability shared by every strategy.
pub trait Strategy {
    /// Registry name.
    fn name(&self) -> &'static str;

    /// Pick a move for the side to move in `state`, or `None` if it has no
    /// legal move. Never fails; exhausted budgets degrade to a best effort.
    fn choose_move(&mut self, state: &GameState) -> Option<Move>;
}

/// Registered strategy identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Heuristic PVS.
    #[serde(rename = "mine")]
    Mine,
    /// Budgeted iterative-deepening alpha-beta.
    #[serde(rename = "dapetcu21-minimax")]
    Minimax,
    /// Budgeted MCTS.
    #[serde(rename = "dapetcu21-montecarlo")]
    MonteCarlo,
    /// Uniform random mover.
    #[serde(rename = "random")]
    Random,
}

impl StrategyKind {
    /// Every registered strategy, in registry order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Mine,
        StrategyKind::Minimax,
        StrategyKind::MonteCarlo,
        StrategyKind::Random,
    ];

    /// Registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Mine => "mine",
            StrategyKind::Minimax => "dapetcu21-minimax",
            StrategyKind::MonteCarlo => "dapetcu21-montecarlo",
            StrategyKind::Random => "random",
        }
    }

    /// All registry names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|k| k.name())
    }

    /// Strategies a move request may name. `random` is only a benchmark
    /// baseline.
    pub const SERVED: [StrategyKind; 3] = [
        StrategyKind::Mine,
        StrategyKind::Minimax,
        StrategyKind::MonteCarlo,
    ];

    /// Whether a move request may name this strategy.
    #[must_use]
    pub const fn is_served(self) -> bool {
        !matches!(self, StrategyKind::Random)
    }

    /// Build a fresh instance configured from `options`.
    #[must_use]
    pub fn build(self, options: &StrategyOptions) -> AnyStrategy {
        let seed = options.seed.unwrap_or(DEFAULT_SEED);
        match self {
            StrategyKind::Mine => {
                let mut config = PvsConfig::default();
                if let Some(depth) = options.max_depth {
                    config = config.with_max_depth(depth);
                }
                AnyStrategy::Mine(PvsSearch::new(config))
            }
            StrategyKind::Minimax => {
                let mut config = MinimaxConfig::default().with_seed(seed);
                if let Some(budget) = options.move_budget {
                    config = config.with_move_budget(budget);
                }
                if let Some(depth) = options.max_depth {
                    config = config.with_max_depth(depth);
                }
                AnyStrategy::Minimax(MinimaxSearch::new(config))
            }
            StrategyKind::MonteCarlo => {
                let mut config = MCTSConfig::default().with_seed(seed);
                if let Some(budget) = options.move_budget {
                    config = config.with_move_budget(budget);
                }
                AnyStrategy::MonteCarlo(MCTSSearch::new(config))
            }
            StrategyKind::Random => AnyStrategy::Random(RandomStrategy::new(seed)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    /// Case-insensitive lookup by registry name.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built strategy of any registered kind.
pub enum AnyStrategy {
    Mine(PvsSearch),
    Minimax(MinimaxSearch),
    MonteCarlo(MCTSSearch),
    Random(RandomStrategy),
}

impl AnyStrategy {
    /// Kind of this strategy.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            AnyStrategy::Mine(_) => StrategyKind::Mine,
            AnyStrategy::Minimax(_) => StrategyKind::Minimax,
            AnyStrategy::MonteCarlo(_) => StrategyKind::MonteCarlo,
            AnyStrategy::Random(_) => StrategyKind::Random,
        }
    }
}

impl Strategy for AnyStrategy {
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        match self {
            AnyStrategy::Mine(s) => s.choose_move(state),
            AnyStrategy::Minimax(s) => s.choose_move(state),
            AnyStrategy::MonteCarlo(s) => s.choose_move(state),
            AnyStrategy::Random(s) => s.choose_move(state),
        }
    }
}

/// Resolve `name` and build a fresh instance.
pub fn build_strategy(name: &str, options: &StrategyOptions) -> Result<AnyStrategy> {
    Ok(name.parse::<StrategyKind>()?.build(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{all_legal_moves, initial_state};

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!("mine".parse::<StrategyKind>().unwrap(), StrategyKind::Mine);
        assert_eq!(
            "Dapetcu21-MiniMax".parse::<StrategyKind>().unwrap(),
            StrategyKind::Minimax
        );
        assert_eq!(
            "DAPETCU21-MONTECARLO".parse::<StrategyKind>().unwrap(),
            StrategyKind::MonteCarlo
        );
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "alpha-zero".parse::<StrategyKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownStrategy(ref name) if name == "alpha-zero"));
        assert!(build_strategy("", &StrategyOptions::default()).is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(StrategyKind::names().count(), 4);
    }

    #[test]
    fn test_serde_uses_registry_names() {
        let json = serde_json::to_string(&StrategyKind::MonteCarlo).unwrap();
        assert_eq!(json, "\"dapetcu21-montecarlo\"");
    }

    #[test]
    fn test_every_kind_plays_a_legal_move() {
        let state = initial_state(6);
        let legal = all_legal_moves(&state);
        let options = StrategyOptions::default()
            .with_max_depth(2)
            .with_move_budget(300)
            .with_seed(1);

        for kind in StrategyKind::ALL {
            let mut strategy = kind.build(&options);
            assert_eq!(strategy.kind(), kind);
            assert_eq!(strategy.name(), kind.name());

            let mv = strategy.choose_move(&state).unwrap();
            assert!(legal.contains(&mv), "{kind} played {mv}");
        }
    }

    #[test]
    fn test_options_reach_configs() {
        let options = StrategyOptions::default().with_max_depth(2).with_move_budget(77);

        match StrategyKind::Minimax.build(&options) {
            AnyStrategy::Minimax(s) => {
                assert_eq!(s.config().move_budget, 77);
                assert_eq!(s.config().max_depth, 2);
            }
            _ => panic!("wrong variant"),
        }
        match StrategyKind::Mine.build(&options) {
            AnyStrategy::Mine(s) => assert_eq!(s.config().max_depth, 2),
            _ => panic!("wrong variant"),
        }
        match StrategyKind::MonteCarlo.build(&options) {
            AnyStrategy::MonteCarlo(s) => assert_eq!(s.config().move_budget, 77),
            _ => panic!("wrong variant"),
        }
    }
}
