//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: which expanded child to descend into (UCB1)
//! - `SimulationPolicy`: how to play out a position (uniform random)

use crate::core::{Color, GameRng, GameState};
use crate::rules::{all_legal_moves, apply_move, outcome};

use super::config::MCTSConfig;
use super::node::MCTSNode;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select an edge index from a fully expanded node, or `None` if no
    /// edge can be scored.
    fn select(&self, node: &MCTSNode, config: &MCTSConfig) -> Option<usize>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Formula: `mean(a) + sqrt(c * ln(N) / n(a))`. Edges with no playouts are
/// skipped; ties keep the earliest edge.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl UCB1 {
    /// Score one edge. `parent_visits` and `visits` must be non-zero.
    #[must_use]
    pub fn score(mean: f64, parent_visits: u32, visits: u32, c: f64) -> f64 {
        mean + (c * (parent_visits as f64).ln() / visits as f64).sqrt()
    }
}

impl SelectionPolicy for UCB1 {
    fn select(&self, node: &MCTSNode, config: &MCTSConfig) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (i, edge) in node.edges.iter().enumerate() {
            if edge.visits == 0 {
                continue;
            }
            let bound = Self::score(
                edge.mean_reward(),
                node.visits,
                edge.visits,
                config.exploration_constant,
            );
            if best.map_or(true, |(_, b)| bound > b) {
                best = Some((i, bound));
            }
        }
        best.map(|(i, _)| i)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Outcome of one playout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playout {
    /// 1 for a win for the scoring side, 0 for a loss, 0.5 otherwise.
    pub score: f64,
    /// Moves applied during the playout.
    pub moves_used: u32,
    /// The budget ran out before the game ended.
    pub interrupted: bool,
}

/// Policy for running simulations (rollouts) from a leaf node.
pub trait SimulationPolicy: Send + Sync {
    /// Play out `state`, applying at most `budget` moves, and score the
    /// result for `perspective`.
    fn simulate(
        &self,
        state: &GameState,
        budget: u32,
        perspective: Color,
        rng: &mut GameRng,
    ) -> Playout;
}

/// Random simulation policy.
///
/// Plays uniformly random legal moves until the game ends, the side to
/// move is stuck, or the budget is spent.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayout;

impl SimulationPolicy for RandomPlayout {
    fn simulate(
        &self,
        state: &GameState,
        budget: u32,
        perspective: Color,
        rng: &mut GameRng,
    ) -> Playout {
        let mut current = state.clone();
        let mut moves_used = 0;

        loop {
            if let Some(result) = outcome(&current) {
                return Playout {
                    score: result.reward(perspective),
                    moves_used,
                    interrupted: false,
                };
            }
            if moves_used >= budget {
                return Playout {
                    score: 0.5,
                    moves_used,
                    interrupted: true,
                };
            }

            let moves = all_legal_moves(&current);
            let Some(mv) = rng.choose(&moves) else {
                // Stuck without a decided game.
                return Playout {
                    score: 0.5,
                    moves_used,
                    interrupted: false,
                };
            };
            current = apply_move(&current, mv);
            moves_used += 1;
        }
    }
}
