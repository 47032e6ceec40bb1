//! Principal variation search over the heuristic evaluator.

use tracing::debug;

use crate::core::{Color, GameState, Move};
use crate::eval::{heuristic, is_passed};
use crate::rules::{all_legal_moves, apply_move};

use super::config::PvsConfig;
use super::ordering::order_moves;

const INF: i32 = i32::MAX;

/// Counters from the most recent search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PvsStats {
    /// Nodes visited.
    pub nodes: u64,
    /// Null-window probes that had to be re-searched.
    pub re_searches: u64,
    /// Deepest completed root pass.
    pub depth_completed: u32,
}

/// What a move does, as far as extensions and reductions care.
#[derive(Clone, Copy, Debug)]
struct Tactics {
    capture: bool,
    promotion: bool,
    passed_advance: bool,
}

impl Tactics {
    fn of(state: &GameState, next: &GameState, mv: &Move) -> Self {
        let mover = state.turn;
        let promotion = mv.to.row == mover.goal_row(state.size());
        let passed_advance = matches!(next.board.get(mv.to), Some(p) if p.color == mover)
            && mv.from.row != mv.to.row
            && is_passed(&next.board, mover, mv.to);
        Self {
            capture: mv.capture,
            promotion,
            passed_advance,
        }
    }

    fn extends(self) -> bool {
        self.promotion || self.passed_advance
    }

    fn is_quiet(self) -> bool {
        !self.capture && !self.promotion && !self.passed_advance
    }
}

/// Heuristic PVS with iterative deepening at the root.
pub struct PvsSearch {
    config: PvsConfig,
    stats: PvsStats,
}

impl PvsSearch {
    /// Create a new search.
    pub fn new(config: PvsConfig) -> Self {
        Self {
            config,
            stats: PvsStats::default(),
        }
    }

    /// Pick a move for the side to move, or `None` if it has none.
    pub fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        self.choose_move_scored(state).map(|(mv, _)| mv)
    }

    /// Like [`choose_move`](Self::choose_move), also returning the root score
    /// from the mover's point of view. With `max_depth == 0` the score is the
    /// static evaluation of the current position.
    pub fn choose_move_scored(&mut self, state: &GameState) -> Option<(Move, i32)> {
        self.stats = PvsStats::default();
        let perspective = state.turn;

        let mut moves = order_moves(state, all_legal_moves(state));
        let first = *moves.first()?;
        let mut best = (first, perspective.sign() * heuristic::evaluate(state));

        for depth in 1..=self.config.max_depth {
            let mut local: Option<(Move, i32)> = None;

            for i in 0..moves.len() {
                let mv = moves[i];
                let next = apply_move(state, &mv);
                let score = -self.negamax(&next, depth - 1, -INF, INF, perspective.opponent());

                if local.map_or(true, |(_, s)| score > s) {
                    local = Some((mv, score));
                    // Seed the next pass with the current leader.
                    moves.swap(0, i);
                }
            }

            if let Some(found) = local {
                best = found;
            }
            self.stats.depth_completed = depth;
            debug!(depth, score = best.1, best = %best.0, "pvs depth complete");
        }

        Some(best)
    }

    fn negamax(
        &mut self,
        state: &GameState,
        depth: u32,
        alpha: i32,
        beta: i32,
        perspective: Color,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || state.is_decided() {
            return perspective.sign() * heuristic::evaluate(state);
        }

        let moves = all_legal_moves(state);
        if moves.is_empty() {
            return perspective.sign() * heuristic::evaluate(state);
        }
        let moves = order_moves(state, moves);

        let mut best = -INF;
        let mut a = alpha;

        for (i, mv) in moves.iter().enumerate() {
            let next = apply_move(state, mv);
            let tactics = Tactics::of(state, &next, mv);
            let child = perspective.opponent();

            let score = if i == 0 {
                let depth = depth - 1 + u32::from(tactics.extends());
                -self.negamax(&next, depth, -beta, -a, child)
            } else {
                let reduce = u32::from(tactics.is_quiet() && depth >= 3 && i >= 3);
                let probe = -self.negamax(&next, depth - 1 - reduce, -a - 1, -a, child);
                if probe > a && probe < beta {
                    self.stats.re_searches += 1;
                    -self.negamax(&next, depth - 1, -beta, -a, child)
                } else {
                    probe
                }
            };

            best = best.max(score);
            a = a.max(best);
            if a >= beta {
                break;
            }
        }
        best
    }

    /// Statistics from the last call.
    #[must_use]
    pub fn stats(&self) -> &PvsStats {
        &self.stats
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &PvsConfig {
        &self.config
    }
}
