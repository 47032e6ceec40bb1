//! Alpha-beta negamax under a global application budget.
//!
//! Each `choose_move` call owns a fresh [`Context`] holding the budget
//! counter and two memo tables: legal moves per position, and successor
//! state per (position, move). A memoized successor costs nothing, so a
//! deeper iterative-deepening pass replays the shallower tree for free and
//! transpositions reached by different move orders are only expanded once.
//!
//! When the budget runs out the in-progress pass backs out completely and
//! the answer from the last finished depth stands.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::core::{Color, GameRng, GameState, Move};
use crate::eval::simple;
use crate::rules::{all_legal_moves, apply_move};

use super::config::MinimaxConfig;
use super::key::StateKey;

const INF: i32 = i32::MAX;

/// Value of a searched node and the move that achieved it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored {
    /// Negamax value for the side the node was scored for.
    pub value: i32,
    /// First move that strictly improved the running best, if any.
    pub best: Option<Move>,
}

/// Counters from the most recent search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MinimaxStats {
    /// Budget-consuming state applications.
    pub applications: u32,
    /// Applications served from the memo table.
    pub cache_hits: u32,
    /// Nodes visited across all passes.
    pub nodes: u64,
    /// Deepest pass that finished within budget (0 = none).
    pub depth_completed: u32,
    /// Whether the budget ran out.
    pub exhausted: bool,
}

/// Per-call search context. Never outlives one `choose_move`.
struct Context {
    budget: u32,
    moves: FxHashMap<StateKey, Rc<[Move]>>,
    children: FxHashMap<StateKey, FxHashMap<Move, GameState>>,
    stats: MinimaxStats,
}

impl Context {
    fn new(budget: u32) -> Self {
        Self {
            budget,
            moves: FxHashMap::default(),
            children: FxHashMap::default(),
            stats: MinimaxStats::default(),
        }
    }

    fn legal_moves(&mut self, state: &GameState, key: &StateKey) -> Rc<[Move]> {
        if let Some(moves) = self.moves.get(key) {
            return Rc::clone(moves);
        }
        let moves: Rc<[Move]> = all_legal_moves(state).into();
        self.moves.insert(key.clone(), Rc::clone(&moves));
        moves
    }

    /// Successor of `state` under `mv`, or `None` once the budget is spent.
    fn apply(&mut self, state: &GameState, key: &StateKey, mv: &Move) -> Option<GameState> {
        if let Some(child) = self.children.get(key).and_then(|m| m.get(mv)) {
            self.stats.cache_hits += 1;
            return Some(child.clone());
        }
        if self.stats.applications >= self.budget {
            self.stats.exhausted = true;
            return None;
        }
        self.stats.applications += 1;

        let child = apply_move(state, mv);
        self.children
            .entry(key.clone())
            .or_default()
            .insert(*mv, child.clone());
        Some(child)
    }

    /// Negamax with alpha-beta. `perspective` is the side the returned value
    /// is for; it is tracked here rather than read from `state.turn`, which
    /// stays on the winner once a game is decided.
    fn alphabeta(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        perspective: Color,
    ) -> Option<Scored> {
        self.stats.nodes += 1;

        if depth == 0 || state.is_decided() {
            return Some(Scored {
                value: simple::evaluate(state, perspective),
                best: None,
            });
        }

        let key = StateKey::new(state);
        let moves = self.legal_moves(state, &key);
        if moves.is_empty() {
            return Some(Scored {
                value: simple::evaluate(state, perspective),
                best: None,
            });
        }

        let mut best = Scored { value: -INF, best: None };
        for mv in moves.iter() {
            let child = self.apply(state, &key, mv)?;
            let reply = self.alphabeta(&child, depth - 1, -beta, -alpha, perspective.opponent())?;
            let value = -reply.value;

            if value > best.value {
                best = Scored {
                    value,
                    best: Some(*mv),
                };
            }
            alpha = alpha.max(best.value);
            if alpha >= beta {
                break;
            }
        }
        Some(best)
    }
}

/// Budgeted iterative-deepening minimax.
pub struct MinimaxSearch {
    config: MinimaxConfig,
    rng: GameRng,
    stats: MinimaxStats,
}

impl MinimaxSearch {
    /// Create a new search.
    pub fn new(config: MinimaxConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            stats: MinimaxStats::default(),
        }
    }

    /// Pick a move for the side to move.
    ///
    /// Returns `None` only when there is no legal move. If not even the
    /// depth-1 pass fits in the budget, a uniformly random legal move is
    /// returned.
    pub fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        let root_moves = all_legal_moves(state);
        let mut result = *self.rng.choose(&root_moves)?;

        let mut ctx = Context::new(self.config.move_budget);
        for depth in 1..=self.config.max_depth {
            let before = ctx.stats.applications;

            match ctx.alphabeta(state, depth, -INF, INF, state.turn) {
                Some(scored) => {
                    if let Some(mv) = scored.best {
                        result = mv;
                    }
                    ctx.stats.depth_completed = depth;
                    debug!(
                        depth,
                        score = scored.value,
                        applications = ctx.stats.applications,
                        "minimax depth complete"
                    );
                }
                None => {
                    trace!(depth, budget = self.config.move_budget, "minimax budget exhausted");
                    break;
                }
            }

            // Nothing new was expanded: the reachable tree is exhausted.
            if ctx.stats.applications == before {
                break;
            }
        }

        self.stats = ctx.stats;
        Some(result)
    }

    /// Run a single fixed-depth pass from `state` with a fresh context.
    ///
    /// Returns `None` if the budget runs out before the pass completes.
    pub fn search_depth(&mut self, state: &GameState, depth: u32) -> Option<Scored> {
        let mut ctx = Context::new(self.config.move_budget);
        let scored = ctx.alphabeta(state, depth, -INF, INF, state.turn);
        if scored.is_some() {
            ctx.stats.depth_completed = depth;
        }
        self.stats = ctx.stats;
        scored
    }

    /// Statistics from the last call.
    #[must_use]
    pub fn stats(&self) -> &MinimaxStats {
        &self.stats
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Square};
    use crate::eval::WIN_SCORE;
    use crate::rules::initial_state;

    fn state_from(diagram: &str, turn: Color) -> GameState {
        GameState::new(Board::from_diagram(diagram).unwrap(), turn, None)
    }

    #[test]
    fn test_returns_legal_move() {
        let state = initial_state(8);
        let mut search = MinimaxSearch::new(MinimaxConfig::default().with_move_budget(2_000));
        let mv = search.choose_move(&state).unwrap();

        assert!(all_legal_moves(&state).contains(&mv));
        assert!(search.stats().depth_completed >= 1);
        assert!(search.stats().applications <= 2_000);
    }

    #[test]
    fn test_takes_immediate_win() {
        let state = state_from(
            "
            .....
            ..W..
            .....
            B....
            .....
            ",
            Color::White,
        );
        let mut search = MinimaxSearch::new(MinimaxConfig::default());
        let mv = search.choose_move(&state).unwrap();

        assert_eq!(mv.from, Square::new(1, 2));
        assert_eq!(mv.to.row, 0);
    }

    #[test]
    fn test_winning_line_scores_as_win() {
        let state = state_from(
            "
            ....
            .W..
            ...B
            ....
            ",
            Color::White,
        );
        let mut search = MinimaxSearch::new(MinimaxConfig::default());
        let scored = search.search_depth(&state, 1).unwrap();

        assert_eq!(scored.value, WIN_SCORE);
    }

    #[test]
    fn test_zero_budget_falls_back_to_random_legal_move() {
        let state = initial_state(8);
        let mut search = MinimaxSearch::new(MinimaxConfig::default().with_move_budget(0));
        let mv = search.choose_move(&state).unwrap();

        assert!(all_legal_moves(&state).contains(&mv));
        assert_eq!(search.stats().depth_completed, 0);
        assert!(search.stats().exhausted);
    }

    #[test]
    fn test_budget_is_never_exceeded() {
        let state = initial_state(6);
        for budget in [1, 10, 100, 1_000] {
            let mut search = MinimaxSearch::new(MinimaxConfig::default().with_move_budget(budget));
            search.choose_move(&state);
            assert!(search.stats().applications <= budget);
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let empty = GameState::new(Board::empty(4), Color::White, None);
        let mut search = MinimaxSearch::new(MinimaxConfig::default());

        assert!(search.choose_move(&empty).is_none());
    }

    #[test]
    fn test_memo_serves_repeat_passes() {
        let state = initial_state(5);
        let mut search = MinimaxSearch::new(MinimaxConfig::default().with_move_budget(5_000).with_max_depth(3));
        search.choose_move(&state);

        assert!(search.stats().cache_hits > 0);
    }
}
