//! Core MCTS search algorithm.
//!
//! Budgeted UCT over the real game tree. Nodes discover their moves lazily,
//! one child is expanded per iteration, and a random playout scores it from
//! the root mover's point of view. The same score is added along the whole
//! path back to the root.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::{GameRng, GameState, Move};
use crate::rules::{all_legal_moves, apply_move, outcome};

use super::config::MCTSConfig;
use super::node::{Edge, MCTSNode, NodeId};
use super::policy::{RandomPlayout, SelectionPolicy, SimulationPolicy, UCB1};
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Main MCTS search context.
///
/// Owns the configuration and the tree of the last search. The tree is
/// rebuilt from scratch on every call to [`choose_move`](Self::choose_move).
pub struct MCTSSearch {
    /// Search configuration.
    config: MCTSConfig,

    /// Tree built by the last call, if it searched.
    tree: Option<MCTSTree>,

    /// RNG for shuffling, playouts and the fallback move.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy>,

    /// Search statistics.
    stats: SearchStats,
}

impl MCTSSearch {
    /// Create a new MCTS search context.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            tree: None,
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomPlayout),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Pick a move for the side to move, or `None` if it has none.
    ///
    /// Returns the root child with the best win rate. When no child
    /// completed a playout within the budget, a uniformly random legal move
    /// is returned instead.
    pub fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.tree = None;

        let root_moves = all_legal_moves(state);
        if root_moves.is_empty() {
            return None;
        }

        let mut tree = MCTSTree::new(state.clone());
        let root = tree.root();
        self.discover(&mut tree, root);

        let perspective = state.turn;
        let budget = self.config.move_budget;
        let mut used: u32 = 0;

        while used < budget {
            self.stats.iterations += 1;

            let leaf = self.select(&mut tree, root);
            let (node, expand_cost) = self.expand(&mut tree, leaf);

            let remaining = (budget - used).saturating_sub(expand_cost);
            let playout =
                self.simulation
                    .simulate(&tree.get(node).state, remaining, perspective, &mut self.rng);
            if playout.interrupted {
                self.stats.interrupted = true;
                trace!(used, budget, "mcts playout interrupted");
                break;
            }

            used += (expand_cost + playout.moves_used).max(1);
            self.backpropagate(&mut tree, node, playout.score);
            self.stats.simulations += 1;
        }

        self.stats.moves_used = used;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let best = tree.root_node().best_edge_by_reward().map(|edge| {
            debug!(
                best = %edge.mv,
                win_rate = edge.mean_reward(),
                visits = edge.visits,
                simulations = self.stats.simulations,
                sims_per_sec = self.stats.simulations_per_second(),
                moves_per_sim = self.stats.moves_per_simulation(),
                nodes = tree.len(),
                max_depth = self.stats.max_depth,
                "mcts search complete"
            );
            edge.mv
        });
        self.tree = Some(tree);

        match best {
            Some(mv) => Some(mv),
            None => {
                warn!(budget, "no playout completed, playing a random move");
                self.rng.choose(&root_moves).copied()
            }
        }
    }

    /// Compute legal moves (shuffled) and terminal status, once per node.
    fn discover(&mut self, tree: &mut MCTSTree, id: NodeId) {
        let node = tree.get_mut(id);
        if node.discovered {
            return;
        }
        node.discovered = true;

        if let Some(result) = outcome(&node.state) {
            node.terminal = Some(result);
            return;
        }

        let mut moves = all_legal_moves(&node.state);
        self.rng.shuffle(&mut moves);
        node.edges = moves.into_iter().map(Edge::new).collect();
    }

    /// Walk down by UCB1 until reaching a terminal node, a node with an
    /// unexpanded move, or a node none of whose children can be scored.
    fn select(&mut self, tree: &mut MCTSTree, mut current: NodeId) -> NodeId {
        loop {
            self.discover(tree, current);

            let node = tree.get(current);
            if node.is_terminal() || node.has_unexpanded() {
                return current;
            }
            match self.selection.select(node, &self.config) {
                Some(idx) => current = node.edges[idx].child,
                None => return current,
            }
        }
    }

    /// Expand the next undiscovered move of `id`. Returns the new child and
    /// the number of applications spent, or `id` itself at no cost when
    /// there is nothing to expand.
    fn expand(&mut self, tree: &mut MCTSTree, id: NodeId) -> (NodeId, u32) {
        let node = tree.get(id);
        if node.is_terminal() {
            return (id, 0);
        }
        let Some(idx) = node.next_unexpanded() else {
            return (id, 0);
        };

        let mv = node.edges[idx].mv;
        let depth = node.depth + 1;
        let state = apply_move(&node.state, &mv);

        let child = tree.alloc(MCTSNode::new(state, id, idx as u16, depth));
        tree.get_mut(id).edges[idx].child = child;

        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        (child, 1)
    }

    /// Credit `score` to `from` and every ancestor.
    fn backpropagate(&mut self, tree: &mut MCTSTree, from: NodeId, score: f64) {
        let path: Vec<NodeId> = tree.ancestors(from).collect();
        for id in path {
            let node = tree.get_mut(id);
            node.visits += 1;
            let (parent, edge_idx) = (node.parent, node.parent_edge_idx as usize);

            if !parent.is_none() {
                let edge = &mut tree.get_mut(parent).edges[edge_idx];
                edge.visits += 1;
                edge.total_reward += score;
            }
        }
    }

    /// Tree from the last call, or `None` if it had no moves to search.
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree> {
        self.tree.as_ref()
    }

    /// Get search statistics from the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Root moves with their visit counts and win rates from the last call.
    pub fn root_statistics(&self) -> Vec<(Move, u32, f64)> {
        self.tree
            .iter()
            .flat_map(|tree| tree.root_node().edges.iter())
            .map(|e| (e.mv, e.visits, e.mean_reward()))
            .collect()
    }
}
