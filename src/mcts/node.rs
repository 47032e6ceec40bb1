//! MCTS node and edge structures.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]; the edge
//! list doubles as the node's discovered move list, in shuffled order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameState, Move};
use crate::rules::GameResult;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Edge from a parent to the child reached by one move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    /// The move this edge represents.
    pub mv: Move,

    /// Child node (NONE if not yet expanded).
    pub child: NodeId,

    /// Completed playouts through this edge.
    pub visits: u32,

    /// Summed playout scores, from the root mover's point of view.
    pub total_reward: f64,
}

impl Edge {
    /// Create an unexpanded edge.
    pub fn new(mv: Move) -> Self {
        Self {
            mv,
            child: NodeId::NONE,
            visits: 0,
            total_reward: 0.0,
        }
    }

    /// Mean playout score, 0 when unvisited.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }

    /// Check if this edge has been expanded (child exists).
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.child.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode {
    /// Position at this node.
    pub state: GameState,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Index of the edge from parent that led to this node.
    pub parent_edge_idx: u16,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Completed playouts through this node.
    pub visits: u32,

    /// Whether moves and terminal status have been computed.
    pub discovered: bool,

    /// Terminal classification, set on discovery.
    pub terminal: Option<GameResult>,

    /// One edge per discovered legal move. Expanded strictly in order.
    pub edges: SmallVec<[Edge; 8]>,
}

impl MCTSNode {
    /// Create a new, undiscovered node.
    pub fn new(state: GameState, parent: NodeId, parent_edge_idx: u16, depth: u16) -> Self {
        Self {
            state,
            parent,
            parent_edge_idx,
            depth,
            visits: 0,
            discovered: false,
            terminal: None,
            edges: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root(state: GameState) -> Self {
        Self::new(state, NodeId::NONE, 0, 0)
    }

    /// Check if the node is a decided or drawn position.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Check if any edges are unexpanded.
    #[must_use]
    pub fn has_unexpanded(&self) -> bool {
        self.edges.iter().any(|e| !e.is_expanded())
    }

    /// Index of the next edge to expand.
    #[must_use]
    pub fn next_unexpanded(&self) -> Option<usize> {
        self.edges.iter().position(|e| !e.is_expanded())
    }

    /// Visited edge with the highest mean reward. Ties keep the earliest.
    #[must_use]
    pub fn best_edge_by_reward(&self) -> Option<&Edge> {
        let mut best: Option<&Edge> = None;
        for edge in self.edges.iter().filter(|e| e.visits > 0) {
            if best.map_or(true, |b| edge.mean_reward() > b.mean_reward()) {
                best = Some(edge);
            }
        }
        best
    }
}
