//! Monte Carlo Tree Search under a move budget.
//!
//! ## Overview
//!
//! - **Arena tree**: nodes in a flat `Vec`, linked by `NodeId` indices
//! - **Lazy discovery**: a node shuffles its legal moves and checks for a
//!   terminal position the first time selection reaches it
//! - **One expansion per iteration**, followed by a random playout
//! - **Budget**: expansions and playout moves both count; a playout cut
//!   short by the budget ends the search without being credited
//!
//! ## Usage
//!
//! ```rust
//! use breakthrough_ai::mcts::{MCTSConfig, MCTSSearch};
//! use breakthrough_ai::rules::initial_state;
//!
//! let state = initial_state(6);
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_move_budget(500));
//!
//! if let Some(mv) = search.choose_move(&state) {
//!     println!("Best move: {mv}");
//! }
//!
//! for (mv, visits, win_rate) in search.root_statistics() {
//!     println!("{mv}: {visits} playouts, {:.1}%", win_rate * 100.0);
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{Edge, MCTSNode, NodeId};
pub use policy::{Playout, RandomPlayout, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::MCTSTree;
