//! Request/response boundary.
//!
//! A request carries the full position, the strategy name and optional
//! search limits; the response carries the chosen move or `null`. The
//! transport that frames these documents is not this module's concern.
//!
//! ```
//! use breakthrough_ai::protocol::handle_json;
//!
//! let request = r#"{
//!     "board": [
//!         [null, null, null, null],
//!         [null, null, null, {"color": "B"}],
//!         [null, {"color": "W"}, null, null],
//!         [null, null, null, null]
//!     ],
//!     "turn": "W",
//!     "size": 4,
//!     "strategy": "mine",
//!     "seed": 7
//! }"#;
//! let response = handle_json(request).unwrap();
//! assert!(response.contains("\"move\""));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Board, Color, GameRng, GameState, Move, Piece};
use crate::error::{Error, Result};
use crate::strategy::{Strategy, StrategyKind, StrategyOptions};

/// Move request as received at the boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Row-major grid, `null` for an empty cell.
    pub board: Vec<Vec<Option<Piece>>>,

    /// Side to move.
    pub turn: Color,

    /// Winner, if the game is already decided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,

    /// Declared board side length.
    pub size: usize,

    /// Registry name of the strategy to run.
    pub strategy: String,

    /// Application budget override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_budget: Option<u32>,

    /// Depth cap override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,

    /// Seed for reproducible answers. Drawn from OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl MoveRequest {
    /// Build a request for `state`.
    pub fn new(state: &GameState, strategy: impl Into<String>) -> Self {
        Self {
            board: state.board.clone().into(),
            turn: state.turn,
            winner: state.winner,
            size: state.size(),
            strategy: strategy.into(),
            move_budget: None,
            max_depth: None,
            seed: None,
        }
    }

    /// Validate the grid against the declared size and build the state.
    pub fn state(&self) -> Result<GameState> {
        let rows = self.board.len();
        if rows != self.size {
            return Err(Error::SizeMismatch {
                declared: self.size,
                actual: rows,
            });
        }
        let board = Board::try_from(self.board.clone())?;
        Ok(GameState::new(board, self.turn, self.winner))
    }

    /// Search limits carried by the request.
    #[must_use]
    pub fn options(&self) -> StrategyOptions {
        StrategyOptions {
            max_depth: self.max_depth,
            move_budget: self.move_budget,
            seed: self.seed,
        }
    }
}

/// Response to a [`MoveRequest`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Chosen move; `null` when the side to move has none.
    #[serde(rename = "move")]
    pub mv: Option<Move>,
}

/// Resolve the strategy, build a fresh instance and choose a move.
///
/// Fails on an unknown or unserved strategy name (`random` is arena-only)
/// or a malformed board; never on search outcome.
pub fn handle_request(request: &MoveRequest) -> Result<MoveResponse> {
    let kind: StrategyKind = request.strategy.parse()?;
    if !kind.is_served() {
        return Err(Error::UnknownStrategy(request.strategy.clone()));
    }
    let state = request.state()?;

    let mut options = request.options();
    let seed = *options
        .seed
        .get_or_insert_with(|| GameRng::from_entropy().seed());

    let mut strategy = kind.build(&options);
    let mv = strategy.choose_move(&state);

    info!(strategy = %kind, size = state.size(), turn = %state.turn, seed, "move request");
    match mv {
        Some(mv) => debug!(%mv, "move chosen"),
        None => debug!("no legal move"),
    }
    Ok(MoveResponse { mv })
}

/// JSON in, JSON out.
pub fn handle_json(request: &str) -> Result<String> {
    let request: MoveRequest = serde_json::from_str(request)?;
    let response = handle_request(&request)?;
    Ok(serde_json::to_string(&response)?)
}
