//! Playing a single benchmark game.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Color, GameRng, GameState};
use crate::rules::{all_legal_moves, apply_move, initial_state};
use crate::strategy::{Strategy, StrategyKind};

use super::config::ArenaConfig;

/// Who won a benchmark game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    White,
    Black,
    /// Move cap reached, or the side to move was stuck.
    Draw,
}

impl Outcome {
    fn of(state: &GameState) -> Self {
        match state.winner {
            Some(Color::White) => Outcome::White,
            Some(Color::Black) => Outcome::Black,
            None => Outcome::Draw,
        }
    }
}

/// Record of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Strategy playing White.
    pub white: StrategyKind,
    /// Strategy playing Black.
    pub black: StrategyKind,
    /// Result.
    pub winner: Outcome,
    /// Moves played by the strategies, excluding the opening.
    pub moves: u32,
    /// Random opening moves actually played.
    pub opening_moves: u32,
}

/// Play up to a random number of random moves, in `min..=max`, from the
/// initial position. Stops early if the game is decided or stuck. Returns
/// the position and the number of moves played.
pub fn random_opening(size: usize, min: u32, max: u32, rng: &mut GameRng) -> (GameState, u32) {
    let target = rng.gen_range_inclusive(min as usize..=max as usize) as u32;
    let mut state = initial_state(size);
    let mut played = 0;

    while played < target && !state.is_decided() {
        let moves = all_legal_moves(&state);
        let Some(mv) = rng.choose(&moves) else {
            break;
        };
        state = apply_move(&state, mv);
        played += 1;
    }
    (state, played)
}

/// Play `white` against `black` from `start` until a side wins, the side to
/// move has no move, or `max_moves` moves have been played.
pub fn play_from<W, B>(start: GameState, white: &mut W, black: &mut B, max_moves: u32) -> (GameState, u32)
where
    W: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    let mut state = start;
    let mut moves = 0;

    while !state.is_decided() && moves < max_moves {
        let mv = match state.turn {
            Color::White => white.choose_move(&state),
            Color::Black => black.choose_move(&state),
        };
        let Some(mv) = mv else {
            break;
        };
        state = apply_move(&state, &mv);
        moves += 1;
    }
    (state, moves)
}

/// Play one full benchmark game: random opening, then fresh instances of
/// both strategies. All randomness comes from `rng`.
pub fn play_game(
    white: StrategyKind,
    black: StrategyKind,
    config: &ArenaConfig,
    rng: &mut GameRng,
) -> GameRecord {
    let (start, opening_moves) = random_opening(
        config.board_size,
        config.min_opening_moves,
        config.max_opening_moves,
        &mut rng.for_context("opening"),
    );

    let mut white_strategy = white.build(&config.options.clone().with_seed(rng.next_u64()));
    let mut black_strategy = black.build(&config.options.clone().with_seed(rng.next_u64()));
    let (end, moves) = play_from(start, &mut white_strategy, &mut black_strategy, config.max_moves);

    let record = GameRecord {
        white,
        black,
        winner: Outcome::of(&end),
        moves,
        opening_moves,
    };
    trace!(?record, "game finished");
    record
}
