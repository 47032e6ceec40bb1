//! Static move ordering.
//!
//! Scores are cheap and only used to sort; they are not evaluations.

use std::cmp::Reverse;

use crate::core::{GameState, Move, Square};
use crate::eval::most_advanced;

const PROMOTION: i32 = 10_000;
const CAPTURE: i32 = 500;
const CENTRAL_CAPTURE: i32 = 120;
const ADVANCE: i32 = 40;
const CENTER_STEP: i32 = 5;
const EDGE_ORIGIN: i32 = 8;
const FILE_CHANGE: i32 = 5;
const RUNNER_CAPTURE: i32 = 800;
const RUNNER_BLOCK: i32 = 350;
const RUNNER_FLANK: i32 = 120;

/// Ordering key for `mv` in `state`. Higher sorts first.
#[must_use]
pub fn move_priority(state: &GameState, mv: &Move, enemy_runners: &[Square]) -> i32 {
    let size = state.size();
    let side = state.turn;
    if mv.to.row == side.goal_row(size) {
        return PROMOTION;
    }

    let mut key = 0;
    if mv.capture {
        key += CAPTURE;
        if (2..=size.saturating_sub(3)).contains(&mv.to.col) {
            key += CENTRAL_CAPTURE;
        }
    }

    let advance = mv.from.row.abs_diff(mv.to.row) as i32;
    key += advance * ADVANCE;

    // Ten points per half-file of distance from the board edge.
    let span = size as i32 - 1;
    key += CENTER_STEP * span - CENTER_STEP * (2 * mv.to.col as i32 - span).abs();

    if mv.from.col == 0 || mv.from.col + 1 == size {
        key += EDGE_ORIGIN;
    }
    if mv.from.col != mv.to.col {
        key += FILE_CHANGE;
    }

    let enemy = side.opponent();
    for &runner in enemy_runners {
        if mv.to == runner && mv.capture {
            key += RUNNER_CAPTURE;
        }
        let Some(front) = runner.offset(enemy.forward(), 0, size) else {
            continue;
        };
        if mv.to == front {
            key += RUNNER_BLOCK;
        }
        for d_col in [-1, 1] {
            if front.offset(0, d_col, size) == Some(mv.to) {
                key += RUNNER_FLANK;
            }
        }
    }
    key
}

/// Sort `moves` best-first for the side to move in `state`. Equal keys keep
/// generation order.
#[must_use]
pub fn order_moves(state: &GameState, mut moves: Vec<Move>) -> Vec<Move> {
    let runners = most_advanced(&state.board, state.turn.opponent());
    moves.sort_by_cached_key(|mv| Reverse(move_priority(state, mv, &runners)));
    moves
}
