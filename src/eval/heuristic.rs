//! Runner-aware positional evaluator.
//!
//! Per piece: a base value, linear advancement, a column-centrality bonus,
//! a flank penalty for the two outermost files on each side, local mobility,
//! and a runner bonus for passed pawns that grows as the pawn nears its goal.
//! Global terms add material, pieces within three rows of the goal, pieces
//! on central files, and a penalty for pieces still on the home rank
//! (heavier in the corners).
//!
//! Scores are White-positive; multiply by [`Color::sign`] for a side's view.

use crate::core::{Board, Color, GameState, Square};

use super::WIN_SCORE;

const PIECE_BASE: i32 = 130;
const ADVANCE_PER_ROW: i32 = 22;

/// Centrality by distance from the nearest edge file.
const CENTER_BY_EDGE_DISTANCE: [i32; 4] = [0, 10, 20, 25];

const EDGE_FILE_PENALTY: i32 = -10;
const NEAR_EDGE_FILE_PENALTY: i32 = -5;

const MOBILITY_AHEAD: i32 = 10;
const MOBILITY_DIAGONAL: i32 = 4;

const RUNNER_BASE: i32 = 20;
const RUNNER_PER_ROW: i32 = 15;
const RUNNER_HORIZON: usize = 6;
const RUNNER_ONE_STEP: i32 = 60;
const RUNNER_UNSTOPPABLE: i32 = 120;
const UNSTOPPABLE_DISTANCE: usize = 3;

const MATERIAL: i32 = 290;
const ADVANCED: i32 = 140;
const CENTRAL: i32 = 45;
const HOME_RANK_PENALTY: i32 = 18;
const HOME_CORNER_PENALTY: i32 = 15;

/// Rows left before `color` reaches its goal from `row`.
#[inline]
#[must_use]
pub fn distance_to_goal(color: Color, row: usize, size: usize) -> usize {
    match color {
        Color::White => row,
        Color::Black => size - 1 - row,
    }
}

/// Centrality bonus for a file.
#[inline]
#[must_use]
pub fn column_centrality(col: usize, size: usize) -> i32 {
    let from_edge = col.min(size - 1 - col);
    CENTER_BY_EDGE_DISTANCE[from_edge.min(CENTER_BY_EDGE_DISTANCE.len() - 1)]
}

fn flank_penalty(col: usize, size: usize) -> i32 {
    match col.min(size - 1 - col) {
        0 => EDGE_FILE_PENALTY,
        1 => NEAR_EDGE_FILE_PENALTY,
        _ => 0,
    }
}

/// Whether no enemy piece stands ahead of `sq` on its own file or either
/// adjacent file, all the way to the goal rank.
#[must_use]
pub fn is_passed(board: &Board, color: Color, sq: Square) -> bool {
    let enemy = color.opponent();
    let dir = color.forward();
    let col = sq.col as isize;
    let mut row = sq.row as isize + dir;

    while row >= 0 && (row as usize) < board.size() {
        for c in col - 1..=col + 1 {
            if matches!(board.get_checked(row, c), Some(p) if p.color == enemy) {
                return false;
            }
        }
        row += dir;
    }
    true
}

/// A passed pawn close enough to its goal that it is expected to promote.
///
/// Being passed already rules out any enemy inside the forward cone, so
/// the remaining condition is proximity.
#[must_use]
pub fn is_likely_unstoppable(board: &Board, color: Color, sq: Square) -> bool {
    is_passed(board, color, sq)
        && distance_to_goal(color, sq.row, board.size()) <= UNSTOPPABLE_DISTANCE
}

/// Pieces of `color` nearest to their goal rank (ties included).
#[must_use]
pub fn most_advanced(board: &Board, color: Color) -> Vec<Square> {
    let size = board.size();
    let mut best = usize::MAX;
    let mut out = Vec::new();

    for (sq, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        let dist = distance_to_goal(color, sq.row, size);
        if dist < best {
            best = dist;
            out.clear();
            out.push(sq);
        } else if dist == best {
            out.push(sq);
        }
    }
    out
}

fn mobility(board: &Board, color: Color, sq: Square) -> i32 {
    let size = board.size();
    let row = sq.row as isize + color.forward();
    let col = sq.col as isize;
    if row < 0 || row as usize >= size {
        return 0;
    }

    let mut bonus = 0;
    if board.get_checked(row, col).is_none() {
        bonus += MOBILITY_AHEAD;
    }
    // Diagonals only count when they lead toward the centre.
    if col > 0 && sq.col + 1 >= size / 2 && board.get_checked(row, col - 1).is_none() {
        bonus += MOBILITY_DIAGONAL;
    }
    if sq.col + 1 < size && sq.col <= size / 2 && board.get_checked(row, col + 1).is_none() {
        bonus += MOBILITY_DIAGONAL;
    }
    bonus
}

fn runner_bonus(board: &Board, color: Color, sq: Square) -> i32 {
    if !is_passed(board, color, sq) {
        return 0;
    }
    let dist = distance_to_goal(color, sq.row, board.size());
    let mut bonus = RUNNER_BASE + (RUNNER_HORIZON - dist.min(RUNNER_HORIZON)) as i32 * RUNNER_PER_ROW;
    if dist <= 1 {
        bonus += RUNNER_ONE_STEP;
    }
    if dist <= UNSTOPPABLE_DISTANCE {
        bonus += RUNNER_UNSTOPPABLE;
    }
    bonus
}

/// Score one piece, before the color sign is applied.
#[must_use]
pub fn piece_score(board: &Board, color: Color, sq: Square) -> i32 {
    let size = board.size();
    let advancement = (size - 1 - distance_to_goal(color, sq.row, size)) as i32;

    PIECE_BASE
        + advancement * ADVANCE_PER_ROW
        + column_centrality(sq.col, size)
        + flank_penalty(sq.col, size)
        + mobility(board, color, sq)
        + runner_bonus(board, color, sq)
}

/// Evaluate `state`, White-positive.
#[must_use]
pub fn evaluate(state: &GameState) -> i32 {
    if let Some(winner) = state.winner {
        return winner.sign() * WIN_SCORE;
    }

    let board = &state.board;
    let size = board.size();
    let mut score = 0;

    // Per-color tallies, indexed White = 0, Black = 1.
    let mut material = [0i32; 2];
    let mut advanced = [0i32; 2];
    let mut central = [0i32; 2];
    let mut home_rank = [0i32; 2];
    let mut corners = [0i32; 2];

    for (sq, piece) in board.pieces() {
        let color = piece.color;
        let idx = color_index(color);

        score += color.sign() * piece_score(board, color, sq);

        material[idx] += 1;
        if distance_to_goal(color, sq.row, size) <= 2 {
            advanced[idx] += 1;
        }
        if column_centrality(sq.col, size) > 0 {
            central[idx] += 1;
        }
        if sq.row == color.opponent().goal_row(size) {
            home_rank[idx] += 1;
            if sq.col == 0 || sq.col == size - 1 {
                corners[idx] += 1;
            }
        }
    }

    score += (material[0] - material[1]) * MATERIAL;
    score += (advanced[0] - advanced[1]) * ADVANCED;
    score += (central[0] - central[1]) * CENTRAL;
    // Pieces left behind count against their own side.
    score += (home_rank[1] - home_rank[0]) * HOME_RANK_PENALTY;
    score += (corners[1] - corners[0]) * HOME_CORNER_PENALTY;

    score
}

#[inline]
fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}
