//! Breakthrough rules: setup, move generation, move application, wins.
//!
//! All functions are pure over an explicit `GameState`. They assume a
//! structurally valid state and, for `apply_move`, a move produced by
//! `legal_moves_from` / `all_legal_moves` for that same state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Color, GameState, Move, Piece, Square};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One side reached its goal rank.
    Winner(Color),
    /// No pieces remain on the board.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }

    /// Reward for `color`: 1 for a win, 0 for a loss, 0.5 for a draw.
    #[must_use]
    pub fn reward(&self, color: Color) -> f64 {
        match self {
            GameResult::Winner(c) if *c == color => 1.0,
            GameResult::Winner(_) => 0.0,
            GameResult::Draw => 0.5,
        }
    }
}

/// Starting position: Black on rows 0-1, White on the last two rows,
/// White to move.
///
/// `size` must be at least [`MIN_SIZE`](crate::core::MIN_SIZE); smaller
/// boards have no room between the two sides' starting rows.
#[must_use]
pub fn initial_state(size: usize) -> GameState {
    let mut board = Board::empty(size);
    for col in 0..size {
        for row in 0..2.min(size) {
            board.set(Square::new(row, col), Some(Piece::new(Color::Black)));
        }
        for row in size.saturating_sub(2)..size {
            board.set(Square::new(row, col), Some(Piece::new(Color::White)));
        }
    }
    GameState::new(board, Color::White, None)
}

/// Legal moves for the piece on `from`, in generation order: straight,
/// then forward-left, then forward-right.
///
/// Empty when the square is empty or holds a piece of the side not to move.
#[must_use]
pub fn legal_moves_from(state: &GameState, from: Square) -> SmallVec<[Move; 3]> {
    let mut moves = SmallVec::new();
    let Some(piece) = state.board.get(from) else {
        return moves;
    };
    if piece.color != state.turn {
        return moves;
    }
    push_piece_moves(&state.board, from, piece.color, |m| moves.push(m));
    moves
}

/// Every legal move for the side to move, scanning squares row-major.
#[must_use]
pub fn all_legal_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(state.size() * 3);
    for (sq, piece) in state.board.pieces() {
        if piece.color == state.turn {
            push_piece_moves(&state.board, sq, piece.color, |m| moves.push(m));
        }
    }
    moves
}

fn push_piece_moves(board: &Board, from: Square, color: Color, mut push: impl FnMut(Move)) {
    let size = board.size();
    let dir = color.forward();

    if let Some(ahead) = from.offset(dir, 0, size) {
        if board.get(ahead).is_none() {
            push(Move::new(from, ahead));
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col, size) else {
            continue;
        };
        match board.get(to) {
            None => push(Move::new(from, to)),
            Some(target) if target.color != color => push(Move::capture(from, to)),
            Some(_) => {}
        }
    }
}

/// Apply a move, returning the successor state.
///
/// The piece on `move.from` is relocated to `move.to`, removing whatever
/// stood there. The winner is re-evaluated from the new board, and the turn
/// passes to the opponent unless the move decided the game. With no piece
/// on `move.from` the input state is returned unchanged.
#[must_use]
pub fn apply_move(state: &GameState, mv: &Move) -> GameState {
    let Some(piece) = state.board.get(mv.from) else {
        return state.clone();
    };

    let mut board = state.board.clone();
    board.set(mv.from, None);
    board.set(mv.to, Some(piece));

    let winner = winner_on(&board);
    let turn = if winner.is_some() {
        state.turn
    } else {
        piece.color.opponent()
    };

    GameState::new(board, turn, winner)
}

/// The side owning a piece on its goal rank, if any.
///
/// Derived from the board alone; the recorded turn is irrelevant.
#[must_use]
pub fn check_winner(state: &GameState) -> Option<Color> {
    winner_on(&state.board)
}

fn winner_on(board: &Board) -> Option<Color> {
    let size = board.size();
    let white_goal = board.row(Color::White.goal_row(size));
    let black_goal = board.row(Color::Black.goal_row(size));

    for col in 0..size {
        if matches!(white_goal[col], Some(p) if p.color == Color::White) {
            return Some(Color::White);
        }
        if matches!(black_goal[col], Some(p) if p.color == Color::Black) {
            return Some(Color::Black);
        }
    }
    None
}

/// Terminal classification: a winner, a draw on an empty board, or `None`
/// while the game continues.
#[must_use]
pub fn outcome(state: &GameState) -> Option<GameResult> {
    if let Some(color) = check_winner(state) {
        return Some(GameResult::Winner(color));
    }
    if state.board.piece_count() == 0 {
        return Some(GameResult::Draw);
    }
    None
}
