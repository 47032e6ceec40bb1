//! Rules engine integration tests: fixed scenarios plus random playouts.

use breakthrough_ai::{
    all_legal_moves, apply_move, check_winner, initial_state, legal_moves_from, outcome, Board,
    Color, Error, GameResult, GameState, Move, Piece, Square,
};
use breakthrough_ai::core::{MAX_SIZE, MIN_SIZE};
use proptest::prelude::*;
use proptest::sample::Index;

// =============================================================================
// Fixed scenarios
// =============================================================================

#[test]
fn test_initial_layout_for_every_size() {
    for size in 4..=10 {
        let state = initial_state(size);

        assert_eq!(state.turn, Color::White);
        assert_eq!(state.board.count(Color::White), 2 * size);
        assert_eq!(state.board.count(Color::Black), 2 * size);
        for col in 0..size {
            assert_eq!(state.board.color_at(Square::new(0, col)), Some(Color::Black));
            assert_eq!(state.board.color_at(Square::new(1, col)), Some(Color::Black));
            assert_eq!(state.board.color_at(Square::new(size - 2, col)), Some(Color::White));
            assert_eq!(state.board.color_at(Square::new(size - 1, col)), Some(Color::White));
        }
    }
}

#[test]
fn test_initial_state_is_undecided_for_every_accepted_size() {
    for size in MIN_SIZE..=MAX_SIZE {
        let state = initial_state(size);
        assert_eq!(state.winner, check_winner(&state), "size {size}");
        assert_eq!(state.winner, None, "size {size}");
        assert_eq!(outcome(&state), None, "size {size}");
    }
}

#[test]
fn test_boards_below_minimum_are_rejected() {
    for size in 1..MIN_SIZE {
        let grid: Vec<Vec<Option<Piece>>> = vec![vec![None; size]; size];
        assert!(matches!(Board::try_from(grid), Err(Error::InvalidSize(s)) if s == size));
    }
}

#[test]
fn test_edge_pawn_at_start() {
    let state = initial_state(8);
    let moves = legal_moves_from(&state, Square::new(6, 0));

    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.to.row == 5));
}

#[test]
fn test_black_on_goal_wins_whoever_is_to_move() {
    let mut board = Board::empty(4);
    board.set(Square::new(3, 1), Some(Piece::new(Color::Black)));
    board.set(Square::new(2, 2), Some(Piece::new(Color::White)));

    for turn in Color::BOTH {
        let state = GameState::new(board.clone(), turn, None);
        assert_eq!(check_winner(&state), Some(Color::Black));
    }
}

#[test]
fn test_white_on_goal_wins() {
    let mut board = Board::empty(8);
    board.set(Square::new(0, 3), Some(Piece::new(Color::White)));
    let state = GameState::new(board, Color::Black, None);

    assert_eq!(check_winner(&state), Some(Color::White));
    assert_eq!(outcome(&state), Some(GameResult::Winner(Color::White)));
}

#[test]
fn test_empty_board_is_a_draw() {
    let state = GameState::new(Board::empty(6), Color::Black, None);
    assert_eq!(outcome(&state), Some(GameResult::Draw));
}

#[test]
fn test_mid_game_has_no_outcome() {
    assert_eq!(outcome(&initial_state(8)), None);
}

#[test]
fn test_black_moves_toward_high_rows() {
    let state = apply_move(&initial_state(6), &Move::new(Square::new(4, 2), Square::new(3, 2)));
    assert_eq!(state.turn, Color::Black);

    let moves = all_legal_moves(&state);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.to.row == m.from.row + 1));
}

#[test]
fn test_blocked_file_has_only_diagonals() {
    let state = GameState::new(
        Board::from_diagram(
            "
            ......
            ......
            ..B...
            ..W...
            ......
            ......
            ",
        )
        .unwrap(),
        Color::White,
        None,
    );
    let moves = legal_moves_from(&state, Square::new(3, 2));

    assert_eq!(
        moves.as_slice(),
        &[
            Move::new(Square::new(3, 2), Square::new(2, 1)),
            Move::new(Square::new(3, 2), Square::new(2, 3)),
        ]
    );
}

// =============================================================================
// Random playouts
// =============================================================================

/// Play the moves picked by `picks` from the initial position, stopping when
/// the game is decided or stuck. Returns every state visited and the moves.
fn playout(size: usize, picks: &[Index]) -> (Vec<GameState>, Vec<Move>) {
    let mut states = vec![initial_state(size)];
    let mut moves = Vec::new();

    for pick in picks {
        let state = states.last().unwrap();
        if state.is_decided() {
            break;
        }
        let legal = all_legal_moves(state);
        if legal.is_empty() {
            break;
        }
        let mv = *pick.get(&legal);
        states.push(apply_move(state, &mv));
        moves.push(mv);
    }
    (states, moves)
}

fn picks() -> impl Strategy<Value = Vec<Index>> {
    prop::collection::vec(any::<Index>(), 0..80)
}

proptest! {
    #[test]
    fn prop_generated_moves_are_legal(size in 4usize..=9, picks in picks()) {
        let (states, _) = playout(size, &picks);

        for state in &states {
            if state.is_decided() {
                continue;
            }
            let dir = state.turn.forward();
            for mv in all_legal_moves(state) {
                let piece = state.board.get(mv.from).unwrap();
                prop_assert_eq!(piece.color, state.turn);
                prop_assert_eq!(mv.to.row as isize, mv.from.row as isize + dir);
                prop_assert!((mv.to.col as isize - mv.from.col as isize).abs() <= 1);
                match state.board.get(mv.to) {
                    None => prop_assert!(!mv.capture),
                    Some(target) => {
                        prop_assert!(mv.is_diagonal());
                        prop_assert_eq!(target.color, state.turn.opponent());
                        prop_assert!(mv.capture);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_all_moves_is_union_of_per_square(size in 4usize..=8, picks in picks()) {
        let (states, _) = playout(size, &picks);
        let state = states.last().unwrap();

        let mut per_square = Vec::new();
        for (sq, _) in state.board.pieces() {
            per_square.extend(legal_moves_from(state, sq));
        }
        prop_assert_eq!(all_legal_moves(state), per_square);
    }

    #[test]
    fn prop_apply_is_pure_and_deterministic(size in 4usize..=8, picks in picks()) {
        let (states, _) = playout(size, &picks);
        let state = states.last().unwrap();
        let before = state.clone();

        for mv in all_legal_moves(state) {
            let a = apply_move(state, &mv);
            let b = apply_move(state, &mv);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(state, &before);
        }
    }

    #[test]
    fn prop_piece_count_never_grows(size in 4usize..=9, picks in picks()) {
        let (states, moves) = playout(size, &picks);

        for (pair, mv) in states.windows(2).zip(&moves) {
            let (before, after) = (pair[0].board.piece_count(), pair[1].board.piece_count());
            if mv.capture {
                prop_assert_eq!(after, before - 1);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn prop_turn_alternates_until_decided(size in 4usize..=9, picks in picks()) {
        let (states, _) = playout(size, &picks);

        for pair in states.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            prop_assert_eq!(next.winner, check_winner(next));
            if next.is_decided() {
                prop_assert_eq!(next.turn, prev.turn);
                prop_assert_eq!(next.winner, Some(prev.turn));
            } else {
                prop_assert_eq!(next.turn, prev.turn.opponent());
            }
        }
    }

    #[test]
    fn prop_replay_reproduces_position(size in 4usize..=8, picks in picks()) {
        let (states, moves) = playout(size, &picks);

        let replayed = moves
            .iter()
            .fold(initial_state(size), |state, mv| apply_move(&state, mv));
        prop_assert_eq!(&replayed, states.last().unwrap());
    }

    #[test]
    fn prop_state_survives_json(size in 4usize..=8, picks in picks()) {
        let (states, _) = playout(size, &picks);
        let state = states.last().unwrap();

        let json = serde_json::to_string(state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, state);
    }
}
