//! Strategy registry, heuristic search and request boundary tests.

use std::thread;

use breakthrough_ai::protocol::handle_json;
use breakthrough_ai::pvs::order_moves;
use breakthrough_ai::{
    all_legal_moves, apply_move, build_strategy, handle_request, initial_state, Board, Color,
    Error, GameState, Move, MoveRequest, PvsConfig, PvsSearch, Square, Strategy, StrategyKind,
    StrategyOptions,
};

fn state_from(diagram: &str, turn: Color) -> GameState {
    GameState::new(Board::from_diagram(diagram).unwrap(), turn, None)
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_every_strategy_plays_a_legal_move() {
    let state = initial_state(6);
    let legal = all_legal_moves(&state);
    let options = StrategyOptions::default()
        .with_max_depth(2)
        .with_move_budget(300)
        .with_seed(5);

    for kind in StrategyKind::ALL {
        let mut strategy = kind.build(&options);
        assert_eq!(strategy.name(), kind.name());
        let mv = strategy.choose_move(&state).unwrap();
        assert!(legal.contains(&mv), "{kind} played {mv}");
    }
}

#[test]
fn test_every_strategy_returns_none_without_moves() {
    let state = GameState::new(Board::empty(5), Color::Black, None);
    for name in StrategyKind::names() {
        let mut strategy = build_strategy(name, &StrategyOptions::default()).unwrap();
        assert_eq!(strategy.choose_move(&state), None, "{name}");
    }
}

#[test]
fn test_unknown_name() {
    let err = build_strategy("alphabeta", &StrategyOptions::default()).err().unwrap();
    assert!(matches!(err, Error::UnknownStrategy(ref name) if name == "alphabeta"));
}

#[test]
fn test_seeded_strategies_repeat() {
    let state = initial_state(8);
    let options = StrategyOptions::default().with_move_budget(400).with_seed(77);

    for kind in StrategyKind::ALL {
        let a = kind.build(&options).choose_move(&state);
        let b = kind.build(&options).choose_move(&state);
        assert_eq!(a, b, "{kind}");
    }
}

// =============================================================================
// Heuristic search
// =============================================================================

#[test]
fn test_pvs_prefers_promotion() {
    let state = state_from(
        "
        ......
        .W....
        ......
        ......
        ....B.
        ......
        ",
        Color::White,
    );
    let mut search = PvsSearch::new(PvsConfig::default());
    let (mv, _) = search.choose_move_scored(&state).unwrap();

    assert_eq!(mv.from, Square::new(1, 1));
    assert_eq!(mv.to.row, 0);
}

#[test]
fn test_pvs_ordering_puts_promotion_first() {
    let state = state_from(
        "
        .....
        ..W..
        .....
        W....
        .....
        ",
        Color::White,
    );
    let ordered = order_moves(&state, all_legal_moves(&state));
    assert_eq!(ordered[0].to.row, 0);
    assert_eq!(ordered.len(), all_legal_moves(&state).len());
}

#[test]
fn test_pvs_blocks_a_runner_it_cannot_outrun() {
    // Black promotes next move unless White's only piece captures it now.
    let state = state_from(
        "
        ......
        ......
        ......
        ......
        .B....
        ..W...
        ",
        Color::White,
    );
    let mut search = PvsSearch::new(PvsConfig::default().with_max_depth(3));
    let mv = search.choose_move(&state).unwrap();

    assert_eq!(mv, Move::capture(Square::new(5, 2), Square::new(4, 1)));
}

#[test]
fn test_pvs_is_deterministic_across_instances() {
    let mut state = initial_state(6);
    state = apply_move(&state, &Move::new(Square::new(4, 1), Square::new(3, 1)));

    let a = PvsSearch::new(PvsConfig::default().with_max_depth(3)).choose_move(&state);
    let b = PvsSearch::new(PvsConfig::default().with_max_depth(3)).choose_move(&state);
    assert_eq!(a, b);
}

// =============================================================================
// Request boundary
// =============================================================================

#[test]
fn test_json_request_round_trip() {
    let state = initial_state(5);
    let mut request = MoveRequest::new(&state, "dapetcu21-minimax");
    request.move_budget = Some(150);
    request.seed = Some(11);

    let response = handle_json(&serde_json::to_string(&request).unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&response).unwrap();
    let mv: Move = serde_json::from_value(value["move"].clone()).unwrap();

    assert!(all_legal_moves(&state).contains(&mv));
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(matches!(handle_json("{\"board\": 3}"), Err(Error::Json(_))));
}

#[test]
fn test_concurrent_requests_match_sequential_answers() {
    let state = initial_state(6);
    let requests: Vec<MoveRequest> = StrategyKind::SERVED
        .iter()
        .map(|kind| {
            let mut req = MoveRequest::new(&state, kind.name());
            req.seed = Some(21);
            req.move_budget = Some(250);
            req.max_depth = Some(2);
            req
        })
        .collect();

    let sequential: Vec<_> = requests
        .iter()
        .map(|r| handle_request(r).unwrap())
        .collect();

    let handles: Vec<_> = requests
        .into_iter()
        .map(|r| thread::spawn(move || handle_request(&r).unwrap()))
        .collect();
    let concurrent: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(sequential, concurrent);
}
