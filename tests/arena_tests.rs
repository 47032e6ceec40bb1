//! Benchmark harness integration tests.

use breakthrough_ai::arena::{self, Outcome};
use breakthrough_ai::{ArenaConfig, ArenaReport, StrategyKind, StrategyOptions};

fn small_config() -> ArenaConfig {
    ArenaConfig::default()
        .with_board_size(5)
        .with_total_games(8)
        .with_opening(0, 2)
        .with_max_moves(60)
        .with_seed(3)
        .with_options(StrategyOptions::default().with_max_depth(1).with_move_budget(100))
}

#[test]
fn test_round_robin_covers_every_pairing() {
    let report = arena::run(&[StrategyKind::Mine], &small_config()).unwrap();

    // Two contestants, 8 / 2² = 2 games per ordered pairing.
    assert_eq!(report.strategies, vec![StrategyKind::Random, StrategyKind::Mine]);
    assert_eq!(report.results.len(), 8);
    for &white in &report.strategies {
        for &black in &report.strategies {
            assert_eq!(report.matchup(white, black).total(), 2, "{white} vs {black}");
        }
    }
}

#[test]
fn test_totals_are_consistent() {
    let report = arena::run_named(&["mine", "random"], &small_config()).unwrap();

    for stats in &report.overall_stats {
        // A self-pairing game counts once for each side.
        let kind = stats.strategy;
        let seats: usize = report
            .results
            .iter()
            .map(|r| usize::from(r.white == kind) + usize::from(r.black == kind))
            .sum();
        assert_eq!((stats.wins + stats.losses + stats.draws) as usize, seats);
        assert!((0.0..=100.0).contains(&stats.winrate));
    }

    let decided = report
        .results
        .iter()
        .filter(|r| r.winner != Outcome::Draw)
        .count();
    let total_wins: u32 = report.overall_stats.iter().map(|s| s.wins).sum();
    let total_losses: u32 = report.overall_stats.iter().map(|s| s.losses).sum();
    assert_eq!(total_wins as usize, decided);
    assert_eq!(total_losses as usize, decided);
}

#[test]
fn test_openings_stay_in_range() {
    let report = arena::run(&[], &small_config()).unwrap();

    assert_eq!(report.summary.total_games, report.results.len());
    assert!(report.results.iter().all(|r| r.opening_moves <= 2));
    assert!(report.results.iter().all(|r| r.moves <= 60));
}

#[test]
fn test_same_seed_same_results() {
    let config = small_config();
    let a = arena::run(&[StrategyKind::Mine], &config).unwrap();
    let b = arena::run(&[StrategyKind::Mine], &config).unwrap();

    assert_eq!(a.results, b.results);
}

#[test]
fn test_report_saves_and_loads() {
    let report = arena::run(&[], &small_config().with_total_games(2)).unwrap();
    let dir = std::env::temp_dir().join(format!("breakthrough-arena-{}", std::process::id()));
    let path = report.default_path(&dir);

    report.save(&path).unwrap();
    let loaded: ArenaReport = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(loaded.results, report.results);
    assert_eq!(loaded.strategies, report.strategies);
    assert!(report.to_string().contains("random"));
}
