//! Round-robin benchmark between strategies.
//!
//! Every ordered pairing of contestants, self-pairings included, plays the
//! same number of games from random openings. `random` always takes part as
//! the baseline. Games are independent and run in parallel; each one gets
//! its own fork of the master RNG up front, so a report is reproducible for
//! a given configuration regardless of scheduling.

pub mod config;
pub mod game;
pub mod report;

use rayon::prelude::*;
use tracing::info;

use crate::core::GameRng;
use crate::error::Result;
use crate::strategy::StrategyKind;

pub use config::ArenaConfig;
pub use game::{play_from, play_game, random_opening, GameRecord, Outcome};
pub use report::{ArenaReport, MatchupStats, StrategyStats, Summary};

/// `random` followed by `requested`, without duplicates.
#[must_use]
pub fn contestants(requested: &[StrategyKind]) -> Vec<StrategyKind> {
    let mut out = vec![StrategyKind::Random];
    for &kind in requested {
        if !out.contains(&kind) {
            out.push(kind);
        }
    }
    out
}

/// Run the benchmark.
pub fn run(requested: &[StrategyKind], config: &ArenaConfig) -> Result<ArenaReport> {
    config.validate()?;

    let players = contestants(requested);
    let per_matchup = config.games_per_matchup(players.len());

    let mut master = GameRng::new(config.seed);
    let mut jobs = Vec::new();
    for &white in &players {
        for &black in &players {
            for _ in 0..per_matchup {
                jobs.push((white, black, master.fork()));
            }
        }
    }

    info!(
        strategies = ?players,
        games = jobs.len(),
        per_matchup,
        size = config.board_size,
        "starting benchmark"
    );

    let results: Vec<GameRecord> = jobs
        .into_par_iter()
        .map(|(white, black, mut rng)| play_game(white, black, config, &mut rng))
        .collect();

    info!(games = results.len(), "benchmark finished");
    Ok(ArenaReport::new(config.clone(), players, results))
}

/// Run the benchmark for strategies given by name.
pub fn run_named<S: AsRef<str>>(names: &[S], config: &ArenaConfig) -> Result<ArenaReport> {
    let kinds = names
        .iter()
        .map(|n| n.as_ref().parse())
        .collect::<Result<Vec<StrategyKind>>>()?;
    run(&kinds, config)
}
