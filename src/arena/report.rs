//! Benchmark results: per-pairing table and per-strategy totals.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::strategy::StrategyKind;

use super::config::ArenaConfig;
use super::game::{GameRecord, Outcome};

/// Results of one ordered pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupStats {
    /// Games won by the White strategy.
    pub white: u32,
    /// Games won by the Black strategy.
    pub black: u32,
    /// Drawn games.
    pub draw: u32,
}

impl MatchupStats {
    /// Games played.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.white + self.black + self.draw
    }

    /// White's win rate in percent, 0 when no games were played.
    #[must_use]
    pub fn white_win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.white as f64 / n as f64 * 100.0,
        }
    }
}

/// Totals for one strategy over both colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyStats {
    pub strategy: StrategyKind,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Win rate in percent, rounded to one decimal.
    pub winrate: f64,
}

/// Aggregate figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_games: usize,
    pub min_opening_moves: u32,
    pub max_opening_moves: u32,
    /// Mean strategy moves per game, rounded to one decimal.
    pub average_moves_per_game: f64,
}

/// Full benchmark report, serializable as the saved results file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaReport {
    /// Milliseconds since the Unix epoch when the report was built.
    pub timestamp_ms: u64,
    pub config: ArenaConfig,
    /// Contestants, in table order.
    pub strategies: Vec<StrategyKind>,
    pub results: Vec<GameRecord>,
    pub overall_stats: Vec<StrategyStats>,
    pub summary: Summary,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl ArenaReport {
    /// Aggregate `results` for `strategies`.
    pub fn new(config: ArenaConfig, strategies: Vec<StrategyKind>, results: Vec<GameRecord>) -> Self {
        let overall_stats = strategies
            .iter()
            .map(|&kind| overall(kind, &results))
            .collect();

        let average = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.moves as f64).sum::<f64>() / results.len() as f64
        };
        let summary = Summary {
            total_games: results.len(),
            min_opening_moves: config.min_opening_moves,
            max_opening_moves: config.max_opening_moves,
            average_moves_per_game: round1(average),
        };

        Self {
            timestamp_ms: now_ms(),
            config,
            strategies,
            results,
            overall_stats,
            summary,
        }
    }

    /// Results for `white` against `black`.
    #[must_use]
    pub fn matchup(&self, white: StrategyKind, black: StrategyKind) -> MatchupStats {
        let mut stats = MatchupStats::default();
        for r in self.results.iter().filter(|r| r.white == white && r.black == black) {
            match r.winner {
                Outcome::White => stats.white += 1,
                Outcome::Black => stats.black += 1,
                Outcome::Draw => stats.draw += 1,
            }
        }
        stats
    }

    /// Totals for `kind`, if it took part.
    #[must_use]
    pub fn stats_for(&self, kind: StrategyKind) -> Option<&StrategyStats> {
        self.overall_stats.iter().find(|s| s.strategy == kind)
    }

    /// Write the report as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    /// Default results file name under `dir`.
    #[must_use]
    pub fn default_path(&self, dir: impl AsRef<Path>) -> std::path::PathBuf {
        dir.as_ref()
            .join(format!("benchmark-results-{}.json", self.timestamp_ms))
    }
}

fn overall(kind: StrategyKind, results: &[GameRecord]) -> StrategyStats {
    let mut stats = StrategyStats {
        strategy: kind,
        wins: 0,
        losses: 0,
        draws: 0,
        winrate: 0.0,
    };

    // A self-pairing counts once for each side.
    for r in results {
        for (side, plays) in [(Outcome::White, r.white == kind), (Outcome::Black, r.black == kind)] {
            if !plays {
                continue;
            }
            match r.winner {
                Outcome::Draw => stats.draws += 1,
                w if w == side => stats.wins += 1,
                _ => stats.losses += 1,
            }
        }
    }

    let total = stats.wins + stats.losses + stats.draws;
    if total > 0 {
        stats.winrate = round1(stats.wins as f64 / total as f64 * 100.0);
    }
    stats
}

impl fmt::Display for ArenaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(80);

        writeln!(f, "BENCHMARK RESULTS")?;
        writeln!(f, "{}", "=".repeat(80))?;
        writeln!(f)?;
        writeln!(f, "Win rate table (White's win rate, rows are White):")?;
        writeln!(f, "{rule}")?;

        let width = self
            .strategies
            .iter()
            .map(|k| k.name().len())
            .max()
            .unwrap_or(0)
            .max(15)
            + 2;

        write!(f, "{:<width$}", "White \\ Black")?;
        for kind in &self.strategies {
            write!(f, "{:<width$}", kind.name())?;
        }
        writeln!(f)?;

        for &white in &self.strategies {
            write!(f, "{:<width$}", white.name())?;
            for &black in &self.strategies {
                let cell = format!("{:.1}%", self.matchup(white, black).white_win_rate());
                write!(f, "{cell:<width$}")?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "Overall:")?;
        writeln!(f, "{rule}")?;
        for stats in &self.overall_stats {
            let name = stats.strategy.name();
            writeln!(
                f,
                "{name:<width$}: Winrate: {}% | Wins: {}, Losses: {}, Draws: {}",
                stats.winrate, stats.wins, stats.losses, stats.draws
            )?;
        }
        writeln!(
            f,
            "\n{} games, {:.1} moves per game on average",
            self.summary.total_games, self.summary.average_moves_per_game
        )
    }
}
