//! Breakthrough AI command-line tool.
//!
//! - `breakthrough move` - Answer one JSON move request (file or stdin)
//! - `breakthrough bench` - Run the strategy benchmark

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use breakthrough_ai::arena::{self, ArenaConfig};
use breakthrough_ai::logging::{self, LogConfig, LogFormat};
use breakthrough_ai::protocol::handle_json;
use breakthrough_ai::strategy::{StrategyKind, StrategyOptions};

/// Breakthrough rules engine with minimax, PVS and MCTS opponents
#[derive(Parser)]
#[command(name = "breakthrough")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    /// More logging (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a JSON move request and print the JSON response
    Move {
        /// Request file; reads stdin when omitted
        input: Option<PathBuf>,
    },
    /// Play every strategy against every other from random openings
    Bench {
        /// Comma-separated strategy names
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "mine,dapetcu21-minimax,dapetcu21-montecarlo"
        )]
        strategies: Vec<String>,

        /// Total number of games
        #[arg(short, long, default_value_t = 100)]
        games: u32,

        /// Minimum random opening moves
        #[arg(long, default_value_t = 4)]
        min_opening: u32,

        /// Maximum random opening moves
        #[arg(long, default_value_t = 12)]
        max_opening: u32,

        /// Max moves per game
        #[arg(short, long, default_value_t = 200)]
        moves: u32,

        /// Board size
        #[arg(long, default_value_t = 8)]
        size: usize,

        /// Master seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Depth cap passed to every strategy
        #[arg(long)]
        max_depth: Option<u32>,

        /// Move budget passed to every strategy
        #[arg(long)]
        move_budget: Option<u32>,

        /// Save the full report as JSON to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&LogConfig::from_verbosity(cli.verbose, cli.quiet).with_format(cli.log_format));

    match cli.command {
        Commands::Move { input } => {
            let request = match input {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf).context("reading stdin")?;
                    buf
                }
            };
            let response = handle_json(&request).context("handling move request")?;
            println!("{response}");
        }
        Commands::Bench {
            strategies,
            games,
            min_opening,
            max_opening,
            moves,
            size,
            seed,
            max_depth,
            move_budget,
            save,
        } => {
            let kinds = strategies
                .iter()
                .map(|s| s.parse::<StrategyKind>())
                .collect::<Result<Vec<_>, _>>()?;

            let config = ArenaConfig::default()
                .with_total_games(games)
                .with_opening(min_opening, max_opening)
                .with_max_moves(moves)
                .with_board_size(size)
                .with_seed(seed)
                .with_options(StrategyOptions {
                    max_depth,
                    move_budget,
                    seed: None,
                });

            let report = arena::run(&kinds, &config)?;
            println!("{report}");

            if let Some(path) = save {
                report
                    .save(&path)
                    .with_context(|| format!("saving results to {}", path.display()))?;
                info!(path = %path.display(), "results saved");
            }
        }
    }
    Ok(())
}
