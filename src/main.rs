//! Command line match runner.
//!
//! Pits the search engine against a random mover or another search player
//! and prints a summary. Set `RUST_LOG=debug` to see every turn and root move.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use isolation_engine::agent::ai::{Difficulty, Pruning, SearchConfig, SearchPlayer};
use isolation_engine::agent::{Player, RandomPlayer};
use isolation_engine::game_repr::{Board, BoardConfig, MovePattern, Side};
use isolation_engine::orchestrator::Orchestrator;

#[derive(Parser, Debug)]
#[command(name = "isolation")]
#[command(version, about = "Alpha-beta search engine for Isolation", long_about = None)]
struct Cli {
    /// Board height
    #[arg(long, default_value_t = 7)]
    rows: u8,

    /// Board width
    #[arg(long, default_value_t = 7)]
    cols: u8,

    /// How tokens move: king, knight or queen
    #[arg(long, short = 'p', default_value_t = MovePattern::Queen)]
    pattern: MovePattern,

    /// Start from a layout file instead (`.` empty, `#` blocked, `1`/`2` players)
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    layout: Option<PathBuf>,

    /// Engine strength
    #[arg(long, short = 'd', default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Explicit search depth, overrides --difficulty
    #[arg(long)]
    depth: Option<u8>,

    /// Who the engine plays against
    #[arg(long, short = 'o', value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Strength of a `search` opponent
    #[arg(long, default_value_t = Difficulty::Easy)]
    opponent_difficulty: Difficulty,

    /// Number of games; the engine alternates between moving first and second
    #[arg(long, short = 'g', default_value_t = 1)]
    games: usize,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Search root moves on all cores
    #[arg(long)]
    parallel: bool,

    /// Plain minimax without alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Opponent {
    Random,
    Search,
}

#[derive(Debug, Default)]
struct Tally {
    engine_wins: usize,
    engine_losses: usize,
    plies: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = load_board(&cli)?;
    let config = engine_config(&cli);

    println!("Starting position ({}, {}x{}):", start.pattern(), start.rows(), start.cols());
    println!("{}\n", start);

    let mut tally = Tally::default();
    for game in 0..cli.games {
        let engine_side = if game % 2 == 0 { Side::One } else { Side::Two };
        let engine: Box<dyn Player> = Box::new(
            SearchPlayer::new(config, format!("Engine (depth {})", config.max_depth))
                .parallel(cli.parallel),
        );
        let opponent = opponent(&cli, game);

        let (one, two) = match engine_side {
            Side::One => (engine, opponent),
            Side::Two => (opponent, engine),
        };
        let mut orchestrator = Orchestrator::new(start.clone(), one, two);
        let result = orchestrator
            .play_to_end()
            .with_context(|| format!("game {} aborted", game + 1))?;

        let plies = orchestrator.history().len();
        tally.plies += plies;
        if result.winner() == engine_side {
            tally.engine_wins += 1;
        } else {
            tally.engine_losses += 1;
        }

        println!(
            "Game {}: {} ({} as {}, {} plies)",
            game + 1,
            result,
            orchestrator.player_name(result.winner()),
            result.winner(),
            plies
        );
        if cli.games == 1 {
            println!("{}", orchestrator.board());
        }
    }

    if cli.games > 0 {
        println!(
            "\nEngine record: {} won, {} lost, {:.1} plies per game",
            tally.engine_wins,
            tally.engine_losses,
            tally.plies as f64 / cli.games as f64
        );
    }
    Ok(())
}

fn load_board(cli: &Cli) -> Result<Board> {
    match &cli.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            Board::from_layout(&text, cli.pattern)
                .with_context(|| format!("invalid layout in {}", path.display()))
        }
        None => Ok(Board::new(&BoardConfig {
            rows: cli.rows,
            cols: cli.cols,
            pattern: cli.pattern,
        })?),
    }
}

fn engine_config(cli: &Cli) -> SearchConfig {
    let mut config = match cli.depth {
        Some(depth) => SearchConfig::with_depth(depth),
        None => cli.difficulty.config(),
    };
    if cli.no_pruning {
        config.pruning = Pruning::Disabled;
    }
    config
}

fn opponent(cli: &Cli, game: usize) -> Box<dyn Player> {
    match cli.opponent {
        Opponent::Random => Box::new(RandomPlayer::new(cli.seed.wrapping_add(game as u64))),
        Opponent::Search => Box::new(
            SearchPlayer::with_difficulty(cli.opponent_difficulty).parallel(cli.parallel),
        ),
    }
}
