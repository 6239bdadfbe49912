//! Strictly Tic-Tac-Toe - console CLI
//!
//! Plays a match between humans and/or random players, or replays a
//! recorded list of moves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_tictactoe::{
    Board, Coordinate, FirstMover, GameConfig, Mark, MatchRunner, PlayerKind,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            first,
            seed,
        } => run_play(config, x, o, first, seed),
        Command::Replay { first, json, moves } => run_replay(first, json, &moves),
    }
}

/// Run an interactive match
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    first: Option<FirstMover>,
    seed: Option<u64>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            GameConfig::default()
        }
    }
    .with_overrides(first, seed, x, o);

    // Distinct seeds so two random players do not mirror each other.
    let player_x = config.player_x().build("Player X", *config.seed());
    let player_o = config
        .player_o()
        .build("Player O", config.seed().map(|s| s.wrapping_add(1)));

    let mut runner = MatchRunner::new(config.new_board(), player_x, player_o)
        .with_max_rejections(*config.max_rejections());

    let mut stdout = std::io::stdout();
    let status = runner.run(&mut stdout)?;
    info!(%status, "Game over");
    Ok(())
}

/// Replay moves and print the result
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(first: Mark, json: bool, moves: &[Coordinate]) -> Result<()> {
    let board = Board::replay(first, moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{board}");
        println!("{}", board.status());
    }
    Ok(())
}

/// Diagnostics go to stderr so they never mix with the rendered board.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_tictactoe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
