//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Coordinate, FirstMover, Mark, PlayerKind};

/// Strictly Tic-Tac-Toe - console tic-tac-toe with checked moves
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Play or replay tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match on stdin/stdout
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Controller of X (overrides config)
        #[arg(long)]
        x: Option<PlayerKind>,

        /// Controller of O (overrides config)
        #[arg(long)]
        o: Option<PlayerKind>,

        /// Who opens (overrides config)
        #[arg(long)]
        first: Option<FirstMover>,

        /// Seed for the coin flip and random players (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a list of moves and print the resulting board
    Replay {
        /// Mark that played the first move
        #[arg(long, value_enum)]
        first: Mark,

        /// Print a JSON snapshot instead of the rendered board
        #[arg(long)]
        json: bool,

        /// Moves in order, each as "row,col"
        #[arg(required = true)]
        moves: Vec<Coordinate>,
    },
}
