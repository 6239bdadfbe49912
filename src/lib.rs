//! Strictly Tic-Tac-Toe - a checked tic-tac-toe board model
//!
//! A fixed 3x3 board with turn alternation, win detection along rows,
//! columns and diagonals, and console rendering. The game ends through
//! state, never through a side effect: once a line is completed or the
//! board fills, [`Board::status`] is terminal and further moves fail with
//! [`PlayError::GameOver`].
//!
//! # Architecture
//!
//! - **Board**: grid, turn, status and play log ([`Board`])
//! - **Rules**: pure win/draw checks ([`rules`])
//! - **Invariants**: properties checked after every move in debug builds ([`invariants`])
//! - **Players**: human and random move sources ([`Player`])
//! - **Runner**: the driving loop between two players ([`MatchRunner`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, GameStatus, Mark, PlayError};
//!
//! let mut board = Board::with_first_mover(Mark::X);
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     board.play(row, col)?;
//! }
//! assert_eq!(board.play(0, 2)?, GameStatus::Won(Mark::X));
//! assert!(matches!(board.play(2, 0), Err(PlayError::GameOver(_))));
//! # Ok::<(), PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod players;
mod runner;

// Crate-level exports - Board model
pub use board::{
    Board, Cell, Coordinate, GameStatus, Grid, Mark, ParseCoordinateError, PlayError, SIZE,
    invariants, rules,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigErrorKind, FirstMover, GameConfig};

// Crate-level exports - Players
pub use players::{HumanPlayer, Player, PlayerKind, RandomPlayer};

// Crate-level exports - Match orchestration
pub use runner::{DEFAULT_MAX_REJECTIONS, MatchRunner};
