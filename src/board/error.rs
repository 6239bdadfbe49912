//! Errors raised by board operations.

use super::coordinate::Coordinate;
use super::types::{GameStatus, Mark};

/// Error that can occur when reading or playing on the board.
///
/// None of these are fatal: the board is left exactly as it was and the
/// caller decides whether to retry, stop or start over.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The targeted cell already holds a mark.
    #[display("ERROR when playing {mark} at {coordinate}: {occupant} already here")]
    CellOccupied {
        /// Mark that attempted the move.
        mark: Mark,
        /// Where it tried to play.
        coordinate: Coordinate,
        /// Mark already in the cell.
        occupant: Mark,
    },

    /// Row or column outside `0..3`.
    #[display("Coordinate ({row}, {col}) is outside the 3x3 board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game already reached a terminal state.
    #[display("Game is already over: {_0}")]
    GameOver(GameStatus),
}

impl std::error::Error for PlayError {}
