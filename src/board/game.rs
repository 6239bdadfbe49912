//! The tic-tac-toe board: grid, turn, status and play log.

use super::coordinate::Coordinate;
use super::error::PlayError;
use super::rules;
use super::types::{Cell, GameStatus, Grid, Mark};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

/// A single game of tic-tac-toe.
///
/// The board is the only way to change a grid during play. Every
/// successful [`play`](Board::play) writes one empty cell, appends the
/// move to the log, updates the status and hands the turn to the other
/// mark. Once the status is [`GameStatus::Won`] or [`GameStatus::Draw`]
/// the board is frozen and further moves fail with
/// [`PlayError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) to_move: Mark,
    pub(crate) first_mover: Mark,
    pub(crate) status: GameStatus,
    pub(crate) log: Vec<Coordinate>,
}

impl Board {
    /// Creates an empty board whose first mover is a fair coin flip.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Creates an empty board, flipping for the first mover with `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let first_mover = if rng.random_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        };
        Self::with_first_mover(first_mover)
    }

    /// Creates an empty board where `first_mover` plays first.
    #[instrument]
    pub fn with_first_mover(first_mover: Mark) -> Self {
        debug!(%first_mover, "New board");
        Self {
            grid: Grid::new(),
            to_move: first_mover,
            first_mover,
            status: GameStatus::InProgress,
            log: Vec::new(),
        }
    }

    /// Plays the current mark at `(row, col)`.
    ///
    /// Returns the status after the move.
    ///
    /// # Errors
    ///
    /// - `PlayError::GameOver` if the game already ended.
    /// - `PlayError::InvalidCoordinate` if `row` or `col` is not below 3.
    /// - `PlayError::CellOccupied` if the cell holds a mark.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, PlayError> {
        self.ensure_in_progress()?;
        let coordinate = Coordinate::new(row, col)?;
        self.play_at(coordinate)
    }

    /// Plays the current mark at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`play`](Board::play), minus the range check.
    #[instrument(skip(self), fields(mark = %self.to_move, coordinate = %coordinate))]
    pub fn play_at(&mut self, coordinate: Coordinate) -> Result<GameStatus, PlayError> {
        self.ensure_in_progress()?;

        let mark = self.to_move;
        if let Cell::Occupied(occupant) = self.grid.get(coordinate) {
            let err = PlayError::CellOccupied {
                mark,
                coordinate,
                occupant,
            };
            error!(%mark, %coordinate, %occupant, "{}", err);
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.grid.set(coordinate, Cell::Occupied(mark));
        self.log.push(coordinate);
        self.status = if rules::completes_line(&self.grid, coordinate, mark) {
            GameStatus::Won(mark)
        } else if rules::is_full(&self.grid) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        self.to_move = mark.opponent();

        debug!(%mark, %coordinate, status = %self.status, "Move played");

        #[cfg(debug_assertions)]
        {
            let checked = super::invariants::check_transition(&before, self);
            debug_assert!(checked.is_ok(), "Board invariants violated: {checked:?}");
        }

        Ok(self.status)
    }

    fn ensure_in_progress(&self) -> Result<(), PlayError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move attempted after game over");
            return Err(PlayError::GameOver(self.status));
        }
        Ok(())
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `PlayError::InvalidCoordinate` if `row` or `col` is not below 3.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, PlayError> {
        Coordinate::new(row, col).map(|at| self.grid.get(at))
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mark whose turn it is.
    ///
    /// After the final move this is the mark that did not make it.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Mark that played (or plays) the first move.
    pub fn first_mover(&self) -> Mark {
        self.first_mover
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winner, once a line has been completed.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// True once the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Coordinates of every successful move, oldest first.
    pub fn log(&self) -> &[Coordinate] {
        &self.log
    }

    /// Cells the current mark may play. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.grid.empty_cells()
    }

    /// Replays `moves` in order on a fresh board.
    ///
    /// # Errors
    ///
    /// Returns the first `PlayError` hit while replaying.
    #[instrument]
    pub fn replay(first_mover: Mark, moves: &[Coordinate]) -> Result<Self, PlayError> {
        let mut board = Self::with_first_mover(first_mover);
        for &coordinate in moves {
            board.play_at(coordinate)?;
        }
        debug!(moves = moves.len(), status = %board.status, "Replay finished");
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
