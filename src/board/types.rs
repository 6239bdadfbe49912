//! Core domain types for the tic-tac-toe board.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// One of the two marks placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    clap::ValueEnum,
)]
pub enum Mark {
    /// Mark X.
    #[display("X")]
    X,
    /// Mark O.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    #[display(" ")]
    Empty,
    /// Cell holds a mark.
    #[display("{_0}")]
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Fixed 3x3 grid of cells, addressed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from explicit rows.
    ///
    /// Useful for evaluating rules against arbitrary positions; a [`Board`](super::Board)
    /// never exposes its grid for mutation.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a coordinate.
    pub fn get(&self, at: Coordinate) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Cell lookup by raw indices. Callers guarantee `row, col < SIZE`.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, at: Coordinate, cell: Cell) {
        self.cells[at.row()][at.col()] = cell;
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&at| self.get(at).is_empty())
            .collect()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[display("In progress")]
    InProgress,
    /// A line was completed by this mark.
    #[display("{_0} wins the game")]
    Won(Mark),
    /// The board filled without a line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
