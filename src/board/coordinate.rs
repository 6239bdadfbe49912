//! Board coordinates with range checking and text parsing.

use super::error::PlayError;
use super::types::SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A validated `(row, col)` pair on the 3x3 board.
///
/// Construction fails for anything outside `0..3`, so holding a
/// `Coordinate` means the cell exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    ///
    /// # Errors
    ///
    /// Returns `PlayError::InvalidCoordinate` if `row` or `col` is not below 3.
    pub fn new(row: usize, col: usize) -> Result<Self, PlayError> {
        if row < SIZE && col < SIZE {
            Ok(Self { row, col })
        } else {
            Err(PlayError::InvalidCoordinate { row, col })
        }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// True if the cell lies on (0,0)-(1,1)-(2,2).
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True if the cell lies on (0,2)-(1,1)-(2,0).
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == SIZE - 1
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = PlayError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coordinate::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(at: Coordinate) -> Self {
        (at.row, at.col)
    }
}

/// Failure to read a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseCoordinateError {
    /// Input was not two integers separated by a comma or whitespace.
    #[display("expected \"row,col\" or \"row col\", got {_0:?}")]
    Malformed(String),
    /// Both parts parsed but the cell does not exist.
    #[display("{_0}")]
    OutOfRange(PlayError),
}

impl std::error::Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseCoordinateError::Malformed(_) => None,
            ParseCoordinateError::OutOfRange(err) => Some(err),
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses `"1,2"`, `"1 2"` or `"1, 2"`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseCoordinateError::Malformed(s.to_string());
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [row, col] = parts.as_slice() else {
            return Err(malformed());
        };
        let row = row.parse::<usize>().map_err(|_| malformed())?;
        let col = col.parse::<usize>().map_err(|_| malformed())?;

        Coordinate::new(row, col).map_err(ParseCoordinateError::OutOfRange)
    }
}
