//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Coordinate, Grid, Mark, SIZE};
use tracing::instrument;

/// Every line on the board, as raw `(row, col)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether the mark just placed at `at` completes a line.
///
/// Only lines through `at` are inspected: its row, its column, and a
/// diagonal only when `at` lies on it. A completed line elsewhere on the
/// grid does not count, since only the latest move can finish one.
#[instrument(skip(grid))]
pub fn completes_line(grid: &Grid, at: Coordinate, mark: Mark) -> bool {
    let holds = |row: usize, col: usize| grid.at(row, col) == Cell::Occupied(mark);

    (0..SIZE).all(|col| holds(at.row(), col))
        || (0..SIZE).all(|row| holds(row, at.col()))
        || (at.on_main_diagonal() && (0..SIZE).all(|k| holds(k, k)))
        || (at.on_anti_diagonal() && (0..SIZE).all(|k| holds(k, SIZE - 1 - k)))
}

/// Scans every line for three equal marks.
///
/// Returns `Some(mark)` for the first complete line found.
#[instrument(skip(grid))]
pub fn check_winner(grid: &Grid) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let first = grid.at(a.0, a.1);
        if first == grid.at(b.0, b.1) && first == grid.at(c.0, c.1) {
            first.mark()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Grid::new()), None);
    }

    #[test]
    fn test_row_completed() {
        let grid = Grid::from_rows([[X, X, X], [E, O, E], [E, E, O]]);
        assert!(completes_line(&grid, at(0, 2), Mark::X));
        assert!(!completes_line(&grid, at(0, 2), Mark::O));
        assert_eq!(check_winner(&grid), Some(Mark::X));
    }

    #[test]
    fn test_column_completed() {
        let grid = Grid::from_rows([[O, X, E], [O, X, E], [E, X, E]]);
        assert!(completes_line(&grid, at(2, 1), Mark::X));
        assert_eq!(check_winner(&grid), Some(Mark::X));
    }

    #[test]
    fn test_anti_diagonal_completed() {
        let grid = Grid::from_rows([[X, X, O], [E, O, E], [O, E, X]]);
        assert!(completes_line(&grid, at(2, 0), Mark::O));
        assert!(completes_line(&grid, at(1, 1), Mark::O));
        assert_eq!(check_winner(&grid), Some(Mark::O));
    }

    #[test]
    fn test_diagonal_ignored_for_off_diagonal_move() {
        // Main diagonal is full of X, but the move under test is at (0,1),
        // whose row and column are incomplete.
        let grid = Grid::from_rows([[X, X, E], [O, X, E], [O, E, X]]);
        assert!(!completes_line(&grid, at(0, 1), Mark::X));
        assert!(!completes_line(&grid, at(1, 0), Mark::X));
        assert!(completes_line(&grid, at(2, 2), Mark::X));
    }

    #[test]
    fn test_anti_diagonal_ignored_for_main_diagonal_corner() {
        let grid = Grid::from_rows([[E, E, O], [E, O, E], [O, E, X]]);
        assert!(!completes_line(&grid, at(2, 2), Mark::O));
        assert!(!completes_line(&grid, at(0, 0), Mark::O));
        assert!(completes_line(&grid, at(0, 2), Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid = Grid::from_rows([[X, X, E], [E, E, E], [E, E, E]]);
        assert_eq!(check_winner(&grid), None);
        assert!(!completes_line(&grid, at(0, 1), Mark::X));
    }
}
