//! Draw detection logic for tic-tac-toe.

use super::super::{Grid, SIZE};
use super::win::check_winner;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.occupied() == SIZE * SIZE
}

/// A full grid with no line anywhere.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Mark};

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Grid::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let grid = Grid::from_rows([[X, O, X], [O, X, X], [O, X, E]]);
        assert!(!is_full(&grid));
        assert!(!is_draw(&grid));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let grid = Grid::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&grid));
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let grid = Grid::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&grid));
        assert!(!is_draw(&grid));
    }
}
