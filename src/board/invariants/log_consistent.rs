//! Log consistency invariant: the play log accounts for every mark on the grid.

use super::super::{Board, Cell};
use super::Invariant;
use super::alternating_turn::mover_at;
use std::collections::HashSet;

/// Invariant: the log is a faithful record of the grid.
///
/// - one entry per occupied cell
/// - no coordinate logged twice
/// - the `i`-th logged cell holds the mark that played move `i`
pub struct LogConsistentInvariant;

impl Invariant<Board> for LogConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let log = board.log();

        if log.len() != board.grid().occupied() {
            return false;
        }

        let distinct: HashSet<_> = log.iter().collect();
        if distinct.len() != log.len() {
            return false;
        }

        log.iter().enumerate().all(|(i, &at)| {
            board.grid().get(at) == Cell::Occupied(mover_at(board.first_mover(), i))
        })
    }

    fn description() -> &'static str {
        "Play log matches the occupied cells in order"
    }
}
