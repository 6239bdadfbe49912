//! Write-once contract: occupied cells never change.

use super::super::{Board, Cell, Coordinate};

/// Transition contract between two boards.
///
/// Every cell occupied in `before` holds the same mark in `after`, and
/// `before`'s log is a prefix of `after`'s.
pub struct WriteOnceContract;

impl WriteOnceContract {
    /// Checks the contract for a `before -> after` transition.
    pub fn holds(before: &Board, after: &Board) -> bool {
        let cells_kept = Coordinate::all().all(|at| match before.grid().get(at) {
            Cell::Empty => true,
            occupied => after.grid().get(at) == occupied,
        });

        cells_kept && after.log().starts_with(before.log())
    }

    /// Human-readable description of the contract.
    pub fn description() -> &'static str {
        "Occupied cells are never cleared or overwritten"
    }
}
