//! Alternating turn invariant: marks take turns starting from the first mover.

use super::super::{Board, Mark};
use super::Invariant;

/// Mark expected to play the `index`-th move (0-based).
pub(crate) fn mover_at(first_mover: Mark, index: usize) -> Mark {
    if index % 2 == 0 {
        first_mover
    } else {
        first_mover.opponent()
    }
}

/// Invariant: the mark to move is the one that did not just move.
///
/// With `n` moves logged, the next move is the `n`-th in the
/// first mover / opponent / first mover ... sequence.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        board.to_move() == mover_at(board.first_mover(), board.log().len())
    }

    fn description() -> &'static str {
        "Marks alternate turns starting with the first mover"
    }
}
