//! Status consistency invariant: the recorded status matches the grid.

use super::super::rules::{check_winner, is_draw, is_full};
use super::super::{Board, GameStatus};
use super::Invariant;

/// Invariant: the status agrees with a full scan of the grid.
pub struct StatusConsistentInvariant;

impl Invariant<Board> for StatusConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let grid = board.grid();
        match board.status() {
            GameStatus::Won(mark) => check_winner(grid) == Some(mark),
            GameStatus::Draw => is_draw(grid),
            GameStatus::InProgress => !is_full(grid) && check_winner(grid).is_none(),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the lines on the grid"
    }
}
