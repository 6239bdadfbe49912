//! Console rendering of the board.

use super::game::Board;
use std::fmt;

const HEADER: &str = "   | 0 | 1 | 2 |";
const SEPARATOR: &str = "   -------------";

/// Renders the grid with column headers, numbered rows and dashed separators:
///
/// ```text
///    | 0 | 1 | 2 |
///    -------------
/// 0. | X |   |   |
///    -------------
/// 1. |   | O |   |
///    -------------
/// 2. |   |   |   |
///    -------------
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for (i, row) in self.grid().rows().iter().enumerate() {
            writeln!(f, "{SEPARATOR}")?;
            write!(f, "{i}. ")?;
            for cell in row {
                write!(f, "| {cell} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{SEPARATOR}")
    }
}
