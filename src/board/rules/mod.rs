//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](super::Grid). Rules are kept apart from
//! board storage so the invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, completes_line};
