//! Tic-tac-toe board model.
//!
//! A [`Board`] owns a 3x3 [`Grid`], the mark to move, the first mover, the
//! [`GameStatus`] and an append-only log of plays. [`rules`] holds the pure
//! win/draw checks and [`invariants`] the properties every board keeps.

mod coordinate;
mod error;
mod game;
pub mod invariants;
mod render;
pub mod rules;
mod types;

pub use coordinate::{Coordinate, ParseCoordinateError};
pub use error::PlayError;
pub use game::Board;
pub use types::{Cell, GameStatus, Grid, Mark, SIZE};
