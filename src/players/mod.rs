//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::board::{Board, Coordinate};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something that picks moves for one mark.
pub trait Player {
    /// Chooses the next coordinate to play on `board`.
    ///
    /// The choice is not required to be legal; the board has the final say
    /// and the runner asks again after a rejected move.
    fn choose(&mut self, board: &Board) -> Result<Coordinate>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Which kind of player controls a mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed on the console.
    #[default]
    Human,
    /// Uniformly random legal moves.
    Random,
}

impl PlayerKind {
    /// Builds a console-backed player of this kind.
    ///
    /// `seed` only affects random players.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn build(self, name: impl AsRef<str>, seed: Option<u64>) -> Box<dyn Player> {
        let name = name.as_ref();
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::stdio(name)),
            PlayerKind::Random => match seed {
                Some(seed) => Box::new(RandomPlayer::seeded(name, seed)),
                None => Box::new(RandomPlayer::new(name)),
            },
        }
    }
}
