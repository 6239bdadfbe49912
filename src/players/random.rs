//! Player choosing uniformly among legal moves.

use super::Player;
use crate::board::{Board, Coordinate};
use anyhow::{Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Picks a random empty cell every turn.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player seeded from the thread RNG.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a reproducible random player.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose(&mut self, board: &Board) -> Result<Coordinate> {
        let coordinate = board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow!("No legal move left for {}", self.name))?;
        debug!(player = %self.name, %coordinate, "Random choice");
        Ok(coordinate)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
