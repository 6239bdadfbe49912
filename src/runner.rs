//! Match orchestration between two players.

use crate::board::{Board, GameStatus, Mark, PlayError};
use crate::players::Player;
use anyhow::{Result, bail};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Default number of consecutive rejected moves tolerated from one player.
pub const DEFAULT_MAX_REJECTIONS: u32 = 5;

/// Drives a board to a terminal state by asking players for moves.
///
/// Whether to stop, print or start a rematch after the game ends is left
/// to the caller; `run` simply returns the final status.
pub struct MatchRunner {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    max_rejections: u32,
}

impl MatchRunner {
    /// Creates a runner over `board`.
    pub fn new(board: Board, player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board,
            player_x,
            player_o,
            max_rejections: DEFAULT_MAX_REJECTIONS,
        }
    }

    /// Sets how many consecutive rejected moves a player gets before the
    /// match is abandoned.
    pub fn with_max_rejections(mut self, max_rejections: u32) -> Self {
        self.max_rejections = max_rejections;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Name of the player controlling `mark`.
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Runs the game loop, rendering to `out`.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move, if a player exceeds the
    /// rejection limit, or if writing to `out` fails.
    #[instrument(skip_all, fields(first_mover = %self.board.first_mover()))]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<GameStatus> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Starting match"
        );

        let mut rejections = 0;
        while !self.board.is_game_over() {
            writeln!(out, "{}", self.board)?;

            let mark = self.board.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let coordinate = player.choose(&self.board)?;

            match self.board.play_at(coordinate) {
                Ok(status) => {
                    rejections = 0;
                    debug!(%mark, %coordinate, %status, "Move accepted");
                }
                Err(err @ PlayError::CellOccupied { .. }) => {
                    rejections += 1;
                    warn!(error = %err, rejections, "Move rejected");
                    writeln!(out, "{err}")?;
                    if rejections >= self.max_rejections {
                        bail!(
                            "{} made {} illegal moves in a row",
                            player.name(),
                            rejections
                        );
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        let status = self.board.status();
        writeln!(out, "{}", self.board)?;
        writeln!(out, "{status}")?;
        info!(%status, moves = self.board.log().len(), "Match finished");
        Ok(status)
    }
}
