//! Human player reading moves from a line-oriented input.

use super::Player;
use crate::board::{Board, Coordinate};
use anyhow::{Result, bail};
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Human player typing `row,col` on a console.
///
/// Malformed input is reported on the output and the prompt repeats.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over arbitrary input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Creates a human player on stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(name, stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose(&mut self, board: &Board) -> Result<Coordinate> {
        loop {
            write!(
                self.output,
                "{} ({}), enter row,col: ",
                self.name,
                board.to_move()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            match line.parse::<Coordinate>() {
                Ok(coordinate) => {
                    debug!(%coordinate, "Human chose coordinate");
                    return Ok(coordinate);
                }
                Err(e) => {
                    warn!(error = %e, "Unreadable move");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
