//! Game configuration loaded from TOML.

use crate::board::{Board, Mark};
use crate::players::PlayerKind;
use crate::runner::DEFAULT_MAX_REJECTIONS;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who opens the game.
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
pub enum FirstMover {
    /// Fair coin flip at board creation.
    #[default]
    Random,
    /// X always opens.
    X,
    /// O always opens.
    O,
}

/// Settings for a console match.
///
/// Every field has a default, so an empty file is a valid config:
///
/// ```toml
/// first_mover = "random"
/// seed = 42
/// player_x = "human"
/// player_o = "random"
/// max_rejections = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Who opens the game.
    first_mover: FirstMover,

    /// Seed for the coin flip and random players.
    seed: Option<u64>,

    /// Controller of X.
    player_x: PlayerKind,

    /// Controller of O.
    player_o: PlayerKind,

    /// Consecutive rejected moves tolerated before the match is abandoned.
    max_rejections: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_mover: FirstMover::Random,
            seed: None,
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Random,
            max_rejections: DEFAULT_MAX_REJECTIONS,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read, e))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(ConfigErrorKind::Parse, e))
    }

    /// Replaces fields for which an override is given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        first_mover: Option<FirstMover>,
        seed: Option<u64>,
        player_x: Option<PlayerKind>,
        player_o: Option<PlayerKind>,
    ) -> Self {
        if let Some(first_mover) = first_mover {
            self.first_mover = first_mover;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(player_x) = player_x {
            self.player_x = player_x;
        }
        if let Some(player_o) = player_o {
            self.player_o = player_o;
        }
        self
    }

    /// Creates the board this config describes.
    #[instrument(skip(self))]
    pub fn new_board(&self) -> Board {
        match self.first_mover {
            FirstMover::X => Board::with_first_mover(Mark::X),
            FirstMover::O => Board::with_first_mover(Mark::O),
            FirstMover::Random => match self.seed {
                Some(seed) => Board::with_rng(&mut StdRng::seed_from_u64(seed)),
                None => Board::new(),
            },
        }
    }
}

/// Stage at which loading a [`GameConfig`] failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("cannot read config file")]
    Read,
    /// The text is not a valid game config.
    #[display("invalid game config")]
    Parse,
}

/// Failure to load a [`GameConfig`], tagged with where it was raised.
#[derive(Debug, Clone, Display, Error, Getters)]
#[display("{kind}: {detail} ({file}:{line})")]
pub struct ConfigError {
    kind: ConfigErrorKind,
    detail: String,
    file: &'static str,
    line: u32,
}

impl ConfigError {
    /// Wraps the underlying failure, recording the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind, detail: impl std::fmt::Display) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            kind,
            detail: detail.to_string(),
            file: caller.file(),
            line: caller.line(),
        }
    }
}
