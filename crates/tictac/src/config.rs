//! Host settings loaded from a TOML file.
//!
//! ```toml
//! mode = "ai"            # "pvp" or "ai"
//! difficulty = "hard"    # "easy", "medium" or "hard"
//! think_delay_ms = 500   # pause before the computer answers
//! seed = 42              # optional; omit for a fresh game every run
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::{Difficulty, GameMode};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TictacConfig {
    /// Player-vs-player or player-vs-computer.
    #[serde(default)]
    mode: GameMode,

    /// Computer opponent strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Milliseconds to wait before the computer moves.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Seed for the computer's random choices.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_think_delay_ms() -> u64 {
    500
}

impl Default for TictacConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            think_delay_ms: default_think_delay_ms(),
            seed: None,
        }
    }
}

impl TictacConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces any setting given on the command line.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        difficulty: Option<Difficulty>,
        think_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(delay) = think_delay_ms {
            self.think_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
