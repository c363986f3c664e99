//! Configuration for games and sessions.
//!
//! Every struct has sensible defaults and `with_*` builders; a
//! [`SessionConfig`] can also be loaded from TOML, where each missing field
//! falls back to its default:
//!
//! ```toml
//! seed = 7
//! history_limit = 50
//!
//! [nback]
//! length = 20
//! interval_ms = 1200
//!
//! [paired]
//! pairs = [{ cue = "Dog", target = "Cloud" }]
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::paired::{WordPair, default_pairs};

/// Tuning for the n-back game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NBackConfig {
    /// Number of cues presented.
    pub length: usize,
    /// How far back a match looks.
    pub n: usize,
    /// Time each cue stays on screen, in milliseconds.
    pub interval_ms: u64,
    /// Number of distinct cue categories.
    pub categories: u8,
}

impl Default for NBackConfig {
    fn default() -> Self {
        Self {
            length: 15,
            n: 1,
            interval_ms: 1500,
            categories: 4,
        }
    }
}

impl NBackConfig {
    /// Set the sequence length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the match distance.
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Set the presentation interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the number of cue categories.
    pub fn with_categories(mut self, categories: u8) -> Self {
        self.categories = categories;
        self
    }

    /// The presentation interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Reject configurations the game cannot run.
    pub fn validate(&self) -> GameResult<()> {
        if self.length == 0 {
            return Err(GameError::InvalidConfig("n-back length must be at least 1".into()));
        }
        if self.n == 0 || self.n >= self.length {
            return Err(GameError::InvalidConfig(format!(
                "n-back distance {} must be in 1..{}",
                self.n, self.length
            )));
        }
        if self.interval_ms == 0 {
            return Err(GameError::InvalidConfig("n-back interval must be positive".into()));
        }
        if self.categories < 2 {
            return Err(GameError::InvalidConfig(
                "n-back needs at least 2 cue categories".into(),
            ));
        }
        Ok(())
    }
}

/// Content for the paired-associates game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairedConfig {
    /// Cue/target pairs, studied and tested in this order.
    pub pairs: Vec<WordPair>,
}

impl Default for PairedConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
        }
    }
}

impl PairedConfig {
    /// Replace the pair list.
    pub fn with_pairs(mut self, pairs: Vec<WordPair>) -> Self {
        self.pairs = pairs;
        self
    }

    /// Reject an empty pair list.
    pub fn validate(&self) -> GameResult<()> {
        if self.pairs.is_empty() {
            return Err(GameError::InvalidConfig(
                "paired-associates needs at least one pair".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for a training session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for reproducible cue sequences. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Maximum history size (oldest records dropped when exceeded). 0 = unlimited.
    pub history_limit: usize,
    /// N-back tuning.
    pub nback: NBackConfig,
    /// Paired-associates content.
    pub paired: PairedConfig,
}

impl SessionConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(source: &str) -> GameResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> GameResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the n-back tuning.
    pub fn with_nback(mut self, nback: NBackConfig) -> Self {
        self.nback = nback;
        self
    }

    /// Validate every section.
    pub fn validate(&self) -> GameResult<()> {
        self.nback.validate()?;
        self.paired.validate()
    }
}
