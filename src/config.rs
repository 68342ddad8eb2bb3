//! Run configuration and validation.
//!
//! `SimConfig` is the raw, possibly invalid input gathered from the command
//! line or a JSON file. `SimConfig::validate` turns it into a `Scenario`, the
//! only form the simulation core accepts.

use crate::rng::resolve_seed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cards dealt before the first draw
pub const OPENING_HAND_SIZE: usize = 7;

pub const DEFAULT_DECK_SIZE: i64 = 99;
pub const DEFAULT_LANDS: i64 = 37;
pub const DEFAULT_COMBO_PIECES: i64 = 4;
pub const DEFAULT_REQUIRED: i64 = 2;
pub const DEFAULT_TRIALS: i64 = 10_000_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("deck size must be at least {min} (got {deck_size})", min = OPENING_HAND_SIZE)]
    DeckTooSmall { deck_size: i64 },
    #[error("{field} cannot be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },
    #[error("required combo pieces must be at least 1 (got {required})")]
    RequiredBelowOne { required: i64 },
    #[error("required combo pieces ({required}) cannot exceed total combo pieces ({combo_pieces})")]
    RequiredExceedsAvailable { required: i64, combo_pieces: i64 },
    #[error("lands ({lands}) + combos ({combo_pieces}) cannot exceed deck size ({deck_size})")]
    DeckOvercommitted {
        lands: i64,
        combo_pieces: i64,
        deck_size: i64,
    },
    #[error("runs must be at least 1 (got {trials})")]
    NonPositiveTrialCount { trials: i64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub deck_size: i64,
    pub lands: i64,
    pub combo_pieces: i64,
    pub required: i64,
    pub trials: i64,
    /// Base seed; `None` or `0` means derive one from the clock
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            deck_size: DEFAULT_DECK_SIZE,
            lands: DEFAULT_LANDS,
            combo_pieces: DEFAULT_COMBO_PIECES,
            required: DEFAULT_REQUIRED,
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Check every constraint and resolve the seed.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn validate(&self) -> Result<Scenario, ConfigError> {
        if self.deck_size < OPENING_HAND_SIZE as i64 {
            return Err(ConfigError::DeckTooSmall { deck_size: self.deck_size });
        }
        if self.lands < 0 {
            return Err(ConfigError::NegativeCount { field: "lands", value: self.lands });
        }
        if self.combo_pieces < 0 {
            return Err(ConfigError::NegativeCount {
                field: "combos",
                value: self.combo_pieces,
            });
        }
        if self.required < 1 {
            return Err(ConfigError::RequiredBelowOne { required: self.required });
        }
        if self.required > self.combo_pieces {
            return Err(ConfigError::RequiredExceedsAvailable {
                required: self.required,
                combo_pieces: self.combo_pieces,
            });
        }
        // Both operands are non-negative here, saturate rather than overflow
        if self.lands.saturating_add(self.combo_pieces) > self.deck_size {
            return Err(ConfigError::DeckOvercommitted {
                lands: self.lands,
                combo_pieces: self.combo_pieces,
                deck_size: self.deck_size,
            });
        }
        if self.trials < 1 {
            return Err(ConfigError::NonPositiveTrialCount { trials: self.trials });
        }

        Ok(Scenario {
            deck_size: self.deck_size as usize,
            lands: self.lands as usize,
            combo_pieces: self.combo_pieces as usize,
            required: self.required as usize,
            trials: self.trials as u64,
            seed: resolve_seed(self.seed),
        })
    }
}

/// A validated run: every invariant of `SimConfig::validate` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    deck_size: usize,
    lands: usize,
    combo_pieces: usize,
    required: usize,
    trials: u64,
    seed: u64,
}

impl Scenario {
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn lands(&self) -> usize {
        self.lands
    }

    pub fn combo_pieces(&self) -> usize {
        self.combo_pieces
    }

    /// Non-lands that are not combo pieces
    pub fn spells(&self) -> usize {
        self.deck_size - self.lands - self.combo_pieces
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Cards left in the library after the opening hand
    pub fn library_size(&self) -> usize {
        self.deck_size - OPENING_HAND_SIZE
    }
}
