//! Game configuration.
//!
//! `GameConfig` gathers everything needed to set up a game: which rule
//! variant to play, the table shape, and how to order the deck. It can be
//! built in code with the `with_*` methods or loaded from TOML:
//!
//! ```
//! use klondike_rules::core::{GameConfig, Variant};
//!
//! let config = GameConfig::from_toml_str(r#"
//!     variant = "whitehead"
//!     num_piles = 5
//!     shuffle = true
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.variant, Variant::Whitehead);
//! assert_eq!(config.num_piles, 5);
//! assert_eq!(config.num_draw, 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::rng::GameRng;
use crate::engine::Klondike;
use crate::rules::{ClassicRules, WhiteheadRules};

/// Rule variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Alternating colours, Kings only on empty cascades.
    #[default]
    Basic,
    /// Same-colour builds, single-suit moves, everything dealt face up.
    Whitehead,
}

impl Variant {
    /// Build an unstarted engine with this variant's rules.
    #[must_use]
    pub fn create(self, rng: GameRng) -> Klondike {
        match self {
            Variant::Basic => Klondike::new(ClassicRules).with_rng(rng),
            Variant::Whitehead => Klondike::new(WhiteheadRules).with_rng(rng),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Basic => f.write_str("basic"),
            Variant::Whitehead => f.write_str("whitehead"),
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" | "classic" => Ok(Variant::Basic),
            "whitehead" => Ok(Variant::Whitehead),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// Configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown game variant '{0}' (expected basic or whitehead)")]
    UnknownVariant(String),
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Setup for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rule variant.
    pub variant: Variant,

    /// Number of cascade piles dealt in the staircase.
    pub num_piles: usize,

    /// Capacity of the visible draw window.
    pub num_draw: usize,

    /// Shuffle the deck before dealing.
    pub shuffle: bool,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Basic,
            num_piles: 7,
            num_draw: 3,
            shuffle: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject shapes no deck could ever satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_piles == 0 {
            return Err(ConfigError::NotPositive { field: "num_piles" });
        }
        if self.num_draw == 0 {
            return Err(ConfigError::NotPositive { field: "num_draw" });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_piles(mut self, num_piles: usize) -> Self {
        self.num_piles = num_piles;
        self
    }

    #[must_use]
    pub fn with_draw(mut self, num_draw: usize) -> Self {
        self.num_draw = num_draw;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The RNG this config asks for.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }

    /// Build an unstarted engine for this config's variant.
    #[must_use]
    pub fn create_game(&self) -> Klondike {
        self.variant.create(self.rng())
    }
}
