//! # klondike-rules
//!
//! A rule engine for Klondike-family solitaire.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Engine**: The engine never branches on which game is
//!    being played. Every legality decision goes through a `RuleValidator`.
//!
//! 2. **Validate, Then Mutate**: A rejected move leaves the table exactly as
//!    it was. There are no partially applied moves.
//!
//! 3. **Copies Out**: Queries hand back owned values. Nothing outside the
//!    engine can reach into its piles.
//!
//! ## Variants
//!
//! - **Basic** (`ClassicRules`): build down in alternating colours, only a
//!   King may fill an empty cascade, one card face up per cascade at deal.
//! - **Whitehead** (`WhiteheadRules`): build down in the same colour, any
//!   card may fill an empty cascade, moved runs must share one suit, all
//!   cards dealt face up.
//!
//! ## Modules
//!
//! - `cards`: Card values and deck helpers
//! - `core`: Errors, moves, RNG, configuration
//! - `zones`: Cascade, foundation and draw piles
//! - `rules`: `RuleValidator` and the two variants
//! - `engine`: The `Klondike` game engine
//! - `text`: Text renderer and command interpreter

pub mod cards;
pub mod core;
pub mod engine;
pub mod rules;
pub mod text;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{standard_deck, validate_deck, Card, Color, Rank, Suit};

pub use crate::core::{
    ArgumentError, ConfigError, ErrorKind, GameConfig, GameError, GameRng, LifecycleError, Move,
    RuleViolation, Variant,
};

pub use crate::engine::Klondike;

pub use crate::rules::{ClassicRules, RuleValidator, WhiteheadRules};

pub use crate::text::{ControllerError, Outcome, TextController, TextView};
