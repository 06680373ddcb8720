//! Core engine types: errors, configuration, RNG, moves.
//!
//! This module holds the pieces every other module leans on and that carry
//! no card-game rules of their own.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::Move;
pub use config::{ConfigError, GameConfig, Variant};
pub use error::{ArgumentError, ErrorKind, GameError, LifecycleError, RuleViolation};
pub use rng::GameRng;
