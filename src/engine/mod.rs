//! The Klondike engine.
//!
//! ## Key Types
//!
//! - `Klondike`: owns the table and applies moves through a `RuleValidator`
//! - `staircase_size`: cards needed to deal a given number of cascades
//!
//! The table itself and the game-over search stay private; everything is
//! reached through `Klondike`'s query methods, which return copies.

mod game_over;
mod klondike;
mod table;

pub use klondike::Klondike;
pub use table::staircase_size;
