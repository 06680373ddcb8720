//! Cards and decks.
//!
//! - `Card`: immutable `(Rank, Suit)` value
//! - `standard_deck`: the canonical 52-card deck
//! - `validate_deck` / `aces_in`: deck-shape checks used by the engine

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{aces_in, standard_deck, validate_deck};
