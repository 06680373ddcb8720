//! Foundation piles: single-suit stacks built up from the Ace.

use crate::cards::Card;

/// A foundation pile.
///
/// Holds no rules of its own; the engine validates every card before
/// calling `push`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Foundation {
    cards: Vec<Card>,
}

impl Foundation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The top card, or `None` if nothing has been played here yet.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Independent copy of the pile, Ace first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }
}
