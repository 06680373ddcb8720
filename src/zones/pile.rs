//! Cascade piles.
//!
//! A `Pile` is an ordered list of slots, each holding a card and whether it
//! is face up. Index 0 is the bottom of the pile, the last index is the top
//! (the only end cards are added to or taken from). Keeping the card and its
//! visibility in one slot means the two can never drift out of step.

use smallvec::SmallVec;

use crate::cards::Card;

/// A run of cards moved as a unit, bottom first.
///
/// Runs rarely exceed a full suit, so 13 inline slots avoid allocation.
pub type Run = SmallVec<[Card; 13]>;

/// One card position in a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    card: Card,
    face_up: bool,
}

/// A cascade pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pile {
    slots: Vec<Slot>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fully face-up pile from cards, bottom first.
    #[must_use]
    pub fn face_up(cards: &[Card]) -> Self {
        let mut pile = Self::new();
        pile.extend_face_up(cards.iter().copied());
        pile
    }

    /// Append a face-down card.
    pub fn deal_face_down(&mut self, card: Card) {
        self.slots.push(Slot { card, face_up: false });
    }

    /// Append a face-up card.
    pub fn deal_face_up(&mut self, card: Card) {
        self.slots.push(Slot { card, face_up: true });
    }

    /// Append a run of cards face up, preserving order.
    pub fn extend_face_up(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.slots
            .extend(cards.into_iter().map(|card| Slot { card, face_up: true }));
    }

    /// Turn the top card face up. Does nothing on an empty pile.
    pub fn reveal_top(&mut self) {
        if let Some(slot) = self.slots.last_mut() {
            slot.face_up = true;
        }
    }

    /// Turn the card at `index` face up.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn reveal_at(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.face_up = true;
                true
            }
            None => false,
        }
    }

    /// Turn every card face up.
    pub fn reveal_all(&mut self) {
        for slot in &mut self.slots {
            slot.face_up = true;
        }
    }

    /// Remove and return everything from `from_index` to the top.
    ///
    /// Returns an empty run if `from_index` is past the top.
    pub fn remove_run(&mut self, from_index: usize) -> Run {
        if from_index >= self.slots.len() {
            return Run::new();
        }
        self.slots.drain(from_index..).map(|slot| slot.card).collect()
    }

    /// Remove the top card if it equals `card`.
    pub fn remove_top(&mut self, card: Card) -> Option<Card> {
        match self.slots.last() {
            Some(slot) if slot.card == card => self.slots.pop().map(|slot| slot.card),
            _ => None,
        }
    }

    /// Remove the occurrence of `card` nearest the top, wherever it sits.
    pub fn remove_last_match(&mut self, card: Card) -> Option<Card> {
        let index = self.slots.iter().rposition(|slot| slot.card == card)?;
        Some(self.slots.remove(index).card)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.face_up).count()
    }

    /// Whether the card at `index` is face up. `None` if out of range.
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> Option<bool> {
        self.slots.get(index).map(|slot| slot.face_up)
    }

    /// Card at `index`, regardless of visibility.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.slots.get(index).map(|slot| slot.card)
    }

    /// The top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.slots.last().map(|slot| slot.card)
    }

    /// Copy of the top `count` cards, bottom first. `None` if the pile is
    /// shorter than `count`.
    #[must_use]
    pub fn run(&self, count: usize) -> Option<Run> {
        let start = self.slots.len().checked_sub(count)?;
        Some(self.slots[start..].iter().map(|slot| slot.card).collect())
    }

    /// Independent copy of every card, bottom first.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().map(|slot| slot.card).collect()
    }
}
