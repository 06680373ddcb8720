//! Rule validator trait.
//!
//! Variants implement `RuleValidator` to say which moves are legal. Move
//! legality splits into two checks:
//!
//! - **structural**: are the indices sane, are there enough face-up cards
//!   (`valid_pile_index`, `valid_pile_move`)
//! - **semantic**: does the resulting sequence obey the variant's colour,
//!   rank and suit relations (`valid_add_to_cascade`, `valid_next`,
//!   `valid_add_to_foundation`)
//!
//! The engine calls the same methods whatever the variant, so it never
//! branches on which game is being played.

use std::fmt::Debug;

use crate::cards::Card;
use crate::core::RuleViolation;
use crate::zones::{Foundation, Pile};

/// Move-legality strategy.
///
/// Implementations are stateless; the engine holds one behind a shared
/// reference for the whole game.
pub trait RuleValidator: Debug + Send + Sync {
    /// Short variant name, for logs and display.
    fn name(&self) -> &'static str;

    /// Can `incoming` (bottom card first) be placed on `destination`?
    fn valid_add_to_cascade(
        &self,
        destination: &Pile,
        incoming: &[Card],
    ) -> Result<(), RuleViolation>;

    /// Can `top` sit directly on `bottom` in a cascade?
    fn valid_next(&self, top: &Card, bottom: &Card) -> bool;

    /// Can `card` be played onto `foundation`?
    ///
    /// Empty foundations take only an Ace; otherwise the card must follow
    /// the top card in the same suit.
    fn valid_add_to_foundation(
        &self,
        card: &Card,
        foundation: &Foundation,
    ) -> Result<(), RuleViolation> {
        match foundation.top() {
            None if card.is_ace() => Ok(()),
            None => Err(RuleViolation::FoundationNeedsAce),
            Some(top) if top.suit == card.suit && top.rank.is_one_below(card.rank) => Ok(()),
            Some(_) => Err(RuleViolation::NotNextOnFoundation),
        }
    }

    /// Is `index` a cascade index?
    fn valid_pile_index(&self, index: usize, num_piles: usize) -> bool {
        index < num_piles
    }

    /// Structural check for moving `num_cards` from `src` to `dest`.
    ///
    /// Independent of card values: the piles must differ and exist, and
    /// the count must be positive and no more than the face-up cards at
    /// `src`.
    fn valid_pile_move(
        &self,
        src: usize,
        num_cards: usize,
        dest: usize,
        num_piles: usize,
        visible_at_src: usize,
    ) -> bool {
        src != dest
            && self.valid_pile_index(src, num_piles)
            && self.valid_pile_index(dest, num_piles)
            && num_cards > 0
            && num_cards <= visible_at_src
    }

    /// Set visibility on a freshly dealt cascade. Default: top card only.
    fn reveal_after_deal(&self, pile: &mut Pile) {
        pile.reveal_top();
    }
}
