//! The dealt table: cascades, foundations, stock and draw window.

use crate::cards::{aces_in, Card};
use crate::rules::RuleValidator;
use crate::zones::{DrawPile, Foundation, Pile};

/// Cards needed to deal a full staircase of `num_piles` cascades.
#[must_use]
pub fn staircase_size(num_piles: usize) -> usize {
    num_piles
        .checked_mul(num_piles.saturating_add(1))
        .map_or(usize::MAX, |n| n / 2)
}

/// Everything on the table once a game has started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Table {
    pub(crate) cascades: Vec<Pile>,
    pub(crate) foundations: Vec<Foundation>,
    pub(crate) draw: DrawPile,
    pub(crate) deck_size: usize,
}

impl Table {
    /// Deal `deck` in order.
    ///
    /// Row `r` puts one face-down card on every pile from `r` onwards, so
    /// pile `i` ends up with `i + 1` cards. One foundation is created per
    /// ace, the rest of the deck becomes the stock, and the rules decide
    /// which dealt cards start face up.
    ///
    /// The caller has already checked the deck covers the staircase.
    pub(crate) fn deal(
        deck: Vec<Card>,
        num_piles: usize,
        num_draw: usize,
        rules: &dyn RuleValidator,
    ) -> Self {
        let deck_size = deck.len();
        let foundations = (0..aces_in(&deck)).map(|_| Foundation::new()).collect();
        let mut cascades = vec![Pile::new(); num_piles];

        let mut cards = deck.into_iter();
        for row in 0..num_piles {
            for pile in cascades.iter_mut().skip(row) {
                if let Some(card) = cards.next() {
                    pile.deal_face_down(card);
                }
            }
        }

        for pile in &mut cascades {
            rules.reveal_after_deal(pile);
        }

        Self {
            cascades,
            foundations,
            draw: DrawPile::new(cards, num_draw),
            deck_size,
        }
    }

    /// Cards across every zone. Always equals `deck_size`.
    #[cfg(test)]
    pub(crate) fn total_cards(&self) -> usize {
        self.cascades.iter().map(Pile::len).sum::<usize>()
            + self.foundations.iter().map(Foundation::len).sum::<usize>()
            + self.draw.window_len()
            + self.draw.stock_len()
    }
}
