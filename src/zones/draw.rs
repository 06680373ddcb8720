//! Stock and draw window.
//!
//! After the deal, the leftover cards form a hidden stock. Up to
//! `capacity` of them are turned into the visible draw window, oldest
//! first. Cards leave the window from the front; refilling pulls from the
//! front of the stock.

use std::collections::VecDeque;

use crate::cards::Card;

/// The undealt cards: hidden stock plus visible draw window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawPile {
    stock: VecDeque<Card>,
    window: VecDeque<Card>,
    capacity: usize,
}

impl DrawPile {
    /// Create from the undealt cards and fill the window.
    #[must_use]
    pub fn new(stock: impl IntoIterator<Item = Card>, capacity: usize) -> Self {
        let mut pile = Self {
            stock: stock.into_iter().collect(),
            window: VecDeque::new(),
            capacity,
        };
        pile.refill();
        pile
    }

    /// Move cards from the stock into the window until it is full or the
    /// stock runs out.
    pub fn refill(&mut self) {
        while self.window.len() < self.capacity {
            match self.stock.pop_front() {
                Some(card) => self.window.push_back(card),
                None => break,
            }
        }
    }

    /// The oldest visible draw card.
    #[must_use]
    pub fn front(&self) -> Option<Card> {
        self.window.front().copied()
    }

    /// Remove the oldest visible draw card without refilling.
    pub fn take_front(&mut self) -> Option<Card> {
        self.window.pop_front()
    }

    /// Send the oldest draw card to the back of the stock, then refill.
    ///
    /// Returns the recycled card, or `None` if the window was empty.
    pub fn recycle_front(&mut self) -> Option<Card> {
        let card = self.window.pop_front()?;
        self.stock.push_back(card);
        self.refill();
        Some(card)
    }

    /// Independent copy of the visible window, oldest first.
    #[must_use]
    pub fn window(&self) -> Vec<Card> {
        self.window.iter().copied().collect()
    }

    #[must_use]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Window capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn cards(n: u8) -> Vec<Card> {
        (1..=n)
            .map(|r| Card::new(Rank::new(r).unwrap(), Suit::Spades))
            .collect()
    }

    #[test]
    fn test_initial_fill() {
        let deck = cards(5);
        let pile = DrawPile::new(deck.clone(), 3);
        assert_eq!(pile.window(), deck[..3].to_vec());
        assert_eq!(pile.stock_len(), 2);
    }

    #[test]
    fn test_short_stock() {
        let pile = DrawPile::new(cards(2), 3);
        assert_eq!(pile.window_len(), 2);
        assert_eq!(pile.stock_len(), 0);

        let empty = DrawPile::new(Vec::new(), 3);
        assert_eq!(empty.front(), None);
    }

    #[test]
    fn test_take_front_does_not_refill() {
        let deck = cards(5);
        let mut pile = DrawPile::new(deck.clone(), 3);

        assert_eq!(pile.take_front(), Some(deck[0]));
        assert_eq!(pile.window(), deck[1..3].to_vec());

        pile.refill();
        assert_eq!(pile.window(), deck[1..4].to_vec());
    }

    #[test]
    fn test_recycle_front_cycles_through_stock() {
        let deck = cards(4);
        let mut pile = DrawPile::new(deck.clone(), 2);

        assert_eq!(pile.recycle_front(), Some(deck[0]));
        assert_eq!(pile.window(), vec![deck[1], deck[2]]);
        assert_eq!(pile.stock_len(), 2);

        pile.recycle_front();
        pile.recycle_front();
        assert_eq!(pile.window(), vec![deck[3], deck[0]]);
        assert_eq!(pile.window_len() + pile.stock_len(), 4);
    }
}
