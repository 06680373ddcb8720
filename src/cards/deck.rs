//! Deck construction and deck-shape validation.
//!
//! A playable deck is any set of cards that splits into `A` single-suit runs
//! `A..n` of equal length `n`, where `A` is the number of aces. The standard
//! 52-card deck is four runs of length 13; `{A♣ 2♣ 3♣ A♡ 2♡ 3♡}` is two runs
//! of length 3.

use rustc_hash::FxHashMap;

use super::card::{Card, Rank, Suit};

/// Build the standard 52-card deck.
///
/// Order is suit-major (♢ ♣ ♡ ♠), rank-minor (Ace..King). Callers may
/// shuffle or filter it.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Count the aces in a deck.
#[must_use]
pub fn aces_in(deck: &[Card]) -> usize {
    deck.iter().filter(|card| card.is_ace()).count()
}

/// Check that a deck forms equal-length, Ace-based, single-suit runs.
///
/// Rejects empty decks, decks without aces, and any deck whose size is not
/// a whole number of runs. Every suit must hold exactly as many copies of
/// each rank `1..=run_len` as it holds aces, and nothing above `run_len`.
#[must_use]
pub fn validate_deck(deck: &[Card]) -> bool {
    let aces = aces_in(deck);
    if deck.is_empty() || aces == 0 || deck.len() % aces != 0 {
        return false;
    }

    let run_len = deck.len() / aces;
    let max_rank = deck.iter().map(|card| card.rank.value()).max().unwrap_or(0);
    if run_len > usize::from(Rank::KING.value()) || usize::from(max_rank) != run_len {
        return false;
    }

    let mut counts: FxHashMap<Card, usize> = FxHashMap::default();
    for &card in deck {
        *counts.entry(card).or_default() += 1;
    }

    Suit::ALL.iter().all(|&suit| {
        let runs = counts.get(&Card::new(Rank::ACE, suit)).copied().unwrap_or(0);
        Rank::all()
            .take(run_len)
            .all(|rank| counts.get(&Card::new(rank, suit)).copied().unwrap_or(0) == runs)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank).unwrap(), suit)
    }

    #[test]
    fn test_standard_deck_shape() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck[0], card(1, Suit::Diamonds));
        assert_eq!(deck[12], card(13, Suit::Diamonds));
        assert_eq!(deck[13], card(1, Suit::Clubs));
        assert_eq!(deck[51], card(13, Suit::Spades));
        assert_eq!(aces_in(&deck), 4);
        assert!(validate_deck(&deck));
    }

    #[test]
    fn test_small_runs_valid() {
        let deck = vec![
            card(1, Suit::Clubs),
            card(2, Suit::Clubs),
            card(3, Suit::Clubs),
            card(1, Suit::Hearts),
            card(2, Suit::Hearts),
            card(3, Suit::Hearts),
        ];
        assert!(validate_deck(&deck));
    }

    #[test]
    fn test_order_does_not_matter() {
        let deck = vec![
            card(3, Suit::Hearts),
            card(1, Suit::Clubs),
            card(2, Suit::Hearts),
            card(3, Suit::Clubs),
            card(1, Suit::Hearts),
            card(2, Suit::Clubs),
        ];
        assert!(validate_deck(&deck));
    }

    #[test]
    fn test_gap_in_run_invalid() {
        let deck = vec![
            card(1, Suit::Hearts),
            card(3, Suit::Hearts),
            card(1, Suit::Clubs),
            card(2, Suit::Clubs),
            card(3, Suit::Clubs),
        ];
        assert!(!validate_deck(&deck));
    }

    #[test]
    fn test_mixed_suit_run_invalid() {
        // Sizes and max rank line up, but the runs are not single-suit.
        let deck = vec![
            card(1, Suit::Clubs),
            card(2, Suit::Hearts),
            card(1, Suit::Hearts),
            card(2, Suit::Clubs),
            card(2, Suit::Clubs),
            card(1, Suit::Spades),
        ];
        assert!(!validate_deck(&deck));
    }

    #[test]
    fn test_empty_and_aceless_invalid() {
        assert!(!validate_deck(&[]));
        assert!(!validate_deck(&[card(2, Suit::Clubs)]));
    }

    #[test]
    fn test_double_deck_valid() {
        let mut deck = standard_deck();
        deck.extend(standard_deck());
        assert!(validate_deck(&deck));
        assert_eq!(aces_in(&deck), 8);
    }

    #[test]
    fn test_duplicate_run_same_suit_valid() {
        let deck = vec![
            card(1, Suit::Spades),
            card(2, Suit::Spades),
            card(1, Suit::Spades),
            card(2, Suit::Spades),
        ];
        assert!(validate_deck(&deck));
    }

    #[test]
    fn test_single_ace_valid() {
        assert!(validate_deck(&[card(1, Suit::Hearts)]));
    }
}
