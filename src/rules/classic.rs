//! Classic Klondike rules: alternating colours, Kings to empty cascades.

use super::validator::RuleValidator;
use crate::cards::Card;
use crate::core::RuleViolation;
use crate::zones::Pile;

/// Classic Klondike.
///
/// Cascades build down in alternating colours. Only a King (or a run with a
/// King at its bottom) may fill an empty cascade. Moved runs carry no suit
/// constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassicRules;

impl RuleValidator for ClassicRules {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn valid_add_to_cascade(
        &self,
        destination: &Pile,
        incoming: &[Card],
    ) -> Result<(), RuleViolation> {
        let bottom = incoming.first().ok_or(RuleViolation::EmptySource)?;

        match destination.top() {
            None if bottom.is_king() => Ok(()),
            None => Err(RuleViolation::EmptyCascadeNeedsKing),
            Some(top) if self.valid_next(bottom, &top) => Ok(()),
            Some(_) => Err(RuleViolation::NotNextInBuild),
        }
    }

    fn valid_next(&self, top: &Card, bottom: &Card) -> bool {
        !top.same_color(bottom) && top.rank.is_one_below(bottom.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank).unwrap(), suit)
    }

    #[test]
    fn test_valid_next() {
        let rules = ClassicRules;
        assert!(rules.valid_next(&card(6, Suit::Hearts), &card(7, Suit::Spades)));
        assert!(rules.valid_next(&card(6, Suit::Clubs), &card(7, Suit::Diamonds)));
        assert!(!rules.valid_next(&card(6, Suit::Hearts), &card(7, Suit::Diamonds)));
        assert!(!rules.valid_next(&card(5, Suit::Hearts), &card(7, Suit::Spades)));
        assert!(!rules.valid_next(&card(7, Suit::Spades), &card(6, Suit::Hearts)));
    }

    #[test]
    fn test_empty_cascade_needs_king() {
        let rules = ClassicRules;
        let empty = Pile::new();

        assert!(rules.valid_add_to_cascade(&empty, &[card(13, Suit::Clubs)]).is_ok());
        assert!(rules
            .valid_add_to_cascade(&empty, &[card(13, Suit::Hearts), card(12, Suit::Clubs)])
            .is_ok());
        assert_eq!(
            rules.valid_add_to_cascade(&empty, &[card(12, Suit::Clubs)]),
            Err(RuleViolation::EmptyCascadeNeedsKing)
        );
    }

    #[test]
    fn test_build_on_cascade() {
        let rules = ClassicRules;
        let pile = Pile::face_up(&[card(9, Suit::Spades)]);

        assert!(rules.valid_add_to_cascade(&pile, &[card(8, Suit::Hearts)]).is_ok());
        // Mixed suits in the moved run are fine in classic.
        assert!(rules
            .valid_add_to_cascade(&pile, &[card(8, Suit::Diamonds), card(7, Suit::Clubs)])
            .is_ok());
        assert_eq!(
            rules.valid_add_to_cascade(&pile, &[card(8, Suit::Clubs)]),
            Err(RuleViolation::NotNextInBuild)
        );
    }

    #[test]
    fn test_empty_run_rejected() {
        let rules = ClassicRules;
        assert_eq!(
            rules.valid_add_to_cascade(&Pile::new(), &[]),
            Err(RuleViolation::EmptySource)
        );
    }
}
