//! Whitehead rules: same-colour builds, single-suit moves, all cards face up.

use super::validator::RuleValidator;
use crate::cards::Card;
use crate::core::RuleViolation;
use crate::zones::Pile;

/// Whitehead Klondike.
///
/// Cascades build down in the same colour. Any card may fill an empty
/// cascade, but every card of a moved run must share one suit. All dealt
/// cards start face up. Foundations work as in classic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WhiteheadRules;

impl RuleValidator for WhiteheadRules {
    fn name(&self) -> &'static str {
        "whitehead"
    }

    fn valid_add_to_cascade(
        &self,
        destination: &Pile,
        incoming: &[Card],
    ) -> Result<(), RuleViolation> {
        let bottom = incoming.first().ok_or(RuleViolation::EmptySource)?;

        if let Some(top) = destination.top() {
            if !self.valid_next(bottom, &top) {
                return Err(RuleViolation::NotNextInBuild);
            }
        }

        if incoming.iter().any(|card| card.suit != bottom.suit) {
            return Err(RuleViolation::MixedSuitRun);
        }
        Ok(())
    }

    fn valid_next(&self, top: &Card, bottom: &Card) -> bool {
        top.same_color(bottom) && top.rank.is_one_below(bottom.rank)
    }

    fn reveal_after_deal(&self, pile: &mut Pile) {
        pile.reveal_all();
    }
}
