//! Error types.
//!
//! Every fallible engine operation returns `GameError`, which falls into one
//! of three kinds:
//!
//! - `Lifecycle`: called before `start_game`, or `start_game` called twice
//! - `Argument`: indices out of range, bad counts, malformed deck
//! - `Rule`: structurally possible but illegal under the active rules
//!
//! Validation always runs before mutation, so an error never implies a
//! partially applied move.

use thiserror::Error;

/// Lifecycle misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("game has not been started")]
    NotStarted,
    #[error("game has already been started")]
    AlreadyStarted,
}

/// Out-of-range or malformed arguments.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("deck is not made of equal-length single-suit runs starting at Ace")]
    InvalidDeck,
    #[error("number of piles must be positive")]
    NoPiles,
    #[error("number of draw cards must be positive")]
    NoDrawCards,
    #[error("deck has {available} cards but {needed} are needed to deal the cascades")]
    DeckTooSmall { needed: usize, available: usize },
    #[error("pile {index} does not exist (there are {count} piles)")]
    PileIndex { index: usize, count: usize },
    #[error("foundation {index} does not exist (there are {count} foundations)")]
    FoundationIndex { index: usize, count: usize },
    #[error("row {row} does not exist in pile {pile} (height {height})")]
    RowIndex { pile: usize, row: usize, height: usize },
    #[error("cannot move {count} cards from pile {src} to pile {dest}")]
    PileMove { src: usize, count: usize, dest: usize },
    #[error("card at pile {pile}, row {row} is face down")]
    CardHidden { pile: usize, row: usize },
}

/// Moves the active rules forbid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("only a King may be placed on an empty cascade")]
    EmptyCascadeNeedsKing,
    #[error("card does not build on the destination pile")]
    NotNextInBuild,
    #[error("moved cards must all share one suit")]
    MixedSuitRun,
    #[error("only an Ace may start a foundation")]
    FoundationNeedsAce,
    #[error("card is not the next card for this foundation")]
    NotNextOnFoundation,
    #[error("source pile is empty")]
    EmptySource,
    #[error("there are no draw cards")]
    EmptyDraw,
    #[error("the stock is empty")]
    EmptyStock,
}

/// Coarse error classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Lifecycle,
    Argument,
    Rule,
}

/// Any error the engine reports.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

impl GameError {
    /// Which of the three kinds this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::Lifecycle(_) => ErrorKind::Lifecycle,
            GameError::Argument(_) => ErrorKind::Argument,
            GameError::Rule(_) => ErrorKind::Rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(GameError::from(LifecycleError::NotStarted).kind(), ErrorKind::Lifecycle);
        assert_eq!(GameError::from(ArgumentError::NoPiles).kind(), ErrorKind::Argument);
        assert_eq!(GameError::from(RuleViolation::EmptyStock).kind(), ErrorKind::Rule);
    }

    #[test]
    fn test_messages_are_transparent() {
        let err = GameError::from(ArgumentError::DeckTooSmall { needed: 28, available: 6 });
        assert_eq!(err.to_string(), "deck has 6 cards but 28 are needed to deal the cascades");
    }
}
