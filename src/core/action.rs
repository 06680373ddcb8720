//! Move representation.
//!
//! A `Move` is one player command against the engine, with 0-based indices.
//! Front ends build moves from user input and hand them to
//! `Klondike::apply`, so every command goes through a single dispatch point.

use std::fmt;

/// A single player command.
///
/// ## Example
///
/// ```
/// use klondike_rules::core::Move;
///
/// // Move the top two cards of pile 0 onto pile 3.
/// let mv = Move::Pile { src: 0, count: 2, dest: 3 };
/// assert_eq!(mv.to_string(), "move 2 card(s) from pile 0 to pile 3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move the top `count` cards of cascade `src` onto cascade `dest`.
    Pile { src: usize, count: usize, dest: usize },
    /// Move the front draw card onto cascade `dest`.
    Draw { dest: usize },
    /// Move the top card of cascade `src` onto a foundation.
    ToFoundation { src: usize, foundation: usize },
    /// Move the front draw card onto a foundation.
    DrawToFoundation { foundation: usize },
    /// Recycle the front draw card to the back of the stock.
    DiscardDraw,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Pile { src, count, dest } => {
                write!(f, "move {count} card(s) from pile {src} to pile {dest}")
            }
            Move::Draw { dest } => write!(f, "move draw card to pile {dest}"),
            Move::ToFoundation { src, foundation } => {
                write!(f, "move pile {src} to foundation {foundation}")
            }
            Move::DrawToFoundation { foundation } => {
                write!(f, "move draw card to foundation {foundation}")
            }
            Move::DiscardDraw => f.write_str("discard draw card"),
        }
    }
}
