//! Game-over search.
//!
//! The game is over when the draw window is empty and no cascade card can
//! move anywhere. Cascade-to-cascade moves are searched over every face-up
//! suffix of every pile, not just the top card: a multi-card run can have a
//! legal destination even when its top card alone does not.
//!
//! Cost is O(piles² × run length) per call.

use tracing::trace;

use super::table::Table;
use crate::core::Move;
use crate::rules::RuleValidator;

/// First move found that keeps the game alive, if any.
///
/// Draw cards count as a move on their own: while any are visible the game
/// is not over, whether or not they can be placed.
pub(crate) fn find_move(rules: &dyn RuleValidator, table: &Table) -> Option<Move> {
    if table.draw.window_len() > 0 {
        return Some(Move::DiscardDraw);
    }
    find_foundation_move(rules, table).or_else(|| find_cascade_move(rules, table))
}

fn find_foundation_move(rules: &dyn RuleValidator, table: &Table) -> Option<Move> {
    table.cascades.iter().enumerate().find_map(|(src, pile)| {
        let card = pile.top()?;
        table
            .foundations
            .iter()
            .position(|foundation| rules.valid_add_to_foundation(&card, foundation).is_ok())
            .map(|foundation| Move::ToFoundation { src, foundation })
    })
}

fn find_cascade_move(rules: &dyn RuleValidator, table: &Table) -> Option<Move> {
    for (src, pile) in table.cascades.iter().enumerate() {
        for count in 1..=pile.visible_count() {
            let Some(run) = pile.run(count) else { break };

            for (dest, target) in table.cascades.iter().enumerate() {
                // Only builds onto an existing card count here; shuffling a
                // run onto an empty cascade never opens anything new.
                if dest == src || target.is_empty() {
                    continue;
                }
                if rules.valid_add_to_cascade(target, &run).is_ok() {
                    return Some(Move::Pile { src, count, dest });
                }
            }
        }
    }
    None
}

/// True if no move remains.
pub(crate) fn is_over(rules: &dyn RuleValidator, table: &Table) -> bool {
    match find_move(rules, table) {
        Some(mv) => {
            trace!(%mv, "game continues");
            false
        }
        None => true,
    }
}
