//! Plain-text board renderer.

use std::fmt;

use crate::core::GameError;
use crate::engine::Klondike;

/// Renders a started game as text.
///
/// ```text
/// Draw: 3♡, 4♡, 5♡
/// Foundation: <none>, A♢, <none>, <none>
///   X  ?  ?  ?  ?  ?  ?
///     8♢  ?  ?  ?  ?  ?
/// ```
///
/// Every cascade cell is three characters wide: a right-aligned card, `?`
/// for a face-down card, `X` for an empty pile on the first row, blank
/// otherwise.
#[derive(Clone, Copy, Debug)]
pub struct TextView<'a> {
    game: &'a Klondike,
}

impl<'a> TextView<'a> {
    #[must_use]
    pub fn new(game: &'a Klondike) -> Self {
        Self { game }
    }

    /// Render the whole board, one `\n`-terminated line per row.
    pub fn render(&self) -> Result<String, GameError> {
        let mut out = String::new();
        self.write_draw(&mut out)?;
        self.write_foundations(&mut out)?;
        self.write_cascades(&mut out)?;
        Ok(out)
    }

    fn write_draw(&self, out: &mut String) -> Result<(), GameError> {
        let cards: Vec<String> = self
            .game
            .draw_cards()?
            .iter()
            .map(ToString::to_string)
            .collect();
        if cards.is_empty() {
            out.push_str("Draw:\n");
        } else {
            out.push_str(&format!("Draw: {}\n", cards.join(", ")));
        }
        Ok(())
    }

    fn write_foundations(&self, out: &mut String) -> Result<(), GameError> {
        let mut tops = Vec::new();
        for i in 0..self.game.num_foundations()? {
            tops.push(match self.game.foundation_top(i)? {
                Some(card) => card.to_string(),
                None => "<none>".to_string(),
            });
        }
        if tops.is_empty() {
            out.push_str("Foundation:\n");
        } else {
            out.push_str(&format!("Foundation: {}\n", tops.join(", ")));
        }
        Ok(())
    }

    fn write_cascades(&self, out: &mut String) -> Result<(), GameError> {
        let num_piles = self.game.num_piles()?;
        for row in 0..self.game.num_rows()? {
            for pile in 0..num_piles {
                let cell = if row >= self.game.pile_height(pile)? {
                    if row == 0 {
                        "X".to_string()
                    } else {
                        String::new()
                    }
                } else if self.game.is_card_visible(pile, row)? {
                    self.game.card_at(pile, row)?.to_string()
                } else {
                    "?".to_string()
                };
                out.push_str(&format!("{cell:>3}"));
            }
            out.push('\n');
        }
        Ok(())
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(board) => f.write_str(&board),
            Err(err) => write!(f, "<{err}>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::rules::{ClassicRules, WhiteheadRules};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(Rank::new(rank).unwrap(), suit)
    }

    const STANDARD_BOARD: &str = "\
Draw: 3♡, 4♡, 5♡
Foundation: <none>, <none>, <none>, <none>
 A♢  ?  ?  ?  ?  ?  ?
    8♢  ?  ?  ?  ?  ?
       A♣  ?  ?  ?  ?
          6♣  ?  ?  ?
            10♣  ?  ?
                K♣  ?
                   2♡
";

    #[test]
    fn test_render_standard_deal() {
        let mut game = Klondike::new(ClassicRules);
        let deck = game.create_deck();
        game.start_game(&deck, false, 7, 3).unwrap();
        assert_eq!(TextView::new(&game).render().unwrap(), STANDARD_BOARD);
    }

    #[test]
    fn test_render_empty_pile_marker() {
        let mut game = Klondike::new(ClassicRules);
        let deck = game.create_deck();
        game.start_game(&deck, false, 7, 3).unwrap();
        game.move_to_foundation(0, 1).unwrap();

        let board = TextView::new(&game).to_string();
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines[1], "Foundation: <none>, A♢, <none>, <none>");
        assert_eq!(lines[2], "  X  ?  ?  ?  ?  ?  ?");
    }

    #[test]
    fn test_render_whitehead_all_visible() {
        let deck = vec![
            card(1, Suit::Clubs),
            card(2, Suit::Clubs),
            card(3, Suit::Clubs),
            card(1, Suit::Hearts),
            card(2, Suit::Hearts),
            card(3, Suit::Hearts),
        ];
        let mut game = Klondike::new(WhiteheadRules);
        game.start_game(&deck, false, 3, 1).unwrap();

        let expected =
            "Draw:\nFoundation: <none>, <none>\n A♣ 2♣ 3♣\n    A♡ 2♡\n       3♡\n";
        assert_eq!(TextView::new(&game).render().unwrap(), expected);
    }

    #[test]
    fn test_render_unstarted_fails() {
        let game = Klondike::new(ClassicRules);
        assert!(TextView::new(&game).render().is_err());
        assert!(TextView::new(&game).to_string().starts_with('<'));
    }
}
