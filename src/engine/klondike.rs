//! The Klondike game engine.
//!
//! `Klondike` owns every pile and walks the lifecycle
//! `Unstarted → Playing → Over`. "Over" is never stored: `is_game_over`
//! recomputes it from the table on every call.
//!
//! Every mutator checks, in order: lifecycle, argument bounds, then the
//! active `RuleValidator`. Only when all three pass is anything changed, so
//! a returned error always means the table is exactly as it was.

use std::sync::Arc;

use tracing::debug;

use super::game_over;
use super::table::{staircase_size, Table};
use crate::cards::{standard_deck, validate_deck, Card};
use crate::core::{ArgumentError, GameError, GameRng, LifecycleError, Move, RuleViolation};
use crate::rules::RuleValidator;
use crate::zones::Pile;

/// A game of Klondike under one rule variant.
///
/// ## Usage
///
/// ```
/// use klondike_rules::engine::Klondike;
/// use klondike_rules::rules::ClassicRules;
///
/// let mut game = Klondike::new(ClassicRules);
/// let deck = game.create_deck();
/// game.start_game(&deck, false, 7, 3).unwrap();
///
/// assert_eq!(game.num_piles().unwrap(), 7);
/// assert_eq!(game.score().unwrap(), 0);
///
/// // The first pile holds the A♢, face up.
/// game.move_to_foundation(0, 0).unwrap();
/// assert_eq!(game.score().unwrap(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Klondike {
    rules: Arc<dyn RuleValidator>,
    rng: GameRng,
    refill_on_foundation: bool,
    table: Option<Table>,
}

impl Klondike {
    /// Create an unstarted game with the given rules.
    #[must_use]
    pub fn new(rules: impl RuleValidator + 'static) -> Self {
        Self::with_shared_rules(Arc::new(rules))
    }

    /// Create an unstarted game around an already shared validator.
    #[must_use]
    pub fn with_shared_rules(rules: Arc<dyn RuleValidator>) -> Self {
        Self {
            rules,
            rng: GameRng::default(),
            refill_on_foundation: false,
            table: None,
        }
    }

    /// Use `rng` for shuffled deals.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Refill the draw window after `move_draw_to_foundation`.
    ///
    /// Off by default: only `move_draw` and `discard_draw` refill, matching
    /// the established behaviour of the game.
    #[must_use]
    pub fn refill_draw_on_foundation(mut self, enabled: bool) -> Self {
        self.refill_on_foundation = enabled;
        self
    }

    /// Name of the active rule variant.
    #[must_use]
    pub fn rules_name(&self) -> &'static str {
        self.rules.name()
    }

    /// Seed of the RNG used for shuffled deals.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A fresh standard 52-card deck, in canonical order.
    #[must_use]
    pub fn create_deck(&self) -> Vec<Card> {
        standard_deck()
    }

    /// Has `start_game` succeeded?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.table.is_some()
    }

    fn table(&self) -> Result<&Table, GameError> {
        self.table.as_ref().ok_or(GameError::Lifecycle(LifecycleError::NotStarted))
    }

    // === Lifecycle ===

    /// Deal a new game.
    ///
    /// Cards are dealt from the front of `deck` (or of a shuffled copy when
    /// `shuffle` is set) into a staircase of `num_piles` cascades; the rest
    /// become the stock, with up to `num_draw` of them visible.
    pub fn start_game(
        &mut self,
        deck: &[Card],
        shuffle: bool,
        num_piles: usize,
        num_draw: usize,
    ) -> Result<(), GameError> {
        if self.table.is_some() {
            return Err(LifecycleError::AlreadyStarted.into());
        }
        if !validate_deck(deck) {
            return Err(ArgumentError::InvalidDeck.into());
        }
        if num_piles == 0 {
            return Err(ArgumentError::NoPiles.into());
        }
        if num_draw == 0 {
            return Err(ArgumentError::NoDrawCards.into());
        }
        let needed = staircase_size(num_piles);
        if deck.len() < needed {
            return Err(ArgumentError::DeckTooSmall {
                needed,
                available: deck.len(),
            }
            .into());
        }

        let mut cards = deck.to_vec();
        if shuffle {
            self.rng.shuffle(&mut cards);
        }

        let table = Table::deal(cards, num_piles, num_draw, self.rules.as_ref());
        debug!(
            rules = self.rules.name(),
            num_piles,
            num_draw,
            deck_size = table.deck_size,
            foundations = table.foundations.len(),
            shuffle,
            seed = self.rng.seed(),
            "game started"
        );
        self.table = Some(table);
        Ok(())
    }

    // === Moves ===

    /// Apply a `Move`, dispatching to the matching operation.
    pub fn apply(&mut self, mv: &Move) -> Result<(), GameError> {
        match *mv {
            Move::Pile { src, count, dest } => self.move_pile(src, count, dest),
            Move::Draw { dest } => self.move_draw(dest),
            Move::ToFoundation { src, foundation } => self.move_to_foundation(src, foundation),
            Move::DrawToFoundation { foundation } => self.move_draw_to_foundation(foundation),
            Move::DiscardDraw => self.discard_draw(),
        }
    }

    /// Move the top `count` cards of cascade `src` onto cascade `dest`.
    pub fn move_pile(&mut self, src: usize, count: usize, dest: usize) -> Result<(), GameError> {
        let table = self.table.as_mut().ok_or(LifecycleError::NotStarted)?;
        let num_piles = table.cascades.len();
        let visible = table.cascades.get(src).map_or(0, Pile::visible_count);

        let bad_move = ArgumentError::PileMove { src, count, dest };
        if !self.rules.valid_pile_move(src, count, dest, num_piles, visible) {
            return Err(bad_move.into());
        }
        let run = table.cascades[src].run(count).ok_or(bad_move)?;
        self.rules.valid_add_to_cascade(&table.cascades[dest], &run)?;

        let from = table.cascades[src].len() - count;
        let moved = table.cascades[src].remove_run(from);
        table.cascades[src].reveal_top();
        table.cascades[dest].extend_face_up(moved);

        debug!(src, count, dest, "moved pile");
        Ok(())
    }

    /// Move the front draw card onto cascade `dest`, then refill the window.
    pub fn move_draw(&mut self, dest: usize) -> Result<(), GameError> {
        let table = self.table.as_mut().ok_or(LifecycleError::NotStarted)?;
        let num_piles = table.cascades.len();
        if !self.rules.valid_pile_index(dest, num_piles) {
            return Err(ArgumentError::PileIndex { index: dest, count: num_piles }.into());
        }

        let card = table.draw.front().ok_or(RuleViolation::EmptyDraw)?;
        self.rules.valid_add_to_cascade(&table.cascades[dest], &[card])?;

        table.draw.take_front();
        table.cascades[dest].deal_face_up(card);
        table.draw.refill();

        debug!(%card, dest, "moved draw card to pile");
        Ok(())
    }

    /// Move the top card of cascade `src` onto foundation `foundation`.
    pub fn move_to_foundation(&mut self, src: usize, foundation: usize) -> Result<(), GameError> {
        let table = self.table.as_mut().ok_or(LifecycleError::NotStarted)?;
        let num_piles = table.cascades.len();
        let num_foundations = table.foundations.len();
        if !self.rules.valid_pile_index(src, num_piles) {
            return Err(ArgumentError::PileIndex { index: src, count: num_piles }.into());
        }
        if foundation >= num_foundations {
            return Err(ArgumentError::FoundationIndex {
                index: foundation,
                count: num_foundations,
            }
            .into());
        }

        let card = table.cascades[src].top().ok_or(RuleViolation::EmptySource)?;
        self.rules.valid_add_to_foundation(&card, &table.foundations[foundation])?;

        table.cascades[src].remove_top(card);
        table.foundations[foundation].push(card);
        table.cascades[src].reveal_top();

        debug!(%card, src, foundation, "moved card to foundation");
        Ok(())
    }

    /// Move the front draw card onto foundation `foundation`.
    ///
    /// The draw window is not refilled afterwards unless the engine was
    /// built with `refill_draw_on_foundation(true)`.
    pub fn move_draw_to_foundation(&mut self, foundation: usize) -> Result<(), GameError> {
        let table = self.table.as_mut().ok_or(LifecycleError::NotStarted)?;
        let num_foundations = table.foundations.len();
        if foundation >= num_foundations {
            return Err(ArgumentError::FoundationIndex {
                index: foundation,
                count: num_foundations,
            }
            .into());
        }

        let card = table.draw.front().ok_or(RuleViolation::EmptyDraw)?;
        self.rules.valid_add_to_foundation(&card, &table.foundations[foundation])?;

        table.draw.take_front();
        table.foundations[foundation].push(card);
        if self.refill_on_foundation {
            table.draw.refill();
        }

        debug!(%card, foundation, "moved draw card to foundation");
        Ok(())
    }

    /// Send the front draw card to the back of the stock and refill.
    pub fn discard_draw(&mut self) -> Result<(), GameError> {
        let table = self.table.as_mut().ok_or(LifecycleError::NotStarted)?;
        if table.draw.stock_len() == 0 {
            return Err(RuleViolation::EmptyStock.into());
        }
        let card = table.draw.recycle_front().ok_or(RuleViolation::EmptyDraw)?;

        debug!(%card, "discarded draw card");
        Ok(())
    }

    // === Queries ===

    /// True when no draw cards remain and no cascade card can move.
    pub fn is_game_over(&self) -> Result<bool, GameError> {
        let table = self.table()?;
        Ok(game_over::is_over(self.rules.as_ref(), table))
    }

    /// Cards on the foundations.
    pub fn score(&self) -> Result<usize, GameError> {
        Ok(self.table()?.foundations.iter().map(|f| f.len()).sum())
    }

    /// Height of the tallest cascade.
    pub fn num_rows(&self) -> Result<usize, GameError> {
        Ok(self.table()?.cascades.iter().map(Pile::len).max().unwrap_or(0))
    }

    pub fn num_piles(&self) -> Result<usize, GameError> {
        Ok(self.table()?.cascades.len())
    }

    /// Capacity of the draw window.
    pub fn num_draw(&self) -> Result<usize, GameError> {
        Ok(self.table()?.draw.capacity())
    }

    pub fn num_foundations(&self) -> Result<usize, GameError> {
        Ok(self.table()?.foundations.len())
    }

    /// Number of cards dealt at the start of the game.
    pub fn deck_size(&self) -> Result<usize, GameError> {
        Ok(self.table()?.deck_size)
    }

    /// Cards left in the hidden stock.
    pub fn stock_len(&self) -> Result<usize, GameError> {
        Ok(self.table()?.draw.stock_len())
    }

    fn pile(&self, pile: usize) -> Result<&Pile, GameError> {
        let table = self.table()?;
        table.cascades.get(pile).ok_or_else(|| {
            ArgumentError::PileIndex {
                index: pile,
                count: table.cascades.len(),
            }
            .into()
        })
    }

    /// Number of cards in cascade `pile`.
    pub fn pile_height(&self, pile: usize) -> Result<usize, GameError> {
        Ok(self.pile(pile)?.len())
    }

    /// Whether the card at (`pile`, `row`) is face up.
    pub fn is_card_visible(&self, pile: usize, row: usize) -> Result<bool, GameError> {
        let cascade = self.pile(pile)?;
        cascade.is_face_up(row).ok_or_else(|| {
            ArgumentError::RowIndex {
                pile,
                row,
                height: cascade.len(),
            }
            .into()
        })
    }

    /// The card at (`pile`, `row`). Face-down cards cannot be read.
    pub fn card_at(&self, pile: usize, row: usize) -> Result<Card, GameError> {
        if !self.is_card_visible(pile, row)? {
            return Err(ArgumentError::CardHidden { pile, row }.into());
        }
        let card = self.pile(pile)?.card_at(row);
        card.ok_or_else(|| ArgumentError::RowIndex { pile, row, height: 0 }.into())
    }

    /// Top card of a foundation, `None` if it is still empty.
    pub fn foundation_top(&self, foundation: usize) -> Result<Option<Card>, GameError> {
        let table = self.table()?;
        table
            .foundations
            .get(foundation)
            .map(|f| f.top())
            .ok_or_else(|| {
                ArgumentError::FoundationIndex {
                    index: foundation,
                    count: table.foundations.len(),
                }
                .into()
            })
    }

    /// Copy of a whole foundation pile, Ace first.
    pub fn foundation(&self, foundation: usize) -> Result<Vec<Card>, GameError> {
        let table = self.table()?;
        table
            .foundations
            .get(foundation)
            .map(|f| f.cards())
            .ok_or_else(|| {
                ArgumentError::FoundationIndex {
                    index: foundation,
                    count: table.foundations.len(),
                }
                .into()
            })
    }

    /// Copy of the visible draw cards, first to be played first.
    pub fn draw_cards(&self) -> Result<Vec<Card>, GameError> {
        Ok(self.table()?.draw.window())
    }
}
