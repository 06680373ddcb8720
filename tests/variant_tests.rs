//! Classic vs Whitehead: where the two rule sets diverge on the same deal.

use klondike_rules::cards::{standard_deck, Card, Rank, Suit};
use klondike_rules::core::{GameConfig, RuleViolation, Variant};
use klondike_rules::engine::Klondike;
use klondike_rules::rules::{ClassicRules, RuleValidator, WhiteheadRules};
use klondike_rules::zones::Pile;

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(Rank::new(rank).unwrap(), suit)
}

fn started(
    rules: impl RuleValidator + 'static,
    deck: &[Card],
    num_piles: usize,
    num_draw: usize,
) -> Klondike {
    let mut game = Klondike::new(rules);
    game.start_game(deck, false, num_piles, num_draw).unwrap();
    game
}

/// Deals to [3♠] [A♣ 2♠] [A♠ 2♣ 3♣] with nothing to draw.
fn black_deck() -> Vec<Card> {
    vec![
        card(3, Suit::Spades),
        card(1, Suit::Clubs),
        card(1, Suit::Spades),
        card(2, Suit::Spades),
        card(2, Suit::Clubs),
        card(3, Suit::Clubs),
    ]
}

// =============================================================================
// Deal visibility
// =============================================================================

#[test]
fn test_classic_deals_one_card_up() {
    let game = started(ClassicRules, &standard_deck(), 7, 3);
    let visible: usize = (0..7)
        .map(|pile| {
            (0..=pile)
                .filter(|&row| game.is_card_visible(pile, row).unwrap())
                .count()
        })
        .sum();
    assert_eq!(visible, 7);
}

#[test]
fn test_whitehead_deals_everything_up() {
    let game = started(WhiteheadRules, &standard_deck(), 7, 3);
    for pile in 0..7 {
        for row in 0..=pile {
            assert!(game.card_at(pile, row).is_ok(), "pile {pile} row {row}");
        }
    }
}

#[test]
fn test_same_shape_both_variants() {
    let classic = started(ClassicRules, &standard_deck(), 7, 3);
    let whitehead = started(WhiteheadRules, &standard_deck(), 7, 3);

    assert_eq!(classic.draw_cards(), whitehead.draw_cards());
    assert_eq!(classic.num_foundations(), whitehead.num_foundations());
    for pile in 0..7 {
        assert_eq!(classic.pile_height(pile), whitehead.pile_height(pile));
        assert_eq!(classic.card_at(pile, pile), whitehead.card_at(pile, pile));
    }
}

// =============================================================================
// Empty cascades
// =============================================================================

#[test]
fn test_empty_cascade_rules() {
    // Pile 0 (A♢) goes to a foundation; pile 5 ends in K♣.
    let deck = standard_deck();
    let mut classic = started(ClassicRules, &deck, 7, 3);
    let mut whitehead = started(WhiteheadRules, &deck, 7, 3);
    classic.move_to_foundation(0, 0).unwrap();
    whitehead.move_to_foundation(0, 0).unwrap();

    // The draw card 3♡ may fill the gap only under Whitehead.
    assert_eq!(
        classic.move_draw(0),
        Err(RuleViolation::EmptyCascadeNeedsKing.into())
    );
    let mut whitehead_draw = whitehead.clone();
    whitehead_draw.move_draw(0).unwrap();
    assert_eq!(whitehead_draw.card_at(0, 0).unwrap(), card(3, Suit::Hearts));

    // A King goes anywhere empty in both.
    classic.move_pile(5, 1, 0).unwrap();
    whitehead.move_pile(5, 1, 0).unwrap();
    assert_eq!(classic.card_at(0, 0).unwrap(), card(13, Suit::Clubs));
    assert_eq!(whitehead.card_at(0, 0).unwrap(), card(13, Suit::Clubs));
}

#[test]
fn test_queen_onto_empty_only_in_whitehead() {
    let empty = Pile::new();
    let king = [card(13, Suit::Hearts)];
    let queen = [card(12, Suit::Spades)];

    assert!(ClassicRules.valid_add_to_cascade(&empty, &king).is_ok());
    assert!(WhiteheadRules.valid_add_to_cascade(&empty, &king).is_ok());
    assert_eq!(
        ClassicRules.valid_add_to_cascade(&empty, &queen),
        Err(RuleViolation::EmptyCascadeNeedsKing)
    );
    assert!(WhiteheadRules.valid_add_to_cascade(&empty, &queen).is_ok());
}

// =============================================================================
// Building
// =============================================================================

#[test]
fn test_colour_rule_diverges() {
    let mut classic = started(ClassicRules, &black_deck(), 3, 1);
    let mut whitehead = started(WhiteheadRules, &black_deck(), 3, 1);

    // 2♠ may only go onto a black three under Whitehead.
    assert!(classic.is_game_over().unwrap());
    assert!(!whitehead.is_game_over().unwrap());

    assert_eq!(classic.move_pile(1, 1, 0), Err(RuleViolation::NotNextInBuild.into()));
    whitehead.move_pile(1, 1, 0).unwrap();
    assert_eq!(whitehead.pile_height(0).unwrap(), 2);
    assert_eq!(whitehead.card_at(1, 0).unwrap(), card(1, Suit::Clubs));
}

#[test]
fn test_whitehead_runs_must_share_suit() {
    // [3♠] [A♣ 2♠] [A♠ 2♣ 3♣]
    let mut game = started(WhiteheadRules, &black_deck(), 3, 1);
    game.move_pile(1, 1, 0).unwrap();
    game.move_pile(1, 1, 0).unwrap();
    assert_eq!(game.pile_height(0).unwrap(), 3);
    assert_eq!(game.pile_height(1).unwrap(), 0);

    // 2♠ A♣ would fit on the empty pile, but mixes suits.
    assert_eq!(
        game.move_pile(0, 2, 1),
        Err(RuleViolation::MixedSuitRun.into())
    );
}

#[test]
fn test_whitehead_same_suit_run_moves() {
    // Deals to [4♣] [A♣ 3♠] [A♠ 3♣ 2♠] with 2♣ to draw.
    let deck = vec![
        card(4, Suit::Clubs),
        card(1, Suit::Clubs),
        card(1, Suit::Spades),
        card(3, Suit::Spades),
        card(3, Suit::Clubs),
        card(2, Suit::Spades),
        card(2, Suit::Clubs),
        card(4, Suit::Spades),
    ];
    let mut game = started(WhiteheadRules, &deck, 3, 1);

    game.move_pile(2, 1, 1).unwrap();
    game.move_pile(1, 2, 0).unwrap();
    assert_eq!(game.pile_height(0).unwrap(), 3);
    assert_eq!(game.card_at(0, 1).unwrap(), card(3, Suit::Spades));
    assert_eq!(game.card_at(0, 2).unwrap(), card(2, Suit::Spades));

    game.move_to_foundation(1, 0).unwrap();
    assert_eq!(game.move_pile(0, 3, 1), Err(RuleViolation::MixedSuitRun.into()));
    game.move_pile(0, 2, 1).unwrap();
    assert_eq!(game.pile_height(1).unwrap(), 2);
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_selects_rules() {
    let basic = GameConfig::default().create_game();
    let whitehead = GameConfig::default().with_variant(Variant::Whitehead).create_game();
    assert_eq!(basic.rules_name(), "basic");
    assert_eq!(whitehead.rules_name(), "whitehead");
}

#[test]
fn test_seeded_config_deals_identically() {
    let config = GameConfig::default()
        .with_variant(Variant::Whitehead)
        .with_shuffle(true)
        .with_seed(99);
    let mut a = config.create_game();
    let mut b = config.create_game();
    let deck = standard_deck();
    a.start_game(&deck, config.shuffle, config.num_piles, config.num_draw).unwrap();
    b.start_game(&deck, config.shuffle, config.num_piles, config.num_draw).unwrap();

    for pile in 0..7 {
        for row in 0..=pile {
            assert_eq!(a.card_at(pile, row), b.card_at(pile, row));
        }
    }
    assert_eq!(a.draw_cards(), b.draw_cards());
}
