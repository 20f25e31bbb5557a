//! Deck integration tests.

use std::collections::HashSet;

use deckrs::{Card, DECK_SIZE, Deck, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn full_set() -> HashSet<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| card(suit, rank)))
        .collect()
}

fn assert_full_deck(deck: &Deck) {
    let mut all = deck.available();
    all.extend(deck.drawn());
    assert_eq!(all.len(), DECK_SIZE);

    let unique: HashSet<Card> = all.into_iter().collect();
    assert_eq!(unique, full_set());
    assert_eq!(deck.verify(), Ok(()));
}

#[test]
fn new_deck_is_canonical_and_complete() {
    let deck = Deck::new();
    assert_eq!(deck.drawn_len(), 0);
    assert!(deck.drawn().is_empty());
    assert_full_deck(&deck);

    let available = deck.available();
    assert_eq!(available[0], card(Suit::Spade, Rank::A));
    assert_eq!(available[12], card(Suit::Spade, Rank::K));
    assert_eq!(available[13], card(Suit::Club, Rank::A));
    assert_eq!(available[51], card(Suit::Diamond, Rank::K));
    assert_eq!(Deck::default(), deck);
}

#[test]
fn shuffle_permutes_available_only() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::new();
    let drawn_before = deck.draw_multiple(10);

    let mut before: Vec<Card> = deck.available();
    deck.shuffle(&mut rng);
    let mut after: Vec<Card> = deck.available();
    assert_eq!(deck.drawn(), drawn_before);
    assert_ne!(before, after);

    before.sort_by_key(|c| (c.suit(), c.rank()));
    after.sort_by_key(|c| (c.suit(), c.rank()));
    assert_eq!(before, after);
    assert_full_deck(&deck);
}

#[test]
fn shuffle_is_reproducible_for_a_seed() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a.available(), b.available());

    let mut c = Deck::new();
    c.shuffle(&mut ChaCha8Rng::seed_from_u64(43));
    assert_ne!(a.available(), c.available());
}

#[test]
fn draw_counts_are_clamped() {
    for n in [0, 1, 5, 20, 51, 52, 53, 100] {
        let mut deck = Deck::new();
        let hand = deck.draw_multiple(n);
        let expected = n.min(DECK_SIZE);

        assert_eq!(hand.len(), expected);
        assert_eq!(deck.drawn_len(), expected);
        assert_eq!(deck.available_len(), DECK_SIZE - expected);
        assert_eq!(deck.drawn(), hand);
        assert_full_deck(&deck);
    }
}

#[test]
fn draw_zero_is_a_no_op() {
    let mut deck = Deck::new();
    let before = deck.clone();
    assert!(deck.draw_multiple(0).is_empty());
    assert_eq!(deck, before);
}

#[test]
fn draw_from_empty_deck_changes_nothing() {
    let mut deck = Deck::new();
    deck.draw_multiple(DECK_SIZE);
    let before = deck.clone();

    assert!(deck.draw_multiple(5).is_empty());
    assert_eq!(deck, before);
    assert_eq!(deck.available_len(), 0);
}

#[test]
fn draws_accumulate_in_draw_order() {
    let mut deck = Deck::new();
    let first = deck.draw_multiple(20);
    let second = deck.draw_multiple(20);
    let third = deck.draw_multiple(20);

    assert_eq!(third.len(), 12);
    let mut expected = first;
    expected.extend(second);
    expected.extend(third);
    assert_eq!(deck.drawn(), expected);
    assert_full_deck(&deck);
}

#[test]
fn unshuffled_draw_takes_canonical_prefix() {
    let mut deck = Deck::new();
    let hand = deck.draw_multiple(20);

    let expected: Vec<Card> = Rank::ALL
        .into_iter()
        .map(|rank| card(Suit::Spade, rank))
        .chain(Rank::ALL.into_iter().take(7).map(|rank| card(Suit::Club, rank)))
        .collect();
    assert_eq!(hand, expected);
    assert_eq!(hand[19], card(Suit::Club, Rank::Seven));
}

#[test]
fn reset_restores_full_available_pile() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    deck.draw_multiple(17);
    deck.reset();

    assert_eq!(deck.available_len(), DECK_SIZE);
    assert_eq!(deck.drawn_len(), 0);
    assert_full_deck(&deck);
}

#[test]
fn reset_after_drawing_everything_matches_fresh_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    deck.draw_multiple(DECK_SIZE);
    assert_eq!(deck.available_len(), 0);

    deck.reset();
    let restored: HashSet<Card> = deck.available().into_iter().collect();
    let fresh: HashSet<Card> = Deck::new().available().into_iter().collect();
    assert_eq!(restored, fresh);
    assert!(deck.drawn().is_empty());
}
