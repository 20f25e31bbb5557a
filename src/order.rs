//! Hand ordering: color group, then suit, then rank.

use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::{Card, Color, Rank, Suit};

/// Returns the sort key of a card.
///
/// Keys compare lexicographically: red cards come before black cards, then
/// suits and ranks follow their declaration order.
#[must_use]
pub const fn sort_key(card: &Card) -> (Color, Suit, Rank) {
    (card.color(), card.suit(), card.rank())
}

/// Compares two cards by hand order.
///
/// This is a strict total order: only identical cards compare equal.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use deckrs::{Card, Rank, Suit, order};
///
/// let heart = Card::new(Suit::Heart, Rank::K);
/// let spade = Card::new(Suit::Spade, Rank::A);
/// assert_eq!(order::compare(&heart, &spade), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Sorts a hand in place by hand order.
pub fn sort_hand(cards: &mut [Card]) {
    cards.sort_unstable_by(compare);
}

/// Returns a sorted copy of a hand.
#[must_use]
pub fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut hand = cards.to_vec();
    sort_hand(&mut hand);
    hand
}
