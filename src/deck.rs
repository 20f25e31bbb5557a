//! The 52-card deck and its two piles.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckIntegrityError;

/// A standard deck split into an available pile and a drawn pile.
///
/// Every card of the 52-card universe is always in exactly one of the two
/// piles. Cards are drawn from the front of the available pile and appended
/// to the drawn pile.
///
/// # Example
///
/// ```
/// use deckrs::Deck;
///
/// let mut deck = Deck::new();
/// let hand = deck.draw_multiple(5);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.available_len(), 47);
///
/// deck.reset();
/// assert_eq!(deck.available_len(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Undrawn cards; the front is the top of the deck.
    available: Vec<Card>,
    /// Drawn cards in the order they were drawn.
    drawn: Vec<Card>,
}

impl Deck {
    /// Creates a deck holding all 52 cards in canonical order.
    ///
    /// Suits are iterated outer and ranks inner, so the deck starts with the
    /// ace of spades and ends with the king of diamonds.
    #[must_use]
    pub fn new() -> Self {
        let mut available = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                available.push(Card::new(suit, rank));
            }
        }

        Self {
            available,
            drawn: Vec::with_capacity(DECK_SIZE),
        }
    }

    /// Shuffles the available pile in place.
    ///
    /// Uses a Fisher-Yates shuffle, so every permutation is equally likely
    /// given a uniform `rng`. The drawn pile is not touched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.available.shuffle(rng);
        tracing::trace!(available = self.available.len(), "shuffled deck");
        self.debug_check();
    }

    /// Draws up to `count` cards from the front of the available pile.
    ///
    /// The drawn cards are appended to the drawn pile and returned in draw
    /// order. If fewer than `count` cards remain, all remaining cards are
    /// drawn; an empty deck yields an empty vector.
    pub fn draw_multiple(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.available.len());
        let cards: Vec<Card> = self.available.drain(..count).collect();
        self.drawn.extend_from_slice(&cards);

        tracing::debug!(
            drawn = cards.len(),
            remaining = self.available.len(),
            "drew cards"
        );
        self.debug_check();
        cards
    }

    /// Returns a copy of the drawn pile in draw order.
    #[must_use]
    pub fn drawn(&self) -> Vec<Card> {
        self.drawn.clone()
    }

    /// Returns a copy of the available pile, top card first.
    #[must_use]
    pub fn available(&self) -> Vec<Card> {
        self.available.clone()
    }

    /// Returns the number of cards in the drawn pile.
    #[must_use]
    pub fn drawn_len(&self) -> usize {
        self.drawn.len()
    }

    /// Returns the number of cards in the available pile.
    #[must_use]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// Returns all drawn cards to the bottom of the available pile.
    ///
    /// The returned cards keep their draw order.
    pub fn reset(&mut self) {
        let returned = self.drawn.len();
        self.available.append(&mut self.drawn);

        tracing::debug!(returned, "returned drawn cards to deck");
        self.debug_check();
    }

    /// Checks that the two piles together hold each of the 52 cards once.
    ///
    /// The card domain has exactly 52 values, so a full-size deck without
    /// duplicates is complete.
    ///
    /// # Errors
    ///
    /// Returns the first broken invariant found. Deck operations preserve the
    /// invariant, so an error here always indicates a bug.
    pub fn verify(&self) -> Result<(), DeckIntegrityError> {
        let total = self.available.len() + self.drawn.len();
        if total != DECK_SIZE {
            return Err(DeckIntegrityError::WrongSize(total));
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in self.available.iter().chain(&self.drawn) {
            if !seen.insert(*card) {
                return Err(DeckIntegrityError::Duplicate(*card));
            }
        }

        Ok(())
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.verify(), Ok(()), "deck invariant broken");
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Deck;
    use crate::card::{Card, Rank, Suit};
    use crate::error::DeckIntegrityError;

    #[test]
    fn verify_reports_size_and_duplicates() {
        let mut deck = Deck::new();
        deck.available.pop();
        assert_eq!(deck.verify(), Err(DeckIntegrityError::WrongSize(51)));

        deck.available.push(Card::new(Suit::Spade, Rank::A));
        assert_eq!(
            deck.verify(),
            Err(DeckIntegrityError::Duplicate(Card::new(Suit::Spade, Rank::A)))
        );
    }

    #[test]
    fn reset_appends_drawn_in_draw_order() {
        let mut deck = Deck::new();
        let hand = deck.draw_multiple(3);
        deck.reset();

        let available = deck.available();
        assert_eq!(&available[49..], hand.as_slice());
        assert_eq!(available[0], Card::new(Suit::Spade, Rank::Four));
    }
}
