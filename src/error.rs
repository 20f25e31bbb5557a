//! Error types for parsing and deck integrity checks.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when parsing a card, suit, or rank label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Suit name not recognized.
    #[error("unknown suit")]
    InvalidSuit,
    /// Rank name not recognized.
    #[error("unknown rank")]
    InvalidRank,
    /// Label is not of the form `<Rank> of <Suit>`.
    #[error("expected a label of the form `<Rank> of <Suit>`")]
    InvalidFormat,
}

/// Errors that can occur when parsing a shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// Command not recognized.
    #[error("unknown command")]
    Unknown,
}

/// A broken deck invariant.
///
/// Deck operations never produce this; seeing it means the deck was corrupted
/// by a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckIntegrityError {
    /// The two piles together do not hold exactly 52 cards.
    #[error("deck holds {0} cards instead of 52")]
    WrongSize(usize),
    /// A card appears more than once across both piles.
    #[error("{0} appears more than once")]
    Duplicate(Card),
}
