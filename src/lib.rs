//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that can be shuffled, drawn from and reset,
//! an [`order`] policy for sorting a drawn hand, and a [`Shell`] that maps
//! user actions onto the deck and renders the results as text.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, order};
//!
//! let mut deck = Deck::new();
//! let mut hand = deck.draw_multiple(5);
//! order::sort_hand(&mut hand);
//! assert_eq!(hand.len(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod order;
pub mod shell;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckIntegrityError, ParseCardError, ParseCommandError};
pub use options::ShellOptions;
pub use shell::{Command, Panel, Shell};
