//! Front-end-neutral session that turns user actions into text panels.

use core::fmt;
use core::str::FromStr;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ParseCommandError;
use crate::options::ShellOptions;
use crate::order;

/// A user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Draw a batch of cards.
    Draw,
    /// Sort the drawn cards.
    Sort,
    /// Return all cards and shuffle the deck.
    Shuffle,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "draw" => Ok(Self::Draw),
            "s" | "sort" => Ok(Self::Sort),
            "r" | "shuffle" => Ok(Self::Shuffle),
            _ => Err(ParseCommandError::Unknown),
        }
    }
}

/// Titled list of cards produced by a shell action.
///
/// `Display` renders the title followed by one card label per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Heading line, such as `"Sorted Cards:"`.
    pub title: String,
    /// Cards in display order.
    pub cards: Vec<Card>,
}

impl Panel {
    /// Returns the label of each card, one per line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

/// A single-deck session driven by [`Command`]s.
///
/// The shell owns the deck and a seeded random number generator, so a session
/// replays identically for the same seed and command sequence.
///
/// # Example
///
/// ```
/// use deckrs::{Shell, ShellOptions};
///
/// let mut shell = Shell::new(ShellOptions::default(), 42);
/// let drawn = shell.draw();
/// assert_eq!(drawn.title, "Drew 20 Cards:");
///
/// let sorted = shell.sort();
/// assert_eq!(sorted.cards.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Shell {
    deck: Deck,
    options: ShellOptions,
    rng: ChaCha8Rng,
}

impl Shell {
    /// Creates a session with the given seed.
    #[must_use]
    pub fn new(options: ShellOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        if options.shuffle_on_start {
            deck.shuffle(&mut rng);
        }

        tracing::debug!(seed, ?options, "started deck session");
        Self { deck, options, rng }
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Returns the deck owned by the session.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Runs a command and returns the panel it renders.
    pub fn run(&mut self, command: Command) -> Panel {
        tracing::debug!(?command, "running command");
        match command {
            Command::Draw => self.draw(),
            Command::Sort => self.sort(),
            Command::Shuffle => self.shuffle(),
        }
    }

    /// Draws the configured number of cards.
    ///
    /// The title reports how many cards were actually drawn, which is fewer
    /// than requested once the deck runs low.
    pub fn draw(&mut self) -> Panel {
        if self.options.return_drawn_before_draw {
            self.deck.reset();
        }
        if self.options.shuffle_before_draw {
            self.deck.shuffle(&mut self.rng);
        }

        let cards = self.deck.draw_multiple(self.options.draw_count);
        Panel {
            title: format!("Drew {} Cards:", cards.len()),
            cards,
        }
    }

    /// Sorts a snapshot of the drawn cards. The deck is left unchanged.
    #[must_use]
    pub fn sort(&self) -> Panel {
        let mut cards = self.deck.drawn();
        order::sort_hand(&mut cards);
        Panel {
            title: "Sorted Cards:".to_string(),
            cards,
        }
    }

    /// Returns every drawn card to the deck, shuffles, and shows the full deck.
    pub fn shuffle(&mut self) -> Panel {
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        Panel {
            title: "Shuffled Deck:".to_string(),
            cards: self.deck.available(),
        }
    }
}
