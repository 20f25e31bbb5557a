//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card color.
///
/// Red is declared first, so `Color::Red < Color::Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

/// Card suit, ordered by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Club, Self::Heart, Self::Diamond];

    /// Returns the color group of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Heart | Self::Diamond => Color::Red,
            Self::Spade | Self::Club => Color::Black,
        }
    }

    /// Returns the zero-based declaration position.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Spade => "SPADE",
            Self::Club => "CLUB",
            Self::Heart => "HEART",
            Self::Diamond => "DIAMOND",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|suit| suit.label().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::InvalidSuit)
    }
}

/// Card rank, ordered by declaration from ace to king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    A,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    J,
    /// Queen.
    Q,
    /// King.
    K,
}

impl Rank {
    /// All ranks in declaration order.
    pub const ALL: [Self; 13] = [
        Self::A,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::J,
        Self::Q,
        Self::K,
    ];

    /// Returns the zero-based declaration position.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::J => "J",
            Self::Q => "Q",
            Self::K => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<usize>() {
            // Numeric forms cover the pip cards only.
            return match value {
                2..=10 => Ok(Self::ALL[value - 1]),
                _ => Err(ParseCardError::InvalidRank),
            };
        }
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::InvalidRank)
    }
}

/// A playing card.
///
/// Cards are plain values: two cards with the same suit and rank are
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the color group of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a label of the form `"<Rank> of <Suit>"`, such as `"TEN of HEART"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(rank), Some(of), Some(suit), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseCardError::InvalidFormat);
        };
        if !of.eq_ignore_ascii_case("of") {
            return Err(ParseCardError::InvalidFormat);
        }

        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}
