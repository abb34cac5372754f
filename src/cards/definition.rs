//! Card values.
//!
//! A `Card` is an immutable value: a rank used for comparison and a suit that
//! is purely cosmetic. Cards are `Copy` and move freely between deck, hands,
//! stash and presentation requests.

use serde::{Deserialize, Serialize};

/// Card suit. Never consulted when comparing cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-letter symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// A playing card.
///
/// Only `value` decides a round. Two cards of equal value and different suits
/// start a war.
///
/// ```
/// use war_engine::cards::{Card, Suit};
///
/// let ace = Card::new(14, Suit::Spades);
/// let king = Card::new(13, Suit::Hearts);
///
/// assert!(ace.beats(&king));
/// assert!(Card::new(9, Suit::Clubs).ties(&Card::new(9, Suit::Hearts)));
/// assert_eq!(ace.to_string(), "AS");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Comparison rank. Higher wins.
    pub value: u8,

    /// Cosmetic suit.
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Does this card win against `other`?
    #[must_use]
    pub fn beats(&self, other: &Card) -> bool {
        self.value > other.value
    }

    /// Does this card tie with `other` (and so start a war)?
    #[must_use]
    pub fn ties(&self, other: &Card) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            14 => write!(f, "A")?,
            v => write!(f, "{}", v)?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}
