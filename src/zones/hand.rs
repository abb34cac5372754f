//! A side's pile of undrawn cards.
//!
//! Hands are FIFO: rounds draw from the front, winnings go to the back.
//! Backed by `im::Vector` so snapshots and simulations clone in O(1).

use im::Vector;

use crate::cards::Card;
use crate::core::error::{EngineError, Result};
use crate::core::Side;

/// A side's hand.
///
/// ```
/// use war_engine::cards::{Card, Suit};
/// use war_engine::core::Side;
/// use war_engine::zones::Hand;
///
/// let mut hand = Hand::new(Side::Player);
/// hand.append_bottom([Card::new(3, Suit::Clubs), Card::new(9, Suit::Hearts)]);
///
/// assert_eq!(hand.pop_top().unwrap(), Card::new(3, Suit::Clubs));
/// assert_eq!(hand.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    side: Side,
    cards: Vector<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            cards: Vector::new(),
        }
    }

    /// Create a hand holding `cards`, front first.
    #[must_use]
    pub fn from_cards(side: Side, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            side,
            cards: cards.into_iter().collect(),
        }
    }

    /// Which side holds this hand.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// The next card to be drawn.
    pub fn peek_top(&self) -> Result<Card> {
        self.cards
            .front()
            .copied()
            .ok_or(EngineError::EmptyHand { side: self.side })
    }

    /// Remove and return the next card.
    pub fn pop_top(&mut self) -> Result<Card> {
        self.cards
            .pop_front()
            .ok_or(EngineError::EmptyHand { side: self.side })
    }

    /// Add cards to the back, in the given order.
    pub fn append_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Copy the cards out, front first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}
