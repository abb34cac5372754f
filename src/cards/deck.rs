//! The deck: built once, shuffled once, dealt out.

use std::collections::VecDeque;

use tracing::debug;

use super::definition::Card;
use crate::core::{DeckTemplate, GameRng, Side};
use crate::zones::Hand;

/// Return a uniformly random permutation of `cards`.
pub fn shuffle(mut cards: Vec<Card>, rng: &mut GameRng) -> Vec<Card> {
    rng.shuffle(&mut cards);
    cards
}

/// Deal from the front, player first, alternating until the cards run out.
///
/// An odd count leaves the player one card ahead.
#[must_use]
pub fn deal_alternating(shuffled: Vec<Card>) -> (Hand, Hand) {
    let mut player = Hand::new(Side::Player);
    let mut opponent = Hand::new(Side::Opponent);

    for (i, card) in shuffled.into_iter().enumerate() {
        if i % 2 == 0 {
            player.append_bottom([card]);
        } else {
            opponent.append_bottom([card]);
        }
    }

    (player, opponent)
}

/// An ordered deck of cards, drawn from the front.
///
/// ```
/// use war_engine::cards::Deck;
/// use war_engine::core::{DeckTemplate, GameRng};
///
/// let deck = Deck::from_template(&DeckTemplate::Standard);
/// let (player, opponent) = deck.deal(&mut GameRng::new(1));
///
/// assert_eq!(player.len(), 26);
/// assert_eq!(opponent.len(), 26);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create a deck from cards in draw order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards: cards.into() }
    }

    /// Build a deck from a template.
    #[must_use]
    pub fn from_template(template: &DeckTemplate) -> Self {
        Self::new(template.cards())
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Draw the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Take the cards out, consuming the deck.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards.into()
    }

    /// Shuffle and deal the whole deck, consuming it.
    #[must_use]
    pub fn deal(self, rng: &mut GameRng) -> (Hand, Hand) {
        let count = self.cards.len();
        let (player, opponent) = deal_alternating(shuffle(self.into_cards(), rng));
        debug!(count, player = player.len(), opponent = opponent.len(), "dealt deck");
        (player, opponent)
    }
}
