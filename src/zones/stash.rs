//! Face-down war cards held in escrow.
//!
//! Each tie adds one card per side, so both sides always hold the same
//! number of cards. The whole stash goes to whoever wins the war.

use crate::cards::Card;
use crate::core::error::{EngineError, Result};
use crate::core::{Side, SideMap};

/// Escrow for both sides' war cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarStash {
    cards: SideMap<Vec<Card>>,
}

impl WarStash {
    /// Create an empty stash.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stash one card per side.
    pub fn add(&mut self, player_card: Card, opponent_card: Card) {
        self.cards[Side::Player].push(player_card);
        self.cards[Side::Opponent].push(opponent_card);
    }

    /// Take both sides' cards, leaving the stash empty.
    ///
    /// On imbalance nothing is taken.
    pub fn drain(&mut self) -> Result<(Vec<Card>, Vec<Card>)> {
        self.check_balance()?;
        let player = std::mem::take(&mut self.cards[Side::Player]);
        let opponent = std::mem::take(&mut self.cards[Side::Opponent]);
        Ok((player, opponent))
    }

    /// Verify both sides hold the same number of cards.
    pub fn check_balance(&self) -> Result<()> {
        let player = self.cards[Side::Player].len();
        let opponent = self.cards[Side::Opponent].len();
        if player == opponent {
            Ok(())
        } else {
            Err(EngineError::StashImbalance { player, opponent })
        }
    }

    /// Cards stashed per side (the number of ties so far).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards[Side::Player].len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards[Side::Player].is_empty() && self.cards[Side::Opponent].is_empty()
    }

    /// Cards stashed across both sides.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards[Side::Player].len() + self.cards[Side::Opponent].len()
    }

    /// One side's stashed cards, in stash order.
    #[must_use]
    pub fn side(&self, side: Side) -> &[Card] {
        &self.cards[side]
    }

    #[cfg(test)]
    pub(crate) fn from_sides(player: Vec<Card>, opponent: Vec<Card>) -> Self {
        Self {
            cards: SideMap::from_parts(player, opponent),
        }
    }
}
