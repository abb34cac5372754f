//! Engine configuration.
//!
//! Shells configure a game at startup with:
//! - `DeckTemplate`: which cards make up the deck
//! - `EngineConfig`: template, seed and round limit

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Source of the cards a game is dealt from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckTemplate {
    /// 52 cards: values 2..=14 (ace high) in four suits.
    #[default]
    Standard,
    /// 40 cards: values 1..=10 in four suits.
    Numeric,
    /// Any card list supplied by the shell, in template order.
    Custom(Vec<Card>),
}

impl DeckTemplate {
    /// Build the template's cards, suit by suit, ascending value.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        match self {
            DeckTemplate::Standard => Self::suited(2..=14),
            DeckTemplate::Numeric => Self::suited(1..=10),
            DeckTemplate::Custom(cards) => cards.clone(),
        }
    }

    /// Number of cards the template produces.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            DeckTemplate::Standard => 52,
            DeckTemplate::Numeric => 40,
            DeckTemplate::Custom(cards) => cards.len(),
        }
    }

    /// Does the template produce no cards?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn suited(values: std::ops::RangeInclusive<u8>) -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| values.clone().map(move |value| Card::new(value, suit)))
            .collect()
    }
}

/// Rounds `play_to_completion` runs before giving up on a game.
///
/// Shuffled games of War frequently cycle through the same hands forever.
pub const DEFAULT_ROUND_LIMIT: u32 = 10_000;

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shuffle seed. `None` draws a fresh seed from the OS.
    /// Same seed produces the same deal and the same game.
    pub seed: Option<u64>,

    /// Deck to deal from.
    pub template: DeckTemplate,

    /// Maximum rounds `play_to_completion` will run (0 = unlimited).
    /// Defaults to `DEFAULT_ROUND_LIMIT`.
    pub round_limit: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            template: DeckTemplate::Standard,
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the deck template.
    #[must_use]
    pub fn with_template(mut self, template: DeckTemplate) -> Self {
        self.template = template;
        self
    }

    /// Set the round limit for headless play.
    #[must_use]
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = limit;
        self
    }
}
