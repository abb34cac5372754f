//! # war-engine
//!
//! The rules engine of the card game War, with presentation kept outside.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Driven**: Every visible step (reveal, pile move) is a
//!    request to a `PresentationPort`. The engine suspends until the shell
//!    reports the effect complete, then advances exactly one step.
//!
//! 2. **One Source of Truth**: The engine's `Phase` is authoritative. Hands,
//!    stash and in-flight cards always add up to the dealt deck.
//!
//! 3. **No Recursion**: Wars of any depth advance one completion at a time.
//!
//! ## Architecture
//!
//! ```text
//! WarGame (driver) --> RoundEngine --> PresentationPort (shell)
//!                          |                 |
//!                          +<-- complete_effect(handle)
//! ```
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, phase/snapshot, errors
//! - `cards`: Cards and the deck
//! - `zones`: Hands and the war stash
//! - `rules`: Round engine, results, statistics
//! - `presentation`: The port trait and a recording implementation
//! - `games`: The `WarGame` driver
//!
//! ## Example
//!
//! ```
//! use war_engine::{GameStatus, RecordingPresenter, WarGameBuilder};
//!
//! let mut game = WarGameBuilder::new()
//!     .seed(42)
//!     .round_limit(10_000)
//!     .build(RecordingPresenter::new());
//!
//! game.deal_and_start().unwrap();
//! let status = game.play_to_completion().unwrap();
//!
//! let (player, opponent) = game.report_hand_sizes();
//! if let GameStatus::Finished(_) = status {
//!     assert!(player == 0 || opponent == 0);
//! }
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod presentation;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, GameRngState,
    DeckTemplate, EngineConfig,
    EngineFlags, EngineSnapshot, Phase,
    EngineError, Result,
};

pub use crate::cards::{Card, Deck, Suit};

pub use crate::zones::{Hand, WarStash};

pub use crate::rules::{
    GameResult, GameStats, GameStatus,
    Rejection, RoundEngine, RoundProgress, RoundRequest,
};

pub use crate::presentation::{EffectHandle, PresentationEvent, PresentationPort, RecordingPresenter};

pub use crate::games::war::{RoundOutcome, WarGame, WarGameBuilder};
