//! Presentation port.
//!
//! The engine never animates anything itself. When a step of a round should
//! be shown, it asks the port for an effect and gets back an `EffectHandle`.
//! The shell plays the effect however it likes and, once it is done, calls
//! `RoundEngine::complete_effect` with that handle. The engine waits on
//! exactly one handle at a time.
//!
//! Besides the two effect requests, the port receives fire-and-forget
//! notifications with default no-op bodies, so a minimal port implements only
//! `request_reveal` and `request_move_to_pile`.
//!
//! ## Example
//!
//! ```
//! use war_engine::cards::Card;
//! use war_engine::core::Side;
//! use war_engine::presentation::{EffectHandle, PresentationPort};
//!
//! #[derive(Default)]
//! struct Counter {
//!     next: u64,
//! }
//!
//! impl PresentationPort for Counter {
//!     fn request_reveal(&mut self, _player: Card, _opponent: Card) -> EffectHandle {
//!         self.next += 1;
//!         EffectHandle::new(self.next)
//!     }
//!
//!     fn request_move_to_pile(&mut self, _cards: &[Card], _destination: Side) -> EffectHandle {
//!         self.next += 1;
//!         EffectHandle::new(self.next)
//!     }
//! }
//! ```

mod recorder;

pub use recorder::{PresentationEvent, RecordingPresenter};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Side;
use crate::rules::GameResult;

/// Opaque identifier for a requested presentation effect.
///
/// Allocated by the port; the engine only compares handles for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectHandle(pub u64);

impl EffectHandle {
    /// Create a handle.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Sink for the engine's presentation requests.
///
/// ## Contract
///
/// - Every handle returned from a `request_*` call must eventually be passed
///   back to `complete_effect` exactly once. The engine has no timeout; a
///   handle that never completes leaves the round pending forever.
/// - Completions must be delivered on the engine's thread of control, never
///   from inside a `request_*` call.
pub trait PresentationPort {
    /// Show both sides' face-up cards.
    fn request_reveal(&mut self, player_card: Card, opponent_card: Card) -> EffectHandle;

    /// Move won cards onto `destination`'s pile, in the order given.
    fn request_move_to_pile(&mut self, cards: &[Card], destination: Side) -> EffectHandle;

    /// Hands were dealt.
    fn cards_dealt(&mut self, _player_size: usize, _opponent_size: usize) {}

    /// A tied pair was turned face down into the war stash.
    fn cards_stashed(&mut self, _player_card: Card, _opponent_card: Card) {}

    /// Hand sizes changed at the end of a round.
    fn hand_sizes_changed(&mut self, _player_size: usize, _opponent_size: usize) {}

    /// The game ended. Called once.
    fn game_over(&mut self, _result: GameResult) {}
}

impl<P: PresentationPort + ?Sized> PresentationPort for &mut P {
    fn request_reveal(&mut self, player_card: Card, opponent_card: Card) -> EffectHandle {
        (**self).request_reveal(player_card, opponent_card)
    }

    fn request_move_to_pile(&mut self, cards: &[Card], destination: Side) -> EffectHandle {
        (**self).request_move_to_pile(cards, destination)
    }

    fn cards_dealt(&mut self, player_size: usize, opponent_size: usize) {
        (**self).cards_dealt(player_size, opponent_size);
    }

    fn cards_stashed(&mut self, player_card: Card, opponent_card: Card) {
        (**self).cards_stashed(player_card, opponent_card);
    }

    fn hand_sizes_changed(&mut self, player_size: usize, opponent_size: usize) {
        (**self).hand_sizes_changed(player_size, opponent_size);
    }

    fn game_over(&mut self, result: GameResult) {
        (**self).game_over(result);
    }
}

impl<P: PresentationPort + ?Sized> PresentationPort for Box<P> {
    fn request_reveal(&mut self, player_card: Card, opponent_card: Card) -> EffectHandle {
        (**self).request_reveal(player_card, opponent_card)
    }

    fn request_move_to_pile(&mut self, cards: &[Card], destination: Side) -> EffectHandle {
        (**self).request_move_to_pile(cards, destination)
    }

    fn cards_dealt(&mut self, player_size: usize, opponent_size: usize) {
        (**self).cards_dealt(player_size, opponent_size);
    }

    fn cards_stashed(&mut self, player_card: Card, opponent_card: Card) {
        (**self).cards_stashed(player_card, opponent_card);
    }

    fn hand_sizes_changed(&mut self, player_size: usize, opponent_size: usize) {
        (**self).hand_sizes_changed(player_size, opponent_size);
    }

    fn game_over(&mut self, result: GameResult) {
        (**self).game_over(result);
    }
}
