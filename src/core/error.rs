//! Engine error type.
//!
//! Game over is never an error. A round requested at the wrong time is
//! reported as `RoundRequest::Ignored`, not as an error either. What remains
//! here are calls that break the state machine's contract and internal
//! invariant violations.

use thiserror::Error;

use super::side::Side;
use super::state::Phase;
use crate::presentation::EffectHandle;

/// Errors raised by the engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A draw was attempted from an empty hand outside a game-over-checked path.
    #[error("{side} hand is empty")]
    EmptyHand { side: Side },

    /// The operation is not valid in the current phase.
    #[error("cannot {action} while {phase:?}")]
    InvalidStateTransition { phase: Phase, action: &'static str },

    /// The war stashes no longer hold the same number of cards.
    #[error("war stash imbalance (player={player}, opponent={opponent})")]
    StashImbalance { player: usize, opponent: usize },

    /// A completion arrived for a handle that is not the outstanding one.
    #[error("completion for {received} while waiting on {expected}")]
    UnexpectedEffect {
        expected: EffectHandle,
        received: EffectHandle,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
