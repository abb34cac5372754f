//! Headless presentation port that records every request.
//!
//! Useful for tests, simulations and shells that replay the log into their own
//! animation system later.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

use super::{EffectHandle, PresentationPort};
use crate::cards::Card;
use crate::core::Side;
use crate::rules::GameResult;

/// One call made on the port.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresentationEvent {
    Dealt {
        player_size: usize,
        opponent_size: usize,
    },
    Reveal {
        handle: EffectHandle,
        player_card: Card,
        opponent_card: Card,
    },
    Stashed {
        player_card: Card,
        opponent_card: Card,
    },
    MoveToPile {
        handle: EffectHandle,
        cards: SmallVec<[Card; 4]>,
        destination: Side,
    },
    HandSizes {
        player_size: usize,
        opponent_size: usize,
    },
    GameOver(GameResult),
}

impl PresentationEvent {
    /// The effect handle, for the two requests that allocate one.
    #[must_use]
    pub fn handle(&self) -> Option<EffectHandle> {
        match self {
            PresentationEvent::Reveal { handle, .. } | PresentationEvent::MoveToPile { handle, .. } => {
                Some(*handle)
            }
            _ => None,
        }
    }
}

/// Port that hands out sequential handles and keeps a log.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    next_handle: u64,
    events: Vec<PresentationEvent>,
}

impl RecordingPresenter {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Take the log, leaving it empty. Handle numbering continues.
    pub fn drain_events(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    /// The handle returned by the most recent request.
    #[must_use]
    pub fn last_handle(&self) -> Option<EffectHandle> {
        self.events.iter().rev().find_map(PresentationEvent::handle)
    }

    /// Number of handles issued.
    #[must_use]
    pub fn effects_requested(&self) -> u64 {
        self.next_handle
    }

    fn allocate(&mut self) -> EffectHandle {
        self.next_handle += 1;
        EffectHandle::new(self.next_handle)
    }
}

impl PresentationPort for RecordingPresenter {
    fn request_reveal(&mut self, player_card: Card, opponent_card: Card) -> EffectHandle {
        let handle = self.allocate();
        self.events.push(PresentationEvent::Reveal {
            handle,
            player_card,
            opponent_card,
        });
        handle
    }

    fn request_move_to_pile(&mut self, cards: &[Card], destination: Side) -> EffectHandle {
        let handle = self.allocate();
        self.events.push(PresentationEvent::MoveToPile {
            handle,
            cards: SmallVec::from_slice(cards),
            destination,
        });
        handle
    }

    fn cards_dealt(&mut self, player_size: usize, opponent_size: usize) {
        self.events.push(PresentationEvent::Dealt {
            player_size,
            opponent_size,
        });
    }

    fn cards_stashed(&mut self, player_card: Card, opponent_card: Card) {
        self.events.push(PresentationEvent::Stashed {
            player_card,
            opponent_card,
        });
    }

    fn hand_sizes_changed(&mut self, player_size: usize, opponent_size: usize) {
        self.events.push(PresentationEvent::HandSizes {
            player_size,
            opponent_size,
        });
    }

    fn game_over(&mut self, result: GameResult) {
        self.events.push(PresentationEvent::GameOver(result));
    }
}
