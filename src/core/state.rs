//! Engine state: the authoritative phase and read-only views of it.
//!
//! ## Phase
//!
//! The single source of truth for where the round machine is. Presentation
//! never changes it; only `request_play_round` and completion callbacks do.
//!
//! ## EngineFlags
//!
//! The four-flag view (`round_in_progress`, `war_in_progress`,
//! `cards_dealt`, `game_over`) that shells typically bind UI to.
//!
//! ## EngineSnapshot
//!
//! A serializable copy of everything the engine holds, for inspection and
//! tests.

use serde::{Deserialize, Serialize};

use super::side::{Side, SideMap};
use crate::cards::Card;
use crate::presentation::EffectHandle;
use crate::rules::{GameResult, GameStats};

/// Where the round machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Hands have not been dealt yet.
    Undealt,
    /// Waiting for the next round request.
    Idle,
    /// Round cards revealed, waiting for the reveal to finish.
    RoundPending,
    /// War cards revealed, waiting for the reveal to finish.
    WarPending,
    /// Winnings are moving to the winner's pile.
    TransferPending { winner: Side },
    /// Terminal.
    GameOver(GameResult),
}

impl Phase {
    /// Is a presentation effect outstanding?
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            Phase::RoundPending | Phase::WarPending | Phase::TransferPending { .. }
        )
    }

    /// The final result, once the game is over.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }
}

/// Flag view of the engine state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineFlags {
    pub round_in_progress: bool,
    /// True from the first tie of a round until its pot is transferred.
    pub war_in_progress: bool,
    pub cards_dealt: bool,
    pub game_over: bool,
}

impl EngineFlags {
    /// Derive the flags from the phase and the current war depth.
    #[must_use]
    pub fn new(phase: Phase, war_depth: usize) -> Self {
        Self {
            round_in_progress: phase.is_pending(),
            war_in_progress: phase == Phase::WarPending || (phase.is_pending() && war_depth > 0),
            cards_dealt: phase != Phase::Undealt,
            game_over: matches!(phase, Phase::GameOver(_)),
        }
    }
}

/// Complete copy of the engine's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub phase: Phase,

    /// Hands, front (next to draw) first.
    pub hands: SideMap<Vec<Card>>,

    /// Face-down war cards, in stash order.
    pub stash: SideMap<Vec<Card>>,

    /// The face-up pair drawn this step, if any.
    pub in_flight: Option<SideMap<Card>>,

    /// Outstanding presentation effect.
    pub pending: Option<EffectHandle>,

    /// Cards the game was dealt with.
    pub deck_size: usize,

    pub stats: GameStats,
}

impl EngineSnapshot {
    /// Total cards held across hands, stash and the in-flight pair.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        let in_hands: usize = self.hands.iter().map(|(_, h)| h.len()).sum();
        let in_stash: usize = self.stash.iter().map(|(_, s)| s.len()).sum();
        let in_flight = if self.in_flight.is_some() { 2 } else { 0 };
        in_hands + in_stash + in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_phase_pending() {
        assert!(!Phase::Undealt.is_pending());
        assert!(!Phase::Idle.is_pending());
        assert!(Phase::RoundPending.is_pending());
        assert!(Phase::WarPending.is_pending());
        assert!(Phase::TransferPending { winner: Side::Player }.is_pending());
        assert!(!Phase::GameOver(GameResult::Draw).is_pending());
    }

    #[test]
    fn test_phase_result() {
        assert_eq!(Phase::Idle.result(), None);
        assert_eq!(
            Phase::GameOver(GameResult::OpponentWins).result(),
            Some(GameResult::OpponentWins)
        );
    }

    #[test]
    fn test_flags() {
        let flags = EngineFlags::new(Phase::Undealt, 0);
        assert_eq!(flags, EngineFlags::default());

        let flags = EngineFlags::new(Phase::Idle, 0);
        assert!(flags.cards_dealt);
        assert!(!flags.round_in_progress);

        let flags = EngineFlags::new(Phase::WarPending, 1);
        assert!(flags.round_in_progress);
        assert!(flags.war_in_progress);

        // Pot still moving after a war
        let flags = EngineFlags::new(Phase::TransferPending { winner: Side::Opponent }, 2);
        assert!(flags.war_in_progress);

        let flags = EngineFlags::new(Phase::GameOver(GameResult::Draw), 1);
        assert!(flags.game_over);
        assert!(!flags.round_in_progress);
        assert!(!flags.war_in_progress);
    }

    #[test]
    fn test_snapshot_accounting() {
        let card = Card::new(5, Suit::Clubs);
        let snapshot = EngineSnapshot {
            phase: Phase::WarPending,
            hands: SideMap::from_parts(vec![card; 3], vec![card; 1]),
            stash: SideMap::from_parts(vec![card; 2], vec![card; 2]),
            in_flight: Some(SideMap::with_value(card)),
            pending: Some(EffectHandle::new(1)),
            deck_size: 10,
            stats: GameStats::default(),
        };

        assert_eq!(snapshot.cards_accounted(), 10);

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: EngineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
