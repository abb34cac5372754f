//! Game statistics for diagnostics and balancing.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Statistics collected while a game runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Rounds started.
    pub rounds: u32,

    /// Rounds won, per side.
    pub round_wins: SideMap<u32>,

    /// Ties resolved by escalating, across the whole game.
    pub wars: u32,

    /// Most ties in a single round.
    pub deepest_war: u32,

    /// Largest pot transferred by a single round.
    pub largest_pot: usize,
}

impl GameStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Counters saturate: an unlimited game can outrun a u32
    pub(crate) fn record_round_start(&mut self) {
        self.rounds = self.rounds.saturating_add(1);
    }

    pub(crate) fn record_war(&mut self, depth: u32) {
        self.wars = self.wars.saturating_add(1);
        self.deepest_war = self.deepest_war.max(depth);
    }

    pub(crate) fn record_win(&mut self, winner: Side, pot: usize) {
        self.round_wins[winner] = self.round_wins[winner].saturating_add(1);
        self.largest_pot = self.largest_pot.max(pot);
    }

    /// Fraction of decided rounds won by `side`.
    #[must_use]
    pub fn win_rate(&self, side: Side) -> f64 {
        let decided: f64 = Side::ALL.iter().map(|&s| f64::from(self.round_wins[s])).sum();
        if decided == 0.0 {
            0.0
        } else {
            f64::from(self.round_wins[side]) / decided
        }
    }

    /// Average ties per started round.
    #[must_use]
    pub fn wars_per_round(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wars as f64 / self.rounds as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = GameStats::new();
        assert_eq!(stats.rounds, 0);
        assert_eq!(stats.wars, 0);
        assert_eq!(stats.win_rate(Side::Player), 0.0);
        assert_eq!(stats.wars_per_round(), 0.0);
    }

    #[test]
    fn test_stats_recording() {
        let mut stats = GameStats::new();
        stats.record_round_start();
        stats.record_war(1);
        stats.record_war(2);
        stats.record_win(Side::Opponent, 6);
        stats.record_round_start();
        stats.record_win(Side::Player, 2);
        stats.record_round_start();
        stats.record_win(Side::Opponent, 2);

        assert_eq!(stats.rounds, 3);
        assert_eq!(stats.wars, 2);
        assert_eq!(stats.deepest_war, 2);
        assert_eq!(stats.largest_pot, 6);
        assert_eq!(stats.round_wins[Side::Opponent], 2);
        assert!((stats.win_rate(Side::Player) - 1.0 / 3.0).abs() < 1e-9);
        assert!((stats.wars_per_round() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = GameStats::new();
        stats.rounds = u32::MAX;
        stats.wars = u32::MAX;
        stats.round_wins[Side::Player] = u32::MAX;

        stats.record_round_start();
        stats.record_war(1);
        stats.record_win(Side::Player, 2);

        assert_eq!(stats.rounds, u32::MAX);
        assert_eq!(stats.wars, u32::MAX);
        assert_eq!(stats.round_wins[Side::Player], u32::MAX);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = GameStats::new();
        stats.record_round_start();
        stats.record_war(3);

        stats.reset();

        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = GameStats::new();
        stats.rounds = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: GameStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
