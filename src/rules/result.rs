//! Game outcomes.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The opponent's hand ran out.
    PlayerWins,
    /// The player's hand ran out.
    OpponentWins,
    /// Both hands ran out at the same check.
    Draw,
}

impl GameResult {
    /// Decide the game from the two hand sizes.
    ///
    /// Returns `None` while both hands still hold cards.
    #[must_use]
    pub fn from_hand_sizes(player: usize, opponent: usize) -> Option<Self> {
        match (player, opponent) {
            (0, 0) => Some(GameResult::Draw),
            (_, 0) => Some(GameResult::PlayerWins),
            (0, _) => Some(GameResult::OpponentWins),
            _ => None,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::PlayerWins => Some(Side::Player),
            GameResult::OpponentWins => Some(Side::Opponent),
            GameResult::Draw => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == Some(side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::PlayerWins => write!(f, "Player Won"),
            GameResult::OpponentWins => write!(f, "Opponent Won"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Whether a game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }

    /// The result, if finished.
    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameStatus::Finished(result) => Some(result),
            GameStatus::InProgress => None,
        }
    }
}

impl From<Option<GameResult>> for GameStatus {
    fn from(result: Option<GameResult>) -> Self {
        result.map_or(GameStatus::InProgress, GameStatus::Finished)
    }
}
