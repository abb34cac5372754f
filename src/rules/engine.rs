//! The War round engine.
//!
//! A strictly sequential state machine driven by two kinds of events: a round
//! request from the shell, and the completion of the presentation effect the
//! engine last asked for. Every visual step is a suspension point: the engine
//! requests an effect, records its handle and does nothing else until that
//! handle comes back through `complete_effect`.
//!
//! ```text
//! Undealt --deal--> Idle --request--> RoundPending --tie--> WarPending --tie--> ...
//!                    ^                      |                    |
//!                    |                      +------unequal-------+
//!                    |                      v
//!                    +----complete---- TransferPending
//!
//! any game-over check that finds an empty hand --> GameOver
//! ```
//!
//! Wars nest without bound but never recurse: each tie stashes the pair, draws
//! a new face-up pair and returns to the caller in `WarPending`.
//!
//! The game-over check runs before every draw that could fail (round start and
//! after stashing a tie) and after every transfer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::result::{GameResult, GameStatus};
use super::stats::GameStats;
use crate::cards::{deal_alternating, Card};
use crate::core::error::{EngineError, Result};
use crate::core::{EngineFlags, EngineSnapshot, Phase, Side, SideMap};
use crate::presentation::{EffectHandle, PresentationPort};
use crate::zones::{Hand, WarStash};

/// Why a round request did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Hands have not been dealt.
    NotDealt,
    /// A presentation effect is still outstanding.
    RoundInProgress,
    /// The game already ended.
    GameOver(GameResult),
}

/// Answer to `request_play_round`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundRequest {
    /// Cards were drawn and a reveal requested; complete this handle next.
    Started(EffectHandle),
    /// No-op; state is unchanged.
    Ignored(Rejection),
    /// The pre-round game-over check ended the game.
    Finished(GameResult),
}

/// Answer to `complete_effect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundProgress {
    /// A tie was stashed and a new face-up pair revealed.
    War { depth: u32, handle: EffectHandle },
    /// The pot went to `winner`; the move is being presented.
    Awarded {
        winner: Side,
        cards: usize,
        handle: EffectHandle,
    },
    /// The round is over and the engine is idle again.
    RoundComplete {
        winner: Side,
        hand_sizes: (usize, usize),
    },
    /// The game ended.
    Finished(GameResult),
}

impl RoundProgress {
    /// The handle the engine now waits on, if any.
    #[must_use]
    pub fn pending_effect(&self) -> Option<EffectHandle> {
        match self {
            RoundProgress::War { handle, .. } | RoundProgress::Awarded { handle, .. } => Some(*handle),
            _ => None,
        }
    }
}

/// The War state machine.
///
/// Owns both hands, the war stash and the presentation port. Nothing outside
/// the engine mutates them.
///
/// ## Example
///
/// ```
/// use war_engine::cards::{Card, Suit};
/// use war_engine::presentation::RecordingPresenter;
/// use war_engine::rules::{RoundEngine, RoundProgress, RoundRequest};
/// use war_engine::core::Side;
///
/// let mut engine = RoundEngine::from_hands(
///     [Card::new(10, Suit::Clubs)],
///     [Card::new(4, Suit::Hearts)],
///     RecordingPresenter::new(),
/// );
///
/// let RoundRequest::Started(reveal) = engine.request_play_round().unwrap() else {
///     unreachable!()
/// };
/// let RoundProgress::Awarded { winner, handle, .. } = engine.complete_effect(reveal).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(winner, Side::Player);
///
/// engine.complete_effect(handle).unwrap();
/// assert_eq!(engine.report_hand_sizes(), (2, 0));
/// ```
#[derive(Debug)]
pub struct RoundEngine<P> {
    port: P,
    hands: SideMap<Hand>,
    stash: WarStash,
    /// Face-up pair drawn for the current comparison.
    in_flight: Option<SideMap<Card>>,
    phase: Phase,
    pending: Option<EffectHandle>,
    /// Ties so far in the current round.
    war_depth: u32,
    deck_size: usize,
    stats: GameStats,
}

impl<P: PresentationPort> RoundEngine<P> {
    /// Create an engine waiting to be dealt.
    #[must_use]
    pub fn new(port: P) -> Self {
        Self {
            port,
            hands: SideMap::new(Hand::new),
            stash: WarStash::new(),
            in_flight: None,
            phase: Phase::Undealt,
            pending: None,
            war_depth: 0,
            deck_size: 0,
            stats: GameStats::new(),
        }
    }

    /// Create an engine with explicit hands, front card first, ready to play.
    #[must_use]
    pub fn from_hands(
        player: impl IntoIterator<Item = Card>,
        opponent: impl IntoIterator<Item = Card>,
        port: P,
    ) -> Self {
        let mut engine = Self::new(port);
        engine.start_with(
            Hand::from_cards(Side::Player, player),
            Hand::from_cards(Side::Opponent, opponent),
        );
        engine
    }

    /// Deal a shuffled deck alternately, player first.
    pub fn deal(&mut self, shuffled: Vec<Card>) -> Result<()> {
        if self.phase != Phase::Undealt {
            return Err(EngineError::InvalidStateTransition {
                phase: self.phase,
                action: "deal",
            });
        }
        let (player, opponent) = deal_alternating(shuffled);
        self.start_with(player, opponent);
        Ok(())
    }

    fn start_with(&mut self, player: Hand, opponent: Hand) {
        self.deck_size = player.len() + opponent.len();
        self.hands = SideMap::from_parts(player, opponent);
        self.phase = Phase::Idle;

        let (player_size, opponent_size) = self.report_hand_sizes();
        info!(player_size, opponent_size, "cards dealt");
        self.port.cards_dealt(player_size, opponent_size);
    }

    // === Round flow ===

    /// Start a round.
    ///
    /// Ignored (state untouched) before dealing, while an effect is pending
    /// and after the game ended. Otherwise checks for game over, then draws
    /// one card per side and requests their reveal.
    pub fn request_play_round(&mut self) -> Result<RoundRequest> {
        let rejection = match self.phase {
            Phase::Undealt => Some(Rejection::NotDealt),
            Phase::GameOver(result) => Some(Rejection::GameOver(result)),
            phase if phase.is_pending() => Some(Rejection::RoundInProgress),
            _ => None,
        };
        if let Some(rejection) = rejection {
            warn!(?rejection, "round request ignored");
            return Ok(RoundRequest::Ignored(rejection));
        }

        if let Some(result) = self.evaluate_game_over() {
            return Ok(RoundRequest::Finished(result));
        }

        self.war_depth = 0;
        self.stats.record_round_start();
        let handle = self.draw_and_reveal()?;
        self.phase = Phase::RoundPending;
        debug!(round = self.stats.rounds, %handle, "round started");
        Ok(RoundRequest::Started(handle))
    }

    /// Report that the presentation effect `handle` finished.
    pub fn complete_effect(&mut self, handle: EffectHandle) -> Result<RoundProgress> {
        let Some(expected) = self.pending else {
            warn!(%handle, phase = ?self.phase, "completion with nothing pending");
            return Err(EngineError::InvalidStateTransition {
                phase: self.phase,
                action: "complete an effect",
            });
        };
        if expected != handle {
            warn!(%expected, received = %handle, "completion for a stale effect");
            return Err(EngineError::UnexpectedEffect {
                expected,
                received: handle,
            });
        }
        self.pending = None;

        match self.phase {
            Phase::RoundPending | Phase::WarPending => self.resolve_contest(),
            Phase::TransferPending { winner } => Ok(self.finish_transfer(winner)),
            phase => Err(EngineError::InvalidStateTransition {
                phase,
                action: "complete an effect",
            }),
        }
    }

    fn draw_and_reveal(&mut self) -> Result<EffectHandle> {
        // Both hands are checked before either is touched
        self.hands[Side::Player].peek_top()?;
        self.hands[Side::Opponent].peek_top()?;
        let player_card = self.hands[Side::Player].pop_top()?;
        let opponent_card = self.hands[Side::Opponent].pop_top()?;

        self.in_flight = Some(SideMap::from_parts(player_card, opponent_card));
        let handle = self.port.request_reveal(player_card, opponent_card);
        self.pending = Some(handle);
        Ok(handle)
    }

    fn resolve_contest(&mut self) -> Result<RoundProgress> {
        self.stash.check_balance()?;
        let pair = self.in_flight.take().ok_or(EngineError::InvalidStateTransition {
            phase: self.phase,
            action: "resolve a comparison",
        })?;

        let (player_card, opponent_card) = pair.into_parts();
        debug!(player = %player_card, opponent = %opponent_card, "comparing");

        if player_card.ties(&opponent_card) {
            self.escalate(player_card, opponent_card)
        } else if player_card.beats(&opponent_card) {
            self.award(Side::Player, player_card, opponent_card)
        } else {
            self.award(Side::Opponent, player_card, opponent_card)
        }
    }

    /// Give the stash and the decisive pair to `winner`.
    ///
    /// Order: player stash, opponent stash, player card, opponent card.
    fn award(&mut self, winner: Side, player_card: Card, opponent_card: Card) -> Result<RoundProgress> {
        let (player_stash, opponent_stash) = self.stash.drain()?;

        let mut winnings: SmallVec<[Card; 4]> =
            SmallVec::with_capacity(player_stash.len() + opponent_stash.len() + 2);
        winnings.extend(player_stash);
        winnings.extend(opponent_stash);
        winnings.push(player_card);
        winnings.push(opponent_card);

        self.hands[winner].append_bottom(winnings.iter().copied());
        self.stats.record_win(winner, winnings.len());

        let handle = self.port.request_move_to_pile(&winnings, winner);
        self.pending = Some(handle);
        self.phase = Phase::TransferPending { winner };
        debug!(%winner, loser = %winner.other(), cards = winnings.len(), wars = self.war_depth, "round won");

        Ok(RoundProgress::Awarded {
            winner,
            cards: winnings.len(),
            handle,
        })
    }

    fn escalate(&mut self, player_card: Card, opponent_card: Card) -> Result<RoundProgress> {
        self.stash.add(player_card, opponent_card);
        self.port.cards_stashed(player_card, opponent_card);
        self.war_depth += 1;
        self.stats.record_war(self.war_depth);
        debug!(depth = self.war_depth, value = player_card.value, "war");

        // A side that cannot draw loses the game, not just the war
        if let Some(result) = self.evaluate_game_over() {
            return Ok(RoundProgress::Finished(result));
        }

        let handle = self.draw_and_reveal()?;
        self.phase = Phase::WarPending;
        Ok(RoundProgress::War {
            depth: self.war_depth,
            handle,
        })
    }

    fn finish_transfer(&mut self, winner: Side) -> RoundProgress {
        self.phase = Phase::Idle;
        self.war_depth = 0;

        let hand_sizes = self.report_hand_sizes();
        self.port.hand_sizes_changed(hand_sizes.0, hand_sizes.1);

        match self.evaluate_game_over() {
            Some(result) => RoundProgress::Finished(result),
            None => RoundProgress::RoundComplete { winner, hand_sizes },
        }
    }

    // === Game over ===

    /// Check whether either hand is empty and end the game if so.
    ///
    /// While an effect is pending, cards are in flight and the hands alone do
    /// not decide the game; this then only reports an existing result.
    pub fn check_game_over(&mut self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            Phase::Idle => self.evaluate_game_over(),
            _ => None,
        }
    }

    fn evaluate_game_over(&mut self) -> Option<GameResult> {
        if let Phase::GameOver(result) = self.phase {
            return Some(result);
        }

        let (player_size, opponent_size) = self.report_hand_sizes();
        let result = GameResult::from_hand_sizes(player_size, opponent_size)?;

        self.phase = Phase::GameOver(result);
        self.pending = None;
        info!(
            %result,
            rounds = self.stats.rounds,
            wars = self.stats.wars,
            stashed = self.stash.total(),
            "game over"
        );
        self.port.game_over(result);
        Some(result)
    }

    // === Queries ===

    /// `(player, opponent)` hand sizes.
    #[must_use]
    pub fn report_hand_sizes(&self) -> (usize, usize) {
        (self.hands[Side::Player].len(), self.hands[Side::Opponent].len())
    }

    #[must_use]
    pub fn current_result(&self) -> GameStatus {
        GameStatus::from(self.phase.result())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn flags(&self) -> EngineFlags {
        EngineFlags::new(self.phase, self.war_depth as usize)
    }

    /// The handle the engine is waiting on.
    #[must_use]
    pub fn pending_effect(&self) -> Option<EffectHandle> {
        self.pending
    }

    /// The face-up pair currently being compared.
    #[must_use]
    pub fn in_flight(&self) -> Option<&SideMap<Card>> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn stash(&self) -> &WarStash {
        &self.stash
    }

    /// Ties so far in the current round.
    #[must_use]
    pub fn war_depth(&self) -> u32 {
        self.war_depth
    }

    /// Cards the game was dealt with.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Cards across hands, stash and the in-flight pair.
    ///
    /// Always equals `deck_size()`.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        let (player, opponent) = self.report_hand_sizes();
        let in_flight = if self.in_flight.is_some() { 2 } else { 0 };
        player + opponent + self.stash.total() + in_flight
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Copy the whole machine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.phase,
            hands: self.hands.map(Hand::to_vec),
            stash: SideMap::new(|side| self.stash.side(side).to_vec()),
            in_flight: self.in_flight,
            pending: self.pending,
            deck_size: self.deck_size,
            stats: self.stats.clone(),
        }
    }

    #[must_use]
    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Consume the engine, returning its port.
    pub fn into_port(self) -> P {
        self.port
    }
}
