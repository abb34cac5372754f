//! War game driver.

use tracing::{debug, info};

use crate::cards::{Card, Deck};
use crate::core::error::{EngineError, Result};
use crate::core::{DeckTemplate, EngineConfig, GameRng, Phase, Side};
use crate::presentation::{EffectHandle, PresentationPort};
use crate::rules::{GameResult, GameStatus, Rejection, RoundEngine, RoundProgress, RoundRequest};

/// How a headless round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Nothing happened.
    Ignored(Rejection),
    /// The round resolved and the game goes on.
    Completed {
        winner: Side,
        hand_sizes: (usize, usize),
        /// Ties before the decisive pair.
        wars: u32,
    },
    /// The game ended during (or before) this round.
    Finished(GameResult),
}

/// A game of War: a deck, a seeded RNG and the round engine.
pub struct WarGame<P> {
    config: EngineConfig,
    seed: u64,
    rng: GameRng,
    engine: RoundEngine<P>,
}

/// Builder for creating a WarGame.
#[derive(Clone, Debug, Default)]
pub struct WarGameBuilder {
    config: EngineConfig,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn template(mut self, template: DeckTemplate) -> Self {
        self.config.template = template;
        self
    }

    pub fn round_limit(mut self, limit: u32) -> Self {
        self.config.round_limit = limit;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game. Cards are not dealt until `deal_and_start`.
    pub fn build<P: PresentationPort>(self, port: P) -> WarGame<P> {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), cards = self.config.template.len(), "game built");

        WarGame {
            config: self.config,
            seed: rng.seed(),
            rng: rng.for_context("shuffle"),
            engine: RoundEngine::new(port),
        }
    }
}

impl<P: PresentationPort> WarGame<P> {
    /// Create a game over `template` with a fresh random seed.
    pub fn initialize(template: Vec<Card>, port: P) -> Self {
        WarGameBuilder::new()
            .template(DeckTemplate::Custom(template))
            .build(port)
    }

    /// Shuffle the deck and deal it alternately, player first.
    pub fn deal_and_start(&mut self) -> Result<()> {
        let phase = self.engine.phase();
        if phase != Phase::Undealt {
            return Err(EngineError::InvalidStateTransition { phase, action: "deal" });
        }

        let mut deck = Deck::from_template(&self.config.template);
        deck.shuffle(&mut self.rng);
        info!(cards = deck.len(), "dealing");
        self.engine.deal(deck.into_cards())
    }

    /// Ask the engine to start a round. See `RoundEngine::request_play_round`.
    pub fn request_play_round(&mut self) -> Result<RoundRequest> {
        self.engine.request_play_round()
    }

    /// Report a finished presentation effect. See `RoundEngine::complete_effect`.
    pub fn complete_effect(&mut self, handle: EffectHandle) -> Result<RoundProgress> {
        self.engine.complete_effect(handle)
    }

    /// Play one round, completing every effect immediately.
    ///
    /// If a round is already pending it is finished instead of starting a new
    /// one.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        let mut handle = match self.engine.pending_effect() {
            Some(handle) => handle,
            None => match self.engine.request_play_round()? {
                RoundRequest::Started(handle) => handle,
                RoundRequest::Ignored(rejection) => return Ok(RoundOutcome::Ignored(rejection)),
                RoundRequest::Finished(result) => return Ok(RoundOutcome::Finished(result)),
            },
        };

        let mut wars = self.engine.war_depth();
        loop {
            match self.engine.complete_effect(handle)? {
                RoundProgress::War { depth, handle: next } => {
                    wars = depth;
                    handle = next;
                }
                RoundProgress::Awarded { handle: next, .. } => handle = next,
                RoundProgress::RoundComplete { winner, hand_sizes } => {
                    return Ok(RoundOutcome::Completed {
                        winner,
                        hand_sizes,
                        wars,
                    });
                }
                RoundProgress::Finished(result) => return Ok(RoundOutcome::Finished(result)),
            }
        }
    }

    /// Deal if needed, then play rounds until the game ends or the round
    /// limit is reached.
    pub fn play_to_completion(&mut self) -> Result<GameStatus> {
        if self.engine.phase() == Phase::Undealt {
            self.deal_and_start()?;
        }

        let limit = self.config.round_limit;
        loop {
            if let GameStatus::Finished(result) = self.engine.current_result() {
                return Ok(GameStatus::Finished(result));
            }
            if limit != 0 && self.engine.stats().rounds >= limit {
                info!(limit, "round limit reached");
                return Ok(GameStatus::InProgress);
            }
            if let RoundOutcome::Finished(result) = self.play_round()? {
                return Ok(GameStatus::Finished(result));
            }
        }
    }

    // === Queries ===

    /// `(player, opponent)` hand sizes.
    pub fn report_hand_sizes(&self) -> (usize, usize) {
        self.engine.report_hand_sizes()
    }

    pub fn current_result(&self) -> GameStatus {
        self.engine.current_result()
    }

    /// The shuffle seed, for replaying this game.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn engine(&self) -> &RoundEngine<P> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut RoundEngine<P> {
        &mut self.engine
    }

    pub fn port(&self) -> &P {
        self.engine.port()
    }
}
