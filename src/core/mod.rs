//! Core engine types: sides, RNG, configuration, state and errors.
//!
//! These are the building blocks every other module leans on. Nothing here
//! knows the rules of War.

pub mod side;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{DeckTemplate, EngineConfig, DEFAULT_ROUND_LIMIT};
pub use state::{EngineFlags, EngineSnapshot, Phase};
pub use error::{EngineError, Result};
