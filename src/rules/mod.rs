//! The rules of War.
//!
//! `RoundEngine` owns the hands and the stash and runs the round/war state
//! machine. It calls out through a `PresentationPort` and advances only when
//! the shell reports an effect finished.

pub mod engine;
pub mod result;
pub mod stats;

pub use engine::{Rejection, RoundEngine, RoundProgress, RoundRequest};
pub use result::{GameResult, GameStatus};
pub use stats::GameStats;
