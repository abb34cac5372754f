//! War, driven end to end.
//!
//! `WarGame` is what an application shell talks to:
//! - build from a deck template and a presentation port
//! - deal and start
//! - request rounds and report effect completions
//! - read hand sizes and the result
//!
//! For headless use (tests, simulations) `play_round` and
//! `play_to_completion` complete every effect immediately.

mod game;

pub use game::{RoundOutcome, WarGame, WarGameBuilder};
