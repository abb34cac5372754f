//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Card`: immutable value, rank plus cosmetic suit
//! - `Suit`: the four suits
//! - `Deck`: ordered cards built from a template, shuffled and dealt once
//!
//! `shuffle` and `deal_alternating` are also exposed as free functions for
//! shells that run their own deal.

pub mod definition;
pub mod deck;

pub use definition::{Card, Suit};
pub use deck::{deal_alternating, shuffle, Deck};
