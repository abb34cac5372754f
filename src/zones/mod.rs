//! Where cards sit between deal and game over.
//!
//! - `Hand`: a side's FIFO pile
//! - `WarStash`: face-down war cards awaiting a winner

pub mod hand;
pub mod stash;

pub use hand::Hand;
pub use stash::WarStash;
