//! Ready-made game drivers.

pub mod war;
