//! Remote data consumed by the player.

pub mod manifest;

pub use manifest::*;
