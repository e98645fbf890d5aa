//! Game engine for WHACKDOWN.
//!
//! Owns the hecs ECS world, processes player commands at tick boundaries,
//! runs the countdown and movement systems, and produces
//! `GameStateSnapshot`s for the presentation layer. Completely headless
//! (no renderer dependency), enabling deterministic testing.

pub mod deferred;
pub mod engine;
pub mod levels;
pub mod roster;
pub mod systems;

pub use engine::{GameConfig, GameEngine};
pub use whackdown_core as core;
