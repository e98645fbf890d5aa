//! Core types and definitions for the WHACKDOWN game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, level data, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod level;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
