//! Game state snapshot — the complete visible state sent to the
//! presentation layer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyColor, GameMode, GamePhase};
use crate::events::{Alert, AudioEvent};

/// Complete game state broadcast to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub phase: GamePhase,
    pub mode: GameMode,
    /// Current level number (1-based).
    pub level: u32,
    /// Remaining countdown (seconds, clamped to `[0, time_limit_secs]`).
    pub remaining_secs: f64,
    /// The level's time limit (seconds).
    pub time_limit_secs: f64,
    /// Normalized remaining time, clamped to `[0, 1]`.
    pub time_progress: f64,
    pub enemies_killed: u32,
    pub enemies_total: u32,
    /// Whether the one-shot booster can still be used this level.
    pub booster_available: bool,
    /// Hard mode: the color that currently kills.
    pub target_color: Option<EnemyColor>,
    /// Hard mode: normalized progress toward the next rotation, `[0, 1]`.
    pub rotation_progress: f64,
    /// False once the loop has stopped; no further clock or movement
    /// computation happens until the next game start.
    pub ticker_running: bool,
    /// Set when the level has ended.
    pub outcome: Option<LevelOutcome>,
    pub enemies: Vec<EnemyView>,
    pub audio_events: Vec<AudioEvent>,
    pub alerts: Vec<Alert>,
}

/// End-of-level result for the win/lose screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOutcome {
    pub won: bool,
    /// Stars earned, 0 on a loss and 1..=3 on a win.
    pub stars: u8,
}

/// A visible enemy on the playfield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub x: f64,
    pub y: f64,
    pub color: EnemyColor,
    pub alive: bool,
    /// Whether a click on this enemy will be routed to the engine.
    pub clickable: bool,
    /// Whether the terminal death animation is still showing.
    pub death_anim_visible: bool,
}
