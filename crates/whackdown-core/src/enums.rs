//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Enemy color — matched against the target color in hard mode.
///
/// Serialized lowercase to match the level data wire format (`"red"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyColor {
    Red,
    Green,
    Blue,
}

/// Game mode, fixed for a session when the game starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Any click kills any enemy; color is cosmetic only.
    #[default]
    Normal,
    /// Only enemies matching the rotating target color may be killed;
    /// wrong clicks cost remaining time.
    Hard,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No active level.
    #[default]
    Idle,
    /// Clock running, enemies moving and clickable.
    Playing,
    /// Clock frozen, enemies deactivated.
    Paused,
    /// All enemies killed before the countdown expired.
    Won,
    /// Countdown expired with enemies still alive.
    Lost,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
