//! Player commands sent from the input layer to the game engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::GameMode;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new game from Idle with the chosen mode.
    StartGame { mode: GameMode },
    /// Click on an enemy. Routed through the kill-eligibility policy.
    ClickEnemy { enemy_id: u32 },
    /// Pause if playing, resume if paused. No-op in any other phase.
    TogglePause,
    /// Apply the one-shot time booster. No-op after first use.
    UseBooster,
    /// Advance to the next level after a win. Clamps at the last level.
    NextLevel,
    /// Restart the current level after a win or loss.
    Retry,
}
