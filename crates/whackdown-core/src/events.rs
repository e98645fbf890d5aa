//! Events emitted by the engine for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;

/// Fire-and-forget cues for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Start the background loop (level started).
    BackgroundStart,
    /// Stop the background loop (level ended).
    BackgroundStop,
    /// An enemy was killed.
    Kill,
    /// Level won.
    Win,
    /// Level lost.
    Lost,
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}
