//! Level data — the JSON wire shape consumed from the external level source.
//!
//! Shape: `{ "enemies": [{ "x": .., "y": .., "speed": .., "color": "red" }],
//! "timeLimit": 60 }`. `color` is optional; normal mode ignores it entirely.
//! A strictly positive `timeLimit` is a precondition of the level data, not
//! a runtime-checked invariant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EnemyColor;

/// One enemy spawn descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Spawn x position (pixels).
    pub x: f64,
    /// Spawn y position (pixels).
    pub y: f64,
    /// Speed magnitude, invariant for the enemy's life (pixels per second).
    pub speed: f64,
    /// Color, used in hard mode only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<EnemyColor>,
}

/// A complete level definition. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub enemies: Vec<EnemySpawn>,
    /// Level countdown in seconds. Must be strictly positive.
    pub time_limit: f64,
}

impl LevelConfig {
    /// Parse a level from its JSON wire representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Failure to produce a level config from a level source.
#[derive(Debug)]
pub enum LevelLoadError {
    /// The source has no level with this number.
    UnknownLevel(u32),
    /// The level data did not match the wire shape.
    Parse(serde_json::Error),
}

impl fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelLoadError::UnknownLevel(level) => write!(f, "no such level: {level}"),
            LevelLoadError::Parse(err) => write!(f, "malformed level data: {err}"),
        }
    }
}

impl std::error::Error for LevelLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelLoadError::UnknownLevel(_) => None,
            LevelLoadError::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LevelLoadError {
    fn from(err: serde_json::Error) -> Self {
        LevelLoadError::Parse(err)
    }
}
