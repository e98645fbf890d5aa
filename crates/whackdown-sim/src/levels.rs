//! Level sources — where level configs come from.
//!
//! The engine treats level data as an external collaborator behind the
//! `LevelSource` trait: the host may hand it raw JSON fetched per level
//! (`JsonLevels`) or fall back to the three stock levels
//! (`BuiltinLevels`).

use std::collections::HashMap;

use whackdown_core::enums::EnemyColor::{self, Blue, Green, Red};
use whackdown_core::level::{EnemySpawn, LevelConfig, LevelLoadError};

/// Provides level configs keyed by level number (1-based).
pub trait LevelSource {
    fn load(&self, level: u32) -> Result<LevelConfig, LevelLoadError>;

    /// Highest available level number. Level progression clamps here.
    fn max_level(&self) -> u32;
}

/// Levels from raw JSON documents, parsed lazily so malformed data
/// surfaces as a load failure rather than a construction failure.
#[derive(Debug, Clone, Default)]
pub struct JsonLevels {
    raw: HashMap<u32, String>,
}

impl JsonLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, level: u32, json: impl Into<String>) {
        self.raw.insert(level, json.into());
    }
}

impl LevelSource for JsonLevels {
    fn load(&self, level: u32) -> Result<LevelConfig, LevelLoadError> {
        let json = self
            .raw
            .get(&level)
            .ok_or(LevelLoadError::UnknownLevel(level))?;
        Ok(LevelConfig::from_json(json)?)
    }

    fn max_level(&self) -> u32 {
        self.raw.keys().copied().max().unwrap_or(0)
    }
}

/// The three stock levels with escalating enemy counts and speeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLevels;

impl LevelSource for BuiltinLevels {
    fn load(&self, level: u32) -> Result<LevelConfig, LevelLoadError> {
        match level {
            1 => Ok(build_level_1()),
            2 => Ok(build_level_2()),
            3 => Ok(build_level_3()),
            other => Err(LevelLoadError::UnknownLevel(other)),
        }
    }

    fn max_level(&self) -> u32 {
        3
    }
}

fn spawn(x: f64, y: f64, speed: f64, color: EnemyColor) -> EnemySpawn {
    EnemySpawn {
        x,
        y,
        speed,
        color: Some(color),
    }
}

/// Level 1: 5 slow enemies, generous 60s limit.
fn build_level_1() -> LevelConfig {
    LevelConfig {
        enemies: vec![
            spawn(160.0, 120.0, 100.0, Red),
            spawn(560.0, 300.0, 110.0, Green),
            spawn(900.0, 150.0, 100.0, Blue),
            spawn(320.0, 480.0, 120.0, Green),
            spawn(1000.0, 500.0, 110.0, Red),
        ],
        time_limit: 60.0,
    }
}

/// Level 2: 8 enemies, faster, 50s limit.
fn build_level_2() -> LevelConfig {
    LevelConfig {
        enemies: vec![
            spawn(120.0, 100.0, 140.0, Red),
            spawn(400.0, 220.0, 150.0, Green),
            spawn(700.0, 120.0, 140.0, Blue),
            spawn(980.0, 260.0, 160.0, Red),
            spawn(200.0, 440.0, 150.0, Blue),
            spawn(520.0, 520.0, 170.0, Green),
            spawn(820.0, 460.0, 160.0, Red),
            spawn(1100.0, 560.0, 180.0, Blue),
        ],
        time_limit: 50.0,
    }
}

/// Level 3: 12 fast enemies, tight 45s limit.
fn build_level_3() -> LevelConfig {
    LevelConfig {
        enemies: vec![
            spawn(100.0, 90.0, 180.0, Red),
            spawn(300.0, 180.0, 190.0, Green),
            spawn(520.0, 90.0, 200.0, Blue),
            spawn(740.0, 200.0, 190.0, Red),
            spawn(960.0, 110.0, 210.0, Green),
            spawn(1140.0, 240.0, 200.0, Blue),
            spawn(160.0, 400.0, 210.0, Blue),
            spawn(380.0, 500.0, 220.0, Red),
            spawn(600.0, 420.0, 200.0, Green),
            spawn(820.0, 540.0, 230.0, Blue),
            spawn(1020.0, 440.0, 220.0, Green),
            spawn(1160.0, 560.0, 240.0, Red),
        ],
        time_limit: 45.0,
    }
}
