//! ECS components for enemy entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the roster and systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyColor;

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Identity assigned at spawn; referenced by click commands and
/// deferred animation hides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyInfo {
    /// Unique id, never reused within an engine's lifetime.
    pub enemy_id: u32,
    pub color: EnemyColor,
}

/// Alive/dead state and the terminal death animation flag.
///
/// `alive` transitions one way, true to false. `death_anim_visible` is set
/// on the killing click and cleared by a deferred hide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LifeState {
    pub alive: bool,
    pub death_anim_visible: bool,
}

/// Click eligibility, toggled on pause/resume without touching movement
/// or draw state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClickTarget {
    pub active: bool,
}
