//! Hard-mode target color rotation.

use rand::seq::SliceRandom;
use rand::Rng;

use whackdown_core::constants::COLOR_ROTATION_INTERVAL_MS;
use whackdown_core::enums::EnemyColor;

/// Accumulates elapsed time toward the next color rotation.
#[derive(Debug, Clone, Default)]
pub struct RotationTimer {
    accumulated_ms: f64,
}

impl RotationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate elapsed milliseconds. Returns true when the rotation
    /// interval elapsed during this call; the accumulator resets to zero
    /// either way once due.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        self.accumulated_ms += delta_ms;
        if self.accumulated_ms >= COLOR_ROTATION_INTERVAL_MS {
            self.accumulated_ms = 0.0;
            return true;
        }
        false
    }

    /// Normalized progress toward the next rotation, `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.accumulated_ms / COLOR_ROTATION_INTERVAL_MS).clamp(0.0, 1.0)
    }
}

/// Pick the next target uniformly from the colors held by living enemies.
///
/// Returns None when the set is empty (all enemies dead at the rotation
/// instant); the caller skips the rotation for that tick.
pub fn pick_target<R: Rng>(living: &[EnemyColor], rng: &mut R) -> Option<EnemyColor> {
    living.choose(rng).copied()
}
