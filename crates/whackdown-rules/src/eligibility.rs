//! Kill-eligibility policy.
//!
//! A capability interface evaluated against a clicked enemy's color:
//! the engine kills when `should_kill` holds and applies the wrong-click
//! penalty otherwise.

use whackdown_core::enums::EnemyColor;

/// Decides whether a click on an enemy of the given color kills it.
pub trait KillPolicy {
    fn should_kill(&self, color: EnemyColor) -> bool;
}

/// Normal mode: any click kills; color is cosmetic.
pub struct AnyClick;

impl KillPolicy for AnyClick {
    fn should_kill(&self, _color: EnemyColor) -> bool {
        true
    }
}

/// Hard mode: only the current target color kills.
pub struct ColorMatch {
    pub target: EnemyColor,
}

impl KillPolicy for ColorMatch {
    fn should_kill(&self, color: EnemyColor) -> bool {
        color == self.target
    }
}
