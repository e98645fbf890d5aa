//! Game constants and tuning parameters.

use crate::enums::EnemyColor;

// --- Playfield ---

/// Playfield width in pixels.
pub const PLAYFIELD_WIDTH: f64 = 1280.0;

/// Playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f64 = 720.0;

/// Enemy sprite width in pixels (scaled).
pub const ENEMY_WIDTH: f64 = 96.0;

/// Enemy sprite height in pixels (scaled).
pub const ENEMY_HEIGHT: f64 = 96.0;

// --- Countdown ---

/// Time added by the one-shot booster (seconds).
pub const BOOSTER_TIME_SECS: f64 = 15.0;

/// Time subtracted for a wrong-color click in hard mode (seconds).
pub const WRONG_CLICK_PENALTY_SECS: f64 = 2.0;

// --- Star rating ---

/// Finish below this fraction of the time limit for 3 stars.
pub const STAR_3_THRESHOLD: f64 = 0.3;

/// Finish below this fraction of the time limit for 2 stars.
pub const STAR_2_THRESHOLD: f64 = 0.6;

// --- Hard mode ---

/// Interval between target color rotations (milliseconds).
pub const COLOR_ROTATION_INTERVAL_MS: f64 = 3000.0;

/// Color assigned to every enemy in normal mode, where color is cosmetic.
pub const NORMAL_MODE_COLOR: EnemyColor = EnemyColor::Green;

// --- Deferred actions ---

/// Delay before a killed enemy's death animation is hidden (milliseconds).
pub const DEATH_ANIM_HIDE_MS: f64 = 600.0;

/// Delay between winning and stopping the ticker, so the final visual
/// update still renders (milliseconds).
pub const WIN_TICKER_STOP_DELAY_MS: f64 = 1000.0;
