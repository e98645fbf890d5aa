//! Star rating for a completed level.

use whackdown_core::constants::{STAR_2_THRESHOLD, STAR_3_THRESHOLD};

/// Stars earned for finishing in `time_used_secs` of a
/// `time_limit_secs` level: 3 under the 3-star threshold, 2 under the
/// 2-star threshold, 1 otherwise.
pub fn star_rating(time_used_secs: f64, time_limit_secs: f64) -> u8 {
    let mut stars = 1;
    if time_used_secs < time_limit_secs * STAR_2_THRESHOLD {
        stars = 2;
    }
    if time_used_secs < time_limit_secs * STAR_3_THRESHOLD {
        stars = 3;
    }
    stars
}
