//! Bounce-movement integration system.
//!
//! Advances each living enemy by `velocity * dt`. Each axis is checked
//! independently against the playable rectangle
//! `[0, PLAYFIELD_WIDTH - ENEMY_WIDTH] × [0, PLAYFIELD_HEIGHT - ENEMY_HEIGHT]`:
//! if the projected coordinate would leave it, that axis's velocity is
//! negated before the move is applied. Corner contacts may flip both axes
//! in the same tick. Dead enemies do not move.

use hecs::World;

use whackdown_core::components::LifeState;
use whackdown_core::constants::{ENEMY_HEIGHT, ENEMY_WIDTH, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use whackdown_core::types::{Position, Velocity};

/// Run bounce integration for all living enemies.
pub fn run(world: &mut World, dt_secs: f64) {
    let max_x = PLAYFIELD_WIDTH - ENEMY_WIDTH;
    let max_y = PLAYFIELD_HEIGHT - ENEMY_HEIGHT;

    for (_entity, (pos, vel, life)) in
        world.query_mut::<(&mut Position, &mut Velocity, &LifeState)>()
    {
        if !life.alive {
            continue;
        }

        let projected_x = pos.x + vel.x * dt_secs;
        let projected_y = pos.y + vel.y * dt_secs;

        if projected_x < 0.0 || projected_x > max_x {
            vel.x = -vel.x;
        }
        if projected_y < 0.0 || projected_y > max_y {
            vel.y = -vel.y;
        }

        pos.x += vel.x * dt_secs;
        pos.y += vel.y * dt_secs;
    }
}
