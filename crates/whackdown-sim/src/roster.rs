//! Enemy spawn factories and bulk roster operations over the ECS world.
//!
//! Creates enemy entities from level spawn descriptors and provides the
//! bulk operations the engine runs on them: clear, activate/deactivate,
//! living-color queries, and the one-way kill transition.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use whackdown_core::components::{ClickTarget, Enemy, EnemyInfo, LifeState};
use whackdown_core::constants::NORMAL_MODE_COLOR;
use whackdown_core::enums::{EnemyColor, GameMode};
use whackdown_core::level::LevelConfig;
use whackdown_core::types::{Position, Velocity};

/// Spawn one enemy per level descriptor.
///
/// Color comes from the descriptor in hard mode (falling back to the
/// uniform color when a descriptor omits it) and is forced uniform in
/// normal mode, where any click kills. Initial movement direction is
/// drawn uniformly over [0, 2π); the descriptor's speed magnitude stays
/// invariant for the enemy's life.
pub fn load_level(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &LevelConfig,
    mode: GameMode,
    next_enemy_id: &mut u32,
) {
    for spawn in &config.enemies {
        let enemy_id = *next_enemy_id;
        *next_enemy_id += 1;

        let color = match mode {
            GameMode::Hard => spawn.color.unwrap_or(NORMAL_MODE_COLOR),
            GameMode::Normal => NORMAL_MODE_COLOR,
        };

        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);

        world.spawn((
            Enemy,
            EnemyInfo { enemy_id, color },
            Position::new(spawn.x, spawn.y),
            Velocity::from_angle(angle, spawn.speed),
            LifeState {
                alive: true,
                death_anim_visible: false,
            },
            ClickTarget { active: true },
        ));
    }
}

/// Despawn every enemy. Safe to call when the roster is already empty.
/// Uses a pre-allocated buffer to avoid per-call allocation.
pub fn clear(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, _enemy) in world.query_mut::<&Enemy>() {
        despawn_buffer.push(entity);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Bulk-toggle click eligibility, used on pause/resume. Movement and
/// draw state are untouched.
pub fn set_active(world: &mut World, active: bool) {
    for (_entity, target) in world.query_mut::<&mut ClickTarget>() {
        target.active = active;
    }
}

/// Distinct colors of living enemies, sorted for deterministic picks.
/// Never empty while any enemy is alive.
pub fn living_colors(world: &World) -> Vec<EnemyColor> {
    let mut query = world.query::<(&EnemyInfo, &LifeState)>();
    let mut colors: Vec<EnemyColor> = query
        .iter()
        .filter(|(_, (_, life))| life.alive)
        .map(|(_, (info, _))| info.color)
        .collect();
    colors.sort();
    colors.dedup();
    colors
}

/// Resolve a click: the entity and color for this id, if it is alive and
/// currently click-eligible.
pub fn find_clickable(world: &World, enemy_id: u32) -> Option<(Entity, EnemyColor)> {
    let mut query = world.query::<(&EnemyInfo, &LifeState, &ClickTarget)>();
    query
        .iter()
        .find(|(_, (info, life, target))| {
            info.enemy_id == enemy_id && life.alive && target.active
        })
        .map(|(entity, (info, _, _))| (entity, info.color))
}

/// One-way kill transition: marks the enemy dead and shows its terminal
/// death animation. A second call on the same entity changes nothing.
pub fn kill(world: &mut World, entity: Entity) {
    if let Ok(mut life) = world.get::<&mut LifeState>(entity) {
        if life.alive {
            life.alive = false;
            life.death_anim_visible = true;
        }
    }
}

/// Deferred hide of a killed enemy's death animation. A no-op when the
/// enemy was already cleared; stale hides from a previous level land here.
pub fn hide_death_animation(world: &mut World, enemy_id: u32) {
    for (_entity, (info, life)) in world.query_mut::<(&EnemyInfo, &mut LifeState)>() {
        if info.enemy_id == enemy_id {
            life.death_anim_visible = false;
        }
    }
}
