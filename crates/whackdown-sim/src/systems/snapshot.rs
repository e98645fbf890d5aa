//! Snapshot builder — collects world and session state into the
//! `GameStateSnapshot` handed to the presentation layer.

use hecs::World;

use whackdown_core::components::{ClickTarget, EnemyInfo, LifeState};
use whackdown_core::enums::{GameMode, GamePhase};
use whackdown_core::events::{Alert, AudioEvent};
use whackdown_core::state::{EnemyView, GameStateSnapshot};
use whackdown_core::types::Position;

use crate::engine::GameSession;

/// Build the complete snapshot for the current tick.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    phase: GamePhase,
    mode: GameMode,
    level: u32,
    session: Option<&GameSession>,
    ticker_running: bool,
    audio_events: Vec<AudioEvent>,
    alerts: Vec<Alert>,
) -> GameStateSnapshot {
    let mut enemies: Vec<EnemyView> = {
        let mut query = world.query::<(&EnemyInfo, &Position, &LifeState, &ClickTarget)>();
        query
            .iter()
            .map(|(_entity, (info, pos, life, target))| EnemyView {
                enemy_id: info.enemy_id,
                x: pos.x,
                y: pos.y,
                color: info.color,
                alive: life.alive,
                clickable: life.alive && target.active,
                death_anim_visible: life.death_anim_visible,
            })
            .collect()
    };
    // Deterministic ordering for snapshot comparison and display.
    enemies.sort_by_key(|view| view.enemy_id);

    let mut snapshot = GameStateSnapshot {
        phase,
        mode,
        level,
        ticker_running,
        enemies,
        audio_events,
        alerts,
        ..Default::default()
    };

    if let Some(session) = session {
        snapshot.remaining_secs = session.countdown.remaining_secs();
        snapshot.time_limit_secs = session.countdown.limit_secs();
        snapshot.time_progress = session.countdown.progress();
        snapshot.enemies_killed = session.enemies_killed;
        snapshot.enemies_total = session.enemies_total;
        snapshot.booster_available = !session.countdown.booster_used();
        snapshot.outcome = session.outcome;
        if mode == GameMode::Hard {
            snapshot.target_color = session.target_color;
            snapshot.rotation_progress = session.rotation.progress();
        }
    }

    snapshot
}
