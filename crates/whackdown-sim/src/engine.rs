//! Game engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs the countdown and movement each tick, and produces
//! `GameStateSnapshot`s. The host scheduler drives it with wall-clock
//! deltas via `tick(delta_ms)`; the engine assumes no frame-rate driver.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use whackdown_core::commands::PlayerCommand;
use whackdown_core::constants::{
    DEATH_ANIM_HIDE_MS, WIN_TICKER_STOP_DELAY_MS, WRONG_CLICK_PENALTY_SECS,
};
use whackdown_core::enums::{AlertLevel, EnemyColor, GameMode, GamePhase};
use whackdown_core::events::{Alert, AudioEvent};
use whackdown_core::level::LevelConfig;
use whackdown_core::state::{GameStateSnapshot, LevelOutcome};

use whackdown_rules::countdown::Countdown;
use whackdown_rules::eligibility::{AnyClick, ColorMatch, KillPolicy};
use whackdown_rules::rotation::{self, RotationTimer};
use whackdown_rules::scoring;

use crate::deferred::{DeferredAction, DeferredQueue};
use crate::levels::LevelSource;
use crate::roster;
use crate::systems;

/// Configuration for starting a new game engine.
pub struct GameConfig {
    /// RNG seed for determinism. Same seed + same deltas = same game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Per-level mutable state, created at level start and replaced on
/// retry/next-level.
pub struct GameSession {
    pub countdown: Countdown,
    pub enemies_killed: u32,
    pub enemies_total: u32,
    /// Hard mode: the color that currently kills.
    pub target_color: Option<EnemyColor>,
    /// Hard mode: elapsed time toward the next color rotation.
    pub rotation: RotationTimer,
    /// Set once the level ends.
    pub outcome: Option<LevelOutcome>,
}

impl GameSession {
    fn new(config: &LevelConfig) -> Self {
        Self {
            countdown: Countdown::new(config.time_limit),
            enemies_killed: 0,
            enemies_total: config.enemies.len() as u32,
            target_color: None,
            rotation: RotationTimer::new(),
            outcome: None,
        }
    }
}

/// The game engine. Owns the ECS world and all game state.
pub struct GameEngine {
    world: World,
    phase: GamePhase,
    mode: GameMode,
    current_level: u32,
    session: Option<GameSession>,
    rng: ChaCha8Rng,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    alerts: Vec<Alert>,
    deferred: DeferredQueue,
    /// Accumulated wall-clock time across all tick calls (milliseconds).
    /// Drives the deferred-action queue, which keeps running through
    /// pauses and level ends.
    wall_ms: f64,
    ticker_running: bool,
    levels: Box<dyn LevelSource>,
}

impl GameEngine {
    /// Create a new game engine with the given config and level source.
    pub fn new(config: GameConfig, levels: Box<dyn LevelSource>) -> Self {
        Self {
            world: World::new(),
            phase: GamePhase::default(),
            mode: GameMode::default(),
            current_level: 1,
            session: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            alerts: Vec::new(),
            deferred: DeferredQueue::default(),
            wall_ms: 0.0,
            ticker_running: false,
            levels,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one host frame and return the resulting
    /// snapshot. `delta_ms` is the wall-clock time since the previous
    /// call; frames delivered while paused contribute nothing to the
    /// countdown, movement, or rotation.
    pub fn tick(&mut self, delta_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        self.wall_ms += delta_ms;
        self.run_deferred();

        if self.phase == GamePhase::Playing && self.ticker_running {
            self.run_frame(delta_ms);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let alerts = std::mem::take(&mut self.alerts);
        systems::snapshot::build_snapshot(
            &self.world,
            self.phase,
            self.mode,
            self.current_level,
            self.session.as_ref(),
            self.ticker_running,
            audio_events,
            alerts,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the session's game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Get the current level number (1-based).
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    /// Whether the loop should keep receiving ticks. False after a loss
    /// or once the post-win deferred stop has fired.
    pub fn is_ticker_running(&self) -> bool {
        self.ticker_running
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the current session, if a level is
    /// loaded.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame { mode } => {
                if self.phase == GamePhase::Idle {
                    self.mode = mode;
                    self.start_level(self.current_level);
                }
            }
            PlayerCommand::ClickEnemy { enemy_id } => {
                self.handle_click(enemy_id);
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Playing => {
                    self.phase = GamePhase::Paused;
                    roster::set_active(&mut self.world, false);
                }
                GamePhase::Paused => {
                    self.phase = GamePhase::Playing;
                    roster::set_active(&mut self.world, true);
                }
                _ => {}
            },
            PlayerCommand::UseBooster => {
                if self.phase == GamePhase::Playing {
                    if let Some(session) = &mut self.session {
                        if session.countdown.apply_booster() {
                            debug!("booster applied");
                        }
                    }
                }
            }
            PlayerCommand::NextLevel => {
                if self.phase == GamePhase::Won {
                    if self.current_level < self.levels.max_level() {
                        self.current_level += 1;
                    }
                    self.start_level(self.current_level);
                }
            }
            PlayerCommand::Retry => {
                if matches!(self.phase, GamePhase::Won | GamePhase::Lost) {
                    self.start_level(self.current_level);
                }
            }
        }
    }

    /// Load and start a level: clear the roster, spawn the new one, and
    /// reset the session. A failed load leaves the engine Idle.
    fn start_level(&mut self, level: u32) {
        roster::clear(&mut self.world, &mut self.despawn_buffer);

        match self.levels.load(level) {
            Ok(config) => {
                let mut session = GameSession::new(&config);
                roster::load_level(
                    &mut self.world,
                    &mut self.rng,
                    &config,
                    self.mode,
                    &mut self.next_enemy_id,
                );
                if self.mode == GameMode::Hard {
                    // Initial target from the freshly spawned roster, so the
                    // living-holder invariant holds from the first frame.
                    let colors = roster::living_colors(&self.world);
                    session.target_color = rotation::pick_target(&colors, &mut self.rng);
                }
                self.session = Some(session);
                self.phase = GamePhase::Playing;
                self.ticker_running = true;
                self.audio_events.push(AudioEvent::BackgroundStart);
                info!(level, mode = ?self.mode, "level started");
            }
            Err(err) => {
                warn!(%err, level, "level load failed");
                self.session = None;
                self.phase = GamePhase::Idle;
                self.ticker_running = false;
                self.alerts.push(Alert {
                    level: AlertLevel::Critical,
                    message: format!("level {level} failed to load: {err}"),
                });
            }
        }
    }

    /// Route a click through the kill-eligibility policy.
    fn handle_click(&mut self, enemy_id: u32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some((entity, color)) = roster::find_clickable(&self.world, enemy_id) else {
            return;
        };

        let mut won = false;
        if let Some(session) = &mut self.session {
            let eligible = match self.mode {
                GameMode::Normal => AnyClick.should_kill(color),
                GameMode::Hard => match session.target_color {
                    Some(target) => ColorMatch { target }.should_kill(color),
                    None => false,
                },
            };

            if eligible {
                roster::kill(&mut self.world, entity);
                self.audio_events.push(AudioEvent::Kill);
                session.enemies_killed += 1;
                self.deferred.schedule(
                    self.wall_ms + DEATH_ANIM_HIDE_MS,
                    DeferredAction::HideDeathAnimation { enemy_id },
                );
                won = session.enemies_killed >= session.enemies_total;
            } else {
                session.countdown.penalize(WRONG_CLICK_PENALTY_SECS);
                self.alerts.push(Alert {
                    level: AlertLevel::Warning,
                    message: "wrong color".to_string(),
                });
            }
        }

        if won {
            self.end_level(true);
        }
    }

    /// Advance one unpaused frame: rotation, countdown, then movement.
    /// The expiry check runs before movement, so enemies do not move on
    /// the frame that ends the game.
    fn run_frame(&mut self, delta_ms: f64) {
        let dt_secs = delta_ms / 1000.0;

        let mut expired = false;
        if let Some(session) = &mut self.session {
            if self.mode == GameMode::Hard && session.rotation.advance(delta_ms) {
                let colors = roster::living_colors(&self.world);
                // Empty set at the rotation instant: skip the pick this tick.
                if let Some(color) = rotation::pick_target(&colors, &mut self.rng) {
                    session.target_color = Some(color);
                    debug!(color = ?color, "target color rotated");
                }
            }

            expired = session.countdown.advance(dt_secs);
        }

        if expired {
            self.end_level(false);
            return;
        }

        systems::movement::run(&mut self.world, dt_secs);
    }

    /// Shared end-of-level path: deactivate the roster, stop the
    /// background loop, and record the outcome.
    fn end_level(&mut self, won: bool) {
        roster::set_active(&mut self.world, false);
        self.audio_events.push(AudioEvent::BackgroundStop);

        if let Some(session) = &mut self.session {
            if won {
                let stars = scoring::star_rating(
                    session.countdown.time_used(),
                    session.countdown.limit_secs(),
                );
                session.outcome = Some(LevelOutcome { won: true, stars });
                self.phase = GamePhase::Won;
                self.audio_events.push(AudioEvent::Win);
                // Keep ticking briefly so the final kill still renders.
                self.deferred.schedule(
                    self.wall_ms + WIN_TICKER_STOP_DELAY_MS,
                    DeferredAction::StopTicker,
                );
                info!(stars, "level won");
            } else {
                session.outcome = Some(LevelOutcome {
                    won: false,
                    stars: 0,
                });
                self.phase = GamePhase::Lost;
                self.ticker_running = false;
                self.audio_events.push(AudioEvent::Lost);
                info!("level lost");
            }
        }
    }

    /// Run every due deferred action. These fire regardless of phase and
    /// survive level clears; each guards against state that is gone.
    fn run_deferred(&mut self) {
        if self.deferred.is_empty() {
            return;
        }
        for action in self.deferred.drain_due(self.wall_ms) {
            match action {
                DeferredAction::HideDeathAnimation { enemy_id } => {
                    roster::hide_death_animation(&mut self.world, enemy_id);
                }
                DeferredAction::StopTicker => {
                    // Stale stops from a previous win must not kill a level
                    // that started inside the delay window.
                    if self.phase == GamePhase::Won {
                        self.ticker_running = false;
                    }
                }
            }
        }
    }
}
