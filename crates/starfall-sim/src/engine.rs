//! Simulation engine and level orchestrator.
//!
//! `SimulationEngine` owns the hecs ECS world, the timer service, the wave
//! scheduler and the match counters. It processes player commands, runs all
//! systems in a fixed order, moves between scenes and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_core::commands::PlayerCommand;
use starfall_core::config::GameConfig;
use starfall_core::constants::BOSS_ADVANCE_DELAY_SECS;
use starfall_core::enums::{Faction, GamePhase, SceneId};
use starfall_core::error::ConfigError;
use starfall_core::events::SimEvent;
use starfall_core::match_state::SharedMatchState;
use starfall_core::roster::{EnemyRoster, EnemySpec};
use starfall_core::state::{GameStateSnapshot, SchedulerState};
use starfall_core::types::{Position, SimTime};

use crate::factory;
use crate::levels;
use crate::systems;
use crate::systems::combat::{CombatContext, Signal};
use crate::systems::contacts::ContactTracker;
use crate::systems::wave_scheduler::{LevelSchedule, WaveScheduler};
use crate::timers::{Fired, TimerAction, TimerService};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Screen and audio settings.
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    scene: SceneId,
    time_scale: f64,
    rng: ChaCha8Rng,
    config: GameConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    fire_requested: bool,

    levels: HashMap<SceneId, LevelSchedule>,
    match_state: SharedMatchState,
    timers: TimerService,
    waves: WaveScheduler,
    contacts: ContactTracker,
    advance_pending: bool,
}

impl SimulationEngine {
    /// Create an engine with the shipped roster and a fresh match state.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let roster = EnemyRoster::standard(&config.game.screen);
        Self::with_parts(config, &roster, SharedMatchState::new())
    }

    /// Create an engine around a custom roster and match state.
    /// Every level schedule is built here, so a bad roster fails now.
    pub fn with_parts(
        config: SimConfig,
        roster: &EnemyRoster,
        match_state: SharedMatchState,
    ) -> Result<Self, ConfigError> {
        config.game.screen.validate()?;
        let levels = levels::build_campaign(roster, &config.game.screen)?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            scene: SceneId::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.game,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            fire_requested: false,
            levels,
            match_state,
            timers: TimerService::new(),
            waves: WaveScheduler::new(),
            contacts: ContactTracker::new(),
            advance_pending: false,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.scene,
            self.match_state.get(),
            self.waves.view(),
            events,
        )
    }

    /// Switch scenes: drop every entity, timer and scheduler state, then
    /// set up the target. Level scenes get the player and their waves.
    pub fn go(&mut self, scene: SceneId) -> Result<(), ConfigError> {
        self.world.clear();
        self.timers.clear();
        self.waves.reset(&mut self.timers);
        self.contacts.clear();
        self.fire_requested = false;
        self.advance_pending = false;

        log::info!("scene {:?} -> {:?}", self.scene, scene);
        self.scene = scene;
        self.events.push(SimEvent::SceneChanged { scene });

        if scene.is_level() {
            factory::spawn_player(&mut self.world, &self.config.screen);
            self.start_level(scene)?;
        }
        Ok(())
    }

    /// (Re)start the wave schedule of a level. Entities on the field stay.
    pub fn start_level(&mut self, level: SceneId) -> Result<(), ConfigError> {
        let schedule = self
            .levels
            .get(&level)
            .cloned()
            .ok_or(ConfigError::UnknownLevel(level))?;
        log::info!("starting {level:?} with {} waves", schedule.waves.len());
        self.waves.start(schedule, &mut self.timers);
        Ok(())
    }

    /// Stop the wave schedule, cancelling any pending repeat or wait.
    pub fn reset_waves(&mut self) {
        self.waves.reset(&mut self.timers);
    }

    /// Spawn an enemy from a spec outside the wave schedule.
    pub fn spawn_enemy(&mut self, spec: &EnemySpec) -> Entity {
        factory::spawn_enemy(&mut self.world, spec)
    }

    /// Spawn a projectile outside the normal firing paths.
    pub fn spawn_projectile(&mut self, faction: Faction, position: Position) -> Entity {
        factory::spawn_projectile(&mut self.world, faction, position)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current scene.
    pub fn scene(&self) -> SceneId {
        self.scene
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn match_state(&self) -> &SharedMatchState {
        &self.match_state
    }

    /// Mutable access, for subscribing or seeding counters.
    pub fn match_state_mut(&mut self) -> &mut SharedMatchState {
        &mut self.match_state
    }

    pub fn wave_state(&self) -> SchedulerState {
        self.waves.state()
    }

    pub fn wave_cursor(&self) -> usize {
        self.waves.cursor()
    }

    pub fn timers(&self) -> &TimerService {
        &self.timers
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
            PlayerCommand::StartGame => {
                if matches!(self.scene, SceneId::StartMenu | SceneId::Ranking) {
                    let next = self.scene.next();
                    self.go_or_log(next);
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.match_state.reset();
                self.go_or_log(SceneId::StartMenu);
            }
            PlayerCommand::SetInput { input } => {
                systems::player::set_input(&mut self.world, input);
            }
            PlayerCommand::Fire => {
                self.fire_requested = true;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let sfx = self.config.audio.sfx_volume;

        // 1. Timers (waves, cooldowns, scene transitions)
        for fired in self.timers.advance() {
            if self.dispatch_timer(fired) {
                // The scene was torn down; the rest belonged to it.
                break;
            }
        }
        // 2. Player steering and firing
        systems::player::run(&mut self.world, &self.config.screen);
        if std::mem::take(&mut self.fire_requested) {
            systems::player::fire(&mut self.world, &mut self.events, sfx);
        }
        // 3. Enemy fire control
        systems::fire_control::run(&mut self.world, &mut self.timers, &mut self.events, sfx);
        // 4. Enemy movement FSM + projectile flight
        systems::movement::run(&mut self.world, &mut self.rng, &self.config.screen);
        systems::movement::integrate(&mut self.world);
        // 5. Contacts and combat
        let contacts = self.contacts.detect(&self.world);
        let signals = {
            let mut ctx = CombatContext {
                world: &mut self.world,
                match_state: &mut self.match_state,
                timers: &mut self.timers,
                events: &mut self.events,
                sfx_volume: sfx,
            };
            systems::combat::run(&mut ctx, &contacts)
        };
        for signal in signals {
            self.handle_signal(signal);
        }
        // 6. Cleanup (offscreen)
        systems::cleanup::run(&mut self.world, &self.config.screen, &mut self.despawn_buffer);
    }

    /// Returns true when the timer changed the scene.
    fn dispatch_timer(&mut self, fired: Fired) -> bool {
        match fired.action {
            TimerAction::WaveLeadIn | TimerAction::WaveRepeat | TimerAction::WaveWaitElapsed => {
                let outcome = self.waves.on_timer(&fired, &mut self.timers);
                if let Some(index) = outcome.started {
                    self.events.push(SimEvent::WaveStarted { index });
                }
                for spec in &outcome.spawns {
                    factory::spawn_enemy(&mut self.world, spec);
                }
                false
            }
            TimerAction::FireCooldown(entity) => {
                systems::fire_control::on_cooldown(&mut self.world, entity);
                false
            }
            TimerAction::RestartAfterDeath => {
                self.match_state.reset();
                self.go_or_log(SceneId::LevelOne);
                true
            }
            TimerAction::AdvanceAfterBoss => {
                let next = self.scene.next();
                self.go_or_log(next);
                true
            }
        }
    }

    fn handle_signal(&mut self, signal: Signal) {
        match signal {
            Signal::BossDefeated => {
                if !self.advance_pending {
                    self.advance_pending = true;
                    self.timers
                        .wait(BOSS_ADVANCE_DELAY_SECS, TimerAction::AdvanceAfterBoss);
                }
            }
            Signal::PlayerDied => {
                log::debug!("death in {:?} at tick {}", self.scene, self.time.tick);
            }
        }
    }

    fn go_or_log(&mut self, scene: SceneId) {
        if let Err(err) = self.go(scene) {
            log::error!("failed to enter {scene:?}: {err}");
        }
    }
}
