//! Tests for the simulation engine, wave scheduler, contacts and combat.

use hecs::World;

use starfall_core::commands::PlayerCommand;
use starfall_core::components::*;
use starfall_core::config::ScreenConfig;
use starfall_core::enums::*;
use starfall_core::events::SimEvent;
use starfall_core::match_state::SharedMatchState;
use starfall_core::roster::{EnemyRoster, EnemySpec, SpecOverrides, TemplateKey};
use starfall_core::state::SchedulerState;
use starfall_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};
use crate::factory;
use crate::levels;
use crate::systems::combat::{self, CombatContext, Signal};
use crate::systems::contacts::{Contact, ContactTracker};
use crate::systems::fire_control;
use crate::systems::wave_scheduler::{LevelSchedule, WaveDefinition, WaveScheduler};
use crate::timers::{Fired, TimerAction, TimerService};

fn roster() -> EnemyRoster {
    EnemyRoster::standard(&ScreenConfig::default())
}

/// A minion that stays where it spawns.
fn still_minion(hp: u32, at: Position) -> EnemySpec {
    roster()
        .resolve(
            TemplateKey::minion(MinionTag::MinionTwo, 0),
            &SpecOverrides {
                hp: Some(hp),
                start_position: Some(at),
                speed_x: Some(0.0),
                ..Default::default()
            },
        )
        .unwrap()
}

/// Engine sitting in level one with the wave schedule stopped.
fn quiet_level() -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.go(SceneId::LevelOne).unwrap();
    engine.reset_waves();
    engine
}

struct Arena {
    world: World,
    match_state: SharedMatchState,
    timers: TimerService,
    events: Vec<SimEvent>,
}

impl Arena {
    fn new() -> Self {
        Self {
            world: World::new(),
            match_state: SharedMatchState::new(),
            timers: TimerService::new(),
            events: Vec::new(),
        }
    }

    fn resolve(&mut self, contact: Contact) -> Vec<Signal> {
        let mut ctx = CombatContext {
            world: &mut self.world,
            match_state: &mut self.match_state,
            timers: &mut self.timers,
            events: &mut self.events,
            sfx_volume: 0.2,
        };
        combat::resolve(&mut ctx, contact)
    }

    fn hp(&self, enemy: hecs::Entity) -> Option<u32> {
        self.world.get::<&EnemyBody>(enemy).map(|b| b.hp).ok()
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    })
    .unwrap();
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    })
    .unwrap();

    engine_a.queue_command(PlayerCommand::StartGame);
    engine_b.queue_command(PlayerCommand::StartGame);

    for _ in 0..1200 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

// ---- Scene flow ----

#[test]
fn test_start_game_enters_level_one() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    assert_eq!(engine.scene(), SceneId::StartMenu);

    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();

    assert_eq!(snap.scene, SceneId::LevelOne);
    assert!(snap.player.is_some(), "level scenes spawn the player");
    assert!(snap
        .events
        .contains(&SimEvent::SceneChanged { scene: SceneId::LevelOne }));
    assert_eq!(snap.waves.state, SchedulerState::LeadIn);
    assert_eq!(snap.waves.total, 4);
}

#[test]
fn test_start_game_ignored_inside_level() {
    let mut engine = quiet_level();
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    assert_eq!(engine.scene(), SceneId::LevelOne);
}

#[test]
fn test_return_to_menu_clears_world_and_match() {
    let mut engine = quiet_level();
    engine.match_state_mut().set_score(12);
    engine.spawn_enemy(&still_minion(2, Position::new(400.0, 250.0)));

    engine.queue_command(PlayerCommand::ReturnToMenu);
    let snap = engine.tick();

    assert_eq!(snap.scene, SceneId::StartMenu);
    assert!(snap.player.is_none());
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.score, 0);
    assert_eq!(snap.life, 3);
    assert!(engine.timers().is_empty());
}

#[test]
fn test_empty_level_completes_after_lead_in() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.go(SceneId::LevelTwo).unwrap();
    for _ in 0..60 {
        engine.tick();
    }
    assert_eq!(engine.wave_state(), SchedulerState::LevelComplete);
    assert_eq!(engine.scene(), SceneId::LevelTwo, "no boss, no advance");
}

#[test]
fn test_start_level_rejects_non_level_scene() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    assert!(engine.start_level(SceneId::Ranking).is_err());
}

#[test]
fn test_unknown_template_fails_at_construction() {
    let mut partial = EnemyRoster::new();
    partial.insert(
        TemplateKey::minion(MinionTag::MinionOne, 0),
        still_minion(1, Position::new(800.0, 250.0)),
    );
    let result = SimulationEngine::with_parts(
        SimConfig::default(),
        &partial,
        SharedMatchState::new(),
    );
    assert!(result.is_err(), "level one needs templates the roster lacks");
}

// ---- Pause/Resume ----

#[test]
fn test_pause_freezes_time_and_timers() {
    let mut engine = quiet_level();
    engine.tick();
    let tick_before = engine.time().tick;

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..30 {
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Paused);
    }
    assert_eq!(engine.time().tick, tick_before);

    engine.queue_command(PlayerCommand::Resume);
    engine.tick();
    assert_eq!(engine.time().tick, tick_before + 1);
}

#[test]
fn test_time_scale_clamped() {
    let mut engine = quiet_level();
    engine.queue_command(PlayerCommand::SetTimeScale { scale: 10.0 });
    engine.tick();
    assert_eq!(engine.time_scale(), 4.0);
}

// ---- Player ship ----

#[test]
fn test_player_clamped_to_left_border() {
    let mut engine = quiet_level();
    engine.queue_command(PlayerCommand::SetInput {
        input: InputState {
            left: true,
            ..Default::default()
        },
    });
    let mut snap = engine.tick();
    for _ in 0..30 {
        snap = engine.tick();
    }
    let player = snap.player.unwrap();
    // Left border 10 plus half of a 48 px wide ship.
    assert!((player.position.x - 34.0).abs() < 1e-9);
}

#[test]
fn test_player_moves_down_at_ship_speed() {
    let mut engine = quiet_level();
    let start = engine.tick().player.unwrap().position;
    engine.queue_command(PlayerCommand::SetInput {
        input: InputState {
            down: true,
            ..Default::default()
        },
    });
    let mut snap = engine.tick();
    for _ in 0..29 {
        snap = engine.tick();
    }
    let moved = snap.player.unwrap().position.y - start.y;
    assert!((moved - 125.0).abs() < 1e-6, "30 ticks at 250 px/s, got {moved}");
}

#[test]
fn test_player_fire_spawns_shot_at_muzzle() {
    let mut engine = quiet_level();
    engine.queue_command(PlayerCommand::Fire);
    let snap = engine.tick();

    assert_eq!(snap.projectiles.len(), 1);
    let shot = &snap.projectiles[0];
    assert_eq!(shot.faction, Faction::Player);
    // Ship clamped to x = 34, muzzle 48 / 1.5 ahead, then one tick of flight.
    let expected = 34.0 + 32.0 + 650.0 / 60.0;
    assert!((shot.position.x - expected).abs() < 1e-9);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        SimEvent::PlaySound {
            cue: SoundCue::PlayerAttack,
            ..
        }
    )));
}

// ---- Enemy firing ----

#[test]
fn test_enemy_fires_once_per_cooldown() {
    let mut engine = quiet_level();
    let spec = roster()
        .resolve(
            TemplateKey::minion(MinionTag::MinionTwo, 1),
            &SpecOverrides {
                start_position: Some(Position::new(500.0, 100.0)),
                speed_x: Some(0.0),
                ..Default::default()
            },
        )
        .unwrap();
    engine.spawn_enemy(&spec);

    let mut shot_ticks = Vec::new();
    for tick in 1..=320 {
        let snap = engine.tick();
        let fired = snap.events.iter().any(|e| {
            matches!(
                e,
                SimEvent::PlaySound {
                    cue: SoundCue::EnemyAttack,
                    ..
                }
            )
        });
        if fired {
            shot_ticks.push(tick);
        }
    }
    // 2.5 s cooldown = 150 ticks.
    assert_eq!(shot_ticks, vec![1, 151, 301]);
}

#[test]
fn test_cooldown_of_destroyed_enemy_is_noop() {
    let mut world = World::new();
    let enemy = factory::spawn_enemy(&mut world, &still_minion(1, Position::new(0.0, 0.0)));
    world.despawn(enemy).unwrap();
    fire_control::on_cooldown(&mut world, enemy);
    assert!(!world.contains(enemy));
}

// ---- Boss entry ----

#[test]
fn test_boss_slides_in_before_pattern_and_fire() {
    let mut engine = quiet_level();
    let boss = roster()
        .resolve(TemplateKey::boss(BossTag::BossOne), &SpecOverrides::default())
        .unwrap();
    engine.spawn_enemy(&boss);

    let mut first_shot = None;
    let mut last_x = boss.start_position.x;
    for tick in 1..=400 {
        let snap = engine.tick();
        let view = &snap.enemies[0];
        if view.entering {
            assert!(view.position.x < last_x);
            assert_eq!(view.position.y, boss.start_position.y, "no vertical motion while entering");
        }
        last_x = view.position.x;
        let fired = snap
            .projectiles
            .iter()
            .any(|p| p.faction == Faction::Enemy);
        if fired && first_shot.is_none() {
            first_shot = Some((tick, view.entering));
        }
    }
    // 170 px at 50 px/s takes 204 ticks.
    let (tick, entering) = first_shot.expect("boss fires after entering");
    assert!(!entering);
    assert!((203..=206).contains(&tick), "first shot at tick {tick}");
    assert!((last_x - 730.0).abs() < 1.0, "boss holds its column, x = {last_x}");
}

// ---- Combat resolver ----

#[test]
fn test_shot_hits_enemy_twice_kills_and_scores() {
    let mut arena = Arena::new();
    let enemy = factory::spawn_enemy(&mut arena.world, &still_minion(2, Position::new(300.0, 200.0)));

    let first = factory::spawn_projectile(&mut arena.world, Faction::Player, Position::new(300.0, 200.0));
    assert!(arena.resolve(Contact::ShotHitsEnemy { shot: first, enemy }).is_empty());
    assert_eq!(arena.hp(enemy), Some(1));
    assert!(!arena.world.contains(first), "shot destroyed unconditionally");
    assert_eq!(arena.match_state.score(), 0);

    let second = factory::spawn_projectile(&mut arena.world, Faction::Player, Position::new(300.0, 200.0));
    arena.resolve(Contact::ShotHitsEnemy {
        shot: second,
        enemy,
    });
    assert!(!arena.world.contains(enemy));
    assert_eq!(arena.match_state.score(), 1);
    assert!(arena.events.iter().any(|e| matches!(
        e,
        SimEvent::PlayEffect {
            effect: EffectKind::Explosion,
            ..
        }
    )));
}

#[test]
fn test_resolving_against_destroyed_entity_changes_nothing() {
    let mut arena = Arena::new();
    let enemy = factory::spawn_enemy(&mut arena.world, &still_minion(2, Position::new(300.0, 200.0)));
    let shot = factory::spawn_projectile(&mut arena.world, Faction::Player, Position::new(300.0, 200.0));

    let contact = Contact::ShotHitsEnemy { shot, enemy };
    arena.resolve(contact);
    let events_after_first = arena.events.len();

    assert!(arena.resolve(contact).is_empty());
    assert_eq!(arena.hp(enemy), Some(1));
    assert_eq!(arena.match_state.score(), 0);
    assert_eq!(arena.events.len(), events_after_first);

    combat::destroy(&mut arena.world, shot);
    assert_eq!(arena.world.len(), 1);
}

#[test]
fn test_boss_kill_scores_and_signals() {
    let mut arena = Arena::new();
    let mut spec = roster()
        .resolve(TemplateKey::boss(BossTag::BossOne), &SpecOverrides::default())
        .unwrap();
    spec.hp = 2;
    let boss = factory::spawn_boss(&mut arena.world, &spec);

    let mut signals = Vec::new();
    for _ in 0..2 {
        let shot = factory::spawn_projectile(&mut arena.world, Faction::Player, spec.start_position);
        signals.extend(arena.resolve(Contact::ShotHitsEnemy { shot, enemy: boss }));
    }
    assert_eq!(signals, vec![Signal::BossDefeated]);
    assert_eq!(arena.match_state.score(), 100);
    assert_eq!(
        arena
            .events
            .iter()
            .filter(|e| **e == SimEvent::BossDefeated)
            .count(),
        1
    );
}

#[test]
fn test_opposing_shots_destroy_each_other() {
    let mut arena = Arena::new();
    let ours = factory::spawn_projectile(&mut arena.world, Faction::Player, Position::new(300.0, 100.0));
    let theirs = factory::spawn_projectile(&mut arena.world, Faction::Enemy, Position::new(300.0, 100.0));
    arena.resolve(Contact::ShotHitsShot {
        player_shot: ours,
        enemy_shot: theirs,
    });
    assert!(arena.world.is_empty());
}

#[test]
fn test_player_hit_loses_one_life() {
    let mut arena = Arena::new();
    let player = factory::spawn_player(&mut arena.world, &ScreenConfig::default());
    let shot = factory::spawn_projectile(&mut arena.world, Faction::Enemy, Position::new(20.0, 250.0));

    assert!(arena.resolve(Contact::ShotHitsPlayer { shot, player }).is_empty());
    assert_eq!(arena.match_state.life(), 2);
    assert!(arena.world.contains(player));
    assert!(arena.timers.is_empty());
}

#[test]
fn test_player_death_branch_runs_once() {
    let mut arena = Arena::new();
    arena.match_state.set_life(1);
    let player = factory::spawn_player(&mut arena.world, &ScreenConfig::default());
    let a = factory::spawn_projectile(&mut arena.world, Faction::Enemy, Position::new(20.0, 250.0));
    let b = factory::spawn_projectile(&mut arena.world, Faction::Enemy, Position::new(20.0, 250.0));

    let mut signals = arena.resolve(Contact::ShotHitsPlayer { shot: a, player });
    signals.extend(arena.resolve(Contact::ShotHitsPlayer { shot: b, player }));

    assert_eq!(signals, vec![Signal::PlayerDied]);
    assert_eq!(arena.match_state.life(), 0);
    assert!(!arena.world.contains(player));
    assert!(arena.world.contains(b), "second shot found no player to hit");
    assert_eq!(arena.timers.len(), 1, "one restart timer per death");
}

#[test]
fn test_ram_damages_both_sides() {
    let mut arena = Arena::new();
    let player = factory::spawn_player(&mut arena.world, &ScreenConfig::default());
    let tough = factory::spawn_enemy(&mut arena.world, &still_minion(3, Position::new(20.0, 250.0)));
    let weak = factory::spawn_enemy(&mut arena.world, &still_minion(2, Position::new(20.0, 250.0)));

    arena.resolve(Contact::EnemyRamsPlayer {
        enemy: tough,
        player,
    });
    assert_eq!(arena.hp(tough), Some(1));
    assert_eq!(arena.match_state.life(), 2);

    arena.resolve(Contact::EnemyRamsPlayer { enemy: weak, player });
    assert!(!arena.world.contains(weak));
    assert_eq!(arena.match_state.life(), 1);
    assert_eq!(arena.match_state.score(), 1);
}

// ---- Contacts ----

#[test]
fn test_contact_reported_when_overlap_begins() {
    let mut world = World::new();
    let enemy = factory::spawn_enemy(&mut world, &still_minion(5, Position::new(300.0, 200.0)));
    let shot = factory::spawn_projectile(&mut world, Faction::Player, Position::new(300.0, 200.0));
    let mut tracker = ContactTracker::new();

    assert_eq!(
        tracker.detect(&world),
        vec![Contact::ShotHitsEnemy { shot, enemy }]
    );
    assert!(tracker.detect(&world).is_empty(), "still touching");

    world.get::<&mut Position>(shot).unwrap().x = 500.0;
    assert!(tracker.detect(&world).is_empty());

    world.get::<&mut Position>(shot).unwrap().x = 300.0;
    assert_eq!(tracker.detect(&world).len(), 1, "touching again");
}

#[test]
fn test_contacts_ignore_own_faction() {
    let mut world = World::new();
    let at = Position::new(20.0, 250.0);
    factory::spawn_player(&mut world, &ScreenConfig::default());
    factory::spawn_projectile(&mut world, Faction::Player, at);
    factory::spawn_enemy(&mut world, &still_minion(1, Position::new(400.0, 100.0)));
    factory::spawn_enemy(&mut world, &still_minion(1, Position::new(400.0, 100.0)));
    factory::spawn_projectile(&mut world, Faction::Enemy, Position::new(400.0, 100.0));

    assert!(ContactTracker::new().detect(&world).is_empty());
}

#[test]
fn test_shot_duel_resolved_through_engine() {
    let mut engine = quiet_level();
    engine.spawn_projectile(Faction::Player, Position::new(300.0, 100.0));
    engine.spawn_projectile(Faction::Enemy, Position::new(320.0, 100.0));
    let snap = engine.tick();
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_shot_duel_resolved_at_any_gap() {
    for gap in [20.0, 30.0, 35.0, 40.0, 50.0, 64.0, 90.0] {
        let mut engine = quiet_level();
        let ours = engine.spawn_projectile(Faction::Player, Position::new(300.0, 100.0));
        let theirs = engine.spawn_projectile(Faction::Enemy, Position::new(300.0 + gap, 100.0));
        for _ in 0..10 {
            engine.tick();
        }
        assert!(!engine.world().contains(ours), "gap {gap}: player shot flew through");
        assert!(!engine.world().contains(theirs), "gap {gap}: enemy shot flew through");
    }
}

#[test]
fn test_shots_crossing_within_one_tick_touch() {
    let mut world = World::new();
    let ours = factory::spawn_projectile(&mut world, Faction::Player, Position::new(300.0, 100.0));
    let theirs = factory::spawn_projectile(&mut world, Faction::Enemy, Position::new(330.0, 100.0));
    let mut tracker = ContactTracker::new();
    assert!(tracker.detect(&world).is_empty());

    // Swap sides in one step, as one tick of flight would at a 30 px gap.
    world.get::<&mut Position>(ours).unwrap().x = 310.8;
    world.get::<&mut Position>(theirs).unwrap().x = 319.2;
    assert!(tracker.detect(&world).is_empty(), "still apart");
    world.get::<&mut Position>(ours).unwrap().x = 321.7;
    world.get::<&mut Position>(theirs).unwrap().x = 308.3;
    assert_eq!(
        tracker.detect(&world),
        vec![Contact::ShotHitsShot {
            player_shot: ours,
            enemy_shot: theirs
        }]
    );
}

// ---- Cleanup ----

#[test]
fn test_offscreen_projectile_despawned() {
    let mut engine = quiet_level();
    let shot = engine.spawn_projectile(Faction::Player, Position::new(700.0, 100.0));
    // Past 800 + 200 + 16 px the shot is gone: ~32 ticks at 650 px/s.
    for _ in 0..40 {
        engine.tick();
    }
    assert!(!engine.world().contains(shot));
}

#[test]
fn test_enemy_spawned_right_of_screen_survives() {
    let mut engine = quiet_level();
    let boss = roster()
        .resolve(TemplateKey::boss(BossTag::BossOne), &SpecOverrides::default())
        .unwrap();
    let entity = engine.spawn_enemy(&boss);
    engine.tick();
    assert!(engine.world().contains(entity), "inside the destroy margin");
}

// ---- Wave scheduler ----

fn minion_wave(repeat_count: u32, wait: Option<f64>) -> WaveDefinition {
    WaveDefinition {
        interval_secs: 1.0,
        repeat_count,
        wait_after_secs: wait,
        spawns: vec![still_minion(1, Position::new(800.0, 250.0))],
    }
}

/// Drive the scheduler alone; returns (tick, spawns) for each tick that spawned.
fn drive(scheduler: &mut WaveScheduler, timers: &mut TimerService, ticks: u64) -> Vec<(u64, usize)> {
    let mut log = Vec::new();
    for tick in 1..=ticks {
        for fired in timers.advance() {
            let outcome = scheduler.on_timer(&fired, timers);
            if !outcome.spawns.is_empty() {
                log.push((tick, outcome.spawns.len()));
            }
        }
    }
    log
}

#[test]
fn test_scheduler_lead_in_then_first_wave() {
    let mut timers = TimerService::new();
    let mut scheduler = WaveScheduler::new();
    scheduler.start(
        LevelSchedule {
            waves: vec![minion_wave(3, None)],
        },
        &mut timers,
    );
    assert_eq!(scheduler.state(), SchedulerState::LeadIn);

    let log = drive(&mut scheduler, &mut timers, 400);
    assert_eq!(log, vec![(60, 1), (120, 1), (180, 1)]);
    assert_eq!(scheduler.state(), SchedulerState::LevelComplete);
    assert!(timers.is_empty());
}

#[test]
fn test_scheduler_chains_without_wait() {
    let mut timers = TimerService::new();
    let mut scheduler = WaveScheduler::new();
    scheduler.start(
        LevelSchedule {
            waves: vec![minion_wave(2, None), minion_wave(1, None)],
        },
        &mut timers,
    );
    let log = drive(&mut scheduler, &mut timers, 300);
    // The second wave spawns in the same tick the first one ends.
    assert_eq!(log, vec![(60, 1), (120, 2)]);
    assert_eq!(scheduler.cursor(), 2);
}

#[test]
fn test_scheduler_skips_zero_repeat_wave() {
    let mut timers = TimerService::new();
    let mut scheduler = WaveScheduler::new();
    scheduler.start(
        LevelSchedule {
            waves: vec![minion_wave(0, Some(2.0)), minion_wave(1, None)],
        },
        &mut timers,
    );
    let log = drive(&mut scheduler, &mut timers, 300);
    assert_eq!(log, vec![(180, 1)]);
}

#[test]
fn test_scheduler_ignores_stale_fire() {
    let mut timers = TimerService::new();
    let mut scheduler = WaveScheduler::new();
    scheduler.start(
        LevelSchedule {
            waves: vec![minion_wave(3, None)],
        },
        &mut timers,
    );
    let stray = Fired {
        handle: timers.wait(1.0, TimerAction::WaveLeadIn),
        action: TimerAction::WaveLeadIn,
    };
    let outcome = scheduler.on_timer(&stray, &mut timers);
    assert!(outcome.spawns.is_empty());
    assert_eq!(scheduler.state(), SchedulerState::LeadIn);
}

#[test]
fn test_scheduler_reset_cancels_pending_repeat() {
    let mut timers = TimerService::new();
    let mut scheduler = WaveScheduler::new();
    scheduler.start(
        LevelSchedule {
            waves: vec![minion_wave(10, Some(5.0))],
        },
        &mut timers,
    );
    drive(&mut scheduler, &mut timers, 130);
    let pending = scheduler.pending_timer().expect("repeat timer active");

    scheduler.reset(&mut timers);
    assert!(!timers.is_pending(pending));
    assert_eq!(scheduler.state(), SchedulerState::Idle);
    assert_eq!(scheduler.cursor(), 0);
    assert!(drive(&mut scheduler, &mut timers, 1200).is_empty());
}

#[test]
fn test_level_one_headings() {
    let screen = ScreenConfig::default();
    let schedule = levels::build_schedule(SceneId::LevelOne, &roster(), &screen).unwrap();

    let first: Vec<_> = schedule.waves[0].spawns.iter().map(|s| s.direction).collect();
    assert_eq!(first, vec![MoveDirection::Up, MoveDirection::Down]);

    for (wave, tag, variant) in [(1, MinionTag::MinionTwo, 0), (2, MinionTag::MinionThree, 1)] {
        let template = roster()
            .resolve(TemplateKey::minion(tag, variant), &SpecOverrides::default())
            .unwrap();
        for spawn in &schedule.waves[wave].spawns {
            assert_eq!(spawn.direction, template.direction, "wave {wave}");
        }
    }
}

// ---- Match state ----

#[test]
fn test_hud_subscriber_sees_kill() {
    let mut engine = quiet_level();
    let hud = engine.match_state_mut().subscribe();
    assert_eq!(hud.try_recv().unwrap().score, 0);

    engine.spawn_enemy(&still_minion(1, Position::new(400.0, 100.0)));
    engine.spawn_projectile(Faction::Player, Position::new(395.0, 100.0));
    engine.tick();

    let update = hud.try_recv().expect("kill pushed to subscriber");
    assert_eq!(update.score, 1);
    assert_eq!(update.life, 3);
}

// ---- Score/life invariants ----

#[derive(Debug, Clone, Copy)]
enum Strike {
    /// Player shot into a fresh enemy with this much hp.
    Enemy(u32),
    /// Enemy shot into the player.
    Player,
    /// Same player shot replayed against an enemy it already hit.
    Replay,
}

fn arb_strike() -> impl proptest::strategy::Strategy<Value = Strike> {
    use proptest::prelude::*;
    prop_oneof![
        (1u32..4).prop_map(Strike::Enemy),
        Just(Strike::Player),
        Just(Strike::Replay),
    ]
}

proptest::proptest! {
    #[test]
    fn prop_score_monotonic_life_steps_by_one(strikes in proptest::collection::vec(arb_strike(), 1..60)) {
        let mut arena = Arena::new();
        let player = factory::spawn_player(&mut arena.world, &ScreenConfig::default());
        let mut last_contact = None;
        let mut deaths = 0;

        for strike in strikes {
            let (score_before, life_before) = (arena.match_state.score(), arena.match_state.life());
            let player_alive = arena.world.contains(player);
            let contact = match strike {
                Strike::Enemy(hp) => {
                    let enemy = factory::spawn_enemy(&mut arena.world, &still_minion(hp, Position::new(300.0, 100.0)));
                    let shot = factory::spawn_projectile(&mut arena.world, Faction::Player, Position::new(300.0, 100.0));
                    let contact = Contact::ShotHitsEnemy { shot, enemy };
                    last_contact = Some(contact);
                    contact
                }
                Strike::Player => {
                    let shot = factory::spawn_projectile(&mut arena.world, Faction::Enemy, Position::new(20.0, 250.0));
                    Contact::ShotHitsPlayer { shot, player }
                }
                Strike::Replay => match last_contact {
                    Some(contact) => contact,
                    None => continue,
                },
            };
            let signals = arena.resolve(contact);
            deaths += signals.iter().filter(|s| **s == Signal::PlayerDied).count();

            let (score, life) = (arena.match_state.score(), arena.match_state.life());
            proptest::prop_assert!(score >= score_before);
            match strike {
                Strike::Player if player_alive => proptest::prop_assert_eq!(life, life_before - 1),
                Strike::Replay => {
                    proptest::prop_assert_eq!(score, score_before);
                    proptest::prop_assert_eq!(life, life_before);
                }
                _ => proptest::prop_assert_eq!(life, life_before),
            }
        }
        proptest::prop_assert!(deaths <= 1);
    }
}
