//! Combat resolver: turns contacts into damage, score, death and signals.
//!
//! Every branch first checks that the entities involved are still alive.
//! A contact against something already destroyed this tick changes nothing.

use hecs::{Entity, World};

use starfall_core::components::*;
use starfall_core::constants::*;
use starfall_core::enums::{EffectKind, SoundCue};
use starfall_core::events::SimEvent;
use starfall_core::match_state::SharedMatchState;
use starfall_core::types::Position;

use crate::systems::contacts::Contact;
use crate::timers::{TimerAction, TimerService};

/// Level-flow signal for the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    BossDefeated,
    PlayerDied,
}

/// Everything the resolver may touch.
pub struct CombatContext<'a> {
    pub world: &'a mut World,
    pub match_state: &'a mut SharedMatchState,
    pub timers: &'a mut TimerService,
    pub events: &'a mut Vec<SimEvent>,
    pub sfx_volume: f64,
}

/// Resolve this tick's contacts in order.
pub fn run(ctx: &mut CombatContext<'_>, contacts: &[Contact]) -> Vec<Signal> {
    let mut signals = Vec::new();
    for contact in contacts {
        signals.extend(resolve(ctx, *contact));
    }
    signals
}

/// Resolve a single contact. A ram can both kill the enemy and the player.
pub fn resolve(ctx: &mut CombatContext<'_>, contact: Contact) -> Vec<Signal> {
    let signals = match contact {
        Contact::ShotHitsEnemy { shot, enemy } => {
            if !alive(ctx.world, &[shot, enemy]) {
                return Vec::new();
            }
            let damage = ctx
                .world
                .get::<&Projectile>(shot)
                .map(|p| p.damage)
                .unwrap_or(PROJECTILE_DAMAGE);
            destroy(ctx.world, shot);
            [damage_enemy(ctx, enemy, damage), None]
        }
        Contact::ShotHitsShot {
            player_shot,
            enemy_shot,
        } => {
            if alive(ctx.world, &[player_shot, enemy_shot]) {
                destroy(ctx.world, player_shot);
                destroy(ctx.world, enemy_shot);
            }
            [None, None]
        }
        Contact::ShotHitsPlayer { shot, player } => {
            if !alive(ctx.world, &[shot, player]) {
                return Vec::new();
            }
            destroy(ctx.world, shot);
            [damage_player(ctx, player), None]
        }
        Contact::EnemyRamsPlayer { enemy, player } => {
            if !alive(ctx.world, &[enemy, player]) {
                return Vec::new();
            }
            if let Ok(mut body) = ctx.world.get::<&mut EnemyBody>(enemy) {
                body.hp = body.hp.saturating_sub(RAM_DAMAGE);
            }
            let died = damage_player(ctx, player);
            [died, finish_if_dead(ctx, enemy)]
        }
    };
    signals.into_iter().flatten().collect()
}

/// Destroy an entity. Destroying a missing entity is a no-op.
pub fn destroy(world: &mut World, entity: Entity) {
    let _ = world.despawn(entity);
}

fn alive(world: &World, entities: &[Entity]) -> bool {
    entities.iter().all(|&e| world.contains(e))
}

fn damage_enemy(ctx: &mut CombatContext<'_>, enemy: Entity, damage: u32) -> Option<Signal> {
    if let Ok(mut body) = ctx.world.get::<&mut EnemyBody>(enemy) {
        body.hp = body.hp.saturating_sub(damage);
    }
    finish_if_dead(ctx, enemy)
}

fn finish_if_dead(ctx: &mut CombatContext<'_>, enemy: Entity) -> Option<Signal> {
    let hp = ctx.world.get::<&EnemyBody>(enemy).map(|b| b.hp).ok()?;
    if hp > 0 {
        return None;
    }
    let is_boss = ctx.world.get::<&Boss>(enemy).is_ok();
    let position = position_of(ctx.world, enemy);
    explode(ctx, position, SoundCue::EnemyDeath);
    destroy(ctx.world, enemy);

    if is_boss {
        let score = ctx.match_state.add_score(BOSS_KILL_SCORE);
        ctx.events.push(SimEvent::BossDefeated);
        log::info!("boss defeated, score {score}");
        Some(Signal::BossDefeated)
    } else {
        ctx.match_state.add_score(MINION_KILL_SCORE);
        None
    }
}

/// One life per hit. The death branch keys off the value `lose_life`
/// returns, so it runs once per death.
fn damage_player(ctx: &mut CombatContext<'_>, player: Entity) -> Option<Signal> {
    let life = ctx.match_state.lose_life();
    if life > 0 {
        log::debug!("player hit, {life} lives left");
        return None;
    }
    let position = position_of(ctx.world, player);
    explode(ctx, position, SoundCue::PlayerDeath);
    destroy(ctx.world, player);
    ctx.timers
        .wait(RESPAWN_DELAY_SECS, TimerAction::RestartAfterDeath);
    ctx.events.push(SimEvent::PlayerDied);
    log::info!("player died, restarting in {RESPAWN_DELAY_SECS}s");
    Some(Signal::PlayerDied)
}

fn explode(ctx: &mut CombatContext<'_>, position: Position, cue: SoundCue) {
    ctx.events.push(SimEvent::PlayEffect {
        effect: EffectKind::Explosion,
        position,
        scale: EXPLOSION_SCALE,
    });
    ctx.events.push(SimEvent::PlaySound {
        cue,
        volume: ctx.sfx_volume,
    });
}

fn position_of(world: &World, entity: Entity) -> Position {
    world
        .get::<&Position>(entity)
        .map(|p| *p)
        .unwrap_or_default()
}
