//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use starfall_core::components::*;
use starfall_core::enums::GamePhase;
use starfall_core::enums::SceneId;
use starfall_core::events::SimEvent;
use starfall_core::match_state::MatchCounters;
use starfall_core::state::*;
use starfall_core::types::{Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    scene: SceneId,
    counters: MatchCounters,
    waves: WaveView,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        scene,
        life: counters.life,
        score: counters.score,
        waves,
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Visual)>()
        .iter()
        .next()
        .map(|(_, (_, pos, visual))| PlayerView {
            position: *pos,
            sprite: visual.sprite,
            scale: visual.scale,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(
            &Enemy,
            &Position,
            &Visual,
            &EnemyBody,
            &MovementState,
            Option<&BossEntry>,
            Option<&Boss>,
        )>()
        .iter()
        .map(|(_, (_, pos, visual, body, state, entry, boss))| EnemyView {
            position: *pos,
            sprite: visual.sprite,
            scale: visual.scale,
            hp: body.hp,
            is_boss: boss.is_some(),
            direction: state.direction,
            pattern: state.pattern.label().to_string(),
            entering: entry.is_some_and(|e| pos.x > e.stop_x),
        })
        .collect();
    enemies.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Visual)>()
        .iter()
        .map(|(_, (projectile, pos, visual))| ProjectileView {
            position: *pos,
            faction: projectile.faction,
            sprite: visual.sprite,
        })
        .collect()
}
