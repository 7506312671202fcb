//! Enemy fire control: shoot whenever the cooldown is clear.

use hecs::{Entity, World};

use starfall_core::components::*;
use starfall_core::enums::{Faction, SoundCue};
use starfall_core::events::SimEvent;
use starfall_core::types::Position;

use crate::factory;
use crate::timers::{TimerAction, TimerService};

/// Fire every ready enemy weapon and start its cooldown.
/// A boss holds fire until it has reached its stop line.
pub fn run(
    world: &mut World,
    timers: &mut TimerService,
    events: &mut Vec<SimEvent>,
    sfx_volume: f64,
) {
    let mut shots: Vec<Position> = Vec::new();

    for (entity, (pos, extent, fire, entry)) in world.query_mut::<(
        &Position,
        &Extent,
        &mut FireControl,
        Option<&BossEntry>,
    )>() {
        if fire.waiting || entry.is_some_and(|e| pos.x > e.stop_x) {
            continue;
        }
        fire.waiting = true;
        timers.wait(fire.shoot_interval, TimerAction::FireCooldown(entity));
        shots.push(factory::muzzle(*pos, extent, Faction::Enemy));
    }

    for muzzle in shots {
        factory::spawn_projectile(world, Faction::Enemy, muzzle);
        events.push(SimEvent::PlaySound {
            cue: SoundCue::EnemyAttack,
            volume: sfx_volume,
        });
    }
}

/// Clear an enemy's cooldown. A destroyed enemy is ignored.
pub fn on_cooldown(world: &mut World, entity: Entity) {
    if let Ok(mut fire) = world.get::<&mut FireControl>(entity) {
        fire.waiting = false;
    }
}
