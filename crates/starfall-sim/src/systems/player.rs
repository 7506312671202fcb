//! Player ship: held-direction steering and firing.

use hecs::{Entity, World};

use starfall_core::components::*;
use starfall_core::config::ScreenConfig;
use starfall_core::constants::DT;
use starfall_core::enums::{Faction, SoundCue};
use starfall_core::events::SimEvent;
use starfall_core::types::Position;

use crate::factory;

/// The player's entity, if it is alive.
pub fn find(world: &World) -> Option<Entity> {
    world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}

/// Replace the held directions.
pub fn set_input(world: &mut World, input: InputState) {
    for (_entity, (_player, control)) in world.query_mut::<(&Player, &mut PlayerControl)>() {
        control.input = input;
    }
}

/// Move the ship and keep it inside the playfield borders.
pub fn run(world: &mut World, screen: &ScreenConfig) {
    for (_entity, (_player, pos, control, extent)) in
        world.query_mut::<(&Player, &mut Position, &PlayerControl, &Extent)>()
    {
        let input = control.input;
        let step = control.speed * DT;
        let dx = f64::from(i8::from(input.right) - i8::from(input.left));
        let dy = f64::from(i8::from(input.down) - i8::from(input.up));

        pos.x = clamp_axis(
            pos.x + dx * step,
            screen.left_border + extent.half_width,
            screen.right_border - extent.half_width,
        );
        pos.y = clamp_axis(
            pos.y + dy * step,
            screen.top_border + extent.half_height,
            screen.bottom_border - extent.half_height,
        );
    }
}

/// Spawn a player shot at the muzzle. Does nothing without a live player.
pub fn fire(world: &mut World, events: &mut Vec<SimEvent>, sfx_volume: f64) -> Option<Entity> {
    let player = find(world)?;
    let muzzle = {
        let pos = world.get::<&Position>(player).ok()?;
        let extent = world.get::<&Extent>(player).ok()?;
        factory::muzzle(*pos, &extent, Faction::Player)
    };
    let shot = factory::spawn_projectile(world, Faction::Player, muzzle);
    events.push(SimEvent::PlaySound {
        cue: SoundCue::PlayerAttack,
        volume: sfx_volume,
    });
    Some(shot)
}

// A sprite wider than the playfield pins to the lower bound instead of panicking.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}
