//! Movement system: enemy pattern FSM, boss entry and projectile flight.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starfall_behavior::movement::{self, MovementContext, Playfield};
use starfall_core::components::*;
use starfall_core::config::ScreenConfig;
use starfall_core::constants::DT;
use starfall_core::types::{Position, Velocity};

/// Advance every enemy by one tick.
///
/// A boss still beyond its stop line slides left at its entry speed and
/// skips the FSM. Once it has entered, its horizontal speed is zero.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, screen: &ScreenConfig) {
    let playfield = Playfield {
        top: screen.top_border,
        bottom: screen.bottom_border,
    };

    for (_entity, (pos, state, body, extent, entry)) in world.query_mut::<(
        &mut Position,
        &mut MovementState,
        &EnemyBody,
        &Extent,
        Option<&BossEntry>,
    )>() {
        let speed_x = match entry {
            Some(entry) if pos.x > entry.stop_x => {
                pos.x -= entry.speed * DT;
                continue;
            }
            Some(_) => 0.0,
            None => body.speed_x,
        };

        let ctx = MovementContext {
            pattern: state.pattern,
            direction: state.direction,
            countdown: state.countdown,
            position: *pos,
            start_position: body.start_position,
            half_height: extent.half_height,
            speed_x,
            speed_y: body.speed_y,
            playfield,
            dt: DT,
        };
        let update = movement::evaluate(&ctx, rng);

        pos.x += update.dx;
        pos.y += update.dy;
        state.direction = update.new_direction;
        state.countdown = update.new_countdown;
    }
}

/// Integrate straight-line flight for every projectile.
pub fn integrate(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}
