//! Movement state machine.
//!
//! `evaluate` computes one tick of displacement for an enemy plus its next
//! direction and re-roll countdown. Border checks are reactive: a bounce is
//! decided from the current position, so an entity can overshoot a bound
//! by at most one tick's displacement.

use rand::Rng;

use starfall_core::enums::{MoveDirection, MovementPattern};
use starfall_core::types::Position;

/// Vertical band an entity may move in (px, y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub top: f64,
    pub bottom: f64,
}

/// Input to the movement FSM for a single entity.
#[derive(Debug, Clone, Copy)]
pub struct MovementContext {
    pub pattern: MovementPattern,
    pub direction: MoveDirection,
    pub countdown: u32,
    pub position: Position,
    pub start_position: Position,
    pub half_height: f64,
    /// Configured horizontal speed (px/s). Applied toward the player.
    pub speed_x: f64,
    /// Configured vertical speed (px/s).
    pub speed_y: f64,
    pub playfield: Playfield,
    pub dt: f64,
}

/// Output from the movement FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementUpdate {
    pub dx: f64,
    pub dy: f64,
    pub new_direction: MoveDirection,
    pub new_countdown: u32,
    pub direction_changed: bool,
}

/// Evaluate the FSM for one entity.
pub fn evaluate<R: Rng + ?Sized>(ctx: &MovementContext, rng: &mut R) -> MovementUpdate {
    let dx = -ctx.speed_x * ctx.dt;

    match ctx.pattern {
        MovementPattern::Straight => finish(ctx, dx, 0.0, ctx.direction, ctx.countdown),
        MovementPattern::UpDown => bounce(ctx, dx, ctx.playfield),
        MovementPattern::UpDownStraight { limit } => {
            let band = Playfield {
                top: ctx.start_position.y - limit,
                bottom: ctx.start_position.y + limit,
            };
            bounce(ctx, dx, band)
        }
        MovementPattern::Random { interval } => random(ctx, dx, interval, rng),
        MovementPattern::UpDownRush => {
            log::trace!("up-down-rush is not implemented, holding position");
            finish(ctx, 0.0, 0.0, ctx.direction, ctx.countdown)
        }
    }
}

/// Flip direction when the leading edge reaches a band edge.
fn bounce(ctx: &MovementContext, dx: f64, band: Playfield) -> MovementUpdate {
    let y = ctx.position.y;
    let direction = if y + ctx.half_height >= band.bottom {
        MoveDirection::Up
    } else if y - ctx.half_height <= band.top {
        MoveDirection::Down
    } else {
        ctx.direction
    };

    // Bouncing patterns never stand still: anything but Up travels down.
    let dy = match direction {
        MoveDirection::Up => -ctx.speed_y * ctx.dt,
        MoveDirection::Down | MoveDirection::Hold => ctx.speed_y * ctx.dt,
    };

    finish(ctx, dx, dy, direction, ctx.countdown)
}

fn random<R: Rng + ?Sized>(
    ctx: &MovementContext,
    dx: f64,
    interval: u32,
    rng: &mut R,
) -> MovementUpdate {
    let mut direction = ctx.direction;
    let mut countdown = ctx.countdown;

    if countdown == 0 {
        direction = draw_direction(rng);
        countdown = interval;
    }

    // Border proximity beats both the stored and the freshly drawn direction.
    let step = ctx.speed_y * ctx.dt;
    let y = ctx.position.y;
    let forced = if y - ctx.half_height - step < ctx.playfield.top {
        Some(MoveDirection::Down)
    } else if y + ctx.half_height + step > ctx.playfield.bottom {
        Some(MoveDirection::Up)
    } else {
        None
    };
    if let Some(forced) = forced {
        direction = forced;
    }
    // Every direction change re-arms the countdown.
    if direction != ctx.direction {
        countdown = interval;
    }

    let dy = match direction {
        MoveDirection::Up => -step,
        MoveDirection::Down => step,
        MoveDirection::Hold => 0.0,
    };

    finish(ctx, dx, dy, direction, countdown.saturating_sub(1))
}

/// Uniform draw over up, down and hold.
fn draw_direction<R: Rng + ?Sized>(rng: &mut R) -> MoveDirection {
    match rng.gen_range(0..3) {
        0 => MoveDirection::Up,
        1 => MoveDirection::Down,
        _ => MoveDirection::Hold,
    }
}

fn finish(
    ctx: &MovementContext,
    dx: f64,
    dy: f64,
    direction: MoveDirection,
    countdown: u32,
) -> MovementUpdate {
    MovementUpdate {
        dx,
        dy,
        new_direction: direction,
        new_countdown: countdown,
        direction_changed: direction != ctx.direction,
    }
}
