//! Cleanup system: removes enemies and shots that left the screen.

use hecs::{Entity, World};

use starfall_core::components::{Extent, Offscreen};
use starfall_core::config::ScreenConfig;
use starfall_core::constants::OFFSCREEN_MARGIN;
use starfall_core::types::Position;

/// Despawn every `Offscreen` entity whose box lies entirely outside the
/// screen grown by the margin. Uses a pre-allocated buffer to avoid
/// per-tick allocation.
pub fn run(world: &mut World, screen: &ScreenConfig, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let (min_x, max_x) = (-OFFSCREEN_MARGIN, screen.width + OFFSCREEN_MARGIN);
    let (min_y, max_y) = (-OFFSCREEN_MARGIN, screen.height + OFFSCREEN_MARGIN);

    for (entity, (pos, extent, _offscreen)) in
        world.query_mut::<(&Position, &Extent, &Offscreen)>()
    {
        let outside = pos.x + extent.half_width < min_x
            || pos.x - extent.half_width > max_x
            || pos.y + extent.half_height < min_y
            || pos.y - extent.half_height > max_y;
        if outside {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
