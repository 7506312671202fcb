//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks any hostile ship, boss included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a boss. Its defeat ends the level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boss;

/// Marks entities destroyed when they leave the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Offscreen;

/// A straight-line shot. Never collides with its own faction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub faction: Faction,
    pub damage: u32,
}

/// Combat body of an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBody {
    /// Remaining hit points. Only the combat resolver lowers this.
    pub hp: u32,
    /// Where the enemy spawned (anchor for relative bounce limits).
    pub start_position: Position,
    /// Configured horizontal speed (px/s), applied toward the player.
    pub speed_x: f64,
    /// Configured vertical speed (px/s).
    pub speed_y: f64,
}

/// Per-entity movement state machine data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementState {
    pub pattern: MovementPattern,
    pub direction: MoveDirection,
    /// Ticks until the next random re-roll.
    pub countdown: u32,
}

/// Enemy weapon with a cooldown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireControl {
    /// Seconds between shots.
    pub shoot_interval: f64,
    /// Whether the enemy already fired in the current cooldown.
    pub waiting: bool,
}

/// Boss still sliding in from the right edge.
/// While `x > stop_x` regular movement and firing are suspended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BossEntry {
    pub stop_x: f64,
    pub speed: f64,
}

/// Half size of the drawn sprite (px). Used for border checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Extent {
    pub half_width: f64,
    pub half_height: f64,
}

/// Half size of the contact area (px).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub half_width: f64,
    pub half_height: f64,
}

/// Sprite and scale handed to the renderer as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual {
    pub sprite: SpriteTag,
    pub scale: f64,
}

/// Directions currently held by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Player steering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerControl {
    pub speed: f64,
    pub input: InputState,
}

impl Extent {
    /// Extent of a sprite frame at the given scale.
    pub fn of(sprite: SpriteTag, scale: f64) -> Self {
        let (w, h) = sprite.frame_size();
        Self {
            half_width: w * scale / 2.0,
            half_height: h * scale / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }
}

impl Hitbox {
    /// Hitbox shrunk from a visual extent.
    pub fn scaled(extent: Extent, factor: f64) -> Self {
        Self {
            half_width: extent.half_width * factor,
            half_height: extent.half_height * factor,
        }
    }
}

impl From<Extent> for Hitbox {
    fn from(extent: Extent) -> Self {
        Hitbox::scaled(extent, 1.0)
    }
}
