//! Entity factory: one call spawns exactly one entity.
//!
//! Specs arrive already validated by the roster, so spawning cannot fail.

use hecs::{Entity, EntityBuilder, World};

use starfall_core::components::*;
use starfall_core::config::ScreenConfig;
use starfall_core::constants::*;
use starfall_core::enums::{Faction, SpriteTag};
use starfall_core::roster::EnemySpec;
use starfall_core::types::{Position, Velocity};

/// Spawn the player's ship at the left edge, vertically centred.
pub fn spawn_player(world: &mut World, screen: &ScreenConfig) -> Entity {
    let extent = Extent::of(SpriteTag::Player, PLAYER_SCALE);
    world.spawn((
        Player,
        Position::new(PLAYER_SPAWN_X, screen.center_y()),
        Visual {
            sprite: SpriteTag::Player,
            scale: PLAYER_SCALE,
        },
        extent,
        Hitbox::scaled(extent, PLAYER_HITBOX_SCALE),
        PlayerControl {
            speed: PLAYER_SPEED,
            input: InputState::default(),
        },
    ))
}

/// Spawn an enemy from a spec. Bosses also get their entry phase.
pub fn spawn_enemy(world: &mut World, spec: &EnemySpec) -> Entity {
    let extent = Extent::of(spec.sprite, spec.scale);
    let mut builder = EntityBuilder::new();
    builder.add(Enemy).add(Offscreen).add(spec.start_position).add(extent);
    builder.add(Hitbox::from(extent)).add(Visual {
        sprite: spec.sprite,
        scale: spec.scale,
    });
    builder.add(EnemyBody {
        hp: spec.hp,
        start_position: spec.start_position,
        speed_x: spec.speed_x,
        speed_y: spec.speed_y,
    });
    builder.add(MovementState {
        pattern: spec.pattern,
        direction: spec.direction,
        countdown: spec.initial_countdown,
    });
    if let Some(shoot_interval) = spec.shoot_interval {
        builder.add(FireControl {
            shoot_interval,
            waiting: false,
        });
    }
    if spec.is_boss {
        builder.add(Boss);
        if let Some(stop_x) = spec.stop_x {
            builder.add(BossEntry {
                stop_x,
                speed: BOSS_ENTRY_SPEED,
            });
        }
    }
    let entity = world.spawn(builder.build());
    log::trace!("spawned {:?} at {:?}", spec.sprite, spec.start_position);
    entity
}

/// Spawn a boss. Same as [`spawn_enemy`] for a boss spec.
pub fn spawn_boss(world: &mut World, spec: &EnemySpec) -> Entity {
    debug_assert!(spec.is_boss, "spawn_boss called with a regular spec");
    spawn_enemy(world, spec)
}

/// Spawn a shot travelling away from its owner's side.
pub fn spawn_projectile(world: &mut World, faction: Faction, position: Position) -> Entity {
    let (sprite, vx) = match faction {
        Faction::Player => (SpriteTag::PlayerShot, PROJECTILE_SPEED),
        Faction::Enemy => (SpriteTag::EnemyShot, -PROJECTILE_SPEED),
    };
    let extent = Extent::of(sprite, 1.0);
    world.spawn((
        Projectile {
            faction,
            damage: PROJECTILE_DAMAGE,
        },
        Offscreen,
        position,
        Velocity::new(vx, 0.0),
        Visual { sprite, scale: 1.0 },
        extent,
        Hitbox::scaled(extent, PROJECTILE_HITBOX_SCALE),
    ))
}

/// Muzzle point of a ship facing `faction`'s firing direction.
pub fn muzzle(position: Position, extent: &Extent, faction: Faction) -> Position {
    let offset = extent.width() * MUZZLE_OFFSET_FACTOR;
    match faction {
        Faction::Player => position.offset(offset, 0.0),
        Faction::Enemy => position.offset(-offset, 0.0),
    }
}
