//! Contact reporting: axis-aligned hitbox overlap between tagged bodies.
//!
//! A pair is reported once, on the tick its overlap begins. It is reported
//! again only after the bodies separate and touch anew. Projectiles never
//! touch their own faction.
//!
//! Moving bodies are swept along x over the last tick, so two shots closing
//! faster than their combined width still meet.

use std::collections::HashSet;

use hecs::{Entity, World};

use starfall_core::components::*;
use starfall_core::enums::Faction;
use starfall_core::constants::DT;
use starfall_core::types::{Position, Velocity};

/// A new contact, already sorted into its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player shot reached an enemy.
    ShotHitsEnemy { shot: Entity, enemy: Entity },
    /// Player shot and enemy shot met.
    ShotHitsShot { player_shot: Entity, enemy_shot: Entity },
    /// Enemy shot reached the player.
    ShotHitsPlayer { shot: Entity, player: Entity },
    /// Enemy body ran into the player.
    EnemyRamsPlayer { enemy: Entity, player: Entity },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Player,
    Enemy,
    Shot(Faction),
}

#[derive(Debug, Clone, Copy)]
struct Collider {
    entity: Entity,
    body: Body,
    pos: Position,
    /// Position at the start of the tick.
    prev_x: f64,
    hitbox: Hitbox,
}

/// Remembers which pairs overlapped last tick.
#[derive(Debug, Default)]
pub struct ContactTracker {
    touching: HashSet<(Entity, Entity)>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every remembered overlap.
    pub fn clear(&mut self) {
        self.touching.clear();
    }

    /// Report contacts that began this tick.
    pub fn detect(&mut self, world: &World) -> Vec<Contact> {
        let colliders = gather(world);
        let mut touching = HashSet::new();
        let mut contacts = Vec::new();

        for (i, a) in colliders.iter().enumerate() {
            for b in &colliders[i + 1..] {
                let Some(contact) = classify(a, b) else {
                    continue;
                };
                if !overlaps(a, b) {
                    continue;
                }
                let key = if a.entity < b.entity {
                    (a.entity, b.entity)
                } else {
                    (b.entity, a.entity)
                };
                if !self.touching.contains(&key) {
                    contacts.push(contact);
                }
                touching.insert(key);
            }
        }

        self.touching = touching;
        contacts
    }
}

fn gather(world: &World) -> Vec<Collider> {
    let mut colliders = Vec::new();
    for (entity, (pos, hitbox, vel, player, enemy, projectile)) in world
        .query::<(
            &Position,
            &Hitbox,
            Option<&Velocity>,
            Option<&Player>,
            Option<&Enemy>,
            Option<&Projectile>,
        )>()
        .iter()
    {
        let body = match (player, enemy, projectile) {
            (Some(_), _, _) => Body::Player,
            (_, Some(_), _) => Body::Enemy,
            (_, _, Some(p)) => Body::Shot(p.faction),
            _ => continue,
        };
        colliders.push(Collider {
            entity,
            body,
            pos: *pos,
            prev_x: vel.map_or(pos.x, |v| pos.x - v.x * DT),
            hitbox: *hitbox,
        });
    }
    colliders
}

fn classify(a: &Collider, b: &Collider) -> Option<Contact> {
    classify_ordered(a, b).or_else(|| classify_ordered(b, a))
}

fn classify_ordered(a: &Collider, b: &Collider) -> Option<Contact> {
    match (a.body, b.body) {
        (Body::Shot(Faction::Player), Body::Enemy) => Some(Contact::ShotHitsEnemy {
            shot: a.entity,
            enemy: b.entity,
        }),
        (Body::Shot(Faction::Player), Body::Shot(Faction::Enemy)) => Some(Contact::ShotHitsShot {
            player_shot: a.entity,
            enemy_shot: b.entity,
        }),
        (Body::Shot(Faction::Enemy), Body::Player) => Some(Contact::ShotHitsPlayer {
            shot: a.entity,
            player: b.entity,
        }),
        (Body::Enemy, Body::Player) => Some(Contact::EnemyRamsPlayer {
            enemy: a.entity,
            player: b.entity,
        }),
        _ => None,
    }
}

fn overlaps(a: &Collider, b: &Collider) -> bool {
    let reach = a.hitbox.half_width + b.hitbox.half_width;
    let start = a.prev_x - b.prev_x;
    let end = a.pos.x - b.pos.x;
    // The x gap moves linearly from start to end; any point inside the reach counts.
    let swept_x = start.min(end) < reach && start.max(end) > -reach;
    swept_x && (a.pos.y - b.pos.y).abs() < a.hitbox.half_height + b.hitbox.half_height
}
