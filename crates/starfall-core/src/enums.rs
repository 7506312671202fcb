//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Vertical heading of an enemy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
    /// No vertical displacement.
    #[default]
    Hold,
}

/// Movement pattern of an enemy. Each variant owns only the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MovementPattern {
    /// Constant horizontal drift toward the player.
    Straight,
    /// Bounce between the playfield's top and bottom borders.
    UpDown,
    /// Bounce within `limit` pixels of the spawn y.
    UpDownStraight { limit: f64 },
    /// Re-roll a direction every `interval` ticks.
    Random { interval: u32 },
    /// Declared but not implemented; ticks are a no-op.
    UpDownRush,
}

impl MovementPattern {
    /// Short label for logs and snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            MovementPattern::Straight => "straight",
            MovementPattern::UpDown => "up-down",
            MovementPattern::UpDownStraight { .. } => "up-down-straight",
            MovementPattern::Random { .. } => "random",
            MovementPattern::UpDownRush => "up-down-rush",
        }
    }
}

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Sprite sheet an entity is drawn with. The engine owns the actual assets;
/// the core only needs the frame dimensions for border and contact checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteTag {
    Player,
    PlayerShot,
    EnemyShot,
    Explosion,
    MinionOne,
    MinionTwo,
    MinionThree,
    BossOne,
}

impl SpriteTag {
    /// Unscaled frame size in pixels: (width, height).
    pub fn frame_size(&self) -> (f64, f64) {
        match self {
            SpriteTag::Player => (32.0, 32.0),
            SpriteTag::PlayerShot | SpriteTag::EnemyShot => (32.0, 16.0),
            SpriteTag::Explosion => (32.0, 32.0),
            SpriteTag::MinionOne | SpriteTag::MinionTwo | SpriteTag::MinionThree => (32.0, 32.0),
            SpriteTag::BossOne => (64.0, 64.0),
        }
    }
}

/// Regular enemy template families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinionTag {
    MinionOne,
    MinionTwo,
    MinionThree,
}

/// Boss template families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossTag {
    BossOne,
}

/// Scene graph entries, in play order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    #[default]
    StartMenu,
    LevelOne,
    LevelTwo,
    LevelThree,
    Ranking,
}

impl SceneId {
    /// The scene that follows this one.
    pub fn next(&self) -> SceneId {
        match self {
            SceneId::StartMenu => SceneId::LevelOne,
            SceneId::LevelOne => SceneId::LevelTwo,
            SceneId::LevelTwo => SceneId::LevelThree,
            SceneId::LevelThree => SceneId::Ranking,
            SceneId::Ranking => SceneId::StartMenu,
        }
    }

    /// Whether this scene is a playable level.
    pub fn is_level(&self) -> bool {
        matches!(
            self,
            SceneId::LevelOne | SceneId::LevelTwo | SceneId::LevelThree
        )
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
}

/// Sound cues played by the engine's audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
}

/// One-shot visual effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Explosion,
}
