//! Per-tick view of the match: scene, counters, waves and every live body.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Everything a renderer needs for one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub scene: SceneId,
    pub life: u32,
    pub score: u32,
    pub waves: WaveView,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
}

/// Externally observable wave scheduler state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum SchedulerState {
    #[default]
    Idle,
    /// Waiting out the delay before the first wave.
    LeadIn,
    /// Spawning wave `index`; `spawned` repeats done so far.
    RunningWave { index: usize, spawned: u32 },
    /// Pause after a wave; `next` is the wave that follows.
    WaitingBetweenWaves { next: usize },
    LevelComplete,
}

/// Scheduler status for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub state: SchedulerState,
    pub cursor: usize,
    pub total: usize,
}

/// The player's ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub sprite: SpriteTag,
    pub scale: f64,
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub sprite: SpriteTag,
    pub scale: f64,
    pub hp: u32,
    pub is_boss: bool,
    pub direction: MoveDirection,
    pub pattern: String,
    /// Boss still sliding in.
    pub entering: bool,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub faction: Faction,
    pub sprite: SpriteTag,
}
