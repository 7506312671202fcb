//! Events emitted by the simulation for the audio, effect and UI layers.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Fire-and-forget output of one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Play a sound at the configured sfx volume.
    PlaySound { cue: SoundCue, volume: f64 },
    /// Play a one-shot animation.
    PlayEffect {
        effect: EffectKind,
        position: Position,
        scale: f64,
    },
    /// A boss was destroyed; the level is over.
    BossDefeated,
    /// The player ran out of lives.
    PlayerDied,
    /// The orchestrator switched scenes.
    SceneChanged { scene: SceneId },
    /// The wave scheduler entered a wave.
    WaveStarted { index: usize },
}
