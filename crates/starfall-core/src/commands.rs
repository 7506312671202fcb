//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::components::InputState;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Scene control ---
    /// Leave the start menu or ranking screen.
    StartGame,
    /// Go back to the start menu, discarding the current match.
    ReturnToMenu,

    // --- Ship control ---
    /// Replace the set of held directions.
    SetInput { input: InputState },
    /// Fire one shot.
    Fire,

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = paused).
    SetTimeScale { scale: f64 },
    Pause,
    Resume,
}
