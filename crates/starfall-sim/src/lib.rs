//! Simulation engine for STARFALL.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! sequences waves and levels, and produces GameStateSnapshots for the
//! frontend.

pub mod engine;
pub mod factory;
pub mod levels;
pub mod systems;
pub mod timers;

pub use engine::{SimConfig, SimulationEngine};
pub use starfall_core as core;

#[cfg(test)]
mod tests;
