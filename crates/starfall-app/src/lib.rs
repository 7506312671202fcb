//! STARFALL headless application.
//!
//! This crate wires the simulation to a game loop thread and exposes
//! start/command/snapshot/HUD operations to the binary.

pub mod autopilot;
pub mod control;
pub mod game_loop;
pub mod hud;
pub mod state;

pub use starfall_core as core;
