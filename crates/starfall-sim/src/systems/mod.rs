//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in components or is passed in.

pub mod cleanup;
pub mod combat;
pub mod contacts;
pub mod fire_control;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod wave_scheduler;
