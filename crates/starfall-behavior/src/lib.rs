//! Enemy behavior for STARFALL.
//!
//! Implements the per-tick movement state machine for every movement
//! pattern. Operates on plain data, with no ECS dependency.

pub mod movement;

pub use starfall_core as core;
