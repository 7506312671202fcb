//! Core types and definitions for the STARFALL shooter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, enemy templates and the
//! shared match counters. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod match_state;
pub mod roster;
pub mod state;
pub mod types;
