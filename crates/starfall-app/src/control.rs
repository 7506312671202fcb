//! Control layer: the frontend-facing operations.
//!
//! These bridge callers to the game loop thread via channels. Errors are
//! flattened to `String` at this boundary.

use std::sync::mpsc;

use starfall_core::commands::PlayerCommand;
use starfall_core::match_state::MatchCounters;
use starfall_core::state::GameStateSnapshot;
use starfall_sim::engine::{SimConfig, SimulationEngine};

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let engine = SimulationEngine::new(config).map_err(|e| e.to_string())?;
    let cmd_tx = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone());

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(command: PlayerCommand, state: &AppState) -> Result<(), String> {
    send(GameLoopCommand::PlayerCommand(command), state)
}

/// Receive every life/score change, starting with the current values.
pub fn subscribe_hud(state: &AppState) -> Result<mpsc::Receiver<MatchCounters>, String> {
    let (tx, rx) = mpsc::channel();
    send(GameLoopCommand::SubscribeHud(tx), state)?;
    Ok(rx)
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop thread. Stopping a stopped simulation is a no-op.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    if let Some(tx) = tx_lock.take() {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}

fn send(command: GameLoopCommand, state: &AppState) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}
