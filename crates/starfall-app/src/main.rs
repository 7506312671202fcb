//! Headless STARFALL runner.
//!
//! Usage: `starfall [config.json] [seconds]`. Runs the campaign with the
//! demo pilot and prints the HUD line whenever life or score changes.

use std::time::{Duration, Instant};

use starfall_app::state::AppState;
use starfall_app::{autopilot, control, game_loop, hud};
use starfall_core::commands::PlayerCommand;
use starfall_core::config::GameConfig;
use starfall_core::enums::SceneId;
use starfall_sim::engine::SimConfig;

/// Default demo length.
const DEFAULT_RUN_SECS: u64 = 60;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let game = match args.next() {
        Some(path) => load_config(&path)?,
        None => GameConfig::default(),
    };
    let run_secs = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| format!("invalid run length {raw:?}: {e}"))?,
        None => DEFAULT_RUN_SECS,
    };

    let state = AppState::new();
    control::start_simulation(
        &state,
        SimConfig {
            game,
            ..Default::default()
        },
    )?;
    let hud_rx = control::subscribe_hud(&state)?;
    control::send_command(PlayerCommand::StartGame, &state)?;

    let deadline = Instant::now() + Duration::from_secs(run_secs);
    let mut last_tick = None;
    while Instant::now() < deadline {
        while let Ok(counters) = hud_rx.try_recv() {
            println!("{}", hud::format_hud(&counters));
        }

        if let Some(snapshot) = control::get_snapshot(&state)? {
            if last_tick != Some(snapshot.time.tick) {
                last_tick = Some(snapshot.time.tick);
                if snapshot.scene == SceneId::Ranking {
                    log::info!("campaign finished at tick {}", snapshot.time.tick);
                    break;
                }
                for command in autopilot::steer(&snapshot) {
                    control::send_command(command, &state)?;
                }
            }
        }

        std::thread::sleep(game_loop::TICK_DURATION);
    }

    control::stop_simulation(&state)
}

fn load_config(path: &str) -> Result<GameConfig, String> {
    let json = std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?;
    let config = GameConfig::from_json_str(&json).map_err(|e| format!("{path}: {e}"))?;
    log::info!("loaded config from {path}");
    Ok(config)
}
