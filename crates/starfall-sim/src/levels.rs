//! Level content: the wave schedule of every level scene.

use std::collections::HashMap;

use starfall_core::config::ScreenConfig;
use starfall_core::enums::{BossTag, MinionTag, MoveDirection, SceneId};
use starfall_core::error::ConfigError;
use starfall_core::roster::{EnemyRoster, EnemySpec, SpecOverrides, TemplateKey};
use starfall_core::types::Position;

use crate::systems::wave_scheduler::{LevelSchedule, WaveDefinition};

/// Seconds between rounds of a minion wave.
const MINION_INTERVAL_SECS: f64 = 1.0;

/// Rounds per minion wave.
const MINION_ROUNDS: u32 = 10;

/// Pause after each minion wave.
const MINION_WAIT_SECS: f64 = 5.0;

/// Build the wave schedule for a level scene.
pub fn build_schedule(
    scene: SceneId,
    roster: &EnemyRoster,
    screen: &ScreenConfig,
) -> Result<LevelSchedule, ConfigError> {
    match scene {
        SceneId::LevelOne => level_one(roster, screen),
        // No content yet; the scheduler idles through them.
        SceneId::LevelTwo | SceneId::LevelThree => Ok(LevelSchedule::default()),
        other => Err(ConfigError::UnknownLevel(other)),
    }
}

/// Schedules for every level, built up front so a bad roster fails at startup.
pub fn build_campaign(
    roster: &EnemyRoster,
    screen: &ScreenConfig,
) -> Result<HashMap<SceneId, LevelSchedule>, ConfigError> {
    let mut levels = HashMap::new();
    for scene in [SceneId::LevelOne, SceneId::LevelTwo, SceneId::LevelThree] {
        levels.insert(scene, build_schedule(scene, roster, screen)?);
    }
    Ok(levels)
}

/// Three minion waves, each a pair mirrored around the centre line, then the boss.
/// Only the first pair is sent off heading away from the centre; later pairs
/// keep their template's heading.
fn level_one(roster: &EnemyRoster, screen: &ScreenConfig) -> Result<LevelSchedule, ConfigError> {
    let pair = |tag: MinionTag,
                variant: u8,
                spread: f64,
                heading_away: bool|
     -> Result<Vec<EnemySpec>, ConfigError> {
        let key = TemplateKey::minion(tag, variant);
        let place = |dy: f64, heading: MoveDirection| {
            let overrides = SpecOverrides::at(Position::new(screen.width, screen.center_y() + dy));
            if heading_away {
                overrides.heading(heading)
            } else {
                overrides
            }
        };
        Ok(vec![
            roster.resolve(key, &place(-spread, MoveDirection::Up))?,
            roster.resolve(key, &place(spread, MoveDirection::Down))?,
        ])
    };
    let minion_wave = |spawns: Vec<EnemySpec>| WaveDefinition {
        interval_secs: MINION_INTERVAL_SECS,
        repeat_count: MINION_ROUNDS,
        wait_after_secs: Some(MINION_WAIT_SECS),
        spawns,
    };

    let boss = roster.resolve(TemplateKey::boss(BossTag::BossOne), &SpecOverrides::default())?;

    Ok(LevelSchedule {
        waves: vec![
            minion_wave(pair(MinionTag::MinionOne, 0, 100.0, true)?),
            minion_wave(pair(MinionTag::MinionTwo, 0, 120.0, false)?),
            minion_wave(pair(MinionTag::MinionThree, 1, 120.0, false)?),
            WaveDefinition::single(vec![boss]),
        ],
    })
}
