//! Enemy stat blocks: one table of templates plus per-spawn overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ScreenConfig;
use crate::enums::*;
use crate::error::ConfigError;
use crate::types::Position;

/// Template family of an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateFamily {
    Minion(MinionTag),
    Boss(BossTag),
}

/// Key into the roster: a family plus a numbered variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub family: TemplateFamily,
    pub variant: u8,
}

impl TemplateKey {
    pub fn minion(tag: MinionTag, variant: u8) -> Self {
        Self {
            family: TemplateFamily::Minion(tag),
            variant,
        }
    }

    pub fn boss(tag: BossTag) -> Self {
        Self {
            family: TemplateFamily::Boss(tag),
            variant: 0,
        }
    }
}

/// Immutable blueprint consumed once at spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub sprite: SpriteTag,
    pub scale: f64,
    pub hp: u32,
    pub start_position: Position,
    pub speed_x: f64,
    pub speed_y: f64,
    pub pattern: MovementPattern,
    /// Heading before the first pattern decision.
    pub direction: MoveDirection,
    /// Ticks before the first random re-roll.
    pub initial_countdown: u32,
    /// Seconds between shots; `None` never fires.
    pub shoot_interval: Option<f64>,
    pub is_boss: bool,
    /// X coordinate where a boss stops its entry slide.
    pub stop_x: Option<f64>,
}

impl EnemySpec {
    /// Reject specs whose pattern or boss parameters are unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hp == 0 {
            return Err(ConfigError::ZeroHitPoints(self.sprite));
        }
        match self.pattern {
            MovementPattern::UpDownStraight { limit } if !(limit > 0.0) => {
                return Err(ConfigError::InvalidPatternParameter {
                    pattern: self.pattern.label(),
                    reason: format!("oscillation limit must be positive, got {limit}"),
                });
            }
            MovementPattern::Random { interval: 0 } => {
                return Err(ConfigError::InvalidPatternParameter {
                    pattern: self.pattern.label(),
                    reason: "re-roll interval must be at least one tick".into(),
                });
            }
            _ => {}
        }
        if let Some(interval) = self.shoot_interval {
            if !(interval > 0.0) {
                return Err(ConfigError::InvalidPatternParameter {
                    pattern: self.pattern.label(),
                    reason: format!("fire interval must be positive, got {interval}"),
                });
            }
        }
        if self.is_boss && self.stop_x.is_none() {
            return Err(ConfigError::MissingBossStop(self.sprite));
        }
        Ok(())
    }

    /// Apply per-spawn overrides on top of this template.
    pub fn merged(&self, overrides: &SpecOverrides) -> EnemySpec {
        let mut spec = self.clone();
        if let Some(scale) = overrides.scale {
            spec.scale = scale;
        }
        if let Some(hp) = overrides.hp {
            spec.hp = hp;
        }
        if let Some(position) = overrides.start_position {
            spec.start_position = position;
        }
        if let Some(speed_x) = overrides.speed_x {
            spec.speed_x = speed_x;
        }
        if let Some(speed_y) = overrides.speed_y {
            spec.speed_y = speed_y;
        }
        if let Some(pattern) = overrides.pattern {
            spec.pattern = pattern;
        }
        if let Some(direction) = overrides.direction {
            spec.direction = direction;
        }
        if let Some(countdown) = overrides.initial_countdown {
            spec.initial_countdown = countdown;
        }
        if let Some(interval) = overrides.shoot_interval {
            spec.shoot_interval = Some(interval);
        }
        if let Some(stop_x) = overrides.stop_x {
            spec.stop_x = Some(stop_x);
        }
        spec
    }
}

/// Optional per-spawn changes to a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecOverrides {
    pub scale: Option<f64>,
    pub hp: Option<u32>,
    pub start_position: Option<Position>,
    pub speed_x: Option<f64>,
    pub speed_y: Option<f64>,
    pub pattern: Option<MovementPattern>,
    pub direction: Option<MoveDirection>,
    pub initial_countdown: Option<u32>,
    pub shoot_interval: Option<f64>,
    pub stop_x: Option<f64>,
}

impl SpecOverrides {
    pub fn at(position: Position) -> Self {
        Self {
            start_position: Some(position),
            ..Default::default()
        }
    }

    pub fn heading(mut self, direction: MoveDirection) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// Table of all enemy templates.
#[derive(Debug, Clone, Default)]
pub struct EnemyRoster {
    templates: HashMap<TemplateKey, EnemySpec>,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a template.
    pub fn insert(&mut self, key: TemplateKey, spec: EnemySpec) {
        self.templates.insert(key, spec);
    }

    pub fn contains(&self, key: TemplateKey) -> bool {
        self.templates.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template, merge overrides and validate the result.
    pub fn resolve(
        &self,
        key: TemplateKey,
        overrides: &SpecOverrides,
    ) -> Result<EnemySpec, ConfigError> {
        let template = self
            .templates
            .get(&key)
            .ok_or(ConfigError::UnknownTemplate(key))?;
        let spec = template.merged(overrides);
        spec.validate()?;
        Ok(spec)
    }

    /// The shipped roster. Spawn points sit on the right screen edge.
    pub fn standard(screen: &ScreenConfig) -> Self {
        let edge = Position::new(screen.width, screen.center_y());
        let minion = |sprite, hp, speed_x, speed_y, pattern, shoot_interval| EnemySpec {
            sprite,
            scale: 1.0,
            hp,
            start_position: edge,
            speed_x,
            speed_y,
            pattern,
            direction: MoveDirection::Hold,
            initial_countdown: 0,
            shoot_interval,
            is_boss: false,
            stop_x: None,
        };

        let mut roster = Self::new();
        roster.insert(
            TemplateKey::minion(MinionTag::MinionOne, 0),
            minion(
                SpriteTag::MinionOne,
                1,
                120.0,
                80.0,
                MovementPattern::UpDownStraight { limit: 60.0 },
                None,
            ),
        );
        roster.insert(
            TemplateKey::minion(MinionTag::MinionOne, 1),
            minion(SpriteTag::MinionOne, 2, 120.0, 120.0, MovementPattern::UpDown, None),
        );
        roster.insert(
            TemplateKey::minion(MinionTag::MinionTwo, 0),
            minion(SpriteTag::MinionTwo, 2, 180.0, 0.0, MovementPattern::Straight, None),
        );
        roster.insert(
            TemplateKey::minion(MinionTag::MinionTwo, 1),
            minion(
                SpriteTag::MinionTwo,
                2,
                150.0,
                0.0,
                MovementPattern::Straight,
                Some(2.5),
            ),
        );
        roster.insert(
            TemplateKey::minion(MinionTag::MinionThree, 0),
            minion(
                SpriteTag::MinionThree,
                2,
                100.0,
                120.0,
                MovementPattern::UpDown,
                Some(3.0),
            ),
        );
        roster.insert(
            TemplateKey::minion(MinionTag::MinionThree, 1),
            minion(
                SpriteTag::MinionThree,
                3,
                100.0,
                120.0,
                MovementPattern::Random { interval: 40 },
                Some(2.0),
            ),
        );
        roster.insert(
            TemplateKey::boss(BossTag::BossOne),
            EnemySpec {
                sprite: SpriteTag::BossOne,
                scale: 2.0,
                hp: 50,
                start_position: Position::new(screen.width + 100.0, screen.center_y()),
                speed_x: 100.0,
                speed_y: 200.0,
                pattern: MovementPattern::UpDown,
                direction: MoveDirection::Hold,
                initial_countdown: 50,
                shoot_interval: Some(3.0),
                is_boss: true,
                stop_x: Some(screen.width - 70.0),
            },
        );
        roster
    }
}
