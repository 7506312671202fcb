//! Game configuration: screen geometry and audio levels.
//!
//! Defaults match the shipped game. A JSON file may override any subset of
//! fields; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Screen size and playfield borders (px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: f64,
    pub height: f64,
    pub top_border: f64,
    pub bottom_border: f64,
    pub left_border: f64,
    pub right_border: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        let width = 800.0;
        let height = 500.0;
        Self {
            width,
            height,
            top_border: 20.0,
            bottom_border: height - 20.0,
            left_border: 10.0,
            right_border: width - 20.0,
        }
    }
}

impl ScreenConfig {
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Check that the borders describe a non-empty playfield inside the screen.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::InvalidScreen(format!(
                "screen must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.top_border >= self.bottom_border {
            return Err(ConfigError::InvalidScreen(format!(
                "top border {} must be above bottom border {}",
                self.top_border, self.bottom_border
            )));
        }
        if self.left_border >= self.right_border {
            return Err(ConfigError::InvalidScreen(format!(
                "left border {} must be left of right border {}",
                self.left_border, self.right_border
            )));
        }
        if self.top_border < 0.0
            || self.bottom_border > self.height
            || self.left_border < 0.0
            || self.right_border > self.width
        {
            return Err(ConfigError::InvalidScreen(
                "borders must lie inside the screen".into(),
            ));
        }
        Ok(())
    }
}

/// Volume levels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub sfx_volume: f64,
    pub music_volume: f64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sfx_volume: 0.2,
            music_volume: 0.2,
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub audio: AudioSettings,
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: GameConfig = serde_json::from_str(json)?;
        config.audio.sfx_volume = config.audio.sfx_volume.clamp(0.0, 1.0);
        config.audio.music_volume = config.audio.music_volume.clamp(0.0, 1.0);
        config.screen.validate()?;
        Ok(config)
    }
}
