//! Configuration errors.
//!
//! The simulation has no recoverable runtime errors; everything here is a
//! misconfiguration caught when a template, level or config is built.

use thiserror::Error;

use crate::roster::TemplateKey;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Requested enemy template does not exist in the roster.
    #[error("unknown enemy template {0:?}")]
    UnknownTemplate(TemplateKey),

    /// A pattern parameter is missing or out of range.
    #[error("invalid {pattern} parameter: {reason}")]
    InvalidPatternParameter {
        pattern: &'static str,
        reason: String,
    },

    /// A boss spec has no entry stop line.
    #[error("boss spec for {0:?} has no stop position")]
    MissingBossStop(crate::enums::SpriteTag),

    /// Hit points must be positive.
    #[error("enemy spec for {0:?} has zero hit points")]
    ZeroHitPoints(crate::enums::SpriteTag),

    /// The scene has no wave schedule.
    #[error("{0:?} is not a level")]
    UnknownLevel(crate::enums::SceneId),

    /// Screen geometry is inconsistent.
    #[error("invalid screen config: {0}")]
    InvalidScreen(String),

    /// Config file could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
