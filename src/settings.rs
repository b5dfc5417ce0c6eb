//! Simulation settings
//!
//! Fixed at construction; a running simulation is never reconfigured.
//! Stored as JSON on disk for the native runner.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Half-open range [min, max)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `value` falls inside [min, max)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    fn check(&self, name: &'static str) -> Result<(), ConfigError> {
        let ok = self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min < self.max;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidSpan {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Which body the automated paddle follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Targeting {
    /// Always the body at this index, wherever it is
    Reference { index: usize },
    /// The body horizontally closest to the automated paddle
    Nearest,
}

impl Default for Targeting {
    fn default() -> Self {
        Targeting::Reference { index: 0 }
    }
}

impl Targeting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Targeting::Reference { .. } => "reference",
            Targeting::Nearest => "nearest",
        }
    }
}

/// Construction-time simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Bodies ===
    pub body_count: usize,
    /// Drawn diameter; radius is half of it
    pub body_diameter: Span,
    /// Per-axis speed magnitude; sign is drawn separately
    pub body_speed: Span,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub targeting: Targeting,

    /// Seed for the default random source
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            body_count: BODY_COUNT,
            body_diameter: Span::new(BODY_DIAMETER_MIN, BODY_DIAMETER_MAX),
            body_speed: Span::new(BODY_SPEED_MIN, BODY_SPEED_MAX),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            targeting: Targeting::default(),

            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Default settings for an arena of the given size
    pub fn with_arena(width: f32, height: f32) -> Self {
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    /// Reject anything the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena_ok = self.arena_width.is_finite()
            && self.arena_height.is_finite()
            && self.arena_width > 0.0
            && self.arena_height > 0.0;
        if !arena_ok {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        self.body_diameter.check("body_diameter")?;
        self.body_speed.check("body_speed")?;

        if !(self.paddle_width.is_finite() && self.paddle_width > 0.0) {
            return Err(ConfigError::InvalidPaddle("width must be positive"));
        }
        if !(self.paddle_height.is_finite() && self.paddle_height > 0.0) {
            return Err(ConfigError::InvalidPaddle("height must be positive"));
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::InvalidPaddle("taller than the arena"));
        }
        if !(self.paddle_speed.is_finite() && self.paddle_speed > 0.0) {
            return Err(ConfigError::InvalidPaddle("speed must be positive"));
        }

        if let Targeting::Reference { index } = self.targeting {
            if self.body_count > 0 && index >= self.body_count {
                return Err(ConfigError::ReferenceOutOfRange {
                    index,
                    count: self.body_count,
                });
            }
        }

        Ok(())
    }

    /// Centre of the arena (body spawn and respawn point)
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Top-left corner of the player paddle (left edge, vertically centred)
    pub fn player_paddle_origin(&self) -> Vec2 {
        Vec2::new(0.0, self.arena_height / 2.0 - self.paddle_height / 2.0)
    }

    /// Top-left corner of the automated paddle (right edge, vertically centred)
    pub fn auto_paddle_origin(&self) -> Vec2 {
        Vec2::new(
            self.arena_width - self.paddle_width,
            self.arena_height / 2.0 - self.paddle_height / 2.0,
        )
    }

    /// Parse and validate settings from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
