//! Configuration errors
//!
//! Construction is the only fallible entry point of the simulation; stepping
//! and snapshotting are total.

use thiserror::Error;

/// Why a configuration was rejected or could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arena must have finite, positive dimensions (got {width}x{height})")]
    InvalidArena { width: f32, height: f32 },

    #[error("range `{name}` must be finite with 0 < min < max (got [{min}, {max}))")]
    InvalidSpan {
        name: &'static str,
        min: f32,
        max: f32,
    },

    #[error("invalid paddle: {0}")]
    InvalidPaddle(&'static str),

    #[error("body {index} must have a finite position and velocity and a positive radius")]
    InvalidBody { index: usize },

    #[error("reference body {index} is out of range for {count} bodies")]
    ReferenceOutOfRange { index: usize, count: usize },

    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
