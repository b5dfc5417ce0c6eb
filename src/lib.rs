//! Swarm Pong - many balls, two paddles, one rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, paddles, per-frame step, snapshots)
//! - `settings`: Construction-time configuration
//! - `driver`: Fixed-timestep loop driver feeding a renderer
//! - `error`: Configuration errors

pub mod driver;
pub mod error;
pub mod settings;
pub mod sim;

pub use driver::{Driver, FrameClock, FrameSummary, InputSource, Renderer};
pub use error::ConfigError;
pub use settings::{SimConfig, Span, Targeting};
pub use sim::{InputState, RenderState, Simulation, StepReport};

/// Default tuning constants
pub mod consts {
    /// Fixed simulation timestep (one step per 60 Hz frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest elapsed time a single frame may feed the clock (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Body defaults
    pub const BODY_COUNT: usize = 30;
    /// Diameter range [min, max); radius is half the drawn diameter
    pub const BODY_DIAMETER_MIN: f32 = 10.0;
    pub const BODY_DIAMETER_MAX: f32 = 30.0;
    /// Per-axis speed magnitude range [min, max), units per step
    pub const BODY_SPEED_MIN: f32 = 1.0;
    pub const BODY_SPEED_MAX: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Units per step
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Seed used when no seed is configured
    pub const DEFAULT_SEED: u64 = 0x5eed_ba11;
}
