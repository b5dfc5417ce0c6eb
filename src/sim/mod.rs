//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per call, no wall-clock time
//! - Injected RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod paddle;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{Body, ExitSide, random_velocity};
pub use collision::Rect;
pub use paddle::{Control, Direction, Paddle};
pub use rng::{RandomSource, ScriptedSource, SeededSource, sample_signed, sample_span};
pub use snapshot::{BodyView, RenderState};
pub use state::Simulation;
pub use tick::{InputState, StepReport};
