//! Simulation state
//!
//! The simulation owns every body and both paddles. Nothing inside holds a
//! reference back to it; readers get shared borrows or a [`RenderState`] copy.
//!
//! [`RenderState`]: super::snapshot::RenderState

use glam::Vec2;

use super::body::Body;
use super::paddle::{Control, Paddle};
use super::rng::{RandomSource, SeededSource};
use crate::error::ConfigError;
use crate::settings::SimConfig;

/// Bodies, paddles and the left-exit counter for one arena
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = SeededSource> {
    pub(super) config: SimConfig,
    pub(super) bodies: Vec<Body>,
    pub(super) player: Paddle,
    pub(super) auto: Paddle,
    /// Bodies that have left through the left side, never decreases
    pub(super) left_exits: u64,
    /// Steps taken so far
    pub(super) frame: u64,
    pub(super) rng: R,
}

impl Simulation<SeededSource> {
    /// Build from settings, seeding a PCG stream from `config.seed`
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let rng = SeededSource::new(config.seed);
        Self::with_source(config, rng)
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Build from settings with an injected random source.
    ///
    /// Spawns `config.body_count` bodies at the arena centre with random
    /// radius and velocity.
    pub fn with_source(config: SimConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let center = config.arena_center();
        let bodies = (0..config.body_count)
            .map(|_| Body::random(center, config.body_diameter, config.body_speed, &mut rng))
            .collect();

        Ok(Self::assemble(config, bodies, rng))
    }

    /// Build with an explicit body list. `config.body_count` is replaced by
    /// the list length.
    pub fn with_bodies(mut config: SimConfig, bodies: Vec<Body>, rng: R) -> Result<Self, ConfigError> {
        config.body_count = bodies.len();
        config.validate()?;

        if let Some(index) = bodies.iter().position(|b| !is_well_formed(b)) {
            return Err(ConfigError::InvalidBody { index });
        }

        Ok(Self::assemble(config, bodies, rng))
    }

    fn assemble(config: SimConfig, bodies: Vec<Body>, rng: R) -> Self {
        let player = Paddle::new(
            config.player_paddle_origin(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
            Control::Player,
        );
        let auto = Paddle::new(
            config.auto_paddle_origin(),
            config.paddle_width,
            config.paddle_height,
            config.paddle_speed,
            Control::Automated,
        );

        log::info!(
            "Simulation ready: arena {}x{}, {} bodies, targeting {}",
            config.arena_width,
            config.arena_height,
            bodies.len(),
            config.targeting.as_str()
        );

        Self {
            config,
            bodies,
            player,
            auto,
            left_exits: 0,
            frame: 0,
            rng,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Arena size as (width, height)
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.config.arena_width, self.config.arena_height)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn player_paddle(&self) -> &Paddle {
        &self.player
    }

    pub fn auto_paddle(&self) -> &Paddle {
        &self.auto
    }

    /// Bodies lost through the left side this session
    pub fn left_exit_count(&self) -> u64 {
        self.left_exits
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Give back the random source (e.g. to inspect a scripted source)
    pub fn into_source(self) -> R {
        self.rng
    }
}

fn is_well_formed(body: &Body) -> bool {
    body.pos.is_finite() && body.vel.is_finite() && body.radius.is_finite() && body.radius > 0.0
}
