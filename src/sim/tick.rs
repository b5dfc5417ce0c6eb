//! Per-frame simulation step
//!
//! One call to [`Simulation::step`] advances every body and both paddles by
//! one discrete time unit. It runs to completion, allocates nothing and never
//! fails.

use serde::{Deserialize, Serialize};

use super::paddle::Direction;
use super::rng::RandomSource;
use super::state::Simulation;
use crate::settings::Targeting;

/// Held directional keys for the player paddle, sampled once per frame.
///
/// Both flags may be set at once; each applies independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
}

impl InputState {
    pub fn up() -> Self {
        Self {
            move_up: true,
            move_down: false,
        }
    }

    pub fn down() -> Self {
        Self {
            move_up: false,
            move_down: true,
        }
    }
}

/// What happened during one step (or, summed, over many).
///
/// Sums saturate at `u32::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Bodies respawned after leaving through the left side
    pub left_exits: u32,
    /// Bodies respawned after leaving through the right side
    pub right_exits: u32,
    /// Horizontal bounces applied (a body overlapping both paddles counts twice)
    pub paddle_hits: u32,
    /// Vertical reflections applied
    pub wall_hits: u32,
}

impl StepReport {
    pub fn total_exits(&self) -> u32 {
        self.left_exits.saturating_add(self.right_exits)
    }
}

impl std::ops::AddAssign for StepReport {
    fn add_assign(&mut self, other: Self) {
        self.left_exits = self.left_exits.saturating_add(other.left_exits);
        self.right_exits = self.right_exits.saturating_add(other.right_exits);
        self.paddle_hits = self.paddle_hits.saturating_add(other.paddle_hits);
        self.wall_hits = self.wall_hits.saturating_add(other.wall_hits);
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Advance the whole arena by one step.
    ///
    /// Per body, in collection order: integrate, reflect on the top/bottom
    /// bounds, bounce off each overlapping paddle, respawn on a left/right
    /// exit. Then the player paddle applies `input` (up, then down), and the
    /// automated paddle takes one tracking step toward its target body.
    pub fn step(&mut self, input: InputState) -> StepReport {
        let mut report = StepReport::default();
        let arena = self.arena();
        let height = arena.y;
        let speed = self.config.body_speed;

        for (index, body) in self.bodies.iter_mut().enumerate() {
            body.integrate();

            if body.reflect_on_vertical_bounds(height) {
                report.wall_hits += 1;
            }

            // Both paddles are tested; overlapping both cancels out
            for paddle in [&self.player, &self.auto] {
                if body.collides_with(paddle) {
                    body.bounce_horizontal();
                    report.paddle_hits += 1;
                }
            }

            match body.reset_if_exiting_horizontally(arena, speed, &mut self.rng) {
                Some(side) if side.is_left() => {
                    self.left_exits += 1;
                    report.left_exits += 1;
                    log::debug!(
                        "Frame {}: body {} lost on the left ({} total)",
                        self.frame,
                        index,
                        self.left_exits
                    );
                }
                Some(_) => report.right_exits += 1,
                None => {}
            }
        }

        if input.move_up {
            self.player.move_directional(Direction::Up, height);
        }
        if input.move_down {
            self.player.move_directional(Direction::Down, height);
        }

        if let Some(target_y) = self.target_y() {
            self.auto.track_target(target_y, height);
        }

        self.frame += 1;
        log::trace!("Frame {}: {:?}", self.frame, report);
        report
    }

    /// Vertical position the automated paddle is chasing, if any body qualifies
    pub fn target_y(&self) -> Option<f32> {
        match self.config.targeting {
            Targeting::Reference { index } => self.bodies.get(index).map(|b| b.pos.y),
            Targeting::Nearest => {
                let face = self.auto.pos.x;
                self.bodies
                    .iter()
                    .min_by(|a, b| {
                        (face - a.pos.x)
                            .abs()
                            .partial_cmp(&(face - b.pos.x).abs())
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .map(|b| b.pos.y)
            }
        }
    }
}
