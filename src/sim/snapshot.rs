//! Render snapshots
//!
//! Everything a renderer needs, copied out of the simulation by value.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::rng::RandomSource;
use super::state::Simulation;

/// One body as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Read-only copy of the arena after a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub frame: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    /// Same order as the simulation's body collection
    pub bodies: Vec<BodyView>,
    pub player_paddle: Rect,
    pub auto_paddle: Rect,
    pub left_exits: u64,
}

impl<R: RandomSource> Simulation<R> {
    /// Fresh snapshot of the current state
    pub fn render_state(&self) -> RenderState {
        let mut state = RenderState::default();
        self.write_render_state(&mut state);
        state
    }

    /// Overwrite `out` with the current state, reusing its body buffer
    pub fn write_render_state(&self, out: &mut RenderState) {
        out.frame = self.frame;
        out.arena_width = self.config.arena_width;
        out.arena_height = self.config.arena_height;
        out.bodies.clear();
        out.bodies.extend(self.bodies.iter().map(|b| BodyView {
            x: b.pos.x,
            y: b.pos.y,
            radius: b.radius,
        }));
        out.player_paddle = self.player.rect();
        out.auto_paddle = self.auto.rect();
        out.left_exits = self.left_exits;
    }
}
