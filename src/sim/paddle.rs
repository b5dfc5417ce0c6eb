//! Paddles: vertically moving rectangles on the arena's left and right edges

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Moved by held direction input
    Player,
    /// Moved by the tracking policy
    Automated,
}

/// Requested vertical direction (screen coordinates, up = toward y = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Units moved per step
    pub speed: f32,
    pub control: Control,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32, speed: f32, control: Control) -> Self {
        Self {
            pos,
            width,
            height,
            speed,
            control,
        }
    }

    /// Collision and render rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    /// Largest y that keeps the paddle inside the arena
    #[inline]
    fn max_y(&self, arena_height: f32) -> f32 {
        (arena_height - self.height).max(0.0)
    }

    /// Move one speed increment, stopping at the arena edge
    pub fn move_directional(&mut self, direction: Direction, arena_height: f32) {
        self.pos.y = match direction {
            Direction::Up => (self.pos.y - self.speed).max(0.0),
            Direction::Down => (self.pos.y + self.speed).min(self.max_y(arena_height)),
        };
    }

    /// Step one speed increment toward `target_y`.
    ///
    /// No smoothing: a stationary target makes the paddle oscillate by up to
    /// one increment around it. A target exactly on the centre line holds still.
    pub fn track_target(&mut self, target_y: f32, arena_height: f32) {
        let center = self.center_y();
        if target_y < center {
            self.pos.y -= self.speed;
        } else if target_y > center {
            self.pos.y += self.speed;
        }
        self.pos.y = self.pos.y.clamp(0.0, self.max_y(arena_height));
    }
}
