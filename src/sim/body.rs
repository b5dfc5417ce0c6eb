//! Bodies: the bouncing balls
//!
//! A body is a plain integrator. Velocity is in units per step, there is no
//! damping, and the only responses are sign flips and respawns.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::paddle::Paddle;
use super::rng::{RandomSource, sample_signed, sample_span};
use crate::settings::Span;

/// Which side a body left the arena through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitSide {
    Left,
    Right,
}

impl ExitSide {
    pub fn is_left(self) -> bool {
        self == ExitSide::Left
    }
}

/// A moving circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// New body at `center` with a random diameter and random velocity.
    ///
    /// Draw order: diameter, then the velocity draws of [`random_velocity`].
    pub fn random<R: RandomSource + ?Sized>(
        center: Vec2,
        diameter: Span,
        speed: Span,
        rng: &mut R,
    ) -> Self {
        let radius = sample_span(rng, diameter) / 2.0;
        let vel = random_velocity(speed, rng);
        Self::new(center, vel, radius)
    }

    /// Bounding square used for paddle collisions
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    /// Advance one step
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Flip vertical velocity when the top or bottom edge touches or passes the
    /// arena bound. Position is left alone, so a fast body can sit partly
    /// outside for a frame. Returns whether a flip happened.
    pub fn reflect_on_vertical_bounds(&mut self, arena_height: f32) -> bool {
        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= arena_height {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    pub fn collides_with(&self, paddle: &Paddle) -> bool {
        self.bounds().overlaps(&paddle.rect())
    }

    #[inline]
    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Respawn at `center` with a fresh random velocity
    pub fn respawn<R: RandomSource + ?Sized>(&mut self, center: Vec2, speed: Span, rng: &mut R) {
        self.pos = center;
        self.vel = random_velocity(speed, rng);
    }

    /// Respawn at the arena centre if either horizontal edge touches or passes
    /// the arena side. `arena` is (width, height).
    ///
    /// Left takes precedence when both edges are out (body wider than the arena).
    pub fn reset_if_exiting_horizontally<R: RandomSource + ?Sized>(
        &mut self,
        arena: Vec2,
        speed: Span,
        rng: &mut R,
    ) -> Option<ExitSide> {
        let side = if self.pos.x - self.radius <= 0.0 {
            ExitSide::Left
        } else if self.pos.x + self.radius >= arena.x {
            ExitSide::Right
        } else {
            return None;
        };

        self.respawn(arena / 2.0, speed, rng);
        Some(side)
    }
}

/// Independent random sign and magnitude per axis (x first, then y)
pub fn random_velocity<R: RandomSource + ?Sized>(speed: Span, rng: &mut R) -> Vec2 {
    let vx = sample_signed(rng, speed);
    let vy = sample_signed(rng, speed);
    Vec2::new(vx, vy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::paddle::Control;
    use crate::sim::rng::{ScriptedSource, SeededSource};
    use proptest::prelude::*;

    const ARENA: Vec2 = Vec2::new(800.0, 600.0);
    const SPEED: Span = Span::new(1.0, 5.0);

    fn left_paddle() -> Paddle {
        Paddle::new(Vec2::new(0.0, 250.0), 10.0, 100.0, 5.0, Control::Player)
    }

    #[test]
    fn test_random_body_draw_order() {
        // diameter 0.5 -> 20 -> radius 10
        // vx: sign 0.9 (+), magnitude 0.25 -> 2
        // vy: sign 0.1 (-), magnitude 0.75 -> 4
        let mut rng = ScriptedSource::new(vec![0.5, 0.9, 0.25, 0.1, 0.75]);
        let body = Body::random(Vec2::new(400.0, 300.0), Span::new(10.0, 30.0), SPEED, &mut rng);
        assert_eq!(body.radius, 10.0);
        assert_eq!(body.vel, Vec2::new(2.0, -4.0));
        assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(rng.drawn(), 5);
    }

    #[test]
    fn test_integrate_adds_velocity() {
        let mut body = Body::new(Vec2::new(5.0, 300.0), Vec2::new(-2.0, 1.5), 10.0);
        body.integrate();
        assert_eq!(body.pos, Vec2::new(3.0, 301.5));
        assert_eq!(body.vel, Vec2::new(-2.0, 1.5));
    }

    #[test]
    fn test_reflect_top_and_bottom() {
        let mut top = Body::new(Vec2::new(100.0, 10.0), Vec2::new(1.0, -3.0), 10.0);
        assert!(top.reflect_on_vertical_bounds(600.0));
        assert_eq!(top.vel, Vec2::new(1.0, 3.0));
        // Not clamped
        assert_eq!(top.pos.y, 10.0);

        let mut bottom = Body::new(Vec2::new(100.0, 595.0), Vec2::new(1.0, 3.0), 10.0);
        assert!(bottom.reflect_on_vertical_bounds(600.0));
        assert_eq!(bottom.vel.y, -3.0);
        assert_eq!(bottom.pos.y, 595.0);
    }

    #[test]
    fn test_no_reflect_inside() {
        let mut body = Body::new(Vec2::new(100.0, 300.0), Vec2::new(1.0, -3.0), 10.0);
        assert!(!body.reflect_on_vertical_bounds(600.0));
        assert_eq!(body.vel.y, -3.0);
    }

    #[test]
    fn test_collides_with_paddle() {
        let paddle = left_paddle();
        let touching = Body::new(Vec2::new(15.0, 300.0), Vec2::new(-2.0, 0.0), 10.0);
        assert!(touching.collides_with(&paddle));

        let clear = Body::new(Vec2::new(15.0, 100.0), Vec2::new(-2.0, 0.0), 10.0);
        assert!(!clear.collides_with(&paddle));
    }

    #[test]
    fn test_bounce_twice_is_noop() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(3.0, 1.0), 5.0);
        body.bounce_horizontal();
        assert_eq!(body.vel.x, -3.0);
        body.bounce_horizontal();
        assert_eq!(body.vel.x, 3.0);
    }

    #[test]
    fn test_exit_left_recenters() {
        let mut rng = ScriptedSource::new(vec![0.9, 0.0, 0.9, 0.5]);
        let mut body = Body::new(Vec2::new(9.0, 120.0), Vec2::new(-2.0, 1.0), 10.0);
        let exit = body.reset_if_exiting_horizontally(ARENA, SPEED, &mut rng);
        assert_eq!(exit, Some(ExitSide::Left));
        assert!(exit.is_some_and(ExitSide::is_left));
        assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(body.vel, Vec2::new(1.0, 3.0));
    }

    #[test]
    fn test_exit_right_recenters_but_is_not_left() {
        let mut rng = ScriptedSource::new(vec![0.1, 0.5, 0.1, 0.5]);
        let mut body = Body::new(Vec2::new(795.0, 120.0), Vec2::new(2.0, 1.0), 10.0);
        let exit = body.reset_if_exiting_horizontally(ARENA, SPEED, &mut rng);
        assert_eq!(exit, Some(ExitSide::Right));
        assert_eq!(body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(body.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_edge_exactly_on_bound_counts_as_exit() {
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut body = Body::new(Vec2::new(10.0, 300.0), Vec2::new(-2.0, 1.0), 10.0);
        assert_eq!(
            body.reset_if_exiting_horizontally(ARENA, SPEED, &mut rng),
            Some(ExitSide::Left)
        );
    }

    #[test]
    fn test_inside_does_not_reset() {
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut body = Body::new(Vec2::new(11.0, 300.0), Vec2::new(-2.0, 1.0), 10.0);
        assert_eq!(body.reset_if_exiting_horizontally(ARENA, SPEED, &mut rng), None);
        assert_eq!(body.pos, Vec2::new(11.0, 300.0));
        assert_eq!(rng.drawn(), 0);
    }

    #[test]
    fn test_body_wider_than_arena_exits_left() {
        let mut rng = ScriptedSource::new(vec![0.5]);
        let mut body = Body::new(Vec2::new(20.0, 20.0), Vec2::new(1.0, 1.0), 30.0);
        let arena = Vec2::new(40.0, 40.0);
        assert_eq!(
            body.reset_if_exiting_horizontally(arena, SPEED, &mut rng),
            Some(ExitSide::Left)
        );
    }

    proptest! {
        #[test]
        fn prop_integrate_is_exact(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            vx in -5.0f32..5.0, vy in -5.0f32..5.0,
        ) {
            let mut body = Body::new(Vec2::new(x, y), Vec2::new(vx, vy), 10.0);
            body.integrate();
            prop_assert_eq!(body.pos, Vec2::new(x + vx, y + vy));
        }

        #[test]
        fn prop_reflection_flips_sign_only(
            y in -20.0f32..620.0, vy in -5.0f32..5.0, radius in 5.0f32..15.0,
        ) {
            let mut body = Body::new(Vec2::new(400.0, y), Vec2::new(1.0, vy), radius);
            let out = y - radius <= 0.0 || y + radius >= 600.0;
            let flipped = body.reflect_on_vertical_bounds(600.0);
            prop_assert_eq!(flipped, out);
            let expected = if out { -vy } else { vy };
            prop_assert_eq!(body.vel.y, expected);
        }

        #[test]
        fn prop_reset_velocity_in_range(seed in any::<u64>(), x in -50.0f32..850.0) {
            let mut rng = SeededSource::new(seed);
            let mut body = Body::new(Vec2::new(x, 300.0), Vec2::new(1.0, 1.0), 10.0);
            if body.reset_if_exiting_horizontally(ARENA, SPEED, &mut rng).is_some() {
                prop_assert_eq!(body.pos, ARENA / 2.0);
                prop_assert!(SPEED.contains(body.vel.x.abs()));
                prop_assert!(SPEED.contains(body.vel.y.abs()));
            }
        }
    }
}
