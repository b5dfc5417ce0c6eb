//! Loop driver
//!
//! Sits between a host's frame callback and the simulation: turns elapsed
//! wall time into whole simulation steps, feeds each step the frame's input
//! and hands one snapshot per frame to a renderer. It never schedules itself;
//! the host decides when (and whether) the next frame happens.

use crate::consts::{FRAME_DT, MAX_FRAME_TIME, MAX_SUBSTEPS};
use crate::sim::{InputState, RandomSource, RenderState, SeededSource, Simulation, StepReport};

/// Where held directions come from (keyboard, gamepad, script...)
pub trait InputSource {
    /// Input for the coming frame
    fn poll(&mut self) -> InputState;
}

/// A constant input: the same keys held every frame
impl InputSource for InputState {
    fn poll(&mut self) -> InputState {
        *self
    }
}

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn present(&mut self, state: &RenderState);
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    step_dt: f32,
    max_substeps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step_dt: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step_dt,
            max_substeps,
        }
    }

    /// Feed elapsed seconds, get back how many steps to run now.
    ///
    /// Elapsed time is capped so a stalled host does not trigger a burst of
    /// catch-up steps. Non-finite time counts as zero.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed.is_finite() {
            self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);
        }

        let mut steps = 0;
        while self.accumulator >= self.step_dt && steps < self.max_substeps {
            self.accumulator -= self.step_dt;
            steps += 1;
        }
        steps
    }

    /// Time carried over to the next frame
    pub fn pending(&self) -> f32 {
        self.accumulator
    }
}

/// Outcome of one or more frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    /// Simulation steps run
    pub steps: u32,
    /// Snapshots handed to the renderer
    pub presented: u32,
    /// Events summed over all steps
    pub report: StepReport,
    /// Session left-exit counter after the last step
    pub left_exits: u64,
}

/// Owns a simulation plus its input and output ends
pub struct Driver<I: InputSource, V: Renderer, R: RandomSource = SeededSource> {
    sim: Simulation<R>,
    input: I,
    renderer: V,
    clock: FrameClock,
    snapshot: RenderState,
}

impl<I: InputSource, V: Renderer, R: RandomSource> Driver<I, V, R> {
    pub fn new(sim: Simulation<R>, input: I, renderer: V) -> Self {
        Self {
            sim,
            input,
            renderer,
            clock: FrameClock::default(),
            snapshot: RenderState::default(),
        }
    }

    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// Exactly one step followed by one present
    pub fn tick(&mut self) -> FrameSummary {
        self.run_steps(1)
    }

    /// One host frame: as many steps as `elapsed` pays for, then one present.
    ///
    /// A frame too short to pay for a step still presents the unchanged state.
    pub fn frame(&mut self, elapsed: f32) -> FrameSummary {
        let steps = self.clock.advance(elapsed);
        self.run_steps(steps)
    }

    /// `count` frames of equal length
    pub fn run_frames(&mut self, count: usize, elapsed: f32) -> FrameSummary {
        let mut total = FrameSummary {
            left_exits: self.sim.left_exit_count(),
            ..FrameSummary::default()
        };
        for _ in 0..count {
            let summary = self.frame(elapsed);
            total.steps = total.steps.saturating_add(summary.steps);
            total.presented = total.presented.saturating_add(summary.presented);
            total.report += summary.report;
            total.left_exits = summary.left_exits;
        }
        total
    }

    fn run_steps(&mut self, steps: u32) -> FrameSummary {
        let input = self.input.poll();
        let mut report = StepReport::default();
        for _ in 0..steps {
            report += self.sim.step(input);
        }

        self.sim.write_render_state(&mut self.snapshot);
        self.renderer.present(&self.snapshot);

        FrameSummary {
            steps,
            presented: 1,
            report,
            left_exits: self.sim.left_exit_count(),
        }
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    /// Last snapshot presented
    pub fn snapshot(&self) -> &RenderState {
        &self.snapshot
    }

    pub fn into_parts(self) -> (Simulation<R>, I, V) {
        (self.sim, self.input, self.renderer)
    }
}
