//! Random sources for spawning and respawning bodies
//!
//! The simulation only ever asks for uniform values in [0, 1). Production
//! runs use a seeded PCG stream; tests and replays can script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::Span;

/// Uniform unit-interval generator injected into the simulation
pub trait RandomSource {
    /// Next value in [0, 1)
    fn next_unit(&mut self) -> f32;
}

/// Seeded PCG32 stream (deterministic per seed)
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays a fixed list of unit values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Values outside [0, 1) are clamped into it. An empty script yields 0.
    pub fn new(values: Vec<f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0 - f32::EPSILON) })
            .collect();
        Self { values, cursor: 0 }
    }

    /// How many values have been drawn so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Uniform draw from [span.min, span.max)
pub fn sample_span<R: RandomSource + ?Sized>(rng: &mut R, span: Span) -> f32 {
    let value = span.min + rng.next_unit() * (span.max - span.min);
    // Rounding can land on max when u is close to 1
    if value < span.max { value } else { span.min }
}

/// Random sign, then a magnitude from `span`. Never zero for a validated span.
pub fn sample_signed<R: RandomSource + ?Sized>(rng: &mut R, span: Span) -> f32 {
    let sign = if rng.next_unit() > 0.5 { 1.0 } else { -1.0 };
    sign * sample_span(rng, span)
}
