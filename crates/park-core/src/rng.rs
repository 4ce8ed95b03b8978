//! Uniform random sources.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed`.  Every
//! random draw (inter-arrival gap, stay duration) goes through it in the
//! order the events are processed, so a fixed seed always yields the same
//! sequence of draws and therefore the same output.  Draws must never be
//! reordered or split across threads.
//!
//! The generators in `park-schedule` only need a uniform value in `[0, 1)`,
//! so they are written against the [`UniformSource`] trait.  Tests swap in a
//! [`ScriptedUniform`] to pin exact sample values.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.  Single-threaded by construction.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        // `Standard` for f64 samples the half-open interval [0, 1).
        self.0.r#gen::<f64>()
    }
}

// ── ScriptedUniform ───────────────────────────────────────────────────────────

/// Replays a fixed list of uniform values, wrapping around at the end.
///
/// Values are clamped into `[0, 1)` so a script cannot push the generators
/// outside their domain.
#[derive(Clone, Debug)]
pub struct ScriptedUniform {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedUniform {
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedUniform needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedUniform {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
