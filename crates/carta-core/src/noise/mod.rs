//! Coherent-noise synthesis: a seeded 2D source plus octave compositing.

pub mod octaves;

use noise::{NoiseFn, Simplex};

/// A seeded 2D coherent-noise source.
///
/// Wraps the `noise` crate's simplex implementation; the primitive itself is
/// treated as a black box. Output is bounded to [-1, 1].
pub struct NoiseField {
    source: Simplex,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self { source: Simplex::new(seed) }
    }

    /// Evaluate the noise at a continuous coordinate.
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.source.get([x, y])
    }
}
