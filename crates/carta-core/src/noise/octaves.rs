//! Multi-octave noise compositing.
//!
//! Layer k samples the source at frequency `base * multiplier^k` with
//! amplitude `persistence^k`; dividing the accumulated sum by the total
//! amplitude keeps the result in [-1, 1] for any octave count.

use serde::{Deserialize, Serialize};

use super::NoiseField;
use crate::error::MapError;
use crate::grid::ScalarField;

/// Ordered octave layering for one composited field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OctaveSpec {
    pub octaves: u32,
    pub base_frequency: f64,
    pub frequency_multiplier: f64,
    pub persistence: f64,
}

/// Composite `spec.octaves` layers of `noise` into a normalized field.
///
/// Cell `(row, col)` of layer k samples the source at
/// `(col / width * freq_k, row / height * freq_k)`. Deterministic in the
/// source's seed and the spec; no state carries between cells.
pub fn composite(
    noise: &NoiseField,
    spec: &OctaveSpec,
    width: usize,
    height: usize,
) -> Result<ScalarField, MapError> {
    if spec.octaves == 0 {
        return Err(MapError::InvalidConfig(
            "octave count must be at least 1".into(),
        ));
    }
    if width == 0 || height == 0 {
        return Err(MapError::InvalidConfig(format!(
            "grid dimensions must be positive, got {width}x{height}"
        )));
    }

    // Accumulate in f64 so normalization divides once, at full precision.
    let mut acc = vec![0.0f64; width * height];
    let mut sum_amp = 0.0f64;
    let mut amp = 1.0f64;
    let mut freq = spec.base_frequency;
    for _ in 0..spec.octaves {
        for row in 0..height {
            let y = row as f64 / height as f64 * freq;
            for col in 0..width {
                let x = col as f64 / width as f64 * freq;
                acc[row * width + col] += amp * noise.sample(x, y);
            }
        }
        sum_amp += amp;
        amp *= spec.persistence;
        freq *= spec.frequency_multiplier;
    }

    let mut field = ScalarField::filled(width, height, 0.0);
    for (cell, sum) in field.data.iter_mut().zip(&acc) {
        *cell = (sum / sum_amp) as f32;
    }
    Ok(field)
}
