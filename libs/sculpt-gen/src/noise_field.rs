//! # Noise Field
//!
//! Deterministic 2D coherent noise in `[0, 1]`, built from octaves of
//! Perlin noise.

use config::constants::{NOISE_OCTAVES, NOISE_PERSISTENCE};
use noise::{NoiseFn, Perlin};

/// Fractal Perlin noise sampler.
///
/// The same seed always yields the same field.
///
/// # Example
///
/// ```rust
/// use sculpt_gen::noise_field::NoiseField;
///
/// let field = NoiseField::new(3);
/// let v = field.sample(0.37, 10.0);
/// assert!((0.0..=1.0).contains(&v));
/// assert_eq!(v, NoiseField::new(3).sample(0.37, 10.0));
/// ```
#[derive(Debug, Clone)]
pub struct NoiseField {
    perlin: Perlin,
    octaves: u32,
    persistence: f64,
}

impl NoiseField {
    /// Field with the default octave count and persistence.
    pub fn new(seed: u32) -> Self {
        Self::with_octaves(seed, NOISE_OCTAVES, NOISE_PERSISTENCE)
    }

    /// Field with explicit octave count (at least 1) and amplitude falloff.
    pub fn with_octaves(seed: u32, octaves: u32, persistence: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            octaves: octaves.max(1),
            persistence,
        }
    }

    /// Samples the field at `(x, y)`; the result lies in `[0, 1]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            total += self.perlin.get([x * frequency, y * frequency]) * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= 2.0;
        }

        let normalized = if max_value > 0.0 { total / max_value } else { 0.0 };
        ((normalized + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}
