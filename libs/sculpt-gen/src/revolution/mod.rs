//! # Revolution Profiles
//!
//! Builds a vessel by revolving noisy profile curves around the +Y axis.
//!
//! ## Stages
//!
//! 1. **Curves**: `curve_count` profiles, each sampling the radius at
//!    `segments + 1` heights. The radius is a gentle taper plus a noise
//!    offset, clamped to [`MIN_PROFILE_RADIUS`].
//! 2. **Extrusion**: the curves sit at equal angular spacing; every ring
//!    position blends the two neighbouring curves with a Gaussian factor
//!    (see [`blend`]), then optionally twists with height.
//! 3. **Assembly**: the `(segments + 1) × (rotations + 1)` grid is closed
//!    into a capped mesh by [`sculpt_mesh::assemble`].

pub mod blend;
pub mod settings;

pub use self::settings::RevolutionConfig;

use crate::error::{ConfigError, GenerateError};
use crate::noise_field::NoiseField;
use ::config::constants::{CURVE_NOISE_SPACING, MIN_PROFILE_RADIUS, PROFILE_FLARE, PROFILE_TAPER};
use glam::DVec3;
use sculpt_mesh::{assemble, Mesh, MeshError, RingGrid};
use std::f64::consts::TAU;
use tracing::{debug, trace};

/// One sample of a profile curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub height_y: f64,
    pub radius: f64,
}

/// Radius samples of one profile, bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseCurve {
    samples: Vec<ProfileSample>,
}

impl NoiseCurve {
    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Radius at ring `ring`.
    #[inline]
    pub fn radius(&self, ring: usize) -> f64 {
        self.samples[ring].radius
    }
}

/// Profile radius at relative height `t` for a noise value in `[0, 1]`.
pub fn profile_radius(base_radius: f64, t: f64, noise_value: f64, noise_strength: f64) -> f64 {
    let taper = base_radius * (1.0 - t * PROFILE_TAPER) + base_radius * t * PROFILE_FLARE;
    let offset = (noise_value - 0.5) * noise_strength;
    (taper + offset).max(MIN_PROFILE_RADIUS)
}

/// Noise-driven revolution generator.
///
/// Output depends only on the configuration, including `noise_seed`.
///
/// # Example
///
/// ```rust
/// use sculpt_gen::revolution::{RevolutionConfig, RevolutionProfileGenerator};
///
/// let config = RevolutionConfig {
///     segments: 1,
///     rotations: 4,
///     curve_count: 1,
///     ..Default::default()
/// };
/// let mesh = RevolutionProfileGenerator::new(config).unwrap().generate().unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct RevolutionProfileGenerator {
    config: RevolutionConfig,
    noise: NoiseField,
}

impl RevolutionProfileGenerator {
    /// Validates `config` and seeds the noise field.
    pub fn new(config: RevolutionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let noise = NoiseField::new(config.noise_seed);
        Ok(Self { config, noise })
    }

    pub fn config(&self) -> &RevolutionConfig {
        &self.config
    }

    /// Samples every profile curve.
    pub fn curves(&self) -> Vec<NoiseCurve> {
        let c = &self.config;
        (0..c.curve_count)
            .map(|curve| {
                let lane = curve as f64 * CURVE_NOISE_SPACING;
                let samples = (0..=c.segments)
                    .map(|i| {
                        let t = i as f64 / c.segments as f64;
                        let noise = self.noise.sample(t * c.noise_scale, lane);
                        ProfileSample {
                            height_y: t * c.height,
                            radius: profile_radius(c.base_radius, t, noise, c.noise_strength),
                        }
                    })
                    .collect();
                NoiseCurve { samples }
            })
            .collect()
    }

    /// Extrudes `curves` into the ring grid.
    ///
    /// The last step of each ring repeats the first exactly.
    pub fn grid_from(&self, curves: &[NoiseCurve]) -> Result<RingGrid, MeshError> {
        let c = &self.config;
        let count = curves.len();
        let rings = c.segments as usize + 1;
        if count == 0 || curves.iter().any(|curve| curve.len() != rings) {
            return Err(MeshError::invalid_topology(format!(
                "expected non-empty curves of {rings} samples"
            )));
        }

        let rotations = c.rotations as usize;
        let mut grid = Vec::with_capacity(rings);
        for ring in 0..rings {
            let y = curves[0].samples[ring].height_y;
            let twist = y / c.height * c.twist * TAU;

            let mut row = Vec::with_capacity(rotations + 1);
            for step in 0..rotations {
                let angle = step as f64 / rotations as f64 * TAU;

                // Position measured in curve spans, exact on integer ratios
                let slot = (step * count) as f64 / rotations as f64;
                let first = slot.floor() as usize % count;
                let second = (first + 1) % count;
                let u = (slot - slot.floor()).clamp(0.0, 1.0);

                let radius = blend::blend(curves[first].radius(ring), curves[second].radius(ring), u);
                let theta = angle + twist;
                row.push(DVec3::new(theta.cos() * radius, y, theta.sin() * radius));
            }
            row.push(row[0]);
            grid.push(row);
        }

        trace!(rings, steps = rotations + 1, curves = count, "extruded profile grid");
        RingGrid::new(grid)
    }

    /// Curves extruded into the ring grid.
    pub fn grid(&self) -> Result<RingGrid, MeshError> {
        self.grid_from(&self.curves())
    }

    /// Builds the closed vessel mesh.
    pub fn generate(&self) -> Result<Mesh, GenerateError> {
        let grid = self.grid()?;
        let mesh = assemble(&grid)?;
        debug!(
            rings = grid.ring_count(),
            steps = grid.step_count(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "generated revolution mesh"
        );
        Ok(mesh)
    }
}
