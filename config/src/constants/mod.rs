//! # Configuration Constants
//!
//! Centralized constants for the sculpt pipeline. Growth rules, profile
//! shaping, tessellation and export conventions are all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Growth**: Branch growth bounds and sampling ranges
//! - **Profile**: Revolution profile shaping
//! - **Tessellation**: Primitive resolution limits
//! - **Export**: Unit conversion and naming

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Shortest edge or altitude a triangle needs for a defined normal.
///
/// Measured in model units before any export scaling, so the same
/// triangle is classified identically at every output scale.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_EPSILON;
///
/// let shortest_edge = 1e-15;
/// assert!(shortest_edge < NORMAL_EPSILON);
/// ```
pub const NORMAL_EPSILON: f64 = 1e-12;

/// Epsilon used by the BSP combiner when classifying points against planes.
///
/// Independent of the facet tolerance: this bounds coplanarity during
/// splitting, not whether a finished facet is written.
pub const PLANE_EPSILON: f64 = 1e-5;

/// Polygon count past which the BSP union gives up.
///
/// Heavily overlapping primitives fragment each other's faces; once the
/// running union exceeds this many polygons the combiner reports failure
/// and callers fall back to emitting the primitives separately.
pub const MAX_UNION_POLYGONS: usize = 250_000;

// =============================================================================
// GROWTH CONSTANTS
// =============================================================================

/// Absolute size below which a branch stops growing.
///
/// The floor is not relative to the configured initial size: a branch whose
/// nominal size drops under it emits nothing and has no children.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_GROWTH_SIZE;
///
/// let size = 3.0 * 0.9_f64.powi(25);
/// assert!(size < MIN_GROWTH_SIZE);
/// ```
pub const MIN_GROWTH_SIZE: f64 = 0.3;

/// Lower bound of the segment overlap ratio.
///
/// Segments are shorter than the primitive they place so consecutive
/// primitives overlap.
pub const OVERLAP_RATIO_MIN: f64 = 0.6;

/// Upper bound of the segment overlap ratio.
pub const OVERLAP_RATIO_MAX: f64 = 0.8;

/// Lower bound of the extra height factor applied to cylinders.
pub const CYLINDER_STRETCH_MIN: f64 = 1.0;

/// Upper bound of the extra height factor applied to cylinders.
pub const CYLINDER_STRETCH_MAX: f64 = 1.5;

/// Fraction of `position_variation * size` used as horizontal jitter.
pub const POSITION_JITTER_FACTOR: f64 = 0.3;

/// Hard upper bound on the configurable growth depth.
///
/// Keeps the work stack and the primitive count bounded regardless of what a
/// configuration file asks for.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GROWTH_DEPTH;
///
/// let requested = 5;
/// assert!(requested <= MAX_GROWTH_DEPTH);
/// ```
pub const MAX_GROWTH_DEPTH: u32 = 16;

/// Hard upper bound on children drawn per growth node.
pub const MAX_BRANCHES_PER_NODE: u32 = 8;

// =============================================================================
// PROFILE CONSTANTS
// =============================================================================

/// Minimum radius of any revolution profile sample.
pub const MIN_PROFILE_RADIUS: f64 = 0.5;

/// Fraction of the base radius lost linearly from bottom to top.
pub const PROFILE_TAPER: f64 = 0.3;

/// Fraction of the base radius regained linearly from bottom to top.
pub const PROFILE_FLARE: f64 = 0.2;

/// Width of the Gaussian blend between neighbouring profile curves.
///
/// # Example
///
/// ```rust
/// use config::constants::BLEND_SIGMA;
///
/// // At the midpoint both curves weigh the same
/// let w1 = (-(0.5 / BLEND_SIGMA).powi(2)).exp();
/// let w2 = (-(0.5 / BLEND_SIGMA).powi(2)).exp();
/// assert_eq!(w1, w2);
/// ```
pub const BLEND_SIGMA: f64 = 0.25;

/// Spacing between profile curves along the second noise axis.
pub const CURVE_NOISE_SPACING: f64 = 10.0;

/// Angular resolution limit of a revolution.
pub const MAX_ROTATIONS: u32 = 1024;

/// Profile curve count limit.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_CURVES, MAX_ROTATIONS};
/// assert!(MAX_CURVES < MAX_ROTATIONS);
/// ```
pub const MAX_CURVES: u32 = 64;

/// Number of octaves summed by the noise field.
pub const NOISE_OCTAVES: u32 = 4;

/// Amplitude falloff between noise octaves.
pub const NOISE_PERSISTENCE: f64 = 0.5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default angular segment count for spheres and cylinders.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 16;

/// Minimum number of segments for any circular shape.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum number of segments for any circular shape.
pub const MAX_SEGMENTS: u32 = 256;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Unit conversion applied on export: model centimetres to millimetres.
pub const EXPORT_UNIT_SCALE: f64 = 10.0;

/// Solid name written into `solid` / `endsolid` lines.
pub const DEFAULT_SOLID_NAME: &str = "sculpture";

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Run-wide mesh settings: how finely primitives are tessellated and how
/// small a facet may get before the exporter drops it.
///
/// # Examples
/// ```
/// use config::constants::{GlobalConfig, NORMAL_EPSILON};
/// let config = GlobalConfig::default();
/// assert_eq!(config.tolerance, NORMAL_EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Shortest edge or altitude, in model units, below which a facet is
    /// degenerate on export.
    pub tolerance: f64,
    /// Angular segments for spheres and cylinders.
    pub segments: u32,
}

impl GlobalConfig {
    /// Checks both values before anything is generated.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).unwrap();
    /// assert_eq!(cfg.segments, 24);
    /// assert!(GlobalConfig::new(-1.0, 24).is_err());
    /// ```
    pub fn new(tolerance: f64, segments: u32) -> Result<Self, ConfigError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
            return Err(ConfigError::InvalidSegments(segments));
        }
        Ok(Self { tolerance, segments })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: NORMAL_EPSILON,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Rejected [`GlobalConfig`] value.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Not a finite positive length.
    InvalidTolerance(f64),
    /// Outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be a finite positive length, got {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must lie in {MIN_SEGMENTS}..={MAX_SEGMENTS}, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
