//! # Export Coordinate Transform
//!
//! Maps model space (Y up, centimetres) into the coordinate system of the
//! consumer. The default print-bed transform scales to millimetres and
//! swaps Y and Z so the sculpture stands on the Z = 0 plane.

use crate::error::MeshError;
use config::constants::{approx_equal, EXPORT_UNIT_SCALE};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis permutation applied before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisRemap {
    /// Keep axes as-is.
    #[default]
    #[serde(rename = "identity")]
    Identity,
    /// `(x, y, z) -> (x, z, y)`. A mirror: facet winding must be reversed.
    #[serde(rename = "swap-yz")]
    SwapYZ,
    /// `(x, y, z) -> (x, -z, y)`. A rotation about X; winding is kept.
    #[serde(rename = "y-up-to-z-up")]
    YUpToZUp,
}

impl AxisRemap {
    /// Applies the permutation to one point.
    pub fn apply(self, v: DVec3) -> DVec3 {
        match self {
            AxisRemap::Identity => v,
            AxisRemap::SwapYZ => DVec3::new(v.x, v.z, v.y),
            AxisRemap::YUpToZUp => DVec3::new(v.x, -v.z, v.y),
        }
    }

    /// True when the remap flips handedness.
    pub fn is_mirroring(self) -> bool {
        matches!(self, AxisRemap::SwapYZ)
    }
}

impl fmt::Display for AxisRemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AxisRemap::Identity => "identity",
            AxisRemap::SwapYZ => "swap-yz",
            AxisRemap::YUpToZUp => "y-up-to-z-up",
        })
    }
}

impl FromStr for AxisRemap {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(AxisRemap::Identity),
            "swap-yz" => Ok(AxisRemap::SwapYZ),
            "y-up-to-z-up" => Ok(AxisRemap::YUpToZUp),
            other => Err(MeshError::InvalidTransform {
                message: format!(
                    "unknown axis remap '{other}' (expected identity, swap-yz or y-up-to-z-up)"
                ),
            }),
        }
    }
}

/// Uniform scale plus axis remap.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::transform::{AxisRemap, CoordinateTransform};
/// use glam::DVec3;
///
/// let bed = CoordinateTransform::print_bed();
/// assert_eq!(bed.apply(DVec3::new(1.0, 2.0, 3.0)), DVec3::new(10.0, 30.0, 20.0));
/// assert!(bed.reverses_winding());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransform {
    scale: f64,
    axes: AxisRemap,
}

impl CoordinateTransform {
    /// Creates a transform; `scale` must be finite and positive.
    pub fn new(scale: f64, axes: AxisRemap) -> Result<Self, MeshError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(MeshError::InvalidTransform {
                message: format!("scale must be positive and finite: {scale}"),
            });
        }
        Ok(Self { scale, axes })
    }

    /// No scaling, no remap.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            axes: AxisRemap::Identity,
        }
    }

    /// Centimetres to millimetres with Z up.
    pub fn print_bed() -> Self {
        Self {
            scale: EXPORT_UNIT_SCALE,
            axes: AxisRemap::SwapYZ,
        }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn axes(&self) -> AxisRemap {
        self.axes
    }

    /// Maps a model-space point into export space.
    #[inline]
    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.axes.apply(v) * self.scale
    }

    /// True when facets must be re-wound to keep normals outward.
    pub fn reverses_winding(&self) -> bool {
        self.axes.is_mirroring()
    }

    pub fn is_identity(&self) -> bool {
        approx_equal(self.scale, 1.0) && self.axes == AxisRemap::Identity
    }
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normal::face_normal;

    #[test]
    fn test_identity_is_noop() {
        let t = CoordinateTransform::identity();
        let v = DVec3::new(1.5, -2.0, 3.25);
        assert_eq!(t.apply(v), v);
        assert!(t.is_identity());
        assert!(!t.reverses_winding());
    }

    #[test]
    fn test_print_bed_maps_up_axis_to_z() {
        let t = CoordinateTransform::print_bed();
        assert_eq!(t.apply(DVec3::Y), DVec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_swap_reverses_handedness() {
        let (a, b, c) = (DVec3::ZERO, DVec3::X, DVec3::Z);
        let before = face_normal(a, b, c);
        let remap = AxisRemap::SwapYZ;
        let after = face_normal(remap.apply(a), remap.apply(b), remap.apply(c));
        // Mapped normal is the mirrored normal, flipped
        assert_eq!(after, -remap.apply(before));
    }

    #[test]
    fn test_rotation_keeps_handedness() {
        let (a, b, c) = (DVec3::ZERO, DVec3::X, DVec3::Z);
        let before = face_normal(a, b, c);
        let remap = AxisRemap::YUpToZUp;
        let after = face_normal(remap.apply(a), remap.apply(b), remap.apply(c));
        assert!(after.abs_diff_eq(remap.apply(before), 1e-12));
    }

    #[test]
    fn test_rejects_bad_scale() {
        assert!(CoordinateTransform::new(0.0, AxisRemap::Identity).is_err());
        assert!(CoordinateTransform::new(-1.0, AxisRemap::Identity).is_err());
        assert!(CoordinateTransform::new(f64::NAN, AxisRemap::Identity).is_err());
    }

    #[test]
    fn test_axis_remap_parses_display_names() {
        for remap in [AxisRemap::Identity, AxisRemap::SwapYZ, AxisRemap::YUpToZUp] {
            assert_eq!(remap.to_string().parse::<AxisRemap>().unwrap(), remap);
        }
        assert!("xzy".parse::<AxisRemap>().is_err());
    }
}
