//! # Face Normals
//!
//! Unit normals from three vertices. Counter-clockwise winding (seen from
//! the side the normal points to) is the convention throughout the crate:
//! `(0,0,0), (1,0,0), (0,1,0)` yields `+Z`.

use crate::error::MeshError;
use config::constants::NORMAL_EPSILON;
use glam::DVec3;

/// Computes the unit normal of the triangle `v0, v1, v2`.
///
/// Returns [`DVec3::ZERO`] when the triangle is degenerate at
/// [`NORMAL_EPSILON`]. Callers must treat a zero normal as undefined.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::normal::face_normal;
/// use glam::DVec3;
///
/// let n = face_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
///
/// let degenerate = face_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
/// assert_eq!(degenerate, DVec3::ZERO);
/// ```
pub fn face_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    face_normal_within(v0, v1, v2, NORMAL_EPSILON)
}

/// Unit normal, or [`DVec3::ZERO`] when the shortest edge or the smallest
/// altitude of the triangle is below `tolerance`.
///
/// Both measures are lengths in the triangle's own units.
pub fn face_normal_within(v0: DVec3, v1: DVec3, v2: DVec3, tolerance: f64) -> DVec3 {
    let edges = [
        (v1 - v0).length(),
        (v2 - v1).length(),
        (v0 - v2).length(),
    ];
    let shortest = edges[0].min(edges[1]).min(edges[2]);
    let longest = edges[0].max(edges[1]).max(edges[2]);
    if !(shortest >= tolerance) || !(longest > 0.0) {
        return DVec3::ZERO;
    }

    let cross = (v1 - v0).cross(v2 - v0);
    let area2 = cross.length();
    // Twice the area over the longest edge is the smallest altitude
    if !(area2 / longest >= tolerance) || area2 == 0.0 {
        return DVec3::ZERO;
    }
    cross / area2
}

/// Like [`face_normal`] but reports a degenerate triangle as an error.
pub fn try_face_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> Result<DVec3, MeshError> {
    try_face_normal_within(v0, v1, v2, NORMAL_EPSILON)
}

/// Like [`face_normal_within`] but reports a degenerate triangle as an error.
pub fn try_face_normal_within(v0: DVec3, v1: DVec3, v2: DVec3, tolerance: f64) -> Result<DVec3, MeshError> {
    let normal = face_normal_within(v0, v1, v2, tolerance);
    if normal == DVec3::ZERO {
        return Err(MeshError::degenerate(format!(
            "triangle ({v0}, {v1}, {v2}) has no defined normal at tolerance {tolerance}"
        )));
    }
    Ok(normal)
}
