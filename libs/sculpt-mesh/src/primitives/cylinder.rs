//! # Cylinder Primitive
//!
//! Right circular cylinder standing on the Y axis, centred on the origin.

use super::{add_band, add_cap, add_ring, check_segments};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Creates a cylinder mesh spanning `y = -height / 2 ..= height / 2`.
///
/// # Returns
///
/// `2 * segments` vertices; the caps are fans anchored on the first ring
/// vertex, so no centre vertex is added.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(1.0, 4.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 32);
/// assert!(mesh.is_closed());
/// ```
pub fn create_cylinder(radius: f64, height: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::invalid_primitive(format!(
            "cylinder radius must be positive: {radius}"
        )));
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(MeshError::invalid_primitive(format!(
            "cylinder height must be positive: {height}"
        )));
    }
    check_segments("cylinder", segments)?;

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 2 * n + 2 * (n - 2));

    let half = height / 2.0;
    let bottom = add_ring(&mut mesh, radius, -half, segments);
    let top = add_ring(&mut mesh, radius, half, segments);

    add_band(&mut mesh, &bottom, &top);
    add_cap(&mut mesh, &bottom, false);
    add_cap(&mut mesh, &top, true);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use std::f64::consts::PI;

    #[test]
    fn test_cylinder_counts() {
        let mesh = create_cylinder(1.0, 2.0, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 16 + 2 * 6);
    }

    #[test]
    fn test_cylinder_spans_y_axis() {
        let mesh = create_cylinder(0.5, 3.0, 16).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.y, -1.5);
        assert_eq!(max.y, 1.5);
        assert!(max.x <= 0.5 + 1e-12);
    }

    #[test]
    fn test_cylinder_caps_face_along_axis() {
        let segments = 10;
        let mesh = create_cylinder(1.0, 1.0, segments).unwrap();
        let sides = 2 * segments as usize;
        let fan = segments as usize - 2;
        for i in sides..sides + fan {
            assert!(mesh.face_normal(i).abs_diff_eq(DVec3::NEG_Y, 1e-12));
        }
        for i in sides + fan..sides + 2 * fan {
            assert!(mesh.face_normal(i).abs_diff_eq(DVec3::Y, 1e-12));
        }
    }

    #[test]
    fn test_cylinder_closed_with_positive_volume() {
        let mesh = create_cylinder(1.0, 2.0, 64).unwrap();
        assert!(mesh.is_closed());
        let volume = mesh.signed_volume();
        assert!((volume - PI * 2.0).abs() < 0.02);
    }

    #[test]
    fn test_cylinder_invalid_params() {
        assert!(create_cylinder(0.0, 1.0, 16).is_err());
        assert!(create_cylinder(1.0, -1.0, 16).is_err());
        assert!(create_cylinder(1.0, 1.0, 2).is_err());
    }
}
