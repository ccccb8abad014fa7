//! # Box Primitive
//!
//! Rectangular box centred on the origin.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a box mesh with extents `size` (width, height, depth).
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::splat(2.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3) -> Result<Mesh, MeshError> {
    if !(size.is_finite() && size.min_element() > 0.0) {
        return Err(MeshError::invalid_primitive(format!(
            "box size must be positive: {size}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let max = size / 2.0;
    let min = -max;

    // Lower four corners (y = min.y), then upper four
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v4 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // -Y
    mesh.add_triangle(v0, v1, v2);
    mesh.add_triangle(v0, v2, v3);
    // +Y
    mesh.add_triangle(v4, v6, v5);
    mesh.add_triangle(v4, v7, v6);
    // -Z
    mesh.add_triangle(v0, v4, v5);
    mesh.add_triangle(v0, v5, v1);
    // +Z
    mesh.add_triangle(v3, v2, v6);
    mesh.add_triangle(v3, v6, v7);
    // -X
    mesh.add_triangle(v0, v3, v7);
    mesh.add_triangle(v0, v7, v4);
    // +X
    mesh.add_triangle(v1, v5, v6);
    mesh.add_triangle(v1, v6, v2);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_counts() {
        let mesh = create_box(DVec3::splat(10.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_is_centred() {
        let mesh = create_box(DVec3::new(2.0, 4.0, 6.0)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_box_faces_point_outward() {
        let mesh = create_box(DVec3::splat(2.0)).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i);
            let centroid = (a + b + c) / 3.0;
            assert!(mesh.face_normal(i).dot(centroid) > 0.0, "face {i}");
        }
    }

    #[test]
    fn test_box_closed_with_volume() {
        let mesh = create_box(DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert!(mesh.is_closed());
        assert!(mesh.validate().is_ok());
        assert_relative_eq!(mesh.signed_volume(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_box_invalid_size() {
        assert!(create_box(DVec3::new(0.0, 10.0, 10.0)).is_err());
        assert!(create_box(DVec3::new(-5.0, 10.0, 10.0)).is_err());
        assert!(create_box(DVec3::new(f64::INFINITY, 1.0, 1.0)).is_err());
    }
}
