//! # Sphere Primitive
//!
//! Latitude/longitude sphere without pole vertices; the first and last
//! rings are closed with polygon fans.

use super::{add_band, add_cap, add_ring, check_segments};
use crate::error::MeshError;
use crate::mesh::Mesh;
use std::f64::consts::PI;

/// Creates a sphere mesh centred on the origin.
///
/// # Algorithm
///
/// - `rings = (segments + 1) / 2`, at least 2
/// - ring `i` sits at polar angle `PI * (i + 0.5) / rings`, measured from -Y
/// - each ring has `segments` vertices
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 16);
/// ```
pub fn create_sphere(radius: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::invalid_primitive(format!(
            "sphere radius must be positive: {radius}"
        )));
    }
    check_segments("sphere", segments)?;

    let ring_count = ((segments + 1) / 2).max(2);
    let mut mesh = Mesh::with_capacity(
        (ring_count * segments) as usize,
        (2 * segments * ring_count) as usize,
    );

    let rings: Vec<Vec<u32>> = (0..ring_count)
        .map(|i| {
            let phi = PI * (i as f64 + 0.5) / ring_count as f64;
            add_ring(&mut mesh, radius * phi.sin(), -radius * phi.cos(), segments)
        })
        .collect();

    add_cap(&mut mesh, &rings[0], false);
    for pair in rings.windows(2) {
        add_band(&mut mesh, &pair[0], &pair[1]);
    }
    add_cap(&mut mesh, &rings[rings.len() - 1], true);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let mesh = create_sphere(5.0, 16).unwrap();
        // 8 rings of 16, two fans of 14, 7 bands of 32
        assert_eq!(mesh.vertex_count(), 128);
        assert_eq!(mesh.triangle_count(), 2 * 14 + 7 * 32);
    }

    #[test]
    fn test_sphere_closed_and_outward() {
        let mesh = create_sphere(2.0, 12).unwrap();
        assert!(mesh.is_closed());
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_positions(i);
            let centroid = (a + b + c) / 3.0;
            assert!(mesh.face_normal(i).dot(centroid) > 0.0, "face {i}");
        }
    }

    #[test]
    fn test_sphere_within_radius() {
        let radius = 5.0;
        let mesh = create_sphere(radius, 32).unwrap();
        let (min, max) = mesh.bounding_box();
        assert!(max.max_element() <= radius + 1e-9);
        assert!(min.min_element() >= -radius - 1e-9);
        assert!(max.y > radius * 0.9);
    }

    #[test]
    fn test_sphere_volume_approaches_analytic() {
        let mesh = create_sphere(1.0, 64).unwrap();
        let analytic = 4.0 / 3.0 * PI;
        let volume = mesh.signed_volume();
        assert!(volume > 0.0);
        assert!((volume - analytic).abs() / analytic < 0.05);
    }

    #[test]
    fn test_sphere_minimum_segments() {
        let mesh = create_sphere(1.0, 3).unwrap();
        assert!(mesh.is_closed());
        assert!(create_sphere(1.0, 2).is_err());
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(create_sphere(0.0, 16).is_err());
        assert!(create_sphere(-1.0, 16).is_err());
    }
}
