//! # Primitives
//!
//! Mesh generation for the primitive kinds (box, sphere, cylinder), centred
//! on the local origin with +Y as the up axis.

pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use cube::create_box;
pub use cylinder::create_cylinder;
pub use sphere::create_sphere;

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;

/// Rejects angular resolutions below [`MIN_SEGMENTS`].
fn check_segments(what: &str, segments: u32) -> Result<(), MeshError> {
    if segments < MIN_SEGMENTS {
        return Err(MeshError::invalid_primitive(format!(
            "{what} needs at least {MIN_SEGMENTS} segments, got {segments}"
        )));
    }
    Ok(())
}

/// Adds a horizontal ring of `segments` vertices at height `y`.
///
/// Angles increase from +X towards +Z.
fn add_ring(mesh: &mut Mesh, radius: f64, y: f64, segments: u32) -> Vec<u32> {
    (0..segments)
        .map(|j| {
            let theta = std::f64::consts::TAU * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), y, radius * theta.sin()))
        })
        .collect()
}

/// Connects a lower ring to an upper ring with outward-facing quads.
fn add_band(mesh: &mut Mesh, lower: &[u32], upper: &[u32]) {
    let n = lower.len();
    for j in 0..n {
        let j_next = (j + 1) % n;
        let (a0, a1) = (lower[j], lower[j_next]);
        let (b0, b1) = (upper[j], upper[j_next]);
        mesh.add_triangle(a0, b0, a1);
        mesh.add_triangle(a1, b0, b1);
    }
}

/// Closes a ring with a fan anchored on its first vertex.
///
/// `facing_up` selects a +Y facing cap; otherwise the cap faces -Y.
fn add_cap(mesh: &mut Mesh, ring: &[u32], facing_up: bool) {
    for j in 1..ring.len() - 1 {
        if facing_up {
            mesh.add_triangle(ring[0], ring[j + 1], ring[j]);
        } else {
            mesh.add_triangle(ring[0], ring[j], ring[j + 1]);
        }
    }
}
