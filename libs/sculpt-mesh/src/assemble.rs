//! # Ring Grid Assembly
//!
//! Builds a closed, capped mesh from a grid of rings stacked along +Y.
//!
//! ## Layout
//!
//! A [`RingGrid`] is indexed `[ring][step]`. Rings run bottom to top; steps
//! run around the axis with increasing angle (from +X towards +Z). The last
//! step of each ring sits at the same position as the first but is stored
//! as its own vertex, so the closing cell between them is emitted explicitly.
//!
//! ## Winding
//!
//! With rings `a` (lower) and `b` (upper), each cell between steps `j` and
//! `j + 1` becomes `(a_j, b_j, a_j1)` and `(a_j1, b_j, b_j1)`, which faces
//! away from the axis. Caps fan around an injected centre vertex: the bottom
//! fan faces -Y, the top fan faces +Y.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Rectangular grid of ring vertices, indexed `[ring][step]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGrid {
    rings: Vec<Vec<DVec3>>,
}

impl RingGrid {
    /// Wraps ring rows after checking the grid is rectangular.
    ///
    /// Needs at least two rings and at least two steps per ring.
    pub fn new(rings: Vec<Vec<DVec3>>) -> Result<Self, MeshError> {
        if rings.len() < 2 {
            return Err(MeshError::invalid_topology(format!(
                "ring grid needs at least 2 rings, got {}",
                rings.len()
            )));
        }

        let steps = rings[0].len();
        if steps < 2 {
            return Err(MeshError::invalid_topology(format!(
                "ring grid needs at least 2 steps per ring, got {steps}"
            )));
        }

        if let Some((ring, row)) = rings.iter().enumerate().find(|(_, row)| row.len() != steps) {
            return Err(MeshError::invalid_topology(format!(
                "ring {ring} has {} steps, expected {steps}",
                row.len()
            )));
        }

        Ok(Self { rings })
    }

    /// Number of rings.
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Number of angular steps stored per ring.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.rings[0].len()
    }

    /// Position at `[ring][step]`.
    #[inline]
    pub fn get(&self, ring: usize, step: usize) -> DVec3 {
        self.rings[ring][step]
    }

    /// All rings, bottom first.
    pub fn rings(&self) -> &[Vec<DVec3>] {
        &self.rings
    }

    /// Vertex count of the assembled mesh (grid plus two cap centres).
    pub fn assembled_vertex_count(&self) -> usize {
        self.ring_count() * self.step_count() + 2
    }

    /// Triangle count of the assembled mesh.
    pub fn assembled_triangle_count(&self) -> usize {
        let steps = self.step_count();
        (self.ring_count() - 1) * steps * 2 + steps * 2
    }
}

/// Assembles a closed mesh from a ring grid.
///
/// Vertices are laid out ring by ring, then the bottom centre, then the top
/// centre. Every grid step is connected to the next, and the last step is
/// connected back to the first in a separate pass.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::assemble::{assemble, RingGrid};
/// use glam::DVec3;
///
/// let ring = |y: f64| -> Vec<DVec3> {
///     (0..=4)
///         .map(|r| {
///             let a = std::f64::consts::TAU * (r % 4) as f64 / 4.0;
///             DVec3::new(a.cos(), y, a.sin())
///         })
///         .collect()
/// };
/// let grid = RingGrid::new(vec![ring(0.0), ring(1.0)]).unwrap();
/// let mesh = assemble(&grid).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 20);
/// assert!(mesh.is_closed());
/// ```
pub fn assemble(grid: &RingGrid) -> Result<Mesh, MeshError> {
    let rings = grid.ring_count();
    let steps = grid.step_count();

    let mut mesh = Mesh::with_capacity(grid.assembled_vertex_count(), grid.assembled_triangle_count());

    for row in grid.rings() {
        for &position in row {
            mesh.add_vertex(position);
        }
    }

    let index = |ring: usize, step: usize| (ring * steps + step) as u32;

    // Side walls
    for ring in 0..rings - 1 {
        for step in 0..steps - 1 {
            push_cell(&mut mesh, index(ring, step), index(ring, step + 1), index(ring + 1, step), index(ring + 1, step + 1));
        }

        // Closing cell: last step back to the first
        push_cell(&mut mesh, index(ring, steps - 1), index(ring, 0), index(ring + 1, steps - 1), index(ring + 1, 0));
    }

    // Bottom cap
    let bottom_center = mesh.add_vertex(ring_center(&grid.rings()[0]));
    for step in 0..steps - 1 {
        mesh.add_triangle(bottom_center, index(0, step), index(0, step + 1));
    }
    mesh.add_triangle(bottom_center, index(0, steps - 1), index(0, 0));

    // Top cap
    let top = rings - 1;
    let top_center = mesh.add_vertex(ring_center(&grid.rings()[top]));
    for step in 0..steps - 1 {
        mesh.add_triangle(top_center, index(top, step + 1), index(top, step));
    }
    mesh.add_triangle(top_center, index(top, 0), index(top, steps - 1));

    mesh.validate()?;

    tracing::trace!(
        rings,
        steps,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "assembled ring grid"
    );

    Ok(mesh)
}

/// Two triangles for the cell with lower edge `a0..a1` and upper edge `b0..b1`.
fn push_cell(mesh: &mut Mesh, a0: u32, a1: u32, b0: u32, b1: u32) {
    mesh.add_triangle(a0, b0, a1);
    mesh.add_triangle(a1, b0, b1);
}

/// Point on the vertical axis at the ring's mean height.
fn ring_center(ring: &[DVec3]) -> DVec3 {
    let y = ring.iter().map(|v| v.y).sum::<f64>() / ring.len() as f64;
    DVec3::new(0.0, y, 0.0)
}
