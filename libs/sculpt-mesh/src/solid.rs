//! # Solids
//!
//! What the pipeline hands to the exporter: either an indexed [`Mesh`] or
//! an unindexed polygon soup produced by solid combination.

use crate::mesh::Mesh;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Unindexed planar polygons, each counter-clockwise seen from outside.
///
/// Polygons may have more than three vertices; exporters fan-triangulate
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonSoup {
    polygons: Vec<Vec<DVec3>>,
}

impl PolygonSoup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_polygons(polygons: Vec<Vec<DVec3>>) -> Self {
        Self { polygons }
    }

    /// One triangle per mesh face.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let polygons = (0..mesh.triangle_count())
            .map(|i| mesh.triangle_positions(i).to_vec())
            .collect();
        Self { polygons }
    }

    pub fn push(&mut self, polygon: Vec<DVec3>) {
        self.polygons.push(polygon);
    }

    pub fn polygons(&self) -> &[Vec<DVec3>] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Triangles produced by fan triangulation of every polygon.
    pub fn triangle_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.len().saturating_sub(2))
            .sum()
    }
}

/// A finished solid, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    Mesh(Mesh),
    Polygons(PolygonSoup),
}

impl Solid {
    /// Number of triangles the exporter will consider.
    pub fn triangle_count(&self) -> usize {
        match self {
            Solid::Mesh(mesh) => mesh.triangle_count(),
            Solid::Polygons(soup) => soup.triangle_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Axis-aligned bounds over every vertex.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        match self {
            Solid::Mesh(mesh) => mesh.bounding_box(),
            Solid::Polygons(soup) => {
                let mut points = soup.polygons.iter().flatten();
                let Some(&first) = points.next() else {
                    return (DVec3::ZERO, DVec3::ZERO);
                };
                points.fold((first, first), |(min, max), &v| (min.min(v), max.max(v)))
            }
        }
    }
}

impl From<Mesh> for Solid {
    fn from(mesh: Mesh) -> Self {
        Solid::Mesh(mesh)
    }
}

impl From<PolygonSoup> for Solid {
    fn from(soup: PolygonSoup) -> Self {
        Solid::Polygons(soup)
    }
}
