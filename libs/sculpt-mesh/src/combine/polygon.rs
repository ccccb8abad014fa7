//! # Polygon for BSP Operations
//!
//! Convex polygon with its supporting plane and plane splitting.

use super::plane::{Classification, Plane};
use glam::DVec3;

/// A convex polygon, counter-clockwise seen from the front of its plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<DVec3>,
    plane: Plane,
}

/// Buckets filled by [`Polygon::split_into`].
#[derive(Debug, Default)]
pub struct Split {
    pub coplanar_front: Vec<Polygon>,
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Creates a polygon, or `None` for fewer than three vertices or a
    /// degenerate leading triangle.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Piece of a split polygon; keeps the parent's plane.
    fn with_plane(vertices: Vec<DVec3>, plane: Plane) -> Self {
        Self { vertices, plane }
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn into_vertices(self) -> Vec<DVec3> {
        self.vertices
    }

    /// Reverses winding and plane in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Classifies the whole polygon against a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = false;
        let mut back = false;

        for &v in &self.vertices {
            match plane.classify_point(v) {
                Classification::Front => front = true,
                Classification::Back => back = true,
                _ => {}
            }
        }

        match (front, back) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Sorts this polygon into `out`, cutting it in two when it spans the
    /// plane.
    pub fn split_into(&self, plane: &Plane, out: &mut Split) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    out.coplanar_front.push(self.clone());
                } else {
                    out.coplanar_back.push(self.clone());
                }
            }
            Classification::Front => out.front.push(self.clone()),
            Classification::Back => out.back.push(self.clone()),
            Classification::Spanning => {
                let n = self.vertices.len();
                let mut front = Vec::with_capacity(n + 1);
                let mut back = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % n];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front.push(vi);
                    }
                    if ti != Classification::Front {
                        back.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let t = di / (di - dj);
                        let v = vi.lerp(vj, t);
                        front.push(v);
                        back.push(v);
                    }
                }

                if front.len() >= 3 {
                    out.front.push(Polygon::with_plane(front, self.plane));
                }
                if back.len() >= 3 {
                    out.back.push(Polygon::with_plane(back, self.plane));
                }
            }
        }
    }
}
