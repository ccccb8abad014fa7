//! # ASCII STL Export
//!
//! Serializes a [`Solid`] as a line-oriented ASCII STL document:
//!
//! ```text
//! solid <name>
//!   facet normal nx ny nz
//!     outer loop
//!       vertex x y z
//!       vertex x y z
//!       vertex x y z
//!     endloop
//!   endfacet
//! endsolid <name>
//! ```
//!
//! Degeneracy is decided on the model-space triangle against the exporter's
//! tolerance, so the output scale never changes which facets are written.
//! The surviving normal is remapped with the same axes as the vertices; a
//! mirroring remap also swaps two corners, which keeps both consistent.
//! Polygons with more than three vertices are fanned from their first
//! vertex; each fan triangle gets its own normal.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::normal::try_face_normal_within;
use crate::solid::{PolygonSoup, Solid};
use crate::transform::CoordinateTransform;
use config::constants::{DEFAULT_SOLID_NAME, NORMAL_EPSILON};
use glam::DVec3;
use std::io::Write;

/// What to do with a facet whose normal is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DegeneratePolicy {
    /// Leave the facet out.
    #[default]
    Skip,
    /// Write the facet with this normal.
    Fallback(DVec3),
}

/// Counts reported by a finished export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    /// Facet blocks written.
    pub facets: usize,
    /// Degenerate triangles left out.
    pub skipped: usize,
}

/// ASCII STL writer.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::{Mesh, Solid, StlExporter};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(0, 1, 2);
///
/// let text = StlExporter::new("demo").export_to_string(&Solid::Mesh(mesh)).unwrap();
/// assert!(text.starts_with("solid demo\n"));
/// assert!(text.contains("facet normal 0 0 1"));
/// assert!(text.ends_with("endsolid demo\n"));
/// ```
#[derive(Debug, Clone)]
pub struct StlExporter {
    name: String,
    transform: CoordinateTransform,
    degenerate: DegeneratePolicy,
    tolerance: f64,
}

impl StlExporter {
    /// Exporter with the given solid name, identity transform,
    /// [`DegeneratePolicy::Skip`] and [`NORMAL_EPSILON`] as tolerance.
    ///
    /// Whitespace in the name becomes `_` so the header stays one token; an
    /// empty name falls back to the default.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: sanitize_name(name.as_ref()),
            transform: CoordinateTransform::identity(),
            degenerate: DegeneratePolicy::Skip,
            tolerance: NORMAL_EPSILON,
        }
    }

    pub fn with_transform(mut self, transform: CoordinateTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Shortest edge or altitude, in model units, a facet needs to count
    /// as non-degenerate. Usually `GlobalConfig::tolerance`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Writes `solid` to `out`.
    ///
    /// Meshes are validated first; an out-of-range index fails the export
    /// before anything is written.
    pub fn write<W: Write>(&self, solid: &Solid, mut out: W) -> Result<ExportSummary, MeshError> {
        if let Solid::Mesh(mesh) = solid {
            mesh.validate()?;
        }

        let mut summary = ExportSummary::default();
        writeln!(out, "solid {}", self.name)?;
        match solid {
            Solid::Mesh(mesh) => self.write_mesh(mesh, &mut out, &mut summary)?,
            Solid::Polygons(soup) => self.write_polygons(soup, &mut out, &mut summary)?,
        }
        writeln!(out, "endsolid {}", self.name)?;
        out.flush()?;

        if summary.skipped > 0 {
            tracing::warn!(
                skipped = summary.skipped,
                "left out facets with undefined normals"
            );
        }
        tracing::info!(
            name = %self.name,
            facets = summary.facets,
            "exported solid"
        );

        Ok(summary)
    }

    /// Renders `solid` into a string.
    pub fn export_to_string(&self, solid: &Solid) -> Result<String, MeshError> {
        let mut buffer = Vec::new();
        self.write(solid, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            MeshError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    fn write_mesh<W: Write>(
        &self,
        mesh: &Mesh,
        out: &mut W,
        summary: &mut ExportSummary,
    ) -> Result<(), MeshError> {
        for i in 0..mesh.triangle_count() {
            self.write_facet(mesh.triangle_positions(i), out, summary)?;
        }
        Ok(())
    }

    fn write_polygons<W: Write>(
        &self,
        soup: &PolygonSoup,
        out: &mut W,
        summary: &mut ExportSummary,
    ) -> Result<(), MeshError> {
        for polygon in soup.polygons() {
            if polygon.len() < 3 {
                tracing::trace!(vertices = polygon.len(), "ignoring polygon with no area");
                continue;
            }
            for k in 1..polygon.len() - 1 {
                self.write_facet([polygon[0], polygon[k], polygon[k + 1]], out, summary)?;
            }
        }
        Ok(())
    }

    fn write_facet<W: Write>(
        &self,
        triangle: [DVec3; 3],
        out: &mut W,
        summary: &mut ExportSummary,
    ) -> Result<(), MeshError> {
        let [a, b, c] = triangle;
        let normal = match try_face_normal_within(a, b, c, self.tolerance) {
            Ok(normal) => self.transform.axes().apply(normal),
            Err(err) => match self.degenerate {
                DegeneratePolicy::Skip => {
                    tracing::trace!(error = %err, "skipping facet");
                    summary.skipped += 1;
                    return Ok(());
                }
                DegeneratePolicy::Fallback(normal) => normal,
            },
        };

        let [a, mut b, mut c] = if self.transform.is_identity() {
            triangle
        } else {
            triangle.map(|v| self.transform.apply(v))
        };
        if self.transform.reverses_winding() {
            std::mem::swap(&mut b, &mut c);
        }

        writeln!(out, "  facet normal {} {} {}", normal.x, normal.y, normal.z)?;
        writeln!(out, "    outer loop")?;
        for v in [a, b, c] {
            writeln!(out, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;

        summary.facets += 1;
        Ok(())
    }
}

impl Default for StlExporter {
    fn default() -> Self {
        Self::new(DEFAULT_SOLID_NAME)
    }
}

/// Exports with the default name, identity transform and skipped
/// degenerate facets.
pub fn export(solid: &Solid) -> Result<String, MeshError> {
    StlExporter::default().export_to_string(solid)
}

fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        DEFAULT_SOLID_NAME.to_string()
    } else {
        cleaned
    }
}
