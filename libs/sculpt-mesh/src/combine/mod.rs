//! # Solid Combination
//!
//! Turns a list of overlapping primitives into one exportable solid.
//!
//! The union is an optional capability behind [`SolidCombiner`]. When no
//! combiner is supplied, or the combiner fails, [`combine_or_separate`]
//! emits every primitive as its own closed shell in one mesh.

pub mod bsp;
pub mod plane;
pub mod polygon;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitive::Primitive;
use crate::solid::{PolygonSoup, Solid};
use config::constants::MAX_UNION_POLYGONS;
use polygon::Polygon;

/// Merges primitives into a single solid.
pub trait SolidCombiner {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Computes the union of all primitives.
    fn combine(&self, primitives: &[Primitive]) -> Result<PolygonSoup, MeshError>;
}

/// Union by successive BSP merges.
#[derive(Debug, Clone)]
pub struct BspUnion {
    segments: u32,
    max_polygons: usize,
}

impl BspUnion {
    /// Union tessellating curved primitives with `segments` segments.
    pub fn new(segments: u32) -> Self {
        Self {
            segments,
            max_polygons: MAX_UNION_POLYGONS,
        }
    }

    /// Overrides the polygon count past which the union gives up.
    pub fn with_polygon_limit(mut self, max_polygons: usize) -> Self {
        self.max_polygons = max_polygons;
        self
    }
}

impl SolidCombiner for BspUnion {
    fn name(&self) -> &str {
        "bsp-union"
    }

    fn combine(&self, primitives: &[Primitive]) -> Result<PolygonSoup, MeshError> {
        if primitives.is_empty() {
            return Err(MeshError::combine_failed("nothing to combine"));
        }

        let mut acc: Vec<Polygon> = Vec::new();
        for (i, primitive) in primitives.iter().enumerate() {
            let shell = mesh_polygons(&primitive.to_mesh(self.segments)?);
            acc = if acc.is_empty() {
                shell
            } else {
                bsp::union(acc, shell)
            };

            if acc.len() > self.max_polygons {
                return Err(MeshError::combine_failed(format!(
                    "union exceeded {} polygons after {} of {} primitives",
                    self.max_polygons,
                    i + 1,
                    primitives.len()
                )));
            }
        }

        tracing::debug!(
            primitives = primitives.len(),
            polygons = acc.len(),
            "bsp union complete"
        );

        Ok(PolygonSoup::from_polygons(
            acc.into_iter().map(Polygon::into_vertices).collect(),
        ))
    }
}

/// Tessellates every primitive and concatenates the shells into one mesh.
///
/// Overlapping regions are kept as-is; most slicers union overlapping
/// shells on import.
pub fn merge_separate(primitives: &[Primitive], segments: u32) -> Result<Mesh, MeshError> {
    let mut mesh = Mesh::new();
    for primitive in primitives {
        mesh.merge(&primitive.to_mesh(segments)?);
    }
    Ok(mesh)
}

/// Combines primitives with `combiner`, falling back to separate shells.
///
/// A combiner failure is logged and never surfaces as an error; only a
/// primitive that cannot be tessellated at all does.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::combine::combine_or_separate;
/// use sculpt_mesh::primitive::{Primitive, Shape};
/// use sculpt_mesh::Solid;
/// use glam::DVec3;
///
/// let cube = Primitive::new(
///     Shape::Box { width: 1.0, height: 1.0, depth: 1.0 },
///     DVec3::ZERO,
///     DVec3::ZERO,
/// );
/// let solid = combine_or_separate(&[cube], 8, None).unwrap();
/// assert!(matches!(solid, Solid::Mesh(_)));
/// ```
pub fn combine_or_separate(
    primitives: &[Primitive],
    segments: u32,
    combiner: Option<&dyn SolidCombiner>,
) -> Result<Solid, MeshError> {
    if let Some(combiner) = combiner {
        match combiner.combine(primitives) {
            Ok(soup) if !soup.is_empty() => return Ok(Solid::Polygons(soup)),
            Ok(_) => {
                tracing::warn!(
                    combiner = combiner.name(),
                    "combiner produced no polygons; emitting primitives separately"
                );
            }
            Err(err) => {
                tracing::warn!(
                    combiner = combiner.name(),
                    error = %err,
                    "combination failed; emitting primitives separately"
                );
            }
        }
    }

    merge_separate(primitives, segments).map(Solid::Mesh)
}

/// One polygon per non-degenerate mesh triangle.
fn mesh_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| Polygon::new(mesh.triangle_positions(i).to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Shape;
    use glam::DVec3;

    fn cube(at: DVec3) -> Primitive {
        Primitive::new(
            Shape::Box {
                width: 2.0,
                height: 2.0,
                depth: 2.0,
            },
            at,
            DVec3::ZERO,
        )
    }

    struct FailingCombiner;

    impl SolidCombiner for FailingCombiner {
        fn name(&self) -> &str {
            "failing"
        }

        fn combine(&self, _: &[Primitive]) -> Result<PolygonSoup, MeshError> {
            Err(MeshError::combine_failed("always fails"))
        }
    }

    #[test]
    fn test_merge_separate_keeps_every_shell() {
        let mesh = merge_separate(&[cube(DVec3::ZERO), cube(DVec3::X)], 8).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 24);
        assert!(mesh.is_closed());
    }

    #[test]
    fn test_no_combiner_yields_mesh() {
        let solid = combine_or_separate(&[cube(DVec3::ZERO)], 8, None).unwrap();
        assert!(matches!(solid, Solid::Mesh(ref m) if m.triangle_count() == 12));
    }

    #[test]
    fn test_failing_combiner_falls_back() {
        let solid = combine_or_separate(
            &[cube(DVec3::ZERO), cube(DVec3::X)],
            8,
            Some(&FailingCombiner),
        )
        .unwrap();
        assert!(matches!(solid, Solid::Mesh(ref m) if m.triangle_count() == 24));
    }

    #[test]
    fn test_bsp_union_of_overlapping_cubes() {
        let union = BspUnion::new(8);
        let soup = union
            .combine(&[cube(DVec3::ZERO), cube(DVec3::new(1.0, 0.0, 0.0))])
            .unwrap();
        assert!(!soup.is_empty());
        let solid = Solid::Polygons(soup);
        let (min, max) = solid.bounding_box();
        assert!((min.x + 1.0).abs() < 1e-9);
        assert!((max.x - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_bsp_union_polygon_limit_falls_back() {
        let union = BspUnion::new(8).with_polygon_limit(4);
        let primitives = [cube(DVec3::ZERO), cube(DVec3::new(1.0, 0.0, 0.0))];
        assert!(matches!(
            union.combine(&primitives),
            Err(MeshError::CombineFailed { .. })
        ));
        let solid = combine_or_separate(&primitives, 8, Some(&union)).unwrap();
        assert!(matches!(solid, Solid::Mesh(_)));
    }

    #[test]
    fn test_bsp_union_rejects_empty_input() {
        assert!(BspUnion::new(8).combine(&[]).is_err());
    }

    #[test]
    fn test_invalid_primitive_is_an_error_either_way() {
        let bad = Primitive::new(Shape::Sphere { radius: 0.0 }, DVec3::ZERO, DVec3::ZERO);
        assert!(combine_or_separate(&[bad], 8, Some(&BspUnion::new(8))).is_err());
    }
}
