//! # Sculpt Mesh
//!
//! Mesh side of the procedural sculpture pipeline: closed-mesh assembly
//! from ring grids, primitive tessellation, optional solid union and ASCII
//! STL export.
//!
//! ## Architecture
//!
//! ```text
//! sculpt-gen (RingGrid)    → assemble  → Mesh ─────────────┐
//! sculpt-gen (Primitive[]) → combine   → Mesh | PolygonSoup ┴→ export → STL text
//! ```
//!
//! ## Conventions
//!
//! - Model space is Y-up, in centimetres.
//! - Faces wind counter-clockwise seen from outside; `(0,0,0), (1,0,0),
//!   (0,1,0)` has normal `+Z`.
//! - Unit and axis changes happen only in [`transform::CoordinateTransform`],
//!   applied by the exporter.
//!
//! ## Usage
//!
//! ```rust
//! use sculpt_mesh::primitive::{Primitive, Shape};
//! use sculpt_mesh::{combine_or_separate, BspUnion, StlExporter};
//! use glam::DVec3;
//!
//! let parts = [
//!     Primitive::new(Shape::Box { width: 2.0, height: 2.0, depth: 2.0 }, DVec3::ZERO, DVec3::ZERO),
//!     Primitive::new(Shape::Sphere { radius: 1.0 }, DVec3::Y, DVec3::ZERO),
//! ];
//! let solid = combine_or_separate(&parts, 12, Some(&BspUnion::new(12))).unwrap();
//! let stl = StlExporter::new("demo").export_to_string(&solid).unwrap();
//! assert!(stl.starts_with("solid demo"));
//! ```

pub mod assemble;
pub mod combine;
pub mod error;
pub mod export;
pub mod mesh;
pub mod normal;
pub mod primitive;
pub mod primitives;
pub mod solid;
pub mod transform;

pub use assemble::{assemble, RingGrid};
pub use combine::{combine_or_separate, merge_separate, BspUnion, SolidCombiner};
pub use error::MeshError;
pub use export::{export, DegeneratePolicy, ExportSummary, StlExporter};
pub use mesh::Mesh;
pub use normal::{face_normal, face_normal_within};
pub use primitive::{Primitive, PrimitiveKind, Shape};
pub use solid::{PolygonSoup, Solid};
pub use transform::{AxisRemap, CoordinateTransform};
