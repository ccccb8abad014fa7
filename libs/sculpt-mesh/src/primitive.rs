//! # Primitive Solids
//!
//! Oriented box, sphere and cylinder placements produced by the growth
//! generator. Each kind carries its own fixed set of dimensions.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_box, create_cylinder, create_sphere};
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a primitive, without dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Box,
    Sphere,
    Cylinder,
}

impl PrimitiveKind {
    /// All kinds, in the order the growth generator picks from.
    pub const ALL: [PrimitiveKind; 3] = [Self::Box, Self::Sphere, Self::Cylinder];
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
        };
        f.write_str(name)
    }
}

/// Dimensions of a primitive, tagged by kind.
///
/// Cylinders stand along their local +Y axis; all shapes are centred on
/// their local origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Box { width: f64, height: f64, depth: f64 },
    Sphere { radius: f64 },
    Cylinder { radius: f64, height: f64 },
}

impl Shape {
    /// Kind of this shape.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Shape::Box { .. } => PrimitiveKind::Box,
            Shape::Sphere { .. } => PrimitiveKind::Sphere,
            Shape::Cylinder { .. } => PrimitiveKind::Cylinder,
        }
    }

    /// Checks that every dimension is finite and positive.
    pub fn validate(&self) -> Result<(), MeshError> {
        let dims: &[(&str, f64)] = match self {
            Shape::Box {
                width,
                height,
                depth,
            } => &[("width", *width), ("height", *height), ("depth", *depth)],
            Shape::Sphere { radius } => &[("radius", *radius)],
            Shape::Cylinder { radius, height } => &[("radius", *radius), ("height", *height)],
        };

        for (name, value) in dims {
            if !(value.is_finite() && *value > 0.0) {
                return Err(MeshError::invalid_primitive(format!(
                    "{} {name} must be positive and finite: {value}",
                    self.kind()
                )));
            }
        }
        Ok(())
    }
}

/// A shape placed in model space.
///
/// Rotation is in degrees, applied about X, then Y, then Z in the
/// primitive's local frame, before translation to `position`.
///
/// # Example
///
/// ```rust
/// use sculpt_mesh::primitive::{Primitive, Shape, PrimitiveKind};
/// use glam::DVec3;
///
/// let p = Primitive::new(Shape::Sphere { radius: 1.0 }, DVec3::Y, DVec3::ZERO);
/// assert_eq!(p.kind(), PrimitiveKind::Sphere);
/// let mesh = p.to_mesh(12).unwrap();
/// assert!(mesh.is_closed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    shape: Shape,
    position: DVec3,
    rotation_deg: DVec3,
}

impl Primitive {
    /// Creates a placed primitive.
    pub fn new(shape: Shape, position: DVec3, rotation_deg: DVec3) -> Self {
        Self {
            shape,
            position,
            rotation_deg,
        }
    }

    /// Dimensions of the primitive.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Kind of the primitive.
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    /// Centre of the primitive in model space.
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Euler rotation in degrees (X, Y, Z).
    #[inline]
    pub fn rotation_deg(&self) -> DVec3 {
        self.rotation_deg
    }

    /// Local-to-model transform: translate * Rx * Ry * Rz.
    pub fn model_matrix(&self) -> DMat4 {
        let r = self.rotation_deg;
        DMat4::from_translation(self.position)
            * DMat4::from_rotation_x(r.x.to_radians())
            * DMat4::from_rotation_y(r.y.to_radians())
            * DMat4::from_rotation_z(r.z.to_radians())
    }

    /// Tessellates the primitive into a closed mesh in model space.
    ///
    /// `segments` sets the angular resolution of spheres and cylinders.
    pub fn to_mesh(&self, segments: u32) -> Result<Mesh, MeshError> {
        self.shape.validate()?;

        let mut mesh = match self.shape {
            Shape::Box {
                width,
                height,
                depth,
            } => create_box(DVec3::new(width, height, depth))?,
            Shape::Sphere { radius } => create_sphere(radius, segments)?,
            Shape::Cylinder { radius, height } => create_cylinder(radius, height, segments)?,
        };

        mesh.transform(&self.model_matrix());
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_kind() {
        assert_eq!(Shape::Sphere { radius: 1.0 }.kind(), PrimitiveKind::Sphere);
        assert_eq!(
            Shape::Cylinder {
                radius: 1.0,
                height: 2.0
            }
            .kind(),
            PrimitiveKind::Cylinder
        );
    }

    #[test]
    fn test_shape_rejects_zero_dimension() {
        let shape = Shape::Box {
            width: 1.0,
            height: 0.0,
            depth: 1.0,
        };
        assert!(matches!(
            shape.validate(),
            Err(MeshError::InvalidPrimitive { .. })
        ));
    }

    #[test]
    fn test_shape_rejects_nan() {
        assert!(Shape::Sphere { radius: f64::NAN }.validate().is_err());
    }

    #[test]
    fn test_translated_box_bounds() {
        let p = Primitive::new(
            Shape::Box {
                width: 2.0,
                height: 4.0,
                depth: 6.0,
            },
            DVec3::new(10.0, 0.0, 0.0),
            DVec3::ZERO,
        );
        let mesh = p.to_mesh(8).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.x, 9.0);
        assert_relative_eq!(max.y, 2.0);
        assert_relative_eq!(max.z, 3.0);
    }

    #[test]
    fn test_rotation_about_z_lays_cylinder_down() {
        let p = Primitive::new(
            Shape::Cylinder {
                radius: 0.5,
                height: 4.0,
            },
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, 90.0),
        );
        let mesh = p.to_mesh(16).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(max.x - min.x, 4.0, epsilon = 1e-9);
        assert!(max.y - min.y <= 1.0 + 1e-9);
    }

    #[test]
    fn test_rotation_keeps_volume_positive() {
        let p = Primitive::new(
            Shape::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(30.0, -12.0, 45.0),
        );
        let mesh = p.to_mesh(8).unwrap();
        assert_relative_eq!(mesh.signed_volume(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_mesh_rejects_invalid_shape() {
        let p = Primitive::new(Shape::Sphere { radius: -1.0 }, DVec3::ZERO, DVec3::ZERO);
        assert!(p.to_mesh(8).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PrimitiveKind::Cylinder.to_string(), "cylinder");
    }
}
