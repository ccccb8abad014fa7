//! Deterministic geometry of branch growth.
//!
//! Nothing here draws random numbers; callers pass the sampled values in.

use config::constants::POSITION_JITTER_FACTOR;
use glam::DVec3;
use sculpt_mesh::{PrimitiveKind, Shape};

/// Unit growth direction for an angle from vertical and a twist around it,
/// both in degrees.
///
/// `angle = 0` points straight up (+Y); `angle = 90` is horizontal.
///
/// # Example
///
/// ```rust
/// use sculpt_gen::branch::geometry::growth_direction;
/// use glam::DVec3;
///
/// assert!(growth_direction(0.0, 123.0).abs_diff_eq(DVec3::Y, 1e-12));
/// ```
pub fn growth_direction(angle_deg: f64, twist_deg: f64) -> DVec3 {
    let angle = angle_deg.to_radians();
    let twist = twist_deg.to_radians();
    let direction = DVec3::new(
        angle.sin() * twist.cos(),
        angle.cos(),
        angle.sin() * twist.sin(),
    );
    direction.try_normalize().unwrap_or(DVec3::Y)
}

/// Distance between consecutive primitives along a branch.
///
/// `overlap` is in `[0.6, 0.8]` so neighbours overlap; `length_jitter` is
/// the signed relative variation.
#[inline]
pub fn segment_length(size: f64, overlap: f64, length_jitter: f64) -> f64 {
    size * overlap * (1.0 + length_jitter)
}

/// Emitted size after the signed relative variation.
#[inline]
pub fn actual_size(size: f64, size_jitter: f64) -> f64 {
    size * (1.0 + size_jitter)
}

/// Half-width of the horizontal position jitter.
#[inline]
pub fn jitter_spread(position_variation: f64, size: f64) -> f64 {
    position_variation * size * POSITION_JITTER_FACTOR
}

/// Next primitive centre: a step along `direction`, then a horizontal
/// offset. The vertical axis is never jittered.
pub fn advance(position: DVec3, direction: DVec3, length: f64, jitter_x: f64, jitter_z: f64) -> DVec3 {
    position + direction * length + DVec3::new(jitter_x, 0.0, jitter_z)
}

/// Dimensions for a primitive of the given kind and emitted size.
///
/// `cylinder_stretch` only applies to cylinders.
pub fn shape_for(kind: PrimitiveKind, size: f64, cylinder_stretch: f64) -> Shape {
    match kind {
        PrimitiveKind::Box => Shape::Box {
            width: size,
            height: size,
            depth: size,
        },
        PrimitiveKind::Sphere => Shape::Sphere { radius: size / 2.0 },
        PrimitiveKind::Cylinder => Shape::Cylinder {
            radius: size / 2.0,
            height: size * cylinder_stretch,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direction_is_unit() {
        for (angle, twist) in [(35.0, 0.0), (60.0, 270.0), (10.0, 359.0), (90.0, 45.0)] {
            assert_relative_eq!(growth_direction(angle, twist).length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_horizontal_direction_follows_twist() {
        let d = growth_direction(90.0, 90.0);
        assert!(d.abs_diff_eq(DVec3::Z, 1e-12));
        let d = growth_direction(90.0, 0.0);
        assert!(d.abs_diff_eq(DVec3::X, 1e-12));
    }

    #[test]
    fn test_tilted_direction_keeps_vertical_component() {
        let d = growth_direction(35.0, 200.0);
        assert_relative_eq!(d.y, 35f64.to_radians().cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_segment_length() {
        assert_relative_eq!(segment_length(3.0, 0.7, 0.0), 2.1, epsilon = 1e-12);
        assert_relative_eq!(segment_length(3.0, 0.6, -0.4), 1.08, epsilon = 1e-12);
    }

    #[test]
    fn test_advance_jitters_horizontally_only() {
        let p = advance(DVec3::new(0.0, 1.0, 0.0), DVec3::Y, 2.0, 0.5, -0.25);
        assert_eq!(p, DVec3::new(0.5, 3.0, -0.25));
    }

    #[test]
    fn test_jitter_spread() {
        assert_eq!(jitter_spread(0.0, 3.0), 0.0);
        assert_relative_eq!(jitter_spread(1.0, 2.0), 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_shape_dimensions() {
        assert_eq!(
            shape_for(PrimitiveKind::Box, 2.0, 1.3),
            Shape::Box {
                width: 2.0,
                height: 2.0,
                depth: 2.0
            }
        );
        assert_eq!(
            shape_for(PrimitiveKind::Sphere, 2.0, 1.3),
            Shape::Sphere { radius: 1.0 }
        );
        assert_eq!(
            shape_for(PrimitiveKind::Cylinder, 2.0, 1.5),
            Shape::Cylinder {
                radius: 1.0,
                height: 3.0
            }
        );
    }
}
