//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_normal_epsilon_is_tiny() {
    assert!(NORMAL_EPSILON > 0.0);
    assert!(NORMAL_EPSILON < EPSILON);
}

#[test]
fn test_plane_epsilon_looser_than_epsilon() {
    assert!(PLANE_EPSILON >= EPSILON);
}

// =============================================================================
// GROWTH TESTS
// =============================================================================

#[test]
fn test_growth_floor() {
    assert_eq!(MIN_GROWTH_SIZE, 0.3);
}

#[test]
fn test_overlap_range_is_ordered() {
    assert!(OVERLAP_RATIO_MIN < OVERLAP_RATIO_MAX);
    assert!(OVERLAP_RATIO_MAX < 1.0, "segments must overlap");
}

#[test]
fn test_cylinder_stretch_never_shrinks() {
    assert!(CYLINDER_STRETCH_MIN >= 1.0);
    assert!(CYLINDER_STRETCH_MAX > CYLINDER_STRETCH_MIN);
}

#[test]
fn test_growth_limits_nonzero() {
    assert!(MAX_GROWTH_DEPTH > 0);
    assert!(MAX_BRANCHES_PER_NODE >= 2, "a split needs two children");
}

// =============================================================================
// PROFILE TESTS
// =============================================================================

#[test]
fn test_profile_shape_keeps_positive_radius() {
    // Top of the taper: 1 - 0.3 + 0.2
    let top_factor = 1.0 - PROFILE_TAPER + PROFILE_FLARE;
    assert!(top_factor > 0.0);
    assert!(MIN_PROFILE_RADIUS > 0.0);
}

#[test]
fn test_blend_sigma() {
    assert_eq!(BLEND_SIGMA, 0.25);
}

#[test]
fn test_revolution_limits() {
    assert!(MAX_ROTATIONS >= MAX_SEGMENTS);
    assert!(MAX_CURVES >= 1);
    assert!(MAX_CURVES < MAX_ROTATIONS);
}

#[test]
fn test_noise_octaves() {
    assert!(NOISE_OCTAVES >= 1);
    assert!(NOISE_PERSISTENCE > 0.0 && NOISE_PERSISTENCE < 1.0);
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_segment_range() {
    assert!(MIN_SEGMENTS >= 3);
    assert!((MIN_SEGMENTS..=MAX_SEGMENTS).contains(&DEFAULT_SEGMENTS));
}

// =============================================================================
// EXPORT TESTS
// =============================================================================

#[test]
fn test_export_scale_is_cm_to_mm() {
    assert_eq!(EXPORT_UNIT_SCALE, 10.0);
}

#[test]
fn test_default_solid_name_has_no_whitespace() {
    assert!(!DEFAULT_SOLID_NAME.contains(char::is_whitespace));
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
}

#[test]
fn test_approx_equal_different_values() {
    assert!(!approx_equal(1.0, 1.001));
}
