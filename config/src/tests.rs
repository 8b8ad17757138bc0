//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_normal_tolerance_larger_than_epsilon() {
    assert!(
        NORMAL_TOLERANCE >= EPSILON,
        "NORMAL_TOLERANCE should be >= EPSILON"
    );
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_min_sides_forms_polygon() {
    // A ring needs at least 3 points to enclose an area
    assert_eq!(MIN_SIDES, 3);
}

#[test]
fn test_limits_are_ordered() {
    assert!(MIN_SIDES < MAX_SIDES);
    assert!(MIN_SUBDIVISIONS < MAX_SUBDIVISIONS);
    assert_eq!(MIN_SUBDIVISIONS, 1);
}

#[test]
fn test_max_subdivisions_fits_u32_indices() {
    let per_face = (MAX_SUBDIVISIONS as u64 + 1).pow(2);
    assert!(per_face * 6 < u32::MAX as u64);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_within_limits() {
    assert!((MIN_SUBDIVISIONS..=MAX_SUBDIVISIONS).contains(&DEFAULT_SUBDIVISIONS));
    assert!((MIN_SIDES..=MAX_SIDES).contains(&DEFAULT_SIDES));
    assert!(DEFAULT_RADIUS > 0.0);
    assert!(DEFAULT_INNER_RADIUS > 0.0);
    assert!(DEFAULT_INNER_RADIUS < DEFAULT_OUTER_RADIUS);
    assert!(DEFAULT_SHAPE_INDEX < 6);
}

// =============================================================================
// CAMERA TESTS
// =============================================================================

#[test]
fn test_camera_planes_ordered() {
    assert!(DEFAULT_NEAR_PLANE > 0.0);
    assert!(DEFAULT_NEAR_PLANE < DEFAULT_FAR_PLANE);
    assert!(DEFAULT_CAMERA_DISTANCE > DEFAULT_NEAR_PLANE);
}

#[test]
fn test_default_pitch_within_limit() {
    assert!(DEFAULT_CAMERA_PHI.abs() <= PITCH_LIMIT);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 2.0));
}

// =============================================================================
// SHADING TESTS
// =============================================================================

#[test]
fn test_shades_valid_rgb() {
    for component in LIGHT_SHADE.iter().chain(DARK_SHADE.iter()) {
        assert!(*component >= 0.0 && *component <= 1.0);
    }
    assert!(LIGHT_SHADE[0] > DARK_SHADE[0]);
}

#[test]
fn test_triangle_shade_alternates_in_pairs() {
    let shades: Vec<[f32; 3]> = (0..8).map(triangle_shade).collect();
    assert_eq!(shades[0], LIGHT_SHADE);
    assert_eq!(shades[1], LIGHT_SHADE);
    assert_eq!(shades[2], DARK_SHADE);
    assert_eq!(shades[3], DARK_SHADE);
    assert_eq!(shades[4], LIGHT_SHADE);
    assert_eq!(shades[7], DARK_SHADE);
}
