//! # Configuration Constants
//!
//! Centralized constants for the primitive mesh engine. Parameter limits,
//! tessellation defaults, camera setup and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: Accepted ranges for shape parameters
//! - **Defaults**: Parameters used when the engine starts
//! - **Camera**: Orbit camera and projection setup
//! - **Shading**: Flat triangle shades used by the preview

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for unit-length checks on vertex normals.
///
/// Normals go through a scale, an inverse-transpose and a renormalization,
/// so they are allowed slightly more drift than [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_TOLERANCE;
///
/// let length: f64 = 1.0 + 1e-12;
/// assert!((length - 1.0).abs() < NORMAL_TOLERANCE);
/// ```
pub const NORMAL_TOLERANCE: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of sides for any circular shape (disk, cylinder, tube).
///
/// Three sides is the smallest closed polygon.
pub const MIN_SIDES: u32 = 3;

/// Maximum number of sides for any circular shape.
///
/// Safety limit to prevent excessive tessellation that could cause
/// memory issues or slow rendering.
///
/// # Example
///
/// ```rust
/// use config::constants::{MAX_SIDES, MIN_SIDES};
///
/// let requested = 5000_u32;
/// let accepted = (MIN_SIDES..=MAX_SIDES).contains(&requested);
/// assert!(!accepted);
/// ```
pub const MAX_SIDES: u32 = 1024;

/// Minimum number of subdivisions per edge for grid shapes (plane, cube, sphere).
pub const MIN_SUBDIVISIONS: u32 = 1;

/// Maximum number of subdivisions per edge for grid shapes.
///
/// A sphere at this limit has `6 * 257 * 257` vertices, which still fits
/// comfortably in `u32` indices.
pub const MAX_SUBDIVISIONS: u32 = 256;

/// Largest accepted ratio between the biggest and smallest scale factor
/// magnitudes.
///
/// Normals are divided by the factors relative to the biggest one, so the
/// ratio has to stay well inside the f64 range.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SCALE_SPREAD;
///
/// let (smallest, largest): (f64, f64) = (1e-200, 1e200);
/// assert!(largest / smallest > MAX_SCALE_SPREAD);
/// ```
pub const MAX_SCALE_SPREAD: f64 = 1e300;

// =============================================================================
// DEFAULT PARAMETERS
// =============================================================================

/// Default subdivisions for plane, cube and sphere.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SUBDIVISIONS, MIN_SUBDIVISIONS, MAX_SUBDIVISIONS};
///
/// assert!((MIN_SUBDIVISIONS..=MAX_SUBDIVISIONS).contains(&DEFAULT_SUBDIVISIONS));
/// ```
pub const DEFAULT_SUBDIVISIONS: u32 = 4;

/// Default side count for disk, cylinder and tube.
pub const DEFAULT_SIDES: u32 = 32;

/// Default radius for disk and cylinder.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default inner radius for tube.
pub const DEFAULT_INNER_RADIUS: f64 = 0.5;

/// Default outer radius for tube.
pub const DEFAULT_OUTER_RADIUS: f64 = 1.0;

/// Selection index of the shape shown at startup (the plane).
pub const DEFAULT_SHAPE_INDEX: usize = 0;

// =============================================================================
// CAMERA CONSTANTS
// =============================================================================

/// Initial yaw of the orbit camera around the vertical axis, in radians.
pub const DEFAULT_CAMERA_THETA: f64 = -FRAC_PI_4;

/// Initial pitch of the orbit camera, in radians.
pub const DEFAULT_CAMERA_PHI: f64 = FRAC_PI_8;

/// Distance from the camera to the origin.
///
/// Every shape fits in `[-1, 1]^3` before scale, so six units keeps the
/// default shapes comfortably inside the frustum.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 6.0;

/// Vertical field of view, in radians (45 degrees).
pub const DEFAULT_FIELD_OF_VIEW: f64 = FRAC_PI_4;

/// Near clipping plane distance.
pub const DEFAULT_NEAR_PLANE: f64 = 1.0;

/// Far clipping plane distance.
pub const DEFAULT_FAR_PLANE: f64 = 100.0;

/// Maximum absolute pitch, in radians. The camera never flips over a pole.
///
/// # Example
///
/// ```rust
/// use config::constants::PITCH_LIMIT;
///
/// let phi: f64 = 2.0;
/// assert_eq!(phi.clamp(-PITCH_LIMIT, PITCH_LIMIT), PITCH_LIMIT);
/// ```
pub const PITCH_LIMIT: f64 = FRAC_PI_2;

/// Fraction of a full turn applied when dragging across the whole viewport.
pub const DRAG_SENSITIVITY: f64 = 0.25;

/// Viewport width used before the host reports a real size.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;

/// Viewport height used before the host reports a real size.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

// =============================================================================
// SHADING CONSTANTS
// =============================================================================

/// Light gray shade for even triangle pairs (RGB in range [0.0, 1.0]).
pub const LIGHT_SHADE: [f32; 3] = [0.75294, 0.75294, 0.75294];

/// Dark gray shade for odd triangle pairs (RGB in range [0.0, 1.0]).
pub const DARK_SHADE: [f32; 3] = [0.50196, 0.50196, 0.50196];

/// Background clear color (RGBA).
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns the shade for the triangle at `index`.
///
/// Triangles alternate in pairs so that each quad of a grid reads as one
/// flat tile: triangles 0 and 1 are light, 2 and 3 dark, and so on.
///
/// # Example
///
/// ```rust
/// use config::constants::{triangle_shade, DARK_SHADE, LIGHT_SHADE};
///
/// assert_eq!(triangle_shade(1), LIGHT_SHADE);
/// assert_eq!(triangle_shade(2), DARK_SHADE);
/// ```
#[inline]
pub fn triangle_shade(index: usize) -> [f32; 3] {
    if (index / 2) % 2 == 0 {
        LIGHT_SHADE
    } else {
        DARK_SHADE
    }
}
