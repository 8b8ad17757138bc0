//! # Orbit Camera
//!
//! A camera circling the origin, rotated by pointer drags.

use std::f64::consts::TAU;

use config::constants::{
    DEFAULT_CAMERA_DISTANCE, DEFAULT_CAMERA_PHI, DEFAULT_CAMERA_THETA,
    DEFAULT_FAR_PLANE, DEFAULT_FIELD_OF_VIEW, DEFAULT_NEAR_PLANE, PITCH_LIMIT,
};
use config::EngineConfig;
use glam::{DMat4, DVec3};

/// Camera orbiting the origin at a fixed distance.
///
/// `theta` is the rotation about the y axis, `phi` the tilt about the x
/// axis. The view matrix is `translate(0, 0, -distance) · rotX(phi) ·
/// rotY(theta)`.
///
/// # Example
///
/// ```rust
/// use primitives_scene::OrbitCamera;
///
/// let mut camera = OrbitCamera::new(800, 600, 0.25);
/// assert!(!camera.drag_by(10.0, 0.0)); // not dragging yet
///
/// camera.begin_drag();
/// assert!(camera.drag_by(10.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    theta: f64,
    phi: f64,
    distance: f64,
    fov_y: f64,
    near: f64,
    far: f64,
    width: u32,
    height: u32,
    dragging: bool,
    sensitivity: f64,
}

impl OrbitCamera {
    /// Creates a camera at the default orbit position for a viewport.
    pub fn new(width: u32, height: u32, sensitivity: f64) -> Self {
        Self {
            theta: DEFAULT_CAMERA_THETA,
            phi: DEFAULT_CAMERA_PHI,
            distance: DEFAULT_CAMERA_DISTANCE,
            fov_y: DEFAULT_FIELD_OF_VIEW,
            near: DEFAULT_NEAR_PLANE,
            far: DEFAULT_FAR_PLANE,
            width: width.max(1),
            height: height.max(1),
            dragging: false,
            sensitivity,
        }
    }

    /// Creates a camera for the viewport and sensitivity in `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.viewport_width,
            config.viewport_height,
            config.drag_sensitivity,
        )
    }

    /// Rotation about the y axis in radians.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Tilt about the x axis in radians, within ±[`PITCH_LIMIT`].
    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// World-to-camera transform.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::from_translation(DVec3::new(0.0, 0.0, -self.distance))
            * DMat4::from_rotation_x(self.phi)
            * DMat4::from_rotation_y(self.theta)
    }

    /// OpenGL-style perspective projection (clip z in [-1, 1]).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect(), self.near, self.far)
    }

    /// Camera position in world space.
    pub fn eye(&self) -> DVec3 {
        self.view_matrix().inverse().transform_point3(DVec3::ZERO)
    }

    /// Starts a drag. Subsequent [`Self::drag_by`] calls rotate the camera.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Rotates by a pointer delta in pixels.
    ///
    /// Dragging across the full viewport width turns the camera by
    /// `2π · sensitivity`. Returns true if the orientation changed.
    pub fn drag_by(&mut self, dx: f64, dy: f64) -> bool {
        if !self.dragging || !dx.is_finite() || !dy.is_finite() {
            return false;
        }

        let theta = self.theta + dx * TAU / self.width as f64 * self.sensitivity;
        let phi = (self.phi + dy * TAU / self.height as f64 * self.sensitivity)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Exact comparison: accumulated tiny steps still count as a change
        let changed = theta != self.theta || phi != self.phi;
        self.theta = theta;
        self.phi = phi;
        changed
    }

    /// Updates the viewport. Zero extents are ignored.
    ///
    /// Returns true if the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
