//! # Scene State
//!
//! The current shape, its mesh, the camera and the dirty flag.
//!
//! ## Dirty Flag
//!
//! `dirty` is true whenever the mesh or camera changed since the last
//! successful draw. Only [`SceneState::regenerate`] and camera changes set
//! it; only [`SceneState::mark_clean`] (called by the renderer after a
//! successful draw) clears it.

use config::EngineConfig;
use primitives_mesh::{generate_with_tolerance, MeshBuffer, ShapeDescriptor, ShapeError, ShapeKind};

use crate::camera::OrbitCamera;

/// State of the single displayed shape.
///
/// # Example
///
/// ```rust
/// use config::EngineConfig;
/// use primitives_scene::SceneState;
/// use primitives_mesh::ShapeDescriptor;
///
/// let mut scene = SceneState::new(&EngineConfig::default()).unwrap();
/// scene.mark_clean();
///
/// let disk = ShapeDescriptor::from_raw(1, [1.0; 3], &[6.0, 2.0]).unwrap();
/// scene.regenerate(disk).unwrap();
/// assert!(scene.is_dirty());
/// assert_eq!(scene.mesh().vertex_count(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct SceneState {
    descriptor: ShapeDescriptor,
    mesh: MeshBuffer,
    camera: OrbitCamera,
    dirty: bool,
    tolerance: f64,
}

impl SceneState {
    /// Creates the startup scene: the default shape, the default camera and
    /// a dirty flag so the first frame gets drawn.
    pub fn new(config: &EngineConfig) -> Result<Self, ShapeError> {
        let descriptor = ShapeDescriptor::default();
        let mesh = generate_with_tolerance(&descriptor, config.tolerance)?;
        Ok(Self {
            descriptor,
            mesh,
            camera: OrbitCamera::from_config(config),
            dirty: true,
            tolerance: config.tolerance,
        })
    }

    /// Replaces the mesh with one generated from `descriptor`.
    ///
    /// On error the previous descriptor and mesh are kept and the dirty flag
    /// is left untouched.
    pub fn regenerate(&mut self, descriptor: ShapeDescriptor) -> Result<(), ShapeError> {
        let mesh = generate_with_tolerance(&descriptor, self.tolerance)?;
        self.descriptor = descriptor;
        self.mesh = mesh;
        self.dirty = true;
        Ok(())
    }

    /// The descriptor the current mesh was generated from.
    pub fn descriptor(&self) -> &ShapeDescriptor {
        &self.descriptor
    }

    pub fn kind(&self) -> ShapeKind {
        self.descriptor.kind()
    }

    pub fn mesh(&self) -> &MeshBuffer {
        &self.mesh
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Resizes the viewport; marks the scene dirty if the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.camera.resize(width, height);
        self.dirty |= changed;
        changed
    }

    pub fn begin_drag(&mut self) {
        self.camera.begin_drag();
    }

    pub fn end_drag(&mut self) {
        self.camera.end_drag();
    }

    /// Rotates the camera during a drag; marks the scene dirty if it moved.
    pub fn drag_by(&mut self, dx: f64, dy: f64) -> bool {
        let changed = self.camera.drag_by(dx, dy);
        self.dirty |= changed;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives_mesh::{Scale, ShapeParameters};

    fn clean_scene() -> SceneState {
        let mut scene = SceneState::new(&EngineConfig::default()).unwrap();
        scene.mark_clean();
        scene
    }

    #[test]
    fn test_starts_dirty_with_default_shape() {
        let scene = SceneState::new(&EngineConfig::default()).unwrap();
        assert!(scene.is_dirty());
        assert_eq!(scene.kind(), ShapeKind::Plane);
        assert!(!scene.mesh().is_empty());
    }

    #[test]
    fn test_regenerate_replaces_mesh() {
        let mut scene = clean_scene();
        let desc = ShapeDescriptor::from_raw(2, [1.0; 3], &[2.0]).unwrap();
        scene.regenerate(desc).unwrap();
        assert!(scene.is_dirty());
        assert_eq!(scene.kind(), ShapeKind::Cube);
        assert_eq!(scene.mesh().triangle_count(), 48);
    }

    #[test]
    fn test_failed_regenerate_keeps_previous_state() {
        let mut scene = clean_scene();
        let before = scene.mesh().clone();

        let bad = ShapeDescriptor {
            params: ShapeParameters::Tube {
                sides: 8,
                inner_radius: 5.0,
                outer_radius: 3.0,
            },
            scale: Scale::IDENTITY,
        };
        assert!(scene.regenerate(bad).is_err());
        assert_eq!(scene.mesh(), &before);
        assert_eq!(scene.kind(), ShapeKind::Plane);
        assert!(!scene.is_dirty());
    }

    #[test]
    fn test_camera_changes_set_dirty() {
        let mut scene = clean_scene();
        assert!(!scene.resize(0, 0));
        assert!(!scene.is_dirty());

        assert!(scene.resize(640, 480));
        assert!(scene.is_dirty());

        scene.mark_clean();
        assert!(!scene.drag_by(5.0, 5.0));
        scene.begin_drag();
        assert!(scene.drag_by(5.0, 5.0));
        scene.end_drag();
        assert!(scene.is_dirty());
    }

    #[test]
    fn test_every_orientation_change_sets_dirty() {
        let mut scene = clean_scene();
        scene.begin_drag();
        let start = scene.camera().theta();

        for _ in 0..1000 {
            let before = (scene.camera().theta(), scene.camera().phi());
            scene.drag_by(1e-8, 0.0);
            let after = (scene.camera().theta(), scene.camera().phi());
            assert_eq!(scene.is_dirty(), before != after);
            scene.mark_clean();
        }
        assert_ne!(scene.camera().theta(), start);
    }
}
