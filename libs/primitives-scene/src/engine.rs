//! # Engine
//!
//! The entry point used by a UI: regenerate the shape, draw, export and
//! forward viewport/pointer events.
//!
//! ## Flow
//!
//! ```text
//! regenerate(index, scale, args) → ShapeDescriptor → SceneState (dirty)
//! draw_scene_if()                → Renderer → RenderSurface (clean)
//! export_shape(index, scale, args) → independent generate → OBJ text
//! ```

use config::EngineConfig;
use primitives_mesh::{export_descriptor, ShapeDescriptor, ShapeError};

use crate::error::{EngineError, RenderError};
use crate::renderer::{RenderSurface, Renderer};
use crate::scene::SceneState;

/// Owns the scene and the renderer for one surface.
///
/// # Example
///
/// ```rust
/// use primitives_scene::{Engine, HeadlessSurface};
///
/// let mut engine = Engine::with_defaults(HeadlessSurface::new()).unwrap();
/// engine.regenerate(1, [1.0, 1.0, 1.0], &[6.0, 2.0]).unwrap();
/// assert!(engine.draw_scene_if().unwrap());
///
/// let obj = engine.export_shape(1, [1.0, 1.0, 1.0], &[6.0, 2.0]).unwrap();
/// assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 6);
/// ```
#[derive(Debug)]
pub struct Engine<S> {
    config: EngineConfig,
    scene: SceneState,
    renderer: Renderer<S>,
}

impl<S: RenderSurface> Engine<S> {
    /// Builds the startup scene for `surface`. Nothing is drawn until the
    /// first draw call.
    pub fn initialize(surface: S, config: EngineConfig) -> Result<Self, EngineError> {
        let scene = SceneState::new(&config)?;
        tracing::info!(
            kind = %scene.kind(),
            width = config.viewport_width,
            height = config.viewport_height,
            "engine initialized"
        );
        Ok(Self {
            config,
            scene,
            renderer: Renderer::new(surface),
        })
    }

    /// [`Self::initialize`] with [`EngineConfig::default`].
    pub fn with_defaults(surface: S) -> Result<Self, EngineError> {
        Self::initialize(surface, EngineConfig::default())
    }

    /// Regenerates the displayed shape from the UI's raw form.
    ///
    /// `args` follow [`primitives_mesh::ShapeKind::parameter_names`]. On
    /// error the scene keeps its previous mesh and the caller keeps seeing
    /// the previous frame.
    pub fn regenerate(
        &mut self,
        shape_index: usize,
        scale: [f64; 3],
        args: &[f64],
    ) -> Result<(), ShapeError> {
        let descriptor = match ShapeDescriptor::from_raw(shape_index, scale, args) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                tracing::warn!(shape_index, error = %err, "regenerate rejected");
                return Err(err);
            }
        };
        self.regenerate_descriptor(descriptor)
    }

    /// Regenerates the displayed shape from a typed descriptor.
    pub fn regenerate_descriptor(&mut self, descriptor: ShapeDescriptor) -> Result<(), ShapeError> {
        self.scene.regenerate(descriptor)?;
        tracing::info!(
            kind = %descriptor.kind(),
            vertices = self.scene.mesh().vertex_count(),
            "scene regenerated"
        );
        Ok(())
    }

    /// Draws unconditionally.
    pub fn draw_scene(&mut self) -> Result<(), RenderError> {
        self.renderer.draw_scene(&mut self.scene)
    }

    /// Draws only if something changed since the last draw.
    pub fn draw_scene_if(&mut self) -> Result<bool, RenderError> {
        self.renderer.draw_scene_if(&mut self.scene)
    }

    /// Generates a shape independently of the scene and returns OBJ text.
    pub fn export_shape(
        &self,
        shape_index: usize,
        scale: [f64; 3],
        args: &[f64],
    ) -> Result<String, ShapeError> {
        primitives_mesh::export_shape(shape_index, scale, args)
    }

    /// OBJ text for the shape currently displayed, regenerated from its
    /// descriptor rather than read from the scene.
    pub fn export_current(&self) -> Result<String, ShapeError> {
        export_descriptor(self.scene.descriptor())
    }

    /// Viewport resize. Marks the scene dirty if the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.scene.resize(width, height);
        if changed {
            tracing::debug!(width, height, "viewport resized");
        }
        changed
    }

    pub fn begin_drag(&mut self) {
        self.scene.begin_drag();
    }

    pub fn end_drag(&mut self) {
        self.scene.end_drag();
    }

    /// Pointer motion in pixels. Rotates the camera only during a drag.
    pub fn drag_by(&mut self, dx: f64, dy: f64) -> bool {
        self.scene.drag_by(dx, dy)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.renderer.surface_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;
    use primitives_mesh::ShapeKind;

    fn engine() -> Engine<HeadlessSurface> {
        Engine::with_defaults(HeadlessSurface::new()).unwrap()
    }

    #[test]
    fn test_initialize_uses_config_viewport() {
        let config = EngineConfig::new(320, 200, 0.5, 1e-9).unwrap();
        let engine = Engine::initialize(HeadlessSurface::new(), config).unwrap();
        assert_eq!(engine.scene().camera().viewport(), (320, 200));
        assert_eq!(engine.config(), &config);
        assert_eq!(engine.renderer().draw_count(), 0);
    }

    #[test]
    fn test_regenerate_then_conditional_draws() {
        let mut engine = engine();
        engine.draw_scene().unwrap();

        engine.regenerate(3, [1.0; 3], &[4.0]).unwrap();
        assert_eq!(engine.scene().kind(), ShapeKind::Sphere);
        assert!(engine.draw_scene_if().unwrap());
        assert!(!engine.draw_scene_if().unwrap());
        assert_eq!(engine.renderer().draw_count(), 2);
    }

    #[test]
    fn test_invalid_index_leaves_scene_untouched() {
        let mut engine = engine();
        engine.draw_scene().unwrap();
        let before = engine.scene().mesh().clone();

        let err = engine.regenerate(6, [1.0; 3], &[4.0]).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidShapeIndex { index: 6, .. }));
        assert_eq!(engine.scene().mesh(), &before);
        assert!(!engine.draw_scene_if().unwrap());
    }

    #[test]
    fn test_export_does_not_touch_scene() {
        let mut engine = engine();
        engine.draw_scene().unwrap();
        let text = engine.export_shape(2, [1.0; 3], &[1.0]).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 24);
        assert_eq!(engine.scene().kind(), ShapeKind::Plane);
        assert!(!engine.scene().is_dirty());
    }

    #[test]
    fn test_export_current_matches_displayed_shape() {
        let mut engine = engine();
        engine.regenerate(5, [1.0, 1.0, 2.0], &[8.0, 0.25, 0.75]).unwrap();
        let text = engine.export_current().unwrap();
        let vertices = text.lines().filter(|l| l.starts_with("v ")).count();
        assert_eq!(vertices, engine.scene().mesh().vertex_count());
    }

    #[test]
    fn test_resize_marks_dirty() {
        let mut engine = engine();
        engine.draw_scene().unwrap();
        assert!(engine.resize(1280, 720));
        assert!(engine.draw_scene_if().unwrap());
        assert_eq!(engine.surface().last_frame().unwrap().viewport, (1280, 720));
    }
}
