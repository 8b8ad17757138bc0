//! # Renderer
//!
//! Hands the scene to a [`RenderSurface`] and keeps the dirty flag in step
//! with what was actually drawn.

use config::constants::{triangle_shade, CLEAR_COLOR};
use glam::DMat4;
use primitives_mesh::MeshBuffer;

use crate::error::RenderError;
use crate::scene::SceneState;

/// Everything a surface needs to draw one frame. Borrowed from the scene
/// for the duration of the draw call.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub mesh: &'a MeshBuffer,
    pub view: DMat4,
    pub projection: DMat4,
    /// Viewport size in pixels
    pub viewport: (u32, u32),
    /// RGBA the surface clears to before drawing the mesh
    pub clear_color: [f32; 4],
}

impl<'a> Frame<'a> {
    /// Captures the current mesh and camera of `scene`.
    pub fn from_scene(scene: &'a SceneState) -> Self {
        let camera = scene.camera();
        Self {
            mesh: scene.mesh(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            viewport: camera.viewport(),
            clear_color: CLEAR_COLOR,
        }
    }

    /// Flat shade of triangle `index`; neighbouring pairs alternate between
    /// light and dark gray.
    pub fn triangle_shade(&self, index: usize) -> [f32; 3] {
        triangle_shade(index)
    }

    /// RGB shades of every triangle as `[r, g, b, r, g, b, ...]`.
    pub fn triangle_shades_f32(&self) -> Vec<f32> {
        (0..self.mesh.triangle_count())
            .flat_map(triangle_shade)
            .collect()
    }

    /// View matrix in column-major f32 order.
    pub fn view_f32(&self) -> [f32; 16] {
        self.view.as_mat4().to_cols_array()
    }

    /// Projection matrix in column-major f32 order.
    pub fn projection_f32(&self) -> [f32; 16] {
        self.projection.as_mat4().to_cols_array()
    }
}

/// A target that can draw a frame: a GPU context, a JS callback, or a
/// recorder in tests.
pub trait RenderSurface {
    /// Draws `frame`. An error leaves the scene marked dirty.
    fn draw(&mut self, frame: &Frame<'_>) -> Result<(), RenderError>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        (**self).draw(frame)
    }
}

/// Draws a [`SceneState`] onto a surface it owns.
#[derive(Debug)]
pub struct Renderer<S> {
    surface: S,
    draw_count: u64,
}

impl<S: RenderSurface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            draw_count: 0,
        }
    }

    /// Draws unconditionally, then clears the dirty flag.
    ///
    /// If the surface fails the flag stays set so the next conditional draw
    /// retries.
    pub fn draw_scene(&mut self, scene: &mut SceneState) -> Result<(), RenderError> {
        let frame = Frame::from_scene(scene);
        if let Err(err) = self.surface.draw(&frame) {
            tracing::warn!(error = %err, "draw failed");
            return Err(err);
        }
        self.draw_count += 1;
        scene.mark_clean();
        Ok(())
    }

    /// Draws only if the scene is dirty. Returns whether a draw happened.
    pub fn draw_scene_if(&mut self, scene: &mut SceneState) -> Result<bool, RenderError> {
        if !scene.is_dirty() {
            return Ok(false);
        }
        self.draw_scene(scene)?;
        Ok(true)
    }

    /// Number of successful draws so far.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
