//! Surface that records frames instead of drawing them.
//!
//! Mostly used to assert draw counts in tests. Long-running hosts without
//! a graphics context should bound the record with
//! [`HeadlessSurface::with_history`].

use crate::error::RenderError;
use crate::renderer::{Frame, RenderSurface};

/// Summary of one recorded frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub viewport: (u32, u32),
    pub view: [f32; 16],
    pub clear_color: [f32; 4],
}

/// A [`RenderSurface`] that stores a [`FrameRecord`] per draw.
///
/// # Example
///
/// ```rust
/// use primitives_scene::{Engine, HeadlessSurface};
///
/// let mut engine = Engine::with_defaults(HeadlessSurface::new()).unwrap();
/// engine.draw_scene_if().unwrap();
/// engine.draw_scene_if().unwrap();
/// assert_eq!(engine.surface().frames().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    frames: Vec<FrameRecord>,
    history: Option<usize>,
    pending_failure: Option<String>,
}

impl HeadlessSurface {
    /// Records every frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the newest `limit` frames.
    pub fn with_history(limit: usize) -> Self {
        Self {
            history: Some(limit),
            ..Self::default()
        }
    }

    /// Recorded frames, oldest first.
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }

    /// Makes the next draw fail with `message`.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.pending_failure = Some(message.into());
    }
}

impl RenderSurface for HeadlessSurface {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        if let Some(message) = self.pending_failure.take() {
            return Err(RenderError::surface(message));
        }
        self.frames.push(FrameRecord {
            vertex_count: frame.mesh.vertex_count(),
            triangle_count: frame.mesh.triangle_count(),
            viewport: frame.viewport,
            view: frame.view_f32(),
            clear_color: frame.clear_color,
        });
        if let Some(limit) = self.history {
            let excess = self.frames.len().saturating_sub(limit);
            self.frames.drain(..excess);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Renderer;
    use crate::scene::SceneState;
    use config::EngineConfig;

    #[test]
    fn test_history_keeps_newest_frames() {
        let mut scene = SceneState::new(&EngineConfig::default()).unwrap();
        let mut renderer = Renderer::new(HeadlessSurface::with_history(3));

        for _ in 0..10 {
            renderer.draw_scene(&mut scene).unwrap();
        }
        assert_eq!(renderer.draw_count(), 10);
        assert_eq!(renderer.surface().frames().len(), 3);
        assert!(renderer.surface().last_frame().is_some());
    }

    #[test]
    fn test_zero_history_records_nothing() {
        let mut scene = SceneState::new(&EngineConfig::default()).unwrap();
        let mut renderer = Renderer::new(HeadlessSurface::with_history(0));
        renderer.draw_scene(&mut scene).unwrap();
        assert!(renderer.surface().frames().is_empty());
        assert!(!scene.is_dirty());
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut scene = SceneState::new(&EngineConfig::default()).unwrap();
        let mut renderer = Renderer::new(HeadlessSurface::new());
        for _ in 0..50 {
            renderer.draw_scene(&mut scene).unwrap();
        }
        assert_eq!(renderer.surface().frames().len(), 50);
    }
}
