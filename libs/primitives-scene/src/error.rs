//! # Scene Errors
//!
//! Error types for drawing and for the engine facade.

use config::ConfigError;
use primitives_mesh::ShapeError;
use thiserror::Error;

/// Errors reported by a rendering surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The surface rejected or failed a draw
    #[error("Surface error: {message}")]
    Surface { message: String },
}

impl RenderError {
    /// Creates a surface error.
    pub fn surface(message: impl Into<String>) -> Self {
        Self::Surface {
            message: message.into(),
        }
    }
}

/// Any failure surfaced by [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Engine settings were rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Shape selection, parameters or generation failed
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Drawing failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_error_display() {
        let err = RenderError::surface("context lost");
        assert_eq!(err.to_string(), "Surface error: context lost");
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let err: EngineError = ShapeError::InvalidShapeIndex { index: 6, max: 5 }.into();
        assert_eq!(err.to_string(), "Invalid shape index: 6 (expected 0..=5)");

        let err: EngineError = RenderError::surface("lost").into();
        assert!(matches!(err, EngineError::Render(_)));
    }
}
