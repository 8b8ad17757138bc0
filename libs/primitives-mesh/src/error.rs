//! # Shape Errors
//!
//! Error types for parameter validation and mesh generation.

use thiserror::Error;

/// Errors that can occur while validating parameters or generating a mesh.
///
/// Only [`ShapeError::InvalidShapeIndex`] and [`ShapeError::InvalidParameter`]
/// are expected from user input. [`ShapeError::DegenerateGeometry`] marks an
/// internal consistency fault in a generator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Shape selection index outside the known shape kinds
    #[error("Invalid shape index: {index} (expected 0..={max})")]
    InvalidShapeIndex { index: usize, max: usize },

    /// A parameter failed its per-kind constraint
    #[error("Invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: String,
    },

    /// A generated buffer violated a mesh invariant
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
}

impl ShapeError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Returns the offending field name for parameter errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}
