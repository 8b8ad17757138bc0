//! Engine-wide settings shared between the scene and wasm crates.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates stay declarative.

use std::fmt;

use crate::constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DRAG_SENSITIVITY, NORMAL_TOLERANCE,
};

/// Immutable snapshot of engine settings handed to the scene at startup.
///
/// # Examples
/// ```
/// use config::EngineConfig;
/// let config = EngineConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert!(config.viewport_width > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Initial viewport width in pixels.
    pub viewport_width: u32,
    /// Initial viewport height in pixels.
    pub viewport_height: u32,
    /// Fraction of a full turn applied when dragging across the viewport.
    pub drag_sensitivity: f64,
    /// Tolerance used when verifying generated normals.
    pub tolerance: f64,
}

impl EngineConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::EngineConfig;
    /// let cfg = EngineConfig::new(1024, 768, 0.5, 1.0e-9).expect("valid config");
    /// assert_eq!(cfg.viewport_width, 1024);
    /// ```
    pub fn new(
        viewport_width: u32,
        viewport_height: u32,
        drag_sensitivity: f64,
        tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if viewport_width == 0 || viewport_height == 0 {
            return Err(ConfigError::InvalidViewport {
                width: viewport_width,
                height: viewport_height,
            });
        }
        if !drag_sensitivity.is_finite() || drag_sensitivity <= 0.0 {
            return Err(ConfigError::InvalidSensitivity(drag_sensitivity));
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            viewport_width,
            viewport_height,
            drag_sensitivity,
            tolerance,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            drag_sensitivity: DRAG_SENSITIVITY,
            tolerance: NORMAL_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when either viewport extent is zero.
    InvalidViewport { width: u32, height: u32 },
    /// Raised when the drag sensitivity is not a positive finite number.
    InvalidSensitivity(f64),
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidViewport { width, height } => {
                write!(f, "viewport must be non-empty: {width}x{height}")
            }
            ConfigError::InvalidSensitivity(value) => {
                write!(f, "drag sensitivity must be positive: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
