//! Tests for the engine configuration snapshot.

use super::*;

/// Ensures default settings are sane and positive.
#[test]
fn default_config_is_valid() {
    let cfg = EngineConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.drag_sensitivity > 0.0);
    assert!(cfg.viewport_width > 0 && cfg.viewport_height > 0);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        EngineConfig::new(0, 600, 0.25, 1.0e-9).unwrap_err(),
        ConfigError::InvalidViewport {
            width: 0,
            height: 600
        }
    );
    assert_eq!(
        EngineConfig::new(800, 600, -1.0, 1.0e-9).unwrap_err(),
        ConfigError::InvalidSensitivity(-1.0)
    );
    assert_eq!(
        EngineConfig::new(800, 600, 0.25, 0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
}

#[test]
fn new_rejects_nan_sensitivity() {
    assert!(EngineConfig::new(800, 600, f64::NAN, 1.0e-9).is_err());
}

#[test]
fn error_messages_name_the_value() {
    let message = ConfigError::InvalidTolerance(-2.0).to_string();
    assert!(message.contains("-2"));
}
