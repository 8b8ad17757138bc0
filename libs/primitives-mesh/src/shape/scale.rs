//! Per-axis scale applied as the final generation step.

use config::constants::MAX_SCALE_SPREAD;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Per-axis scale factors.
///
/// Components must be finite and non-zero, and no further apart than
/// [`MAX_SCALE_SPREAD`]. Negative components mirror the shape; generators
/// compensate by flipping triangle winding.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::Scale;
///
/// let scale = Scale::new(2.0, 1.0, 0.5).unwrap();
/// assert!(!scale.is_identity());
/// assert!(Scale::new(0.0, 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Scale {
    /// The identity scale (1, 1, 1).
    pub const IDENTITY: Scale = Scale {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// Creates a validated scale.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, ShapeError> {
        let scale = Self { x, y, z };
        scale.validate()?;
        Ok(scale)
    }

    fn components(&self) -> [(&'static str, f64); 3] {
        [("scale.x", self.x), ("scale.y", self.y), ("scale.z", self.z)]
    }

    /// Rejects zero or non-finite components, and components too far apart
    /// for the normal transform to stay finite.
    pub fn validate(&self) -> Result<(), ShapeError> {
        for (field, value) in self.components() {
            if !value.is_finite() {
                return Err(ShapeError::invalid_parameter(field, value, "must be finite"));
            }
            if value == 0.0 {
                return Err(ShapeError::invalid_parameter(field, value, "must be non-zero"));
            }
        }

        let largest = self.max_abs();
        for (field, value) in self.components() {
            let spread = largest / value.abs();
            if spread > MAX_SCALE_SPREAD {
                return Err(ShapeError::invalid_parameter(
                    field,
                    value,
                    format!(
                        "must be within a factor of {MAX_SCALE_SPREAD:e} of the largest component"
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Returns the factors as a vector.
    #[inline]
    pub fn as_vec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Returns true if every factor is exactly one.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Largest factor magnitude.
    #[inline]
    pub fn max_abs(&self) -> f64 {
        self.as_vec3().abs().max_element()
    }

    /// True when an odd number of factors is negative.
    ///
    /// Decided from the signs alone; the product of the factors can
    /// underflow to zero for tiny but valid scales.
    pub fn is_mirroring(&self) -> bool {
        (self.x < 0.0) ^ (self.y < 0.0) ^ (self.z < 0.0)
    }

    /// Carries a unit normal through the scale.
    ///
    /// Equivalent to the normalized inverse-transpose of the diagonal scale
    /// matrix applied to `normal`. The factors are taken relative to the
    /// largest one and the result is rescaled before normalizing, so the
    /// absolute magnitude of the scale never overflows or underflows.
    pub fn transform_normal(&self, normal: DVec3) -> DVec3 {
        let relative = self.as_vec3() / self.max_abs();
        let direction = normal / relative;
        (direction / direction.abs().max_element()).normalize()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_default() {
        assert!(Scale::default().is_identity());
        assert!(!Scale::IDENTITY.is_mirroring());
    }

    #[test]
    fn test_rejects_zero_component() {
        let err = Scale::new(1.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("scale.y"));
    }

    #[test]
    fn test_rejects_non_finite_component() {
        assert_eq!(
            Scale::new(1.0, 1.0, f64::NAN).unwrap_err().field(),
            Some("scale.z")
        );
        assert!(Scale::new(f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_components_too_far_apart() {
        let err = Scale::new(1e200, 1e-200, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("scale.y"));

        // Subnormal next to one overflows the ratio itself
        let err = Scale::new(1.0, 1.0, 1e-310).unwrap_err();
        assert_eq!(err.field(), Some("scale.z"));
    }

    #[test]
    fn test_extreme_uniform_scales_accepted() {
        for factor in [1e-300, 1e-110, 1e110, 1e300, -1e200] {
            assert!(Scale::new(factor, factor, factor).is_ok(), "{factor}");
        }
    }

    #[test]
    fn test_negative_allowed() {
        let scale = Scale::new(-1.0, 1.0, 1.0).unwrap();
        assert!(scale.is_mirroring());
        assert!(!Scale::new(-1.0, -1.0, 1.0).unwrap().is_mirroring());
    }

    #[test]
    fn test_mirroring_survives_underflowing_product() {
        let scale = Scale::new(-1e-110, 1e-110, 1e-110).unwrap();
        assert_eq!(scale.x * scale.y * scale.z, 0.0);
        assert!(scale.is_mirroring());
    }

    #[test]
    fn test_transform_normal_matches_inverse_transpose() {
        let scale = Scale::new(2.0, 4.0, 0.5).unwrap();
        let n = DVec3::new(1.0, 1.0, 1.0).normalize();
        let expected = (n / DVec3::new(2.0, 4.0, 0.5)).normalize();
        let actual = scale.transform_normal(n);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_normal_independent_of_magnitude() {
        let n = DVec3::new(0.0, 0.6, 0.8);
        for factor in [1e-200, 1e-110, 1.0, 1e110, 1e200] {
            let scaled = Scale::new(factor, factor, factor).unwrap().transform_normal(n);
            assert!(scaled.abs_diff_eq(n, 1e-12), "{factor}: {scaled}");
        }
    }
}
