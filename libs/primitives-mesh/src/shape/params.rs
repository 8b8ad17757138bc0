//! Per-kind shape parameters and their validation.

use config::constants::{
    DEFAULT_INNER_RADIUS, DEFAULT_OUTER_RADIUS, DEFAULT_RADIUS, DEFAULT_SIDES,
    DEFAULT_SUBDIVISIONS, MAX_SIDES, MAX_SUBDIVISIONS, MIN_SIDES, MIN_SUBDIVISIONS,
};
use serde::{Deserialize, Serialize};

use super::{Scale, ShapeKind};
use crate::error::ShapeError;

/// Parameters of one primitive, tagged by kind.
///
/// | Kind     | Fields                               |
/// |----------|--------------------------------------|
/// | Plane    | subdivisions                         |
/// | Disk     | sides, radius                        |
/// | Cube     | subdivisions                         |
/// | Sphere   | subdivisions                         |
/// | Cylinder | sides, radius                        |
/// | Tube     | sides, inner_radius, outer_radius    |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeParameters {
    Plane {
        subdivisions: u32,
    },
    Disk {
        sides: u32,
        radius: f64,
    },
    Cube {
        subdivisions: u32,
    },
    Sphere {
        subdivisions: u32,
    },
    Cylinder {
        sides: u32,
        radius: f64,
    },
    #[serde(rename_all = "camelCase")]
    Tube {
        sides: u32,
        inner_radius: f64,
        outer_radius: f64,
    },
}

impl ShapeParameters {
    /// Returns the kind these parameters belong to.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParameters::Plane { .. } => ShapeKind::Plane,
            ShapeParameters::Disk { .. } => ShapeKind::Disk,
            ShapeParameters::Cube { .. } => ShapeKind::Cube,
            ShapeParameters::Sphere { .. } => ShapeKind::Sphere,
            ShapeParameters::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeParameters::Tube { .. } => ShapeKind::Tube,
        }
    }

    /// Startup parameters for `kind`.
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Plane => ShapeParameters::Plane {
                subdivisions: DEFAULT_SUBDIVISIONS,
            },
            ShapeKind::Disk => ShapeParameters::Disk {
                sides: DEFAULT_SIDES,
                radius: DEFAULT_RADIUS,
            },
            ShapeKind::Cube => ShapeParameters::Cube {
                subdivisions: DEFAULT_SUBDIVISIONS,
            },
            ShapeKind::Sphere => ShapeParameters::Sphere {
                subdivisions: DEFAULT_SUBDIVISIONS,
            },
            ShapeKind::Cylinder => ShapeParameters::Cylinder {
                sides: DEFAULT_SIDES,
                radius: DEFAULT_RADIUS,
            },
            ShapeKind::Tube => ShapeParameters::Tube {
                sides: DEFAULT_SIDES,
                inner_radius: DEFAULT_INNER_RADIUS,
                outer_radius: DEFAULT_OUTER_RADIUS,
            },
        }
    }

    /// Maps a positional argument list onto the fields of `kind`.
    ///
    /// Order: `[subdivisions]`, `[sides, radius]` or
    /// `[sides, innerRadius, outerRadius]`. Counts must be whole numbers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitives_mesh::{ShapeKind, ShapeParameters};
    ///
    /// let tube = ShapeParameters::from_args(ShapeKind::Tube, &[12.0, 0.5, 1.0]).unwrap();
    /// assert_eq!(tube.to_args(), vec![12.0, 0.5, 1.0]);
    ///
    /// assert!(ShapeParameters::from_args(ShapeKind::Tube, &[12.0, 5.0, 3.0]).is_err());
    /// ```
    pub fn from_args(kind: ShapeKind, args: &[f64]) -> Result<Self, ShapeError> {
        let expected = kind.parameter_names().len();
        if args.len() != expected {
            return Err(ShapeError::invalid_parameter(
                "arguments",
                args.len() as f64,
                format!("{kind} expects {expected} value(s)"),
            ));
        }

        let params = match kind {
            ShapeKind::Plane => ShapeParameters::Plane {
                subdivisions: subdivisions_arg(args[0])?,
            },
            ShapeKind::Cube => ShapeParameters::Cube {
                subdivisions: subdivisions_arg(args[0])?,
            },
            ShapeKind::Sphere => ShapeParameters::Sphere {
                subdivisions: subdivisions_arg(args[0])?,
            },
            ShapeKind::Disk => ShapeParameters::Disk {
                sides: sides_arg(args[0])?,
                radius: args[1],
            },
            ShapeKind::Cylinder => ShapeParameters::Cylinder {
                sides: sides_arg(args[0])?,
                radius: args[1],
            },
            ShapeKind::Tube => ShapeParameters::Tube {
                sides: sides_arg(args[0])?,
                inner_radius: args[1],
                outer_radius: args[2],
            },
        };

        params.validate()?;
        Ok(params)
    }

    /// Positional form of these parameters, the inverse of [`Self::from_args`].
    pub fn to_args(&self) -> Vec<f64> {
        match *self {
            ShapeParameters::Plane { subdivisions }
            | ShapeParameters::Cube { subdivisions }
            | ShapeParameters::Sphere { subdivisions } => vec![subdivisions as f64],
            ShapeParameters::Disk { sides, radius }
            | ShapeParameters::Cylinder { sides, radius } => vec![sides as f64, radius],
            ShapeParameters::Tube {
                sides,
                inner_radius,
                outer_radius,
            } => vec![sides as f64, inner_radius, outer_radius],
        }
    }

    /// Checks every per-kind constraint.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match *self {
            ShapeParameters::Plane { subdivisions }
            | ShapeParameters::Cube { subdivisions }
            | ShapeParameters::Sphere { subdivisions } => check_subdivisions(subdivisions),
            ShapeParameters::Disk { sides, radius }
            | ShapeParameters::Cylinder { sides, radius } => {
                check_sides(sides)?;
                check_radius("radius", radius)
            }
            ShapeParameters::Tube {
                sides,
                inner_radius,
                outer_radius,
            } => {
                check_sides(sides)?;
                check_radius("innerRadius", inner_radius)?;
                check_radius("outerRadius", outer_radius)?;
                if inner_radius >= outer_radius {
                    return Err(ShapeError::invalid_parameter(
                        "innerRadius",
                        inner_radius,
                        format!("must be smaller than outerRadius ({outer_radius})"),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Rejects radii whose scaled positions would overflow.
    ///
    /// Every other coordinate of the unscaled shapes lies within `[-1, 1]`,
    /// which stays finite under any valid [`Scale`].
    pub fn validate_scaled(&self, scale: &Scale) -> Result<(), ShapeError> {
        let factor = scale.max_abs();
        match *self {
            ShapeParameters::Disk { radius, .. } | ShapeParameters::Cylinder { radius, .. } => {
                check_scaled_radius("radius", radius, factor)
            }
            ShapeParameters::Tube { outer_radius, .. } => {
                check_scaled_radius("outerRadius", outer_radius, factor)
            }
            ShapeParameters::Plane { .. }
            | ShapeParameters::Cube { .. }
            | ShapeParameters::Sphere { .. } => Ok(()),
        }
    }
}

fn check_subdivisions(subdivisions: u32) -> Result<(), ShapeError> {
    check_count("subdivisions", subdivisions, MIN_SUBDIVISIONS, MAX_SUBDIVISIONS)
}

fn check_sides(sides: u32) -> Result<(), ShapeError> {
    check_count("sides", sides, MIN_SIDES, MAX_SIDES)
}

fn check_count(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ShapeError> {
    if value < min {
        return Err(ShapeError::invalid_parameter(
            field,
            value as f64,
            format!("must be at least {min}"),
        ));
    }
    if value > max {
        return Err(ShapeError::invalid_parameter(
            field,
            value as f64,
            format!("must be at most {max}"),
        ));
    }
    Ok(())
}

fn check_radius(field: &'static str, value: f64) -> Result<(), ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::invalid_parameter(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(ShapeError::invalid_parameter(field, value, "must be positive"));
    }
    Ok(())
}

fn check_scaled_radius(field: &'static str, value: f64, factor: f64) -> Result<(), ShapeError> {
    if !(value * factor).is_finite() {
        return Err(ShapeError::invalid_parameter(
            field,
            value,
            format!("overflows when scaled by {factor:e}"),
        ));
    }
    Ok(())
}

fn subdivisions_arg(value: f64) -> Result<u32, ShapeError> {
    count_arg("subdivisions", value, MAX_SUBDIVISIONS)
}

fn sides_arg(value: f64) -> Result<u32, ShapeError> {
    count_arg("sides", value, MAX_SIDES)
}

/// Converts a float argument into a count. Range checks beyond what is
/// needed for a lossless cast are left to [`ShapeParameters::validate`].
fn count_arg(field: &'static str, value: f64, max: u32) -> Result<u32, ShapeError> {
    if !value.is_finite() {
        return Err(ShapeError::invalid_parameter(field, value, "must be finite"));
    }
    if value.fract() != 0.0 {
        return Err(ShapeError::invalid_parameter(
            field,
            value,
            "must be a whole number",
        ));
    }
    if value < 0.0 {
        return Err(ShapeError::invalid_parameter(field, value, "must be positive"));
    }
    if value > max as f64 {
        return Err(ShapeError::invalid_parameter(
            field,
            value,
            format!("must be at most {max}"),
        ));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        for kind in ShapeKind::ALL {
            let params = ShapeParameters::default_for(kind);
            assert_eq!(params.kind(), kind);
            assert!(params.validate().is_ok(), "{kind} defaults must validate");
        }
    }

    #[test]
    fn test_disk_two_sides_rejected() {
        let err = ShapeParameters::from_args(ShapeKind::Disk, &[2.0, 1.0]).unwrap_err();
        assert_eq!(err.field(), Some("sides"));
    }

    #[test]
    fn test_tube_inner_not_smaller_rejected() {
        let err = ShapeParameters::from_args(ShapeKind::Tube, &[8.0, 5.0, 3.0]).unwrap_err();
        assert_eq!(err.field(), Some("innerRadius"));

        let err = ShapeParameters::from_args(ShapeKind::Tube, &[8.0, 3.0, 3.0]).unwrap_err();
        assert_eq!(err.field(), Some("innerRadius"));
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let err = ShapeParameters::from_args(ShapeKind::Cylinder, &[8.0, 0.0]).unwrap_err();
        assert_eq!(err.field(), Some("radius"));

        let err = ShapeParameters::from_args(ShapeKind::Disk, &[8.0, -1.0]).unwrap_err();
        assert_eq!(err.field(), Some("radius"));
    }

    #[test]
    fn test_non_integer_subdivisions_rejected() {
        let err = ShapeParameters::from_args(ShapeKind::Plane, &[2.5]).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::InvalidParameter {
                field: "subdivisions",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_subdivisions_rejected() {
        let err = ShapeParameters::from_args(ShapeKind::Sphere, &[0.0]).unwrap_err();
        assert_eq!(err.field(), Some("subdivisions"));
    }

    #[test]
    fn test_nan_and_infinite_rejected() {
        assert!(ShapeParameters::from_args(ShapeKind::Cube, &[f64::NAN]).is_err());
        assert!(ShapeParameters::from_args(ShapeKind::Disk, &[6.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_limits_enforced() {
        let too_many = (MAX_SUBDIVISIONS + 1) as f64;
        assert!(ShapeParameters::from_args(ShapeKind::Cube, &[too_many]).is_err());
        let too_many = (MAX_SIDES + 1) as f64;
        assert!(ShapeParameters::from_args(ShapeKind::Disk, &[too_many, 1.0]).is_err());
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = ShapeParameters::from_args(ShapeKind::Disk, &[6.0]).unwrap_err();
        assert_eq!(err.field(), Some("arguments"));
        assert!(err.to_string().contains("disk expects 2"));
    }

    #[test]
    fn test_scaled_radius_overflow_rejected() {
        let scale = Scale::new(10.0, 1.0, 1.0).unwrap();
        let disk = ShapeParameters::from_args(ShapeKind::Disk, &[6.0, 1e308]).unwrap();
        assert_eq!(disk.validate_scaled(&scale).unwrap_err().field(), Some("radius"));

        let tube = ShapeParameters::from_args(ShapeKind::Tube, &[6.0, 1.0, 1e308]).unwrap();
        assert_eq!(tube.validate_scaled(&scale).unwrap_err().field(), Some("outerRadius"));

        assert!(disk.validate_scaled(&Scale::IDENTITY).is_ok());
        let huge = Scale::new(1e308, 1e308, 1e308).unwrap();
        assert!(ShapeParameters::default_for(ShapeKind::Cube).validate_scaled(&huge).is_ok());
    }

    #[test]
    fn test_args_round_trip() {
        for kind in ShapeKind::ALL {
            let params = ShapeParameters::default_for(kind);
            assert_eq!(ShapeParameters::from_args(kind, &params.to_args()).unwrap(), params);
        }
    }
}
