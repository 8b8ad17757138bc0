//! # Shape Model
//!
//! Typed, validated description of the shape to generate: which primitive
//! ([`ShapeKind`]), its per-kind parameters ([`ShapeParameters`]) and the
//! scale applied as the last generation step ([`Scale`]).
//!
//! Loosely typed positional input (a selection index plus a list of floats)
//! is converted once, through [`ShapeDescriptor::from_raw`], and rejected if
//! any value is out of range.

mod params;
mod scale;

pub use params::ShapeParameters;
pub use scale::Scale;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// The closed set of primitive shapes.
///
/// The declaration order is the selection index used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Plane,
    Disk,
    Cube,
    Sphere,
    Cylinder,
    Tube,
}

impl ShapeKind {
    /// Every kind, in selection-index order.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Plane,
        ShapeKind::Disk,
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Tube,
    ];

    /// Maps a selection index to a kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use primitives_mesh::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(1).unwrap(), ShapeKind::Disk);
    /// assert!(ShapeKind::from_index(6).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self, ShapeError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ShapeError::InvalidShapeIndex {
                index,
                max: Self::ALL.len() - 1,
            })
    }

    /// Returns the selection index of this kind.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Disk => "disk",
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Tube => "tube",
        }
    }

    /// Names of the positional parameters this kind expects, in order.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Plane | ShapeKind::Cube | ShapeKind::Sphere => &["subdivisions"],
            ShapeKind::Disk | ShapeKind::Cylinder => &["sides", "radius"],
            ShapeKind::Tube => &["sides", "innerRadius", "outerRadius"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully validated request: parameters plus the scale to apply.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::{ShapeDescriptor, ShapeKind};
///
/// let shape = ShapeDescriptor::from_raw(1, [1.0, 1.0, 1.0], &[6.0, 2.0]).unwrap();
/// assert_eq!(shape.kind(), ShapeKind::Disk);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub params: ShapeParameters,
    pub scale: Scale,
}

impl ShapeDescriptor {
    /// Creates a descriptor after validating both parts.
    pub fn new(params: ShapeParameters, scale: Scale) -> Result<Self, ShapeError> {
        let descriptor = Self { params, scale };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Builds a descriptor from a selection index, a raw scale and the
    /// positional parameter list of the selected kind.
    pub fn from_raw(shape_index: usize, scale: [f64; 3], args: &[f64]) -> Result<Self, ShapeError> {
        let kind = ShapeKind::from_index(shape_index)?;
        let scale = Scale::new(scale[0], scale[1], scale[2])?;
        let params = ShapeParameters::from_args(kind, args)?;
        params.validate_scaled(&scale)?;
        Ok(Self { params, scale })
    }

    /// Default parameters of `kind` with an identity scale.
    pub fn default_for(kind: ShapeKind) -> Self {
        Self {
            params: ShapeParameters::default_for(kind),
            scale: Scale::IDENTITY,
        }
    }

    /// Returns the shape kind.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.params.kind()
    }

    /// Re-checks every constraint. Public fields can be edited after
    /// construction, so callers that generate from a descriptor run this first.
    pub fn validate(&self) -> Result<(), ShapeError> {
        self.scale.validate()?;
        self.params.validate()?;
        self.params.validate_scaled(&self.scale)
    }
}

impl Default for ShapeDescriptor {
    fn default() -> Self {
        let kind = ShapeKind::ALL[config::constants::DEFAULT_SHAPE_INDEX];
        Self::default_for(kind)
    }
}
