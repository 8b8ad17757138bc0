//! # Primitive Generators
//!
//! One pure generator per [`ShapeKind`], plus the dispatch that turns a
//! validated [`ShapeDescriptor`] into a finished [`MeshBuffer`].
//!
//! ## Generation Pipeline
//!
//! ```text
//! ShapeDescriptor → validate → generator → apply_scale → validate buffer → MeshBuffer
//! ```
//!
//! Generators assume validated input and cannot fail. The final buffer
//! check turns any internal inconsistency into
//! [`ShapeError::DegenerateGeometry`] instead of returning a corrupt mesh.

mod cube;
mod cylinder;
mod disk;
mod plane;
mod sphere;
mod tube;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
pub use disk::create_disk;
pub use plane::create_plane;
pub use sphere::create_sphere;
pub use tube::create_tube;

use config::constants::NORMAL_TOLERANCE;

use crate::error::ShapeError;
use crate::mesh::MeshBuffer;
use crate::shape::{ShapeDescriptor, ShapeKind, ShapeParameters};

/// Which side of a surface is the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    /// Normal along the positive axis (or away from the z axis for walls)
    Positive,
    /// Normal along the negative axis (or toward the z axis for walls)
    Negative,
}

impl Facing {
    pub(crate) fn sign(self) -> f64 {
        match self {
            Facing::Positive => 1.0,
            Facing::Negative => -1.0,
        }
    }
}

/// Generates the mesh for a shape descriptor.
///
/// # Errors
///
/// - [`ShapeError::InvalidParameter`] if the parameters or scale fail
///   validation. Nothing is generated in that case.
/// - [`ShapeError::DegenerateGeometry`] if the generated buffer is
///   inconsistent.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::{generate, Scale, ShapeDescriptor, ShapeParameters};
///
/// let desc = ShapeDescriptor::new(
///     ShapeParameters::Disk { sides: 6, radius: 2.0 },
///     Scale::IDENTITY,
/// ).unwrap();
/// let mesh = generate(&desc).unwrap();
/// assert_eq!(mesh.index_count(), 18);
/// ```
pub fn generate(desc: &ShapeDescriptor) -> Result<MeshBuffer, ShapeError> {
    generate_with_tolerance(desc, NORMAL_TOLERANCE)
}

/// Like [`generate`], with an explicit unit-normal tolerance for the final
/// buffer check.
pub fn generate_with_tolerance(
    desc: &ShapeDescriptor,
    tolerance: f64,
) -> Result<MeshBuffer, ShapeError> {
    if let Err(err) = desc.validate() {
        tracing::warn!(kind = %desc.kind(), error = %err, "rejected shape parameters");
        return Err(err);
    }

    let mut mesh = match desc.params {
        ShapeParameters::Plane { subdivisions } => create_plane(subdivisions),
        ShapeParameters::Disk { sides, radius } => create_disk(sides, radius),
        ShapeParameters::Cube { subdivisions } => create_cube(subdivisions),
        ShapeParameters::Sphere { subdivisions } => create_sphere(subdivisions),
        ShapeParameters::Cylinder { sides, radius } => create_cylinder(sides, radius),
        ShapeParameters::Tube {
            sides,
            inner_radius,
            outer_radius,
        } => create_tube(sides, inner_radius, outer_radius),
    };
    mesh.apply_scale(&desc.scale);

    if let Err(err) = mesh.validate_with_tolerance(tolerance) {
        tracing::error!(kind = %desc.kind(), error = %err, "generator produced an invalid buffer");
        return Err(err);
    }

    tracing::debug!(
        kind = %desc.kind(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated mesh"
    );
    Ok(mesh)
}

/// Generates a shape from the loosely-typed form used at the UI boundary.
///
/// `args` are the positional parameters listed by
/// [`ShapeKind::parameter_names`].
///
/// # Errors
///
/// [`ShapeError::InvalidShapeIndex`] for an index outside the catalogue,
/// otherwise as [`generate`].
pub fn generate_from_raw(
    shape_index: usize,
    scale: [f64; 3],
    args: &[f64],
) -> Result<MeshBuffer, ShapeError> {
    let desc = ShapeDescriptor::from_raw(shape_index, scale, args)?;
    generate(&desc)
}

/// Generates every shape in its default configuration, in catalogue order.
pub fn generate_defaults() -> Result<Vec<MeshBuffer>, ShapeError> {
    ShapeKind::ALL
        .iter()
        .map(|&kind| generate(&ShapeDescriptor::default_for(kind)))
        .collect()
}
