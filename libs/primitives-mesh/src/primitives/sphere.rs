//! # Sphere Primitive
//!
//! Generates a unit sphere by projecting the subdivided cube onto it.

use super::cube::CUBE_FACES;
use super::plane::{add_grid_face, grid_triangles};
use crate::mesh::MeshBuffer;

/// Creates a unit sphere centered at the origin.
///
/// # Arguments
///
/// * `subdivisions` - Number of quads along each edge of the underlying
///   cube face (>= 1)
///
/// # Returns
///
/// A mesh with the same topology as [`super::create_cube`], where every
/// position is normalized to unit length and every normal equals its
/// position.
///
/// # Algorithm
///
/// Spherified cube: each grid point `p` of the six cube faces is replaced
/// by `p / |p|`. Compared to a latitude/longitude grid there are no pole
/// singularities and the triangles stay close to uniform in size.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(4);
/// for p in mesh.positions() {
///     assert!((p.length() - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn create_sphere(subdivisions: u32) -> MeshBuffer {
    let per_edge = (subdivisions + 1) as usize;
    let mut mesh =
        MeshBuffer::with_capacity(6 * per_edge * per_edge, 6 * grid_triangles(subdivisions));

    for face in CUBE_FACES {
        add_grid_face(&mut mesh, face, subdivisions, |p| {
            let direction = p.normalize();
            (direction, direction)
        });
    }

    mesh
}
