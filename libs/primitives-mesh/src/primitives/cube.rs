//! # Cube Primitive
//!
//! Generates a subdivided cube as six independent grid faces.

use glam::DVec3;

use super::plane::{add_grid_face, grid_triangles, GridFace};
use crate::mesh::MeshBuffer;

/// The six faces of the [-1, 1]^3 cube, in generation order
/// (+x, -x, +y, -y, +z, -z). Each `u x v` equals the outward normal.
pub(crate) const CUBE_FACES: [GridFace; 6] = [
    face(DVec3::X, DVec3::Y, DVec3::Z),
    face(DVec3::NEG_X, DVec3::Z, DVec3::Y),
    face(DVec3::Y, DVec3::Z, DVec3::X),
    face(DVec3::NEG_Y, DVec3::X, DVec3::Z),
    face(DVec3::Z, DVec3::X, DVec3::Y),
    face(DVec3::NEG_Z, DVec3::Y, DVec3::X),
];

const fn face(normal: DVec3, u_axis: DVec3, v_axis: DVec3) -> GridFace {
    GridFace {
        center: normal,
        normal,
        u_axis,
        v_axis,
    }
}

/// Creates a cube spanning [-1, 1]^3.
///
/// Faces share no vertices, so every face keeps its own flat normal and the
/// edges stay hard.
///
/// # Arguments
///
/// * `subdivisions` - Number of quads along each face edge (>= 1)
///
/// # Returns
///
/// A mesh with `6 * (n + 1)^2` vertices and `12 * n^2` triangles.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::primitives::create_cube;
///
/// let mesh = create_cube(1);
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(subdivisions: u32) -> MeshBuffer {
    let per_edge = (subdivisions + 1) as usize;
    let mut mesh =
        MeshBuffer::with_capacity(6 * per_edge * per_edge, 6 * grid_triangles(subdivisions));

    for face in CUBE_FACES {
        add_grid_face(&mut mesh, face, subdivisions, |p| (p, face.normal));
    }

    mesh
}
