//! # Tube Primitive
//!
//! Generates a hollow cylinder: outer wall, inner wall and an annular cap
//! at each end.

use std::f64::consts::TAU;

use glam::DVec3;

use super::cylinder::ring_wall;
use super::Facing;
use crate::mesh::MeshBuffer;

/// Creates a tube spanning z ∈ [-1, 1] between `inner_radius` and
/// `outer_radius`.
///
/// # Arguments
///
/// * `sides` - Number of segments around the circumference (>= 3)
/// * `inner_radius` - Radius of the hole (> 0)
/// * `outer_radius` - Radius of the outside wall (> `inner_radius`)
///
/// # Returns
///
/// A mesh with `8 * sides` vertices and `8 * sides` triangles, in the
/// order outer wall, inner wall, top cap, bottom cap. The inner wall faces
/// the axis, so its normals point inward and its triangles wind opposite
/// to the outer wall's.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::primitives::create_tube;
///
/// let mesh = create_tube(16, 0.5, 1.0);
/// assert_eq!(mesh.vertex_count(), 128);
/// assert_eq!(mesh.triangle_count(), 128);
/// ```
pub fn create_tube(sides: u32, inner_radius: f64, outer_radius: f64) -> MeshBuffer {
    let mut mesh = ring_wall(sides, outer_radius, Facing::Positive);
    mesh.merge(&ring_wall(sides, inner_radius, Facing::Negative));
    mesh.merge(&annulus(sides, inner_radius, outer_radius, 1.0, Facing::Positive));
    mesh.merge(&annulus(sides, inner_radius, outer_radius, -1.0, Facing::Negative));
    mesh
}

/// Flat ring at height `z` between the two radii.
///
/// Vertices alternate inner/outer per angle (`2i` inner, `2i + 1` outer).
fn annulus(sides: u32, inner_radius: f64, outer_radius: f64, z: f64, facing: Facing) -> MeshBuffer {
    let normal = DVec3::Z * facing.sign();
    let mut mesh = MeshBuffer::with_capacity(2 * sides as usize, 2 * sides as usize);

    for i in 0..sides {
        let theta = TAU * i as f64 / sides as f64;
        let (sin, cos) = theta.sin_cos();
        mesh.add_vertex(DVec3::new(inner_radius * cos, inner_radius * sin, z), normal);
        mesh.add_vertex(DVec3::new(outer_radius * cos, outer_radius * sin, z), normal);
    }

    for i in 0..sides {
        let j = (i + 1) % sides;
        let (inner_i, outer_i) = (2 * i, 2 * i + 1);
        let (inner_j, outer_j) = (2 * j, 2 * j + 1);

        match facing {
            Facing::Positive => {
                mesh.add_triangle(inner_i, outer_i, outer_j);
                mesh.add_triangle(inner_i, outer_j, inner_j);
            }
            Facing::Negative => {
                mesh.add_triangle(inner_i, outer_j, outer_i);
                mesh.add_triangle(inner_i, inner_j, outer_j);
            }
        }
    }

    mesh
}
