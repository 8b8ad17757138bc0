//! # Cylinder Primitive
//!
//! Generates a closed cylinder along the z axis: a lateral wall plus two
//! disk end-caps.

use std::f64::consts::TAU;

use glam::DVec3;

use super::disk::disk_fan;
use super::Facing;
use crate::mesh::MeshBuffer;

/// Creates a closed cylinder of `radius` spanning z ∈ [-1, 1].
///
/// # Arguments
///
/// * `sides` - Number of segments around the circumference (>= 3)
/// * `radius` - Distance of the wall from the z axis (> 0)
///
/// # Returns
///
/// A mesh with `4 * sides + 2` vertices and `4 * sides` triangles. Wall
/// vertices carry radial normals, cap vertices carry ±z, so rim positions
/// appear twice.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(8, 1.0);
/// assert_eq!(mesh.vertex_count(), 34);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn create_cylinder(sides: u32, radius: f64) -> MeshBuffer {
    let mut mesh = ring_wall(sides, radius, Facing::Positive);
    mesh.merge(&disk_fan(sides, radius, 1.0, Facing::Positive));
    mesh.merge(&disk_fan(sides, radius, -1.0, Facing::Negative));
    mesh
}

/// Open wall of `radius` from z = -1 to z = 1.
///
/// Vertices alternate bottom/top per angle (`2i` at z = -1, `2i + 1` at
/// z = 1). A `Negative` wall faces the axis: normals point inward and every
/// triangle is wound the other way.
pub(crate) fn ring_wall(sides: u32, radius: f64, facing: Facing) -> MeshBuffer {
    let mut mesh = MeshBuffer::with_capacity(2 * sides as usize, 2 * sides as usize);

    for i in 0..sides {
        let theta = TAU * i as f64 / sides as f64;
        let (sin, cos) = theta.sin_cos();
        let normal = DVec3::new(cos, sin, 0.0) * facing.sign();
        mesh.add_vertex(DVec3::new(radius * cos, radius * sin, -1.0), normal);
        mesh.add_vertex(DVec3::new(radius * cos, radius * sin, 1.0), normal);
    }

    for i in 0..sides {
        let j = (i + 1) % sides;
        let (bottom_i, top_i) = (2 * i, 2 * i + 1);
        let (bottom_j, top_j) = (2 * j, 2 * j + 1);

        match facing {
            Facing::Positive => {
                mesh.add_triangle(bottom_i, bottom_j, top_j);
                mesh.add_triangle(bottom_i, top_j, top_i);
            }
            Facing::Negative => {
                mesh.add_triangle(bottom_i, top_j, bottom_j);
                mesh.add_triangle(bottom_i, top_i, top_j);
            }
        }
    }

    mesh
}
