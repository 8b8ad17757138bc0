//! # Disk Primitive
//!
//! Generates a flat polygonal disk as a triangle fan. The same fan builds
//! the cylinder end-caps.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};

use super::Facing;
use crate::mesh::MeshBuffer;

/// Creates a disk of `radius` in the z = 0 plane, facing +z.
///
/// # Arguments
///
/// * `sides` - Number of rim vertices (>= 3)
/// * `radius` - Rim distance from the center (> 0)
///
/// # Returns
///
/// A mesh with `sides + 1` vertices (center first) and `sides` triangles.
/// All normals are (0, 0, 1).
///
/// # Example
///
/// ```rust
/// use primitives_mesh::primitives::create_disk;
///
/// let mesh = create_disk(6, 2.0);
/// assert_eq!(mesh.vertex_count(), 7);
/// assert_eq!(mesh.triangle_count(), 6);
/// ```
pub fn create_disk(sides: u32, radius: f64) -> MeshBuffer {
    disk_fan(sides, radius, 0.0, Facing::Positive)
}

/// Triangle fan at height `z` whose flat normal is `facing` along z.
///
/// Rim vertex `i` sits at angle `2πi / sides`. UVs map the disk onto the
/// unit square with the center at (0.5, 0.5).
pub(crate) fn disk_fan(sides: u32, radius: f64, z: f64, facing: Facing) -> MeshBuffer {
    let normal = DVec3::Z * facing.sign();
    let mut mesh = MeshBuffer::with_capacity(sides as usize + 1, sides as usize);

    let center = mesh.add_vertex_uv(DVec3::new(0.0, 0.0, z), normal, DVec2::splat(0.5));

    for i in 0..sides {
        let theta = TAU * i as f64 / sides as f64;
        let (sin, cos) = theta.sin_cos();
        mesh.add_vertex_uv(
            DVec3::new(radius * cos, radius * sin, z),
            normal,
            DVec2::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin),
        );
    }

    for i in 0..sides {
        let current = center + 1 + i;
        let next = center + 1 + (i + 1) % sides;
        match facing {
            Facing::Positive => mesh.add_triangle(center, current, next),
            Facing::Negative => mesh.add_triangle(center, next, current),
        }
    }

    mesh
}
