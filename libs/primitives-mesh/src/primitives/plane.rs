//! # Plane Primitive
//!
//! Generates a subdivided square in the z = 0 plane, and the grid face
//! builder shared with the cube and sphere.

use glam::{DVec2, DVec3};

use crate::mesh::MeshBuffer;

/// Creates a plane spanning [-1, 1] x [-1, 1] at z = 0, facing +z.
///
/// # Arguments
///
/// * `subdivisions` - Number of quads along each edge (>= 1)
///
/// # Returns
///
/// A mesh with `(n + 1)^2` vertices and `2 * n^2` triangles, constant
/// normal (0, 0, 1) and UVs linear in [0, 1]^2.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::primitives::create_plane;
///
/// let mesh = create_plane(2);
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn create_plane(subdivisions: u32) -> MeshBuffer {
    let per_edge = (subdivisions + 1) as usize;
    let mut mesh = MeshBuffer::with_capacity(per_edge * per_edge, grid_triangles(subdivisions));
    add_grid_face(
        &mut mesh,
        GridFace {
            center: DVec3::ZERO,
            normal: DVec3::Z,
            u_axis: DVec3::X,
            v_axis: DVec3::Y,
        },
        subdivisions,
        |p| (p, DVec3::Z),
    );
    mesh
}

/// Number of triangles in one `subdivisions x subdivisions` grid face.
pub(crate) fn grid_triangles(subdivisions: u32) -> usize {
    let n = subdivisions as usize;
    n * n * 2
}

/// Orientation of one square grid face. `u_axis x v_axis` must equal
/// `normal` so that the emitted triangles wind counter-clockwise around it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridFace {
    pub center: DVec3,
    pub normal: DVec3,
    pub u_axis: DVec3,
    pub v_axis: DVec3,
}

/// Appends an `(n + 1) x (n + 1)` vertex grid spanning `center ± u ± v`.
///
/// `project` maps each flat grid point to its final position and normal,
/// which lets the sphere reuse the cube's faces.
pub(crate) fn add_grid_face<F>(mesh: &mut MeshBuffer, face: GridFace, subdivisions: u32, project: F)
where
    F: Fn(DVec3) -> (DVec3, DVec3),
{
    debug_assert!(
        face.u_axis.cross(face.v_axis).abs_diff_eq(face.normal, 1e-12),
        "grid face axes must be right-handed around the normal"
    );

    let n = subdivisions;
    let first = mesh.vertex_count() as u32;

    for row in 0..=n {
        let t = row as f64 / n as f64;
        for col in 0..=n {
            let s = col as f64 / n as f64;
            let flat = face.center + face.u_axis * (2.0 * s - 1.0) + face.v_axis * (2.0 * t - 1.0);
            let (position, normal) = project(flat);
            mesh.add_vertex_uv(position, normal, DVec2::new(s, t));
        }
    }

    let stride = n + 1;
    for row in 0..n {
        for col in 0..n {
            let v00 = first + row * stride + col;
            let v10 = v00 + 1;
            let v01 = v00 + stride;
            let v11 = v01 + 1;

            // Two triangles per quad
            mesh.add_triangle(v00, v10, v11);
            mesh.add_triangle(v00, v11, v01);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_counts() {
        for n in 1..=5 {
            let mesh = create_plane(n);
            assert_eq!(mesh.vertex_count(), ((n + 1) * (n + 1)) as usize);
            assert_eq!(mesh.triangle_count(), grid_triangles(n));
        }
    }

    #[test]
    fn test_plane_bounds() {
        let mesh = create_plane(3);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -1.0, 0.0));
        assert_eq!(max, DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_plane_normals_and_winding() {
        let mesh = create_plane(2);
        assert!(mesh.normals().iter().all(|n| *n == DVec3::Z));
        for i in 0..mesh.triangle_count() {
            assert!(mesh.face_normal(i).z > 0.0, "triangle {i} faces away");
        }
    }

    #[test]
    fn test_plane_uvs_cover_unit_square() {
        let mesh = create_plane(4);
        let uvs = mesh.uvs().unwrap();
        assert_eq!(uvs.len(), mesh.vertex_count());
        assert_eq!(uvs[0], DVec2::ZERO);
        assert_eq!(uvs[uvs.len() - 1], DVec2::ONE);
    }

    #[test]
    fn test_plane_validates() {
        assert!(create_plane(1).validate().is_ok());
        assert!(create_plane(8).validate().is_ok());
    }
}
