//! # Mesh Buffer
//!
//! Generic output container of every generator: positions, normals,
//! optional UVs and counter-clockwise triangles.

use config::constants::NORMAL_TOLERANCE;
use glam::{DVec2, DVec3};

use crate::error::ShapeError;
use crate::shape::Scale;

/// An indexed triangle mesh with per-vertex normals.
///
/// All geometry is kept in f64. Conversion to f32 only happens at the
/// rendering boundary.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::MeshBuffer;
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffer::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffer {
    /// Vertex positions
    positions: Vec<DVec3>,
    /// Unit normals, one per position
    normals: Vec<DVec3>,
    /// Optional texture coordinates, one per position
    uvs: Option<Vec<DVec2>>,
    /// Triangle indices, counter-clockwise seen from the front face
    triangles: Vec<[u32; 3]>,
}

impl MeshBuffer {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: None,
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the length of the flat index list (three per triangle).
    #[inline]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a vertex with texture coordinates and returns its index.
    ///
    /// A mesh should use either this or [`Self::add_vertex`] for every
    /// vertex; mixing them fails [`Self::validate`].
    pub fn add_vertex_uv(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        let index = self.add_vertex(position, normal);
        self.uvs.get_or_insert_with(Vec::new).push(uv);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the texture coordinates, if the generator produced any.
    #[inline]
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the position at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Returns the normal at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> DVec3 {
        self.normals[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Geometric normal of a triangle from its winding (not normalized).
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangles[index];
        let v0 = self.position(a);
        (self.position(b) - v0).cross(self.position(c) - v0)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.positions.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }

        (min, max)
    }

    /// Appends another mesh, offsetting its indices.
    ///
    /// UVs survive only when both meshes carry them.
    pub fn merge(&mut self, other: &MeshBuffer) {
        let offset = self.positions.len() as u32;
        let had_vertices = !self.positions.is_empty();

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        self.uvs = match (self.uvs.take(), &other.uvs) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            (None, Some(theirs)) if !had_vertices => Some(theirs.clone()),
            _ => None,
        };
    }

    /// Applies a per-axis scale.
    ///
    /// Positions are multiplied component-wise. Normals go through
    /// [`Scale::transform_normal`]. A mirroring scale flips every triangle so
    /// front faces keep pointing outward.
    pub fn apply_scale(&mut self, scale: &Scale) {
        if scale.is_identity() {
            return;
        }

        let factors = scale.as_vec3();
        for p in &mut self.positions {
            *p *= factors;
        }

        for n in &mut self.normals {
            *n = scale.transform_normal(*n);
        }

        if scale.is_mirroring() {
            for tri in &mut self.triangles {
                tri.swap(1, 2);
            }
        }
    }

    /// Validates the buffer with the default normal tolerance.
    pub fn validate(&self) -> Result<(), ShapeError> {
        self.validate_with_tolerance(NORMAL_TOLERANCE)
    }

    /// Validates the buffer.
    ///
    /// Checks:
    /// - normals (and UVs, if present) correspond one-to-one with positions
    /// - all triangle indices are in range and distinct within a triangle
    /// - every vertex is referenced by at least one triangle
    /// - positions are finite and normals are finite unit vectors
    pub fn validate_with_tolerance(&self, tolerance: f64) -> Result<(), ShapeError> {
        let vertex_count = self.positions.len();

        if self.normals.len() != vertex_count {
            return Err(ShapeError::degenerate(format!(
                "{} normals for {} positions",
                self.normals.len(),
                vertex_count
            )));
        }
        if let Some(uvs) = &self.uvs {
            if uvs.len() != vertex_count {
                return Err(ShapeError::degenerate(format!(
                    "{} uvs for {} positions",
                    uvs.len(),
                    vertex_count
                )));
            }
        }

        let mut referenced = vec![false; vertex_count];
        for (i, tri) in self.triangles.iter().enumerate() {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(ShapeError::degenerate(format!(
                        "triangle {i} references vertex {index} of {vertex_count}"
                    )));
                }
                referenced[index as usize] = true;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(ShapeError::degenerate(format!(
                    "triangle {i} repeats a vertex: {tri:?}"
                )));
            }
        }

        if let Some(orphan) = referenced.iter().position(|used| !used) {
            return Err(ShapeError::degenerate(format!(
                "vertex {orphan} is not part of any triangle"
            )));
        }

        for (i, (p, n)) in self.positions.iter().zip(&self.normals).enumerate() {
            if !p.is_finite() {
                return Err(ShapeError::degenerate(format!(
                    "vertex {i} has a non-finite position"
                )));
            }
            if !n.is_finite() || (n.length() - 1.0).abs() > tolerance {
                return Err(ShapeError::degenerate(format!(
                    "vertex {i} normal is not unit length: {n}"
                )));
            }
        }

        Ok(())
    }

    /// Exports positions as a flat f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as a flat f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports UVs as a flat f32 array for GPU.
    pub fn uvs_f32(&self) -> Option<Vec<f32>> {
        self.uvs.as_ref().map(|uvs| {
            let mut result = Vec::with_capacity(uvs.len() * 2);
            for uv in uvs {
                result.push(uv.x as f32);
                result.push(uv.y as f32);
            }
            result
        })
    }

    /// Exports triangle indices as a flat u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> MeshBuffer {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z);
        mesh.add_vertex(DVec3::X, DVec3::Z);
        mesh.add_vertex(DVec3::Y, DVec3::Z);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = MeshBuffer::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.uvs().is_none());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = MeshBuffer::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0), DVec3::Z);
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.position(0), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.normal(0), DVec3::Z);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0), DVec3::Z);
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0), DVec3::Z);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_face_normal_follows_winding() {
        let mesh = triangle();
        assert!(mesh.face_normal(0).z > 0.0);
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(triangle().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z);
        mesh.add_triangle(0, 1, 2);
        assert!(matches!(
            mesh.validate(),
            Err(ShapeError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_mesh_validate_orphan_vertex() {
        let mut mesh = triangle();
        mesh.add_vertex(DVec3::ONE, DVec3::Z);
        let err = mesh.validate().unwrap_err();
        assert!(err.to_string().contains("vertex 3"));
    }

    #[test]
    fn test_mesh_validate_non_unit_normal() {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z * 2.0);
        mesh.add_vertex(DVec3::X, DVec3::Z);
        mesh.add_vertex(DVec3::Y, DVec3::Z);
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_mesh_validate_mixed_uvs() {
        let mut mesh = MeshBuffer::new();
        mesh.add_vertex_uv(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
        mesh.add_vertex(DVec3::X, DVec3::Z);
        mesh.add_vertex(DVec3::Y, DVec3::Z);
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_mesh_flat_exports() {
        let mesh = triangle();
        assert_eq!(mesh.positions_f32(), vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.normals_f32().len(), 9);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(mesh.index_count(), 3);
        assert!(mesh.uvs_f32().is_none());
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = triangle();
        let mesh2 = triangle();

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.normals().len(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]); // Offset by 3
    }

    #[test]
    fn test_mesh_merge_drops_partial_uvs() {
        let mut with_uvs = MeshBuffer::new();
        with_uvs.add_vertex_uv(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
        with_uvs.add_vertex_uv(DVec3::X, DVec3::Z, DVec2::X);
        with_uvs.add_vertex_uv(DVec3::Y, DVec3::Z, DVec2::Y);
        with_uvs.add_triangle(0, 1, 2);

        let mut into_empty = MeshBuffer::new();
        into_empty.merge(&with_uvs);
        assert_eq!(into_empty.uvs().map(|uvs| uvs.len()), Some(3));

        let mut plain = triangle();
        plain.merge(&with_uvs);
        assert!(plain.uvs().is_none());
        assert!(plain.validate().is_ok());
    }

    #[test]
    fn test_apply_scale_renormalizes_normals() {
        let mut mesh = MeshBuffer::new();
        let n = DVec3::new(1.0, 1.0, 0.0).normalize();
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0), n);
        mesh.apply_scale(&Scale::new(2.0, 1.0, 1.0).unwrap());

        assert_eq!(mesh.position(0), DVec3::new(2.0, 1.0, 0.0));
        let scaled = mesh.normal(0);
        assert_relative_eq!(scaled.length(), 1.0, epsilon = 1e-12);
        // Stretching along x flattens the surface, so the normal tilts toward y
        assert!(scaled.y > scaled.x);
    }

    #[test]
    fn test_apply_mirror_scale_flips_winding() {
        let mut mesh = triangle();
        mesh.apply_scale(&Scale::new(-1.0, 1.0, 1.0).unwrap());
        assert_eq!(mesh.triangle(0), [0, 2, 1]);
        // Normal and winding still agree
        assert!(mesh.face_normal(0).dot(mesh.normal(0)) > 0.0);
    }
}
