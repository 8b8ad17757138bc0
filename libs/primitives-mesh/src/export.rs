//! # OBJ Export
//!
//! Serializes a [`MeshBuffer`] as Wavefront OBJ text.
//!
//! ## Layout
//!
//! ```text
//! v x y z        one per position, in buffer order
//! vn x y z       one per normal, in buffer order
//! f a//a b//b c//c
//! ```
//!
//! Face indices are 1-based and refer to the position and normal with the
//! same index, because every vertex owns exactly one normal. Vertices are
//! never deduplicated, so the output mirrors the buffer one-to-one.

use std::fmt::Write;

use crate::error::ShapeError;
use crate::mesh::MeshBuffer;
use crate::primitives::generate;
use crate::shape::ShapeDescriptor;

/// Writes a mesh as OBJ text.
///
/// UVs are not exported. Lines end with `\n`; there is no header.
///
/// # Example
///
/// ```rust
/// use primitives_mesh::{export::to_obj, MeshBuffer};
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffer::new();
/// mesh.add_vertex(DVec3::ZERO, DVec3::Z);
/// mesh.add_vertex(DVec3::X, DVec3::Z);
/// mesh.add_vertex(DVec3::Y, DVec3::Z);
/// mesh.add_triangle(0, 1, 2);
///
/// assert_eq!(
///     to_obj(&mesh),
///     "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nvn 0 0 1\nvn 0 0 1\nf 1//1 2//2 3//3\n",
/// );
/// ```
pub fn to_obj(mesh: &MeshBuffer) -> String {
    // Roughly 24 bytes per coordinate line and 20 per face
    let mut out = String::with_capacity(mesh.vertex_count() * 48 + mesh.triangle_count() * 20);

    for p in mesh.positions() {
        let _ = writeln!(out, "v {} {} {}", number(p.x), number(p.y), number(p.z));
    }
    for n in mesh.normals() {
        let _ = writeln!(out, "vn {} {} {}", number(n.x), number(n.y), number(n.z));
    }
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| i + 1);
        let _ = writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}");
    }

    out
}

/// Generates a shape from its raw UI form and returns it as OBJ text.
///
/// Runs an independent generation; no scene state is read or touched.
///
/// # Errors
///
/// Any [`ShapeError`] from descriptor validation or generation.
pub fn export_shape(
    shape_index: usize,
    scale: [f64; 3],
    args: &[f64],
) -> Result<String, ShapeError> {
    let desc = ShapeDescriptor::from_raw(shape_index, scale, args)?;
    export_descriptor(&desc)
}

/// Generates a validated descriptor and returns it as OBJ text.
pub fn export_descriptor(desc: &ShapeDescriptor) -> Result<String, ShapeError> {
    let mesh = generate(desc)?;
    let text = to_obj(&mesh);
    tracing::debug!(kind = %desc.kind(), bytes = text.len(), "exported mesh as obj");
    Ok(text)
}

/// Shortest round-trip decimal form, with negative zero written as `0`.
fn number(value: f64) -> f64 {
    value + 0.0
}
