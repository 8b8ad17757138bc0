//! # Primitives Mesh
//!
//! Deterministic mesh generation for six parametric primitives (plane,
//! disk, cube, sphere, cylinder, tube) and OBJ export of the result.
//!
//! ## Architecture
//!
//! ```text
//! (index, scale, args) → ShapeDescriptor → generate → MeshBuffer → to_obj
//! ```
//!
//! - **shape**: typed parameters, per-kind validation, scale
//! - **primitives**: one pure generator per shape plus dispatch
//! - **mesh**: the position/normal/uv/index container
//! - **export**: Wavefront OBJ text
//!
//! Generators hold no state, so the same descriptor always yields a
//! byte-identical buffer.
//!
//! ## Usage
//!
//! ```rust
//! use primitives_mesh::{export_shape, generate, ShapeDescriptor};
//!
//! let sphere = ShapeDescriptor::from_raw(3, [1.0, 1.0, 1.0], &[8.0]).unwrap();
//! let mesh = generate(&sphere).unwrap();
//! assert_eq!(mesh.triangle_count(), 6 * 8 * 8 * 2);
//!
//! let obj = export_shape(3, [1.0, 1.0, 1.0], &[8.0]).unwrap();
//! assert!(obj.starts_with("v "));
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod primitives;
pub mod shape;

pub use error::ShapeError;
pub use export::{export_descriptor, export_shape, to_obj};
pub use mesh::MeshBuffer;
pub use primitives::{generate, generate_from_raw, generate_with_tolerance};
pub use shape::{Scale, ShapeDescriptor, ShapeKind, ShapeParameters};
