//! # Mesh and Frame Handles
//!
//! WASM-friendly wrappers for mesh and frame data handed to JavaScript.

use primitives_mesh::MeshBuffer;
use primitives_scene::Frame;
use wasm_bindgen::prelude::*;

/// A generated mesh as flat GPU buffers.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_mesh(3, 1, 1, 1, new Float64Array([8]));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Optional texture coordinates as [u, v, u, v, ...]
    uvs: Option<Vec<f32>>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    /// Returns the texture coordinates as a Float32Array, if the shape has
    /// any.
    pub fn uvs(&self) -> Option<js_sys::Float32Array> {
        self.uvs
            .as_ref()
            .map(|uvs| js_sys::Float32Array::from(&uvs[..]))
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }
}

impl MeshHandle {
    /// Copies a mesh into f32/u32 buffers.
    pub fn from_mesh(mesh: &MeshBuffer) -> Self {
        Self {
            positions: mesh.positions_f32(),
            normals: mesh.normals_f32(),
            uvs: mesh.uvs_f32(),
            indices: mesh.indices_u32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    pub fn position_data(&self) -> &[f32] {
        &self.positions
    }

    pub fn normal_data(&self) -> &[f32] {
        &self.normals
    }

    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }
}

/// One frame passed to the JavaScript draw callback.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const engine = new WebEngine((frame) => {
///   gl.clearColor(...frame.clear_color());
///   gl.uniformMatrix4fv(viewLoc, false, frame.view());
///   gl.uniformMatrix4fv(projLoc, false, frame.projection());
///   drawMesh(frame.mesh(), frame.shades());
/// }, canvas.width, canvas.height);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct FrameHandle {
    mesh: MeshHandle,
    /// Per-triangle RGB shades
    shades: Vec<f32>,
    view: [f32; 16],
    projection: [f32; 16],
    width: u32,
    height: u32,
    clear_color: [f32; 4],
}

#[wasm_bindgen]
impl FrameHandle {
    pub fn mesh(&self) -> MeshHandle {
        self.mesh.clone()
    }

    /// Per-triangle RGB shades as a Float32Array (triangle_count * 3).
    pub fn shades(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.shades[..])
    }

    /// Column-major view matrix.
    pub fn view(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.view[..])
    }

    /// Column-major projection matrix.
    pub fn projection(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.projection[..])
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA background as a Float32Array.
    pub fn clear_color(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.clear_color[..])
    }
}

impl FrameHandle {
    /// Copies everything the callback needs out of a borrowed frame.
    pub fn from_frame(frame: &Frame<'_>) -> Self {
        Self {
            mesh: MeshHandle::from_mesh(frame.mesh),
            shades: frame.triangle_shades_f32(),
            view: frame.view_f32(),
            projection: frame.projection_f32(),
            width: frame.viewport.0,
            height: frame.viewport.1,
            clear_color: frame.clear_color,
        }
    }

    pub fn mesh_data(&self) -> &MeshHandle {
        &self.mesh
    }

    pub fn shade_data(&self) -> &[f32] {
        &self.shades
    }

    pub fn view_data(&self) -> &[f32; 16] {
        &self.view
    }

    pub fn clear_color_data(&self) -> &[f32; 4] {
        &self.clear_color
    }
}
