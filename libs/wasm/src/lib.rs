//! WASM-facing entry points for the primitives engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The page owns the canvas and the WebGL program; Rust
//! owns the shape, the camera and the decision of when to draw. Native
//! tests use the `*_internal` helpers, which return Rust errors and need no
//! JS host.
//!
//! ```
//! let obj = primitives_wasm::export_shape_internal(1, [1.0, 1.0, 1.0], &[6.0, 2.0]).unwrap();
//! assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 6);
//! ```

mod mesh_handle;

pub use mesh_handle::{FrameHandle, MeshHandle};

use std::fmt::Display;

use config::constants::{DRAG_SENSITIVITY, NORMAL_TOLERANCE};
use config::{ConfigError, EngineConfig};
use primitives_mesh::{ShapeDescriptor, ShapeError, ShapeKind, ShapeParameters};
use primitives_scene::{Engine, Frame, RenderError, RenderSurface};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "primitives-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Rendering surface backed by a JavaScript function receiving a
/// [`FrameHandle`].
struct JsSurface {
    callback: js_sys::Function,
}

impl RenderSurface for JsSurface {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        let handle = FrameHandle::from_frame(frame);
        self.callback
            .call1(&JsValue::NULL, &JsValue::from(handle))
            .map(|_| ())
            .map_err(|err| {
                RenderError::surface(err.as_string().unwrap_or_else(|| format!("{err:?}")))
            })
    }
}

/// The engine as seen from the page.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const engine = new WebEngine(drawFrame, canvas.width, canvas.height);
/// // engine.regenerate(1, 1, 1, 1, new Float64Array([6, 2]));
/// // const tick = () => { engine.draw_scene_if(); requestAnimationFrame(tick); };
/// // requestAnimationFrame(tick);
/// ```
#[wasm_bindgen]
pub struct WebEngine {
    engine: Engine<JsSurface>,
}

#[wasm_bindgen]
impl WebEngine {
    /// Creates the engine with the startup shape. `draw_callback` is called
    /// with a `FrameHandle` whenever a frame is drawn.
    ///
    /// # Errors
    /// Returns a JavaScript error for an empty viewport.
    #[wasm_bindgen(constructor)]
    pub fn new(
        draw_callback: js_sys::Function,
        width: u32,
        height: u32,
    ) -> Result<WebEngine, JsValue> {
        let config = engine_config_internal(width, height).map_err(to_js)?;
        let surface = JsSurface {
            callback: draw_callback,
        };
        let engine = Engine::initialize(surface, config).map_err(to_js)?;
        Ok(Self { engine })
    }

    /// Regenerates the displayed shape.
    ///
    /// `args` are the positional parameters of the selected shape, as listed
    /// by `shape_catalogue_json`.
    ///
    /// # Errors
    /// Returns a JavaScript error naming the offending index or field. The
    /// previous shape stays on screen.
    pub fn regenerate(
        &mut self,
        shape_index: usize,
        scale_x: f64,
        scale_y: f64,
        scale_z: f64,
        args: &[f64],
    ) -> Result<(), JsValue> {
        self.engine
            .regenerate(shape_index, [scale_x, scale_y, scale_z], args)
            .map_err(to_js)
    }

    pub fn draw_scene(&mut self) -> Result<(), JsValue> {
        self.engine.draw_scene().map_err(to_js)
    }

    /// Draws only if the shape or camera changed. Returns whether it drew.
    pub fn draw_scene_if(&mut self) -> Result<bool, JsValue> {
        self.engine.draw_scene_if().map_err(to_js)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.engine.resize(width, height)
    }

    pub fn begin_drag(&mut self) {
        self.engine.begin_drag();
    }

    pub fn end_drag(&mut self) {
        self.engine.end_drag();
    }

    /// Pointer motion in pixels while the button is held.
    pub fn drag_by(&mut self, dx: f64, dy: f64) -> bool {
        self.engine.drag_by(dx, dy)
    }

    /// The displayed shape's descriptor as JSON.
    pub fn current_shape_json(&self) -> Result<String, JsValue> {
        descriptor_json_internal(self.engine.scene().descriptor()).map_err(to_js)
    }

    /// OBJ text for the displayed shape.
    pub fn export_current(&self) -> Result<String, JsValue> {
        self.engine.export_current().map_err(to_js)
    }
}

/// Generates a shape and returns it as OBJ text, independent of any engine.
///
/// # Errors
/// Returns a JavaScript error for an unknown shape index or an invalid
/// parameter.
#[wasm_bindgen]
pub fn export_shape(
    shape_index: usize,
    scale_x: f64,
    scale_y: f64,
    scale_z: f64,
    args: &[f64],
) -> Result<String, JsValue> {
    export_shape_internal(shape_index, [scale_x, scale_y, scale_z], args).map_err(to_js)
}

/// Generates a shape and returns its buffers.
#[wasm_bindgen]
pub fn generate_mesh(
    shape_index: usize,
    scale_x: f64,
    scale_y: f64,
    scale_z: f64,
    args: &[f64],
) -> Result<MeshHandle, JsValue> {
    generate_mesh_internal(shape_index, [scale_x, scale_y, scale_z], args).map_err(to_js)
}

/// Lists every shape with its parameter names and defaults, as JSON.
///
/// # Examples
/// ```
/// let json = primitives_wasm::shape_catalogue_json_internal().unwrap();
/// assert!(json.contains("\"innerRadius\""));
/// ```
#[wasm_bindgen]
pub fn shape_catalogue_json() -> Result<String, JsValue> {
    shape_catalogue_json_internal().map_err(to_js)
}

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeInfo {
    pub index: usize,
    pub name: &'static str,
    pub parameters: &'static [&'static str],
    pub defaults: Vec<f64>,
}

/// Host-only helper for [`export_shape`].
pub fn export_shape_internal(
    shape_index: usize,
    scale: [f64; 3],
    args: &[f64],
) -> Result<String, ShapeError> {
    primitives_mesh::export_shape(shape_index, scale, args)
}

/// Host-only helper for [`generate_mesh`].
pub fn generate_mesh_internal(
    shape_index: usize,
    scale: [f64; 3],
    args: &[f64],
) -> Result<MeshHandle, ShapeError> {
    let mesh = primitives_mesh::generate_from_raw(shape_index, scale, args)?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Host-only helper listing the catalogue entries.
pub fn shape_catalogue_internal() -> Vec<ShapeInfo> {
    ShapeKind::ALL
        .iter()
        .map(|&kind| ShapeInfo {
            index: kind.index(),
            name: kind.name(),
            parameters: kind.parameter_names(),
            defaults: ShapeParameters::default_for(kind).to_args(),
        })
        .collect()
}

/// Host-only helper for [`shape_catalogue_json`].
pub fn shape_catalogue_json_internal() -> Result<String, serde_json::Error> {
    serde_json::to_string(&shape_catalogue_internal())
}

/// Serializes a descriptor the way [`WebEngine::current_shape_json`] does.
pub fn descriptor_json_internal(descriptor: &ShapeDescriptor) -> Result<String, serde_json::Error> {
    serde_json::to_string(descriptor)
}

/// Engine settings for a canvas of the given size.
pub fn engine_config_internal(width: u32, height: u32) -> Result<EngineConfig, ConfigError> {
    EngineConfig::new(width, height, DRAG_SENSITIVITY, NORMAL_TOLERANCE)
}
