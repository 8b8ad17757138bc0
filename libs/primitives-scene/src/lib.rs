//! # Primitives Scene
//!
//! Live-preview side of the primitives engine: one owned [`SceneState`],
//! a [`Renderer`] that only redraws when the scene is dirty, a cooperative
//! [`AnimationLoop`], and the [`Engine`] facade tying them to a UI.
//!
//! ## Architecture
//!
//! ```text
//! UI → Engine ─┬→ SceneState (mesh, camera, dirty) → Renderer → RenderSurface
//!              └→ primitives_mesh::export_shape → OBJ text
//! ```
//!
//! Exports never read the scene's mesh; they regenerate from the same
//! parameters, so a preview and an export cannot observe each other.
//!
//! ## Usage
//!
//! ```rust
//! use primitives_scene::{AnimationLoop, Engine, HeadlessSurface, TickOutcome};
//!
//! let mut engine = Engine::with_defaults(HeadlessSurface::new()).unwrap();
//! let mut animation = AnimationLoop::new();
//!
//! assert_eq!(animation.tick(&mut engine).unwrap(), TickOutcome::Drawn);
//! assert_eq!(animation.tick(&mut engine).unwrap(), TickOutcome::Idle);
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod headless;
pub mod renderer;
pub mod scene;
pub mod scheduler;

pub use camera::OrbitCamera;
pub use engine::Engine;
pub use error::{EngineError, RenderError};
pub use headless::{FrameRecord, HeadlessSurface};
pub use renderer::{Frame, RenderSurface, Renderer};
pub use scene::SceneState;
pub use scheduler::{AnimationLoop, CancelToken, TickOutcome};
