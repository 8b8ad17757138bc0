//! # Config Crate
//!
//! Centralized configuration constants for the primitive mesh engine.
//! Parameter limits, defaults, camera setup and tolerances are defined here
//! so the mesh, scene and wasm crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_SIDES, DEFAULT_SIDES};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Defaults always satisfy the limits
//! assert!(DEFAULT_SIDES >= MIN_SIDES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated Snapshots**: [`EngineConfig`] can only be built from sane values

pub mod constants;
pub mod engine;

pub use engine::{ConfigError, EngineConfig};

#[cfg(test)]
mod tests;
