//! Camera state consumed by picking and rendering.
//!
//! The camera keeps a free-fly pose (eye, target, up) and projection
//! parameters, and derives the view and projection matrices from them.

/// Core camera struct and matrix builders.
pub mod core;

pub use self::core::{Camera, CameraMove};
