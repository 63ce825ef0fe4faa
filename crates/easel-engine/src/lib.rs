//! Easel engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the canvas layer: the winit
//! window loop, the wgpu surface, the renderer-agnostic draw stream and the
//! renderers that consume it.

pub mod core;
pub mod device;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
