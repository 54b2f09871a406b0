//! Arcdash engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the widget layer:
//! geometry, paint, the recorded draw stream, and a CPU rasterizer for it.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
