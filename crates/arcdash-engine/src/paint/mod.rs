//! Paint model shared between widgets and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - stroke styles (width, cap, dash pattern)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod stroke;

pub use color::Color;
pub use stroke::{DashPattern, LineCap, StrokeStyle};
