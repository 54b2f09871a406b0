//! Coordinate and geometry types shared across the renderer and widgets.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are degrees, 0° at 3 o'clock, increasing clockwise (the +Y-down
//! convention makes "clockwise" the positive rotation on screen).

mod angle;
mod rect;
mod vec2;

pub use angle::{point_on_ellipse, to_radians};
pub use rect::Rect;
pub use vec2::Vec2;
