//! CPU rendering of recorded draw lists.
//!
//! The renderer walks a [`DrawList`](crate::scene::DrawList) in paint order and
//! strokes each command into an RGBA8 canvas backed by tiny-skia. It exists so
//! draw streams can be inspected as images without a GPU surface.

mod path;
mod pixmap;

pub use path::arc_path;
pub use pixmap::{Frame, PixmapRenderer};
