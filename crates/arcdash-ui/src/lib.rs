//! Arcdash UI — dashed circular progress indicator on top of `arcdash-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use arcdash_ui::prelude::*;
//!
//! let attrs = AttributeSet::new()
//!     .attr("filledProgressBarWidth", "10")
//!     .attr("filledProgressBarLength", "6")
//!     .attr("filledProgressBarSpacing", "3")
//!     .attr("filledProgressBarColor", "#FF00C853")
//!     .attr("startAngle", "135")
//!     .attr("endAngle", "45");
//!
//! let mut bar = DashedArcProgress::new(StyleConfig::from_attributes(&attrs)?);
//! bar.set_progress(0.4);
//!
//! let mut draw_list = DrawList::new();
//! bar.paint(&mut draw_list, Rect::new(0.0, 0.0, 200.0, 200.0));
//! // Pass draw_list to a renderer.
//! ```

pub mod attrs;
pub mod style;
pub mod widgets;

/// Everything needed to configure and paint the widget.
pub mod prelude {
    pub use crate::attrs::{AttrError, AttributeSet};
    pub use crate::style::{DashSpec, Direction, RimSpec, StyleConfig};
    pub use crate::widgets::dashed_arc::{ArcCommand, ArcLayer, ArcPaints, DashedArcProgress, DrawPlan};

    // Re-export the engine primitives everyone needs.
    pub use arcdash_engine::coords::{Rect, Vec2};
    pub use arcdash_engine::paint::{Color, DashPattern, LineCap, StrokeStyle};
    pub use arcdash_engine::scene::{ArcCmd, DrawCmd, DrawList};
}
