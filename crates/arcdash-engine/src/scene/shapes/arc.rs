use crate::coords::Rect;
use crate::paint::StrokeStyle;
use crate::scene::{DrawCmd, DrawList};

/// Stroked elliptical arc payload.
///
/// The arc lies on the ellipse inscribed in `bounds`. `sweep_angle` is signed:
/// positive sweeps travel clockwise on screen, negative ones counter-clockwise.
/// A sweep with magnitude of 360° or more strokes the whole ellipse.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub bounds: Rect,
    /// Degrees, 0° at 3 o'clock.
    pub start_angle: f32,
    /// Degrees.
    pub sweep_angle: f32,
    pub stroke: StrokeStyle,
}

impl ArcCmd {
    #[inline]
    pub fn new(bounds: Rect, start_angle: f32, sweep_angle: f32, stroke: StrokeStyle) -> Self {
        Self { bounds, start_angle, sweep_angle, stroke }
    }

    /// Angle at which the arc ends.
    #[inline]
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    /// `true` when rendering would produce no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.bounds.is_empty()
            || !self.bounds.is_finite()
            || self.sweep_angle == 0.0
            || !self.sweep_angle.is_finite()
            || !self.stroke.is_visible()
    }
}

impl DrawList {
    /// Records a stroked arc.
    #[inline]
    pub fn push_arc(&mut self, bounds: Rect, start_angle: f32, sweep_angle: f32, stroke: StrokeStyle) {
        self.push(DrawCmd::Arc(ArcCmd::new(bounds, start_angle, sweep_angle, stroke)));
    }
}
