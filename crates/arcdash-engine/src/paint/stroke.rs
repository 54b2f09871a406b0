use crate::paint::Color;

/// End cap applied to each stroked segment (each dash, for dashed strokes).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    /// Segment ends exactly at its endpoint. Adjacent arcs meet without overlap.
    #[default]
    Butt,
    Round,
    Square,
}

/// Repeating `[on, off]` dash pattern, measured along the stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DashPattern {
    pub on: f32,
    pub off: f32,
    /// Offset into the pattern at the start of the stroke.
    pub phase: f32,
}

impl DashPattern {
    /// Returns `None` when the pattern cannot be drawn (negative or non-finite
    /// lengths, or a zero-length period).
    pub fn new(on: f32, off: f32) -> Option<Self> {
        let valid = on.is_finite() && off.is_finite() && on >= 0.0 && off >= 0.0;
        (valid && on + off > 0.0).then_some(Self { on, off, phase: 0.0 })
    }

    #[inline]
    pub fn intervals(&self) -> [f32; 2] {
        [self.on, self.off]
    }
}

/// Stroke paint for outlined (unfilled) geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
    /// `None` strokes a continuous line.
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    #[inline]
    pub fn solid(width: f32, color: Color) -> Self {
        Self { width, color, cap: LineCap::Butt, dash: None }
    }

    #[inline]
    pub fn dashed(width: f32, color: Color, dash: Option<DashPattern>) -> Self {
        Self { width, color, cap: LineCap::Butt, dash }
    }

    /// `false` when stroking would leave no visible pixels.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.width.is_finite() && !self.color.is_transparent()
    }
}
