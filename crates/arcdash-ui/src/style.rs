//! Resolved style of a dashed arc progress indicator.

use arcdash_engine::paint::{Color, DashPattern, StrokeStyle};

/// Rotational sense in which progress accumulates along the track.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// `1.0` for clockwise, `-1.0` for counter-clockwise.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    /// Maps the integer encoding used by style attributes (`1` / `-1`).
    pub fn from_sign(value: i32) -> Option<Self> {
        match value {
            1 => Some(Direction::Clockwise),
            -1 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }
}

/// Dashed stroke parameters for the filled or the empty arc.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DashSpec {
    /// Length of each dash along the arc.
    pub length: f32,
    /// Stroke thickness.
    pub width: f32,
    /// Gap between dashes.
    pub spacing: f32,
    pub color: Color,
}

impl DashSpec {
    pub fn new(length: f32, width: f32, spacing: f32, color: Color) -> Self {
        Self { length, width, spacing, color }
    }

    /// Stroke with a `[length, spacing]` pattern at phase 0.
    ///
    /// A pattern with no period (both zero) strokes a continuous line.
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle::dashed(self.width, self.color, DashPattern::new(self.length, self.spacing))
    }
}

/// Background rim drawn under the full track.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RimSpec {
    pub color: Color,
    /// `0` hides the rim.
    pub width: f32,
}

impl RimSpec {
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.width, self.color)
    }
}

/// Complete style of a [`DashedArcProgress`](crate::widgets::dashed_arc::DashedArcProgress).
///
/// Built once (by hand or from an [`AttributeSet`](crate::attrs::AttributeSet))
/// and replaced wholesale to restyle a widget.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleConfig {
    pub filled: DashSpec,
    pub empty: DashSpec,
    pub rim: RimSpec,
    /// Degrees, 0° at 3 o'clock, increasing clockwise. Unconstrained.
    pub start_angle: f32,
    /// Degrees. Unconstrained.
    pub end_angle: f32,
    pub direction: Direction,
    /// Shift the arc box down so dashes near the top endpoints are not cropped.
    pub cut_padding: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            filled: DashSpec::default(),
            empty: DashSpec::default(),
            rim: RimSpec::default(),
            start_angle: 0.0,
            end_angle: 360.0,
            direction: Direction::Clockwise,
            cut_padding: false,
        }
    }
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filled(mut self, v: DashSpec) -> Self { self.filled = v; self }
    pub fn empty(mut self, v: DashSpec) -> Self { self.empty = v; self }
    pub fn rim(mut self, color: Color, width: f32) -> Self { self.rim = RimSpec { color, width }; self }
    pub fn angles(mut self, start: f32, end: f32) -> Self { self.start_angle = start; self.end_angle = end; self }
    pub fn direction(mut self, v: Direction) -> Self { self.direction = v; self }
    pub fn cut_padding(mut self, v: bool) -> Self { self.cut_padding = v; self }

    /// Half the widest progress stroke; the arc box is inset by this much.
    #[inline]
    pub fn stroke_inset(&self) -> f32 {
        self.empty.width.max(self.filled.width) / 2.0
    }
}
