use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Arc commands use a rect as the box circumscribing the arc's ellipse, so a
/// rect built from inverted edges (max < min) is kept as-is rather than
/// normalized: it is an empty box and renderers skip it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks every edge by `amount`.
    #[inline]
    pub fn inset(self, amount: f32) -> Self {
        Rect::new(
            self.origin.x + amount,
            self.origin.y + amount,
            self.size.x - 2.0 * amount,
            self.size.y - 2.0 * amount,
        )
    }

    #[inline]
    pub fn translate(self, by: Vec2) -> Self {
        Self { origin: self.origin + by, size: self.size }
    }
}
