use super::{Rect, Vec2};

/// Degrees to radians, evaluated in `f64` to keep `sin`/`cos` of large
/// unconstrained angles stable before narrowing back to `f32`.
#[inline]
pub fn to_radians(degrees: f32) -> f64 {
    (degrees as f64).to_radians()
}

/// Point at `degrees` on the ellipse inscribed in `bounds`.
pub fn point_on_ellipse(bounds: Rect, degrees: f32) -> Vec2 {
    let c = bounds.center();
    let rx = bounds.size.x as f64 * 0.5;
    let ry = bounds.size.y as f64 * 0.5;
    let (sin, cos) = to_radians(degrees).sin_cos();
    Vec2::new(c.x + (rx * cos) as f32, c.y + (ry * sin) as f32)
}
