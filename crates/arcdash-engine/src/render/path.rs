use resvg::tiny_skia::{Path, PathBuilder};

use crate::coords::{point_on_ellipse, to_radians, Rect};

/// Largest sweep approximated by a single cubic segment.
const MAX_SEGMENT_DEGREES: f32 = 90.0;

/// Builds the path of an elliptical arc inscribed in `bounds`.
///
/// The arc runs from `start_angle` over `sweep_angle` degrees; negative sweeps
/// run counter-clockwise. Sweeps of 360° or more are clamped to a closed full
/// ellipse that still begins at `start_angle`, so dash patterns keep their
/// phase anchored there.
///
/// Returns `None` for degenerate input (empty bounds, zero sweep).
pub fn arc_path(bounds: Rect, start_angle: f32, sweep_angle: f32) -> Option<Path> {
    if bounds.is_empty() || !bounds.is_finite() || !start_angle.is_finite() {
        return None;
    }
    if sweep_angle == 0.0 || !sweep_angle.is_finite() {
        return None;
    }

    let full = sweep_angle.abs() >= 360.0;
    let sweep = sweep_angle.clamp(-360.0, 360.0);
    let segments = (sweep.abs() / MAX_SEGMENT_DEGREES).ceil().max(1.0) as usize;
    let step = sweep / segments as f32;

    let rx = bounds.size.x as f64 * 0.5;
    let ry = bounds.size.y as f64 * 0.5;
    // Tangent of the ellipse at `deg`, scaled per unit of parametric angle.
    let tangent = |deg: f32| {
        let (sin, cos) = to_radians(deg).sin_cos();
        (-rx * sin, ry * cos)
    };

    let mut pb = PathBuilder::new();
    let p0 = point_on_ellipse(bounds, start_angle);
    pb.move_to(p0.x, p0.y);

    for i in 0..segments {
        let a0 = start_angle + step * i as f32;
        let a1 = start_angle + step * (i + 1) as f32;
        let k = 4.0 / 3.0 * (to_radians(step) / 4.0).tan();

        let from = point_on_ellipse(bounds, a0);
        let to = point_on_ellipse(bounds, a1);
        let (t0x, t0y) = tangent(a0);
        let (t1x, t1y) = tangent(a1);

        pb.cubic_to(
            from.x + (k * t0x) as f32,
            from.y + (k * t0y) as f32,
            to.x - (k * t1x) as f32,
            to.y - (k * t1y) as f32,
            to.x,
            to.y,
        );
    }

    if full {
        pb.close();
    }
    pb.finish()
}
