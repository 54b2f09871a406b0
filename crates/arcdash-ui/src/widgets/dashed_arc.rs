use std::fmt;

use arcdash_engine::coords::{Rect, Vec2, to_radians};
use arcdash_engine::paint::StrokeStyle;
use arcdash_engine::scene::{ArcCmd, DrawCmd, DrawList};

use crate::style::{Direction, StyleConfig};

/// Which of the three stacked arcs a command draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ArcLayer {
    /// Solid background track spanning the whole sweep.
    Rim,
    /// Dashed remainder, anchored at the end angle.
    Empty,
    /// Dashed completed portion, anchored at the start angle.
    Filled,
}

/// Stroke styles derived from a [`StyleConfig`].
///
/// Built once per style and reused for every plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPaints {
    pub rim: StrokeStyle,
    pub empty: StrokeStyle,
    pub filled: StrokeStyle,
}

impl ArcPaints {
    pub fn from_style(style: &StyleConfig) -> Self {
        Self {
            rim: style.rim.stroke(),
            empty: style.empty.stroke(),
            filled: style.filled.stroke(),
        }
    }

    #[inline]
    pub fn get(&self, layer: ArcLayer) -> &StrokeStyle {
        match layer {
            ArcLayer::Rim => &self.rim,
            ArcLayer::Empty => &self.empty,
            ArcLayer::Filled => &self.filled,
        }
    }
}

/// One stroked arc of a [`DrawPlan`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCommand<'a> {
    pub layer: ArcLayer,
    /// Box circumscribing the arc's ellipse, in surface coordinates.
    pub bounds: Rect,
    /// Degrees.
    pub start_angle: f32,
    /// Signed degrees; positive sweeps run clockwise.
    pub sweep_angle: f32,
    pub paint: &'a StrokeStyle,
}

impl ArcCommand<'_> {
    #[inline]
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    pub fn to_scene(&self, offset: Vec2) -> ArcCmd {
        ArcCmd::new(self.bounds.translate(offset), self.start_angle, self.sweep_angle, self.paint.clone())
    }
}

/// Rim, empty and filled arcs, in paint order.
///
/// The filled arc comes last so it overlays the empty arc where they meet.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan<'a> {
    commands: [ArcCommand<'a>; 3],
}

impl<'a> DrawPlan<'a> {
    #[inline]
    pub fn commands(&self) -> &[ArcCommand<'a>; 3] {
        &self.commands
    }

    #[inline]
    pub fn rim(&self) -> &ArcCommand<'a> {
        &self.commands[0]
    }

    #[inline]
    pub fn empty(&self) -> &ArcCommand<'a> {
        &self.commands[1]
    }

    #[inline]
    pub fn filled(&self) -> &ArcCommand<'a> {
        &self.commands[2]
    }

    /// Shared arc box of all three commands.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.commands[0].bounds
    }
}

/// Circular progress indicator made of dashed arcs.
///
/// Draws a background rim over the full track, the empty remainder anchored at
/// the end angle, and the filled portion anchored at the start angle.
///
/// # Example
/// ```rust,ignore
/// let mut bar = DashedArcProgress::new(style).with_progress(0.25);
/// bar.on_invalidate(|| window.request_redraw());
/// bar.set_progress(0.5); // fires the callback
/// bar.paint(&mut draw_list, Rect::new(0.0, 0.0, 100.0, 100.0));
/// ```
pub struct DashedArcProgress {
    style: StyleConfig,
    paints: ArcPaints,
    /// Always in [0, 1].
    progress: f32,
    on_invalidate: Option<Box<dyn FnMut()>>,
}

impl DashedArcProgress {
    pub fn new(style: StyleConfig) -> Self {
        Self {
            paints: ArcPaints::from_style(&style),
            style,
            progress: 0.0,
            on_invalidate: None,
        }
    }

    pub fn with_progress(mut self, progress: f32) -> Self {
        self.progress = clamp_progress(progress);
        self
    }

    /// Registers the callback fired whenever the widget needs repainting.
    pub fn on_invalidate(&mut self, f: impl FnMut() + 'static) {
        self.on_invalidate = Some(Box::new(f));
    }

    #[inline]
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    #[inline]
    pub fn paints(&self) -> &ArcPaints {
        &self.paints
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Replaces the style and rebuilds the cached paints.
    pub fn set_style(&mut self, style: StyleConfig) {
        if style == self.style {
            return;
        }
        log::debug!("dashed arc restyled: {:?} -> {:?}", self.style, style);
        self.paints = ArcPaints::from_style(&style);
        self.style = style;
        self.invalidate();
    }

    /// Sets progress, clamped to [0, 1] (NaN counts as 0).
    ///
    /// Fires the invalidation callback when the stored value changes.
    /// Repainting itself is left to the host.
    pub fn set_progress(&mut self, progress: f32) {
        let progress = clamp_progress(progress);
        if progress == self.progress {
            return;
        }
        self.progress = progress;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        if let Some(f) = self.on_invalidate.as_mut() {
            f();
        }
    }

    /// Angular extent of the track in degrees, in (0, 360].
    ///
    /// Measured from the start angle to the end angle in the configured
    /// direction. Start and end at the same angle give a full 360° track
    /// clockwise and an empty one (0°) counter-clockwise.
    pub fn total_angle(&self) -> f32 {
        track_span(self.style.start_angle, self.style.end_angle, self.style.direction)
    }

    /// Vertical shift applied to the arc box when `cut_padding` is set.
    fn vertical_pad(&self, surface_height: f32) -> f32 {
        let half = surface_height as f64 / 2.0;
        let edge = |angle: f32| to_radians(-angle).sin() * half + half;
        edge(self.style.start_angle).min(edge(self.style.end_angle)) as f32
    }

    /// Computes the three arcs for a `surface_width × surface_height` surface.
    ///
    /// Pure: the same style, progress and size always yield the same plan.
    /// Non-positive sizes produce an empty box rather than an error.
    pub fn compute_draw_plan(&self, surface_width: f32, surface_height: f32) -> DrawPlan<'_> {
        let style = &self.style;

        let padding = style.stroke_inset();
        let shift = if style.cut_padding { self.vertical_pad(surface_height) } else { 0.0 };
        let bounds = Rect::new(0.0, 0.0, surface_width, surface_height)
            .inset(padding)
            .translate(Vec2::new(0.0, shift));

        // The arc primitive sweeps clockwise for positive angles, so the
        // direction is carried entirely by the sign.
        let track = self.total_angle() * style.direction.sign();
        let p = self.progress;

        let arc = |layer, start_angle, sweep_angle| ArcCommand {
            layer,
            bounds,
            start_angle,
            sweep_angle,
            paint: self.paints.get(layer),
        };

        DrawPlan {
            commands: [
                arc(ArcLayer::Rim, style.start_angle, track),
                arc(ArcLayer::Empty, style.end_angle, -track * (1.0 - p)),
                arc(ArcLayer::Filled, style.start_angle, track * p),
            ],
        }
    }

    /// Records the plan for `surface` into `draw_list`.
    ///
    /// Arcs that would draw nothing (zero sweep, invisible stroke, empty box)
    /// are left out.
    pub fn paint(&self, draw_list: &mut DrawList, surface: Rect) {
        let plan = self.compute_draw_plan(surface.size.x, surface.size.y);
        for cmd in plan.commands() {
            let scene = cmd.to_scene(surface.origin);
            if scene.is_degenerate() {
                log::trace!("dashed arc: skipping {:?} layer", cmd.layer);
                continue;
            }
            draw_list.push(DrawCmd::Arc(scene));
        }
    }
}

impl fmt::Debug for DashedArcProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashedArcProgress")
            .field("style", &self.style)
            .field("progress", &self.progress)
            .field("on_invalidate", &self.on_invalidate.is_some())
            .finish()
    }
}

#[inline]
fn clamp_progress(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Resolves the track extent from the start/end angles.
///
/// `total` is the legacy span formula; the arc it describes is `-total`
/// degrees long, which can overrun a full turn. Folding that into the
/// configured direction and wrapping gives the same endpoints in (0, 360].
///
/// Angles a whole number of turns apart give a full track in either
/// direction, the same as equal angles clockwise. Only (nearly) equal angles
/// counter-clockwise give 0. Rounding left over from large angles snaps to
/// those values instead of leaving a sliver.
fn track_span(start: f32, end: f32, direction: Direction) -> f32 {
    let dir = direction.sign();
    let raw = -dir * (360.0 - (start - end));
    let total = match direction {
        Direction::Clockwise => raw,
        Direction::CounterClockwise => 360.0 - raw,
    };
    let tolerance = 4.0 * f32::EPSILON * start.abs().max(end.abs()).max(360.0);
    if direction == Direction::CounterClockwise && (start - end).abs() <= tolerance {
        return 0.0;
    }
    let span = (-total * dir).rem_euclid(360.0);
    if span <= tolerance || span >= 360.0 - tolerance { 360.0 } else { span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use arcdash_engine::paint::Color;

    use crate::style::DashSpec;

    const EPS: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < EPS, "expected {expected}, got {actual}");
    }

    /// `a` and `b` name the same direction on the circle.
    fn assert_same_angle(a: f32, b: f32) {
        let d = (a - b).rem_euclid(360.0);
        assert!(d < EPS || d > 360.0 - EPS, "{a}° and {b}° differ by {d}°");
    }

    fn style(start: f32, end: f32, direction: Direction) -> StyleConfig {
        StyleConfig::new()
            .filled(DashSpec::new(8.0, 10.0, 4.0, Color::from_argb_u32(0xFF00_C853)))
            .empty(DashSpec::new(8.0, 10.0, 4.0, Color::from_argb_u32(0xFF42_4242)))
            .rim(Color::from_argb_u32(0x4000_0000), 2.0)
            .angles(start, end)
            .direction(direction)
    }

    fn bar(start: f32, end: f32, direction: Direction, progress: f32) -> DashedArcProgress {
        DashedArcProgress::new(style(start, end, direction)).with_progress(progress)
    }

    // ── concrete scenarios ────────────────────────────────────────────────

    #[test]
    fn full_circle_half_progress() {
        let b = bar(0.0, 360.0, Direction::Clockwise, 0.5);
        assert_eq!(b.total_angle(), 360.0);

        let plan = b.compute_draw_plan(100.0, 100.0);
        assert_eq!(plan.bounds().min(), Vec2::new(5.0, 5.0));
        assert_eq!(plan.bounds().max(), Vec2::new(95.0, 95.0));

        assert_eq!(plan.filled().start_angle, 0.0);
        assert_eq!(plan.filled().sweep_angle, 180.0);
        assert_eq!(plan.empty().start_angle, 360.0);
        assert_eq!(plan.empty().sweep_angle, -180.0);
        assert_eq!(plan.rim().sweep_angle, 360.0);
    }

    #[test]
    fn partial_arc_quarter_progress() {
        let b = bar(270.0, 90.0, Direction::Clockwise, 0.25);
        assert_eq!(b.total_angle(), 180.0);
        let plan = b.compute_draw_plan(100.0, 100.0);
        assert_eq!(plan.filled().sweep_angle, 45.0);
        assert_eq!(plan.empty().sweep_angle, -135.0);
    }

    // ── ordering / paints ─────────────────────────────────────────────────

    #[test]
    fn plan_order_and_paints() {
        let b = bar(0.0, 360.0, Direction::Clockwise, 0.3);
        let plan = b.compute_draw_plan(50.0, 50.0);
        let layers: Vec<ArcLayer> = plan.commands().iter().map(|c| c.layer).collect();
        assert_eq!(layers, vec![ArcLayer::Rim, ArcLayer::Empty, ArcLayer::Filled]);

        assert!(std::ptr::eq(plan.rim().paint, &b.paints().rim));
        assert!(std::ptr::eq(plan.empty().paint, &b.paints().empty));
        assert!(std::ptr::eq(plan.filled().paint, &b.paints().filled));
        assert!(plan.rim().paint.dash.is_none());
        assert_eq!(plan.filled().paint.dash.map(|d| d.intervals()), Some([8.0, 4.0]));
    }

    #[test]
    fn set_style_rebuilds_paints() {
        let mut b = bar(0.0, 360.0, Direction::Clockwise, 0.3);
        let restyled = b.style().filled(DashSpec::new(2.0, 3.0, 1.0, Color::from_argb_u32(0xFFFF_0000)));
        b.set_style(restyled);
        assert_eq!(b.paints().filled.width, 3.0);
        assert_eq!(b.paints().filled.dash.map(|d| d.intervals()), Some([2.0, 1.0]));
        assert_eq!(*b.paints(), ArcPaints::from_style(&restyled));
    }

    // ── properties ────────────────────────────────────────────────────────

    const CONFIGS: [(f32, f32); 6] = [
        (0.0, 360.0),
        (270.0, 90.0),
        (135.0, 45.0),
        (-90.0, 200.0),
        (30.0, 750.0),
        (400.0, 10.0),
    ];

    #[test]
    fn filled_and_empty_are_contiguous() {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            for (start, end) in CONFIGS {
                for p in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
                    let b = bar(start, end, direction, p);
                    let plan = b.compute_draw_plan(120.0, 80.0);
                    let (filled, empty) = (plan.filled(), plan.empty());

                    assert_same_angle(filled.end_angle(), empty.end_angle());
                    assert_close(filled.sweep_angle.abs() + empty.sweep_angle.abs(), b.total_angle());
                    // The two halves grow toward each other from opposite ends.
                    assert!(filled.sweep_angle * empty.sweep_angle <= 0.0);
                    assert_same_angle(plan.rim().end_angle(), end);
                }
            }
        }
    }

    #[test]
    fn zero_progress_draws_no_fill() {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            for (start, end) in CONFIGS {
                let b = bar(start, end, direction, 0.0);
                let plan = b.compute_draw_plan(100.0, 100.0);
                assert_eq!(plan.filled().sweep_angle, 0.0);
                assert_close(plan.empty().sweep_angle.abs(), b.total_angle());
            }
        }
    }

    #[test]
    fn full_progress_draws_no_remainder() {
        for direction in [Direction::Clockwise, Direction::CounterClockwise] {
            for (start, end) in CONFIGS {
                let b = bar(start, end, direction, 1.0);
                let plan = b.compute_draw_plan(100.0, 100.0);
                assert_eq!(plan.empty().sweep_angle, 0.0);
                assert_close(plan.filled().sweep_angle.abs(), b.total_angle());
            }
        }
    }

    #[test]
    fn counter_clockwise_covers_complementary_arc() {
        for (start, end) in [(270.0, 90.0), (30.0, 200.0), (135.0, 45.0)] {
            let cw = bar(start, end, Direction::Clockwise, 0.5);
            let ccw = bar(start, end, Direction::CounterClockwise, 0.5);
            assert_close(cw.total_angle() + ccw.total_angle(), 360.0);

            let (cw_plan, ccw_plan) = (cw.compute_draw_plan(90.0, 90.0), ccw.compute_draw_plan(90.0, 90.0));
            assert!(cw_plan.filled().sweep_angle > 0.0);
            assert!(ccw_plan.filled().sweep_angle < 0.0);
            assert!(cw_plan.rim().sweep_angle > 0.0);
            assert!(ccw_plan.rim().sweep_angle < 0.0);
        }

        // Midpoints of the two tracks sit on opposite sides.
        let cw = bar(270.0, 90.0, Direction::Clockwise, 0.5).compute_draw_plan(90.0, 90.0).filled().end_angle();
        let ccw = bar(270.0, 90.0, Direction::CounterClockwise, 0.5).compute_draw_plan(90.0, 90.0).filled().end_angle();
        assert_same_angle(cw, 0.0);
        assert_same_angle(ccw, 180.0);
    }

    #[test]
    fn plan_is_idempotent() {
        let b = bar(135.0, 45.0, Direction::CounterClockwise, 0.42);
        assert_eq!(b.compute_draw_plan(64.0, 48.0), b.compute_draw_plan(64.0, 48.0));
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn equal_angles() {
        assert_eq!(bar(90.0, 90.0, Direction::Clockwise, 0.5).total_angle(), 360.0);
        let ccw = bar(90.0, 90.0, Direction::CounterClockwise, 0.5);
        assert_eq!(ccw.total_angle(), 0.0);
        let plan = ccw.compute_draw_plan(100.0, 100.0);
        assert!(plan.commands().iter().all(|c| c.sweep_angle == 0.0));
    }

    #[test]
    fn whole_turns_apart_match_equal_angles() {
        for (start, end) in [(512.181, 152.181), (512.0, 152.0), (30.7, 390.7), (-45.3, 314.7), (1000.5, 280.5)] {
            let cw = bar(start, end, Direction::Clockwise, 0.5);
            assert_eq!(cw.total_angle(), 360.0, "{start}/{end}");
            let plan = cw.compute_draw_plan(100.0, 100.0);
            assert_eq!(plan.rim().sweep_angle, 360.0);
            assert_eq!(plan.filled().sweep_angle, 180.0);

            // Off by whole turns rather than equal, so counter-clockwise is a full track too.
            assert_eq!(bar(start, end, Direction::CounterClockwise, 0.5).total_angle(), 360.0);
        }
        assert_eq!(bar(90.0001, 90.0, Direction::CounterClockwise, 0.5).total_angle(), 0.0);
    }

    #[test]
    fn tiny_surface_yields_empty_box() {
        let b = bar(0.0, 360.0, Direction::Clockwise, 0.5);
        let plan = b.compute_draw_plan(0.0, -4.0);
        assert!(plan.bounds().is_empty());

        let mut list = DrawList::new();
        b.paint(&mut list, Rect::new(0.0, 0.0, 6.0, 6.0));
        assert!(list.is_empty());
    }

    // ── cut padding ───────────────────────────────────────────────────────

    #[test]
    fn cut_padding_shifts_box_down() {
        let mut s = style(135.0, 45.0, Direction::Clockwise);
        s.cut_padding = true;
        let b = DashedArcProgress::new(s).with_progress(0.5);
        let plan = b.compute_draw_plan(100.0, 100.0);

        // sin(-135°) = sin(-45°) = -√2/2, so the shift is 50 · (1 - √2/2).
        let shift = 50.0 * (1.0 - std::f32::consts::FRAC_1_SQRT_2);
        assert_close(plan.bounds().min().y, 5.0 + shift);
        assert_close(plan.bounds().max().y, 95.0 + shift);
        assert_eq!(plan.bounds().min().x, 5.0);
        assert_eq!(plan.bounds().max().x, 95.0);
    }

    #[test]
    fn cut_padding_uses_smaller_endpoint() {
        let mut s = style(180.0, 90.0, Direction::Clockwise);
        s.cut_padding = true;
        // f(180°) = 50, f(90°) = sin(-90°)·50 + 50 = 0.
        let b = DashedArcProgress::new(s);
        let plan = b.compute_draw_plan(100.0, 100.0);
        assert_close(plan.bounds().min().y, 5.0);
    }

    #[test]
    fn cut_padding_same_shift_counter_clockwise() {
        let with_cut = |direction| {
            let mut s = style(135.0, 45.0, direction);
            s.cut_padding = true;
            DashedArcProgress::new(s).with_progress(0.3)
        };
        let (cw, ccw) = (with_cut(Direction::Clockwise), with_cut(Direction::CounterClockwise));
        let (cw_plan, ccw_plan) = (cw.compute_draw_plan(100.0, 100.0), ccw.compute_draw_plan(100.0, 100.0));

        let shift = 50.0 * (1.0 - std::f32::consts::FRAC_1_SQRT_2);
        assert_eq!(ccw_plan.bounds(), cw_plan.bounds());
        assert_close(ccw_plan.bounds().min().y, 5.0 + shift);

        // The direction still picks the side of the circle.
        assert_close(ccw.total_angle(), 90.0);
        let (filled, empty) = (ccw_plan.filled(), ccw_plan.empty());
        assert!(filled.sweep_angle < 0.0);
        assert_same_angle(filled.end_angle(), empty.end_angle());
        assert_close(filled.sweep_angle.abs() + empty.sweep_angle.abs(), 90.0);
    }

    #[test]
    fn cut_padding_off_leaves_box() {
        let b = bar(135.0, 45.0, Direction::Clockwise, 0.5);
        let plan = b.compute_draw_plan(100.0, 100.0);
        assert_eq!(plan.bounds().min(), Vec2::new(5.0, 5.0));
    }

    // ── progress updates ──────────────────────────────────────────────────

    #[test]
    fn progress_is_clamped() {
        let mut b = bar(0.0, 360.0, Direction::Clockwise, 1.7);
        assert_eq!(b.progress(), 1.0);
        b.set_progress(-0.2);
        assert_eq!(b.progress(), 0.0);
        b.set_progress(f32::NAN);
        assert_eq!(b.progress(), 0.0);
    }

    #[test]
    fn invalidate_fires_on_change_only() {
        let count = Rc::new(Cell::new(0));
        let mut b = bar(0.0, 360.0, Direction::Clockwise, 0.0);
        let seen = Rc::clone(&count);
        b.on_invalidate(move || seen.set(seen.get() + 1));

        b.set_progress(0.5);
        b.set_progress(0.5);
        assert_eq!(count.get(), 1);

        b.set_progress(2.0);
        b.set_progress(1.0);
        assert_eq!(count.get(), 2);

        b.set_style(*b.style());
        assert_eq!(count.get(), 2);
        b.set_style(b.style().cut_padding(true));
        assert_eq!(count.get(), 3);
    }

    // ── scene output ──────────────────────────────────────────────────────

    #[test]
    fn paint_translates_and_orders() {
        let b = bar(270.0, 90.0, Direction::Clockwise, 0.25);
        let mut list = DrawList::new();
        b.paint(&mut list, Rect::new(20.0, 30.0, 100.0, 100.0));
        assert_eq!(list.len(), 3);

        let arcs: Vec<&ArcCmd> = list.items().iter().map(|DrawCmd::Arc(a)| a).collect();
        assert_eq!(arcs[0].bounds, Rect::new(25.0, 35.0, 90.0, 90.0));
        assert_eq!(arcs[0].stroke, b.paints().rim);
        assert_eq!(arcs[1].sweep_angle, -135.0);
        assert_eq!(arcs[2].sweep_angle, 45.0);
    }

    #[test]
    fn paint_skips_invisible_rim_and_empty_fill() {
        let s = style(0.0, 360.0, Direction::Clockwise).rim(Color::transparent(), 0.0);
        let b = DashedArcProgress::new(s);
        let mut list = DrawList::new();
        b.paint(&mut list, Rect::new(0.0, 0.0, 100.0, 100.0));

        // Only the empty arc remains: no rim, and progress 0 has no fill.
        assert_eq!(list.len(), 1);
        let DrawCmd::Arc(only) = &list.items()[0];
        assert_eq!(only.sweep_angle, -360.0);
    }
}
