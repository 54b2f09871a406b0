use anyhow::{Context, Result};
use resvg::tiny_skia::{self as sk, Pixmap};

use crate::paint::{Color, LineCap, StrokeStyle};
use crate::scene::{ArcCmd, DrawCmd, DrawList};

use super::path::arc_path;

/// Rendered RGBA8 image (straight alpha, row-major, top-left origin).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Frame {
    /// Pixel at `(x, y)` as `[r, g, b, a]`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba.get(i..i + 4).and_then(|p| p.try_into().ok())
    }
}

/// Strokes draw lists into a CPU pixmap.
///
/// Supported commands:
/// - `DrawCmd::Arc`, with solid or dashed strokes
///
/// Degenerate commands (empty bounds, zero sweep, invisible stroke) are skipped.
#[derive(Debug, Clone)]
pub struct PixmapRenderer {
    pub background: Color,
    pub anti_alias: bool,
}

impl Default for PixmapRenderer {
    fn default() -> Self {
        Self { background: Color::transparent(), anti_alias: true }
    }
}

impl PixmapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Renders `draw_list` onto a fresh `width × height` canvas.
    pub fn render(&self, draw_list: &DrawList, width: u32, height: u32) -> Result<Frame> {
        anyhow::ensure!(width > 0 && height > 0, "canvas has zero size ({width}x{height})");

        let mut pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} pixmap"))?;

        let [r, g, b, a] = self.background.to_srgba8();
        pixmap.fill(sk::Color::from_rgba8(r, g, b, a));

        for cmd in draw_list.items() {
            match cmd {
                DrawCmd::Arc(arc) => self.stroke_arc(&mut pixmap, arc),
            }
        }

        let rgba = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        Ok(Frame { width, height, rgba })
    }

    fn stroke_arc(&self, pixmap: &mut Pixmap, arc: &ArcCmd) {
        if arc.is_degenerate() {
            log::trace!("skipping degenerate arc at {}° sweep {}°", arc.start_angle, arc.sweep_angle);
            return;
        }

        let Some(path) = arc_path(arc.bounds, arc.start_angle, arc.sweep_angle) else {
            return;
        };

        let mut paint = sk::Paint::default();
        let [r, g, b, a] = arc.stroke.color.to_srgba8();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.anti_alias;

        pixmap.stroke_path(&path, &paint, &to_sk_stroke(&arc.stroke), sk::Transform::identity(), None);
    }
}

fn to_sk_stroke(style: &StrokeStyle) -> sk::Stroke {
    let mut stroke = sk::Stroke {
        width: style.width,
        ..sk::Stroke::default()
    };
    stroke.line_cap = match style.cap {
        LineCap::Butt => sk::LineCap::Butt,
        LineCap::Round => sk::LineCap::Round,
        LineCap::Square => sk::LineCap::Square,
    };
    // A pattern tiny-skia rejects falls back to a continuous stroke.
    stroke.dash = style
        .dash
        .and_then(|d| sk::StrokeDash::new(d.intervals().to_vec(), d.phase));
    stroke
}
