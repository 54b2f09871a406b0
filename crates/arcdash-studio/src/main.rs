use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use arcdash_engine::logging::{init_logging, LoggingConfig};
use arcdash_engine::render::{Frame, PixmapRenderer};
use arcdash_ui::attrs::parse_color;
use arcdash_ui::prelude::*;

/// Render dashed arc progress indicators to PNG.
#[derive(Debug, Parser)]
#[command(name = "arcdash-studio", version)]
struct Args {
    /// Style attribute, e.g. `filledProgressBarWidth=12dp`. Repeatable.
    #[arg(short = 'a', long = "attr", value_name = "NAME=VALUE", value_parser = AttributeSet::parse_pair)]
    attrs: Vec<(String, String)>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 200)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 200)]
    height: u32,

    /// Pixels per `dp` unit in attribute values.
    #[arg(long, default_value_t = 1.0)]
    density: f32,

    /// Progress to render, 0..1.
    #[arg(long, default_value_t = 0.5, conflicts_with = "frames")]
    progress: f32,

    /// Render an animation of N frames sweeping progress from 0 to 1.
    #[arg(long, value_name = "N")]
    frames: Option<u32>,

    /// Background color, `#RRGGBB` or `#AARRGGBB`. Transparent by default.
    #[arg(long)]
    background: Option<String>,

    /// Output PNG. Animated runs append `-NNN` before the extension.
    #[arg(short, long, default_value = "arcdash.png")]
    out: PathBuf,

    /// Log filter (env_logger syntax). Falls back to `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    let mut attrs = AttributeSet::new().with_density(args.density);
    for (name, value) in &args.attrs {
        attrs.set(name, value);
    }
    let style = StyleConfig::from_attributes(&attrs).context("invalid style attributes")?;
    log::debug!("resolved style: {style:?}");

    let mut renderer = PixmapRenderer::new();
    if let Some(bg) = &args.background {
        renderer = renderer
            .with_background(parse_color(bg).map_err(anyhow::Error::msg).context("invalid --background")?);
    }

    let mut bar = DashedArcProgress::new(style);
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    bar.on_invalidate(move || flag.set(true));

    let surface = Rect::new(0.0, 0.0, args.width as f32, args.height as f32);

    match args.frames {
        None => {
            bar.set_progress(args.progress);
            let frame = render(&bar, &renderer, surface)?;
            write_png(frame, &args.out)?;
        }
        Some(0) => anyhow::bail!("--frames must be at least 1"),
        Some(n) => {
            let mut last: Option<Frame> = None;
            for i in 0..n {
                let progress = if n == 1 { 1.0 } else { i as f32 / (n - 1) as f32 };
                bar.set_progress(progress);

                // Unchanged progress leaves the previous frame valid.
                let frame = match last.take() {
                    Some(prev) if !dirty.get() => prev,
                    _ => render(&bar, &renderer, surface)?,
                };
                dirty.set(false);

                write_png(frame.clone(), &frame_path(&args.out, i))?;
                last = Some(frame);
            }
        }
    }

    Ok(())
}

fn render(bar: &DashedArcProgress, renderer: &PixmapRenderer, surface: Rect) -> Result<Frame> {
    let mut draw_list = DrawList::new();
    bar.paint(&mut draw_list, surface);
    log::debug!("progress {:.3}: {} arc(s)", bar.progress(), draw_list.len());
    renderer.render(&draw_list, surface.size.x as u32, surface.size.y as u32)
}

fn write_png(frame: Frame, path: &Path) -> Result<()> {
    let (w, h) = (frame.width, frame.height);
    let img = image::RgbaImage::from_raw(w, h, frame.rgba).context("frame buffer has wrong length")?;
    img
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {} ({w}x{h})", path.display());
    Ok(())
}

/// `out.png` → `out-007.png`.
fn frame_path(out: &Path, index: u32) -> PathBuf {
    let stem = out.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let name = match out.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{index:03}.{ext}"),
        None => format!("{stem}-{index:03}"),
    };
    out.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths() {
        assert_eq!(frame_path(Path::new("out/ring.png"), 7), PathBuf::from("out/ring-007.png"));
        assert_eq!(frame_path(Path::new("ring"), 12), PathBuf::from("ring-012"));
    }

    #[test]
    fn writes_png_without_extension() {
        let path = std::env::temp_dir().join(format!("arcdash-studio-{}", std::process::id()));
        let frame = Frame { width: 2, height: 1, rgba: vec![255, 0, 0, 255, 0, 0, 0, 0] };
        write_png(frame, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn parses_repeated_attrs() {
        let args = Args::try_parse_from([
            "arcdash-studio",
            "--attr",
            "startAngle=90",
            "-a",
            "direction=ccw",
            "--frames",
            "4",
        ])
        .unwrap();
        assert_eq!(args.attrs.len(), 2);
        assert_eq!(args.attrs[1], ("direction".to_string(), "ccw".to_string()));
        assert_eq!(args.frames, Some(4));
    }

    #[test]
    fn progress_conflicts_with_frames() {
        assert!(Args::try_parse_from(["arcdash-studio", "--progress", "0.3", "--frames", "2"]).is_err());
    }

    #[test]
    fn render_filled_half_only() {
        let attrs = AttributeSet::new()
            .attr("filledProgressBarWidth", "8")
            .attr("filledProgressBarColor", "#FFFF0000")
            .attr("emptyProgressBarWidth", "8");
        let bar = DashedArcProgress::new(StyleConfig::from_attributes(&attrs).unwrap()).with_progress(0.5);
        let frame = render(&bar, &PixmapRenderer::new(), Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();

        // Box is [4, 96]; 0° → 180° clockwise passes through the bottom.
        assert_eq!(frame.pixel(50, 95), Some([255, 0, 0, 255]));
        // Empty arc is transparent, so the top stays clear.
        assert_eq!(frame.pixel(50, 4).map(|p| p[3]), Some(0));
    }
}
