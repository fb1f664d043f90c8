// File: crates/crosshair-render-skia/src/png.rs
// Summary: Headless PNG rendering of a `HeadlessChart` with its crosshair overlay using Skia CPU raster surfaces.

use anyhow::Result;
use crosshair_core::{ChartHost, ChartInstance, Color, Dataset, HeadlessChart, Rect, Scale};
use skia_safe as skia;
use tracing::debug;

use crate::surface::{to_skia_color, SkiaSurface};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub background: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub draw_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Color::from_rgb(18, 18, 20), // near-black
            grid_color: Color::from_rgb(40, 40, 45),
            axis_color: Color::from_rgb(180, 180, 190),
            draw_grid: true,
        }
    }
}

/// Render the chart, then the crosshair's after-draw pass, and encode as PNG.
pub fn render_to_png_bytes(inst: &mut ChartInstance<HeadlessChart>, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (width, height) = (inst.host().width, inst.host().height);
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

    {
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(opts.background));

        let host = inst.host();
        let plot = host.plot_rect();
        if opts.draw_grid {
            draw_grid(canvas, &plot, opts.grid_color);
        }
        draw_axes(canvas, &plot, opts.axis_color);

        canvas.save();
        canvas.clip_rect(to_skia_rect(&plot), skia::ClipOp::Intersect, true);
        if let (Some(xs), Some(ys)) = (host.x_scale(), host.y_scale()) {
            for dataset in host.datasets().iter().filter(|d| !d.hidden) {
                draw_dataset(canvas, xs, ys, dataset);
            }
        }
        canvas.restore();

        inst.draw(&mut SkiaSurface::new(canvas));
    }

    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    inst: &mut ChartInstance<HeadlessChart>,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(inst, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "png written");
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn to_skia_rect(r: &Rect) -> skia::Rect {
    skia::Rect::from_ltrb(r.left() as f32, r.top() as f32, r.right() as f32, r.bottom() as f32)
}

fn draw_grid(canvas: &skia::Canvas, plot: &Rect, color: Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia_color(color));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    let (l, t, r, b) = (plot.left() as f32, plot.top() as f32, plot.right() as f32, plot.bottom() as f32);
    for i in 0..=10 {
        let x = l + (r - l) * i as f32 / 10.0;
        canvas.draw_line((x, t), (x, b), &paint);
    }
    for i in 0..=8 {
        let y = t + (b - t) * i as f32 / 8.0;
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &Rect, color: Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia_color(color));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);
    let (l, t, r, b) = (plot.left() as f32, plot.top() as f32, plot.right() as f32, plot.bottom() as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_dataset(canvas: &skia::Canvas, xs: &dyn Scale, ys: &dyn Scale, dataset: &Dataset) {
    let mut path = skia::Path::new();
    let mut started = false;
    let mut last_y = 0.0f32;
    for (i, sample) in dataset.data.iter().enumerate() {
        let x = xs.pixel_for_value(sample.x_at(i)) as f32;
        let y = ys.pixel_for_value(sample.y()) as f32;
        if !x.is_finite() || !y.is_finite() {
            // gap in the data: restart the line after it
            started = false;
            continue;
        }
        if !started {
            path.move_to((x, y));
            started = true;
        } else {
            if dataset.stepped {
                path.line_to((x, last_y));
            }
            path.line_to((x, y));
        }
        last_y = y;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(to_skia_color(dataset.border_color));
    canvas.draw_path(&path, &stroke);
}
