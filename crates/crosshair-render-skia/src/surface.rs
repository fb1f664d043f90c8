// File: crates/crosshair-render-skia/src/surface.rs
// Summary: `DrawSurface` implementation drawing onto a borrowed Skia canvas.

use crosshair_core::render::{DrawSurface, StrokeStyle};
use crosshair_core::{Color, Point, Rect};
use skia_safe as skia;

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Crosshair drawing target backed by a Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }

    fn stroke_paint(&self, stroke: &StrokeStyle) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width as f32);
        paint.set_color(to_skia_color(stroke.color));
        if !stroke.dash.is_empty() {
            // odd-length patterns repeat once, like a canvas line dash
            let mut intervals: Vec<f32> = stroke.dash.iter().map(|&d| d.max(0.0) as f32).collect();
            if intervals.len() % 2 == 1 {
                intervals.extend_from_within(..);
            }
            if intervals.iter().any(|&d| d > 0.0) {
                paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
            }
        }
        paint
    }

    fn fill_paint(&self, color: Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(color));
        paint
    }
}

fn pt(p: Point) -> (f32, f32) { (p.x as f32, p.y as f32) }

impl DrawSurface for SkiaSurface<'_> {
    fn line(&mut self, from: Point, to: Point, stroke: &StrokeStyle) {
        let paint = self.stroke_paint(stroke);
        self.canvas.draw_line(pt(from), pt(to), &paint);
    }

    fn rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<&StrokeStyle>) {
        let r = rect.normalized();
        let sk = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);
        if let Some(color) = fill {
            self.canvas.draw_rect(sk, &self.fill_paint(color));
        }
        if let Some(stroke) = stroke {
            self.canvas.draw_rect(sk, &self.stroke_paint(stroke));
        }
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Option<Color>, stroke: Option<&StrokeStyle>) {
        if let Some(color) = fill {
            self.canvas.draw_circle(pt(center), radius as f32, &self.fill_paint(color));
        }
        if let Some(stroke) = stroke {
            self.canvas.draw_circle(pt(center), radius as f32, &self.stroke_paint(stroke));
        }
    }
}
