// File: crates/crosshair-core/src/render.rs
// Summary: Renderer-agnostic drawing surface plus a recording implementation.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Stroke styling for lines and outlines. An empty `dash` draws solid.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: Vec::new() }
    }

    pub fn dashed(color: Color, width: f64, dash: impl Into<Vec<f64>>) -> Self {
        Self { color, width, dash: dash.into() }
    }
}

/// Drawing primitives the crosshair needs from the host canvas.
pub trait DrawSurface {
    fn line(&mut self, from: Point, to: Point, stroke: &StrokeStyle);
    /// Fill (if `fill` is set) and then outline (if `stroke` is set) `rect`.
    fn rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<&StrokeStyle>);
    fn circle(&mut self, center: Point, radius: f64, fill: Option<Color>, stroke: Option<&StrokeStyle>);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { from: Point, to: Point, stroke: StrokeStyle },
    Rect { rect: Rect, fill: Option<Color>, stroke: Option<StrokeStyle> },
    Circle { center: Point, radius: f64, fill: Option<Color>, stroke: Option<StrokeStyle> },
}

/// Surface that only records what was drawn.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.commands.clear(); }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &StrokeStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (&Point, f64)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } => Some((center, *radius)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn line(&mut self, from: Point, to: Point, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::Line { from, to, stroke: stroke.clone() });
    }

    fn rect(&mut self, rect: Rect, fill: Option<Color>, stroke: Option<&StrokeStyle>) {
        self.commands.push(DrawCommand::Rect { rect, fill, stroke: stroke.cloned() });
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Option<Color>, stroke: Option<&StrokeStyle>) {
        self.commands.push(DrawCommand::Circle { center, radius, fill, stroke: stroke.cloned() });
    }
}
