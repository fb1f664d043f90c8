// File: crates/crosshair-core/src/series.rs
// Summary: Dataset model: ordered samples plus the per-dataset flags the crosshair reads.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One sample of a dataset: a bare value at its implicit index, or an explicit
/// `(x, y)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    Point { x: f64, y: f64 },
    Value(f64),
}

impl Sample {
    pub const fn point(x: f64, y: f64) -> Self { Sample::Point { x, y } }

    /// X position of the sample stored at `index`.
    #[inline]
    pub fn x_at(&self, index: usize) -> f64 {
        match *self {
            Sample::Point { x, .. } => x,
            Sample::Value(_) => index as f64,
        }
    }

    #[inline]
    pub fn y(&self) -> f64 {
        match *self {
            Sample::Point { y, .. } | Sample::Value(y) => y,
        }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self { Sample::Point { x, y } }
}

impl From<f64> for Sample {
    fn from(v: f64) -> Self { Sample::Value(v) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    pub data: Vec<Sample>,
    #[serde(default)]
    pub hidden: bool,
    /// Opt in to interpolated values under the crosshair.
    #[serde(default)]
    pub interpolate: bool,
    /// Rendered as horizontal steps instead of sloped segments.
    #[serde(default)]
    pub stepped: bool,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
}

fn default_border_color() -> Color { Color::from_rgb(64, 160, 255) }

impl Dataset {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: Vec::new(),
            hidden: false,
            interpolate: false,
            stepped: false,
            border_color: default_border_color(),
        }
    }

    /// Dataset of explicit `(x, y)` points.
    pub fn with_points(label: impl Into<String>, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut d = Self::new(label);
        d.data = points.into_iter().map(Sample::from).collect();
        d
    }

    /// Dataset of bare values at implicit indices (category charts).
    pub fn with_values(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let mut d = Self::new(label);
        d.data = values.into_iter().map(Sample::Value).collect();
        d
    }

    pub fn interpolated(mut self) -> Self { self.interpolate = true; self }
    pub fn stepped(mut self) -> Self { self.stepped = true; self }
    pub fn hidden(mut self) -> Self { self.hidden = true; self }
    pub fn with_border_color(mut self, color: Color) -> Self { self.border_color = color; self }

    /// `(x_min, x_max, y_min, y_max)` over finite samples, or `None` when empty.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        let mut ext: Option<(f64, f64, f64, f64)> = None;
        for (i, s) in self.data.iter().enumerate() {
            let (x, y) = (s.x_at(i), s.y());
            if !x.is_finite() || !y.is_finite() { continue; }
            ext = Some(match ext {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
        ext
    }
}
