// File: crates/crosshair-core/src/scale.rs
// Summary: Concrete pixel <-> value scales (linear, time, log10, category).

use chrono::{DateTime, TimeZone, Utc};

use crate::axis::{AxisKind, Scale, TickLabel};

/// Data-space value on an axis (epoch milliseconds on time axes).
pub type Value = f64;

/// Convert a timestamp to the value used on time axes (epoch milliseconds).
pub fn time_value<Tz: TimeZone>(t: &DateTime<Tz>) -> Value {
    t.timestamp_millis() as f64
}

/// Inverse of [`time_value`]; `None` when out of chrono's range.
pub fn value_time(v: Value) -> Option<DateTime<Utc>> {
    if !v.is_finite() { return None; }
    DateTime::<Utc>::from_timestamp_millis(v.round() as i64)
}

/// Continuous scale mapping `[min, max]` onto `[start_px, end_px]`.
/// A vertical axis uses `start_px = bottom`, `end_px = top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericScale {
    pub kind: AxisKind,
    pub min: Value,
    pub max: Value,
    pub start_px: f64,
    pub end_px: f64,
}

impl NumericScale {
    pub fn linear(min: Value, max: Value, start_px: f64, end_px: f64) -> Self {
        let mut s = Self { kind: AxisKind::Linear, min, max, start_px, end_px };
        if (s.max - s.min).abs() < 1e-12 { s.max = s.min + 1.0; }
        s
    }

    pub fn time<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>, start_px: f64, end_px: f64) -> Self {
        let mut s = Self::linear(time_value(from), time_value(to), start_px, end_px);
        s.kind = AxisKind::Time;
        s
    }

    pub fn log10(mut min: Value, mut max: Value, start_px: f64, end_px: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        min = if min <= eps { eps } else { min };
        max = if max <= min { min * 10.0 } else { max };
        Self { kind: AxisKind::Logarithmic, min, max, start_px, end_px }
    }

    /// Same scale over a new value range, keeping the pixel extent.
    pub fn with_range(&self, min: Value, max: Value) -> Self {
        match self.kind {
            AxisKind::Logarithmic => Self::log10(min, max, self.start_px, self.end_px),
            kind => {
                let mut s = Self::linear(min, max, self.start_px, self.end_px);
                s.kind = kind;
                s
            }
        }
    }

    fn is_log(&self) -> bool { self.kind == AxisKind::Logarithmic }
}

impl Scale for NumericScale {
    fn kind(&self) -> AxisKind { self.kind }
    fn min(&self) -> f64 { self.min }
    fn max(&self) -> f64 { self.max }

    fn pixel_for_value(&self, v: Value) -> f64 {
        let extent = self.end_px - self.start_px;
        if self.is_log() {
            if !(v > 0.0) { return f64::NAN; }
            let (lo, hi) = (self.min.log10(), self.max.log10());
            let span = (hi - lo).max(1e-12);
            self.start_px + (v.log10() - lo) / span * extent
        } else {
            let span = (self.max - self.min).max(1e-12);
            self.start_px + (v - self.min) / span * extent
        }
    }

    fn value_for_pixel(&self, px: f64) -> Value {
        let extent = self.end_px - self.start_px;
        if extent == 0.0 { return self.min; }
        let frac = (px - self.start_px) / extent;
        if self.is_log() {
            let (lo, hi) = (self.min.log10(), self.max.log10());
            10f64.powf(lo + frac * (hi - lo))
        } else {
            self.min + frac * (self.max - self.min)
        }
    }
}

/// Discrete scale: tick `i` sits at `start_px + (i - min) / (max - min) * extent`.
/// The inverse returns a fractional index.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryScale {
    pub labels: Vec<TickLabel>,
    pub min: f64,
    pub max: f64,
    pub start_px: f64,
    pub end_px: f64,
}

impl CategoryScale {
    /// Scale showing every label.
    pub fn new(labels: Vec<TickLabel>, start_px: f64, end_px: f64) -> Self {
        let max = labels.len().saturating_sub(1) as f64;
        Self { labels, min: 0.0, max, start_px, end_px }
    }

    /// Restrict the visible index window; bounds are rounded to whole ticks
    /// and clamped to the label range.
    pub fn with_range(&self, min: f64, max: f64) -> Self {
        let last = self.labels.len().saturating_sub(1) as f64;
        let lo = min.round().max(0.0).min(last);
        let hi = max.round().max(lo).min(last);
        Self { labels: self.labels.clone(), min: lo, max: hi, start_px: self.start_px, end_px: self.end_px }
    }
}

impl Scale for CategoryScale {
    fn kind(&self) -> AxisKind { AxisKind::Category }
    fn min(&self) -> f64 { self.min }
    fn max(&self) -> f64 { self.max }
    fn ticks(&self) -> &[TickLabel] { &self.labels }

    fn pixel_for_value(&self, index: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 { return self.start_px; }
        self.start_px + (index - self.min) / span * (self.end_px - self.start_px)
    }

    fn value_for_pixel(&self, px: f64) -> f64 {
        let extent = self.end_px - self.start_px;
        if extent == 0.0 { return self.min; }
        self.min + (px - self.start_px) / extent * (self.max - self.min)
    }
}

/// Either scale flavour, as held by [`crate::HeadlessChart`].
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    Numeric(NumericScale),
    Category(CategoryScale),
}

impl AxisScale {
    pub fn with_range(&self, min: f64, max: f64) -> Self {
        match self {
            AxisScale::Numeric(s) => AxisScale::Numeric(s.with_range(min, max)),
            AxisScale::Category(s) => AxisScale::Category(s.with_range(min, max)),
        }
    }

    fn inner(&self) -> &dyn Scale {
        match self {
            AxisScale::Numeric(s) => s,
            AxisScale::Category(s) => s,
        }
    }
}

impl Scale for AxisScale {
    fn kind(&self) -> AxisKind { self.inner().kind() }
    fn min(&self) -> f64 { self.inner().min() }
    fn max(&self) -> f64 { self.inner().max() }
    fn pixel_for_value(&self, v: f64) -> f64 { self.inner().pixel_for_value(v) }
    fn value_for_pixel(&self, px: f64) -> f64 { self.inner().value_for_pixel(px) }
    fn ticks(&self) -> &[TickLabel] { self.inner().ticks() }
}

impl From<NumericScale> for AxisScale {
    fn from(s: NumericScale) -> Self { AxisScale::Numeric(s) }
}

impl From<CategoryScale> for AxisScale {
    fn from(s: CategoryScale) -> Self { AxisScale::Category(s) }
}
