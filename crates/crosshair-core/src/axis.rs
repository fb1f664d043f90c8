// File: crates/crosshair-core/src/axis.rs
// Summary: Axis kinds, tick labels, user range overrides and the scale contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CrosshairError;

/// Axis types the crosshair understands. Anything else leaves the chart inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Linear,
    Time,
    Category,
    Logarithmic,
}

impl AxisKind {
    pub fn is_category(self) -> bool { matches!(self, AxisKind::Category) }

    pub fn as_str(self) -> &'static str {
        match self {
            AxisKind::Linear => "linear",
            AxisKind::Time => "time",
            AxisKind::Category => "category",
            AxisKind::Logarithmic => "logarithmic",
        }
    }
}

impl FromStr for AxisKind {
    type Err = CrosshairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(AxisKind::Linear),
            "time" => Ok(AxisKind::Time),
            "category" => Ok(AxisKind::Category),
            "logarithmic" => Ok(AxisKind::Logarithmic),
            other => Err(CrosshairError::UnsupportedAxis(other.to_string())),
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Label attached to a category tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickLabel {
    Number(f64),
    Text(String),
}

impl TickLabel {
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            TickLabel::Number(v) => Some(v),
            TickLabel::Text(_) => None,
        }
    }
}

/// True when every tick carries a numeric label (vacuously true for no ticks).
pub fn ticks_are_numeric(ticks: &[TickLabel]) -> bool {
    ticks.iter().all(|t| t.as_number().is_some())
}

/// User-specified bounds for the x axis; `None` lets the host fit the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AxisRange {
    pub const UNSET: AxisRange = AxisRange { min: None, max: None };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }
}

/// Bidirectional pixel/value mapping exposed by the host for one axis.
///
/// For category axes values are (possibly fractional) tick indices and
/// `min`/`max` are the first and last visible indices.
pub trait Scale {
    fn kind(&self) -> AxisKind;
    fn min(&self) -> f64;
    fn max(&self) -> f64;
    fn pixel_for_value(&self, value: f64) -> f64;
    fn value_for_pixel(&self, pixel: f64) -> f64;
    /// Category tick labels; empty for continuous axes.
    fn ticks(&self) -> &[TickLabel] { &[] }

    /// Pixel positions of `min` and `max`.
    fn pixel_bounds(&self) -> (f64, f64) {
        (self.pixel_for_value(self.min()), self.pixel_for_value(self.max()))
    }
}
