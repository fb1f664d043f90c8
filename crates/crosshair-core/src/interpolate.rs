// File: crates/crosshair-core/src/interpolate.rs
// Summary: Cursor-pixel to data-value inversion with linear/stepped interpolation between samples.
// Notes:
// - Category axes work in index space and need a one-pixel rounding fix-up
//   plus a final clamp, since the arithmetic can overshoot at the edges.
// - Both regimes skip a cursor that falls outside the x axis range.
// - Continuous axes (linear/time/logarithmic) invert the cursor directly.

use crate::axis::{ticks_are_numeric, Scale, TickLabel};
use crate::error::InterpolationError;
use crate::series::{Dataset, Sample};

/// A sample position in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Result of interpolating one dataset at the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolated {
    /// Sample on or before the cursor.
    pub prev: DataPoint,
    /// Sample on or after the cursor.
    pub next: DataPoint,
    pub x: f64,
    pub y: f64,
}

/// Everything the interpolator reads for one dataset.
#[derive(Clone, Copy)]
pub struct InterpolationInput<'a> {
    pub x_scale: &'a dyn Scale,
    pub y_scale: &'a dyn Scale,
    pub cursor_px: f64,
    pub data: &'a [Sample],
    pub ticks: &'a [TickLabel],
    /// Whether every category tick carries a numeric label.
    pub numeric_ticks: bool,
    pub stepped: bool,
}

impl<'a> InterpolationInput<'a> {
    pub fn for_dataset(x_scale: &'a dyn Scale, y_scale: &'a dyn Scale, dataset: &'a Dataset, cursor_px: f64) -> Self {
        let ticks = x_scale.ticks();
        Self {
            x_scale,
            y_scale,
            cursor_px,
            data: &dataset.data,
            ticks,
            numeric_ticks: ticks_are_numeric(ticks),
            stepped: dataset.stepped,
        }
    }
}

type Outcome = Result<Interpolated, InterpolationError>;

/// X value of category index `idx`: its numeric label if labels are numeric,
/// else the index itself.
fn category_x(idx: usize, ticks: &[TickLabel], numeric_ticks: bool) -> f64 {
    if !numeric_ticks {
        return idx as f64;
    }
    ticks.get(idx).and_then(TickLabel::as_number).unwrap_or(idx as f64)
}

/// Interpolate on a category axis. X and y are clamped into the visible range;
/// a cursor outside the axis is skipped.
pub fn interpolate_category(input: &InterpolationInput<'_>) -> Outcome {
    let xs = input.x_scale;
    let (min, max) = (xs.min(), xs.max());
    let cursor = input.cursor_px;

    let value = xs.value_for_pixel(cursor);
    if !(value >= min && value <= max) {
        return Err(InterpolationError::CursorOutOfRange);
    }
    let mut index = value.floor();
    if index <= min {
        index = min + 1.0;
    }
    // inverse mapping rounds asymmetrically; step past the tick we are beyond
    if cursor > xs.pixel_for_value(index) {
        index += 1.0;
    }
    if index > max {
        index = max;
    }
    if index < 1.0 {
        return Err(InterpolationError::NoBracket);
    }

    let i = index as usize;
    let (ticks, numeric) = (input.ticks, input.numeric_ticks);
    let x1 = category_x(i - 1, ticks, numeric);
    let x2 = category_x(i, ticks, numeric);
    let y1 = input.data.get(i - 1).map(Sample::y).ok_or(InterpolationError::NoBracket)?;
    let y2 = input.data.get(i).map(Sample::y).ok_or(InterpolationError::NoBracket)?;

    let px1 = xs.pixel_for_value(index - 1.0);
    let px2 = xs.pixel_for_value(index);
    let t = (cursor - px1) / (px2 - px1);

    let mut x = (x2 - x1) * t + x1;
    let mut y = (y2 - y1) * t + y1;
    if input.stepped {
        y = if cursor >= xs.pixel_for_value(max) { y2 } else { y1 };
    }
    if !y.is_finite() {
        return Err(InterpolationError::NotFinite);
    }

    let first_x = if index - 1.0 == min { x1 } else { category_x(min as usize, ticks, numeric) };
    let last_x = if index == max { x2 } else { category_x(max as usize, ticks, numeric) };
    x = x.min(last_x).max(first_x);
    y = y.min(input.y_scale.max()).max(input.y_scale.min());

    Ok(Interpolated { prev: DataPoint::new(x1, y1), next: DataPoint::new(x2, y2), x, y })
}

/// Interpolate on a linear, time or logarithmic axis.
pub fn interpolate_continuous(input: &InterpolationInput<'_>) -> Outcome {
    let xs = input.x_scale;
    let x = xs.value_for_pixel(input.cursor_px);
    if !(x >= xs.min() && x <= xs.max()) {
        return Err(InterpolationError::CursorOutOfRange);
    }

    let data = input.data;
    let mut index = data
        .iter()
        .enumerate()
        .position(|(i, s)| s.x_at(i) >= x)
        .ok_or(InterpolationError::NoBracket)?;
    if index == 0 {
        // cursor exactly on the first sample still brackets with its successor
        if data.len() > 1 && data[0].x_at(0) == x {
            index = 1;
        } else {
            return Err(InterpolationError::NoBracket);
        }
    }

    let prev = DataPoint::new(data[index - 1].x_at(index - 1), data[index - 1].y());
    let next = DataPoint::new(data[index].x_at(index), data[index].y());

    let y = if input.stepped {
        prev.y
    } else {
        let slope = (next.y - prev.y) / (next.x - prev.x);
        prev.y + (x - prev.x) * slope
    };
    if !y.is_finite() {
        return Err(InterpolationError::NotFinite);
    }

    Ok(Interpolated { prev, next, x, y })
}

/// Interpolate one dataset at `cursor_px`, choosing the regime by axis kind.
pub fn interpolate(input: &InterpolationInput<'_>) -> Outcome {
    if input.x_scale.kind().is_category() {
        interpolate_category(input)
    } else {
        let out = interpolate_continuous(input)?;
        let ys = input.y_scale;
        if out.y < ys.min().min(ys.max()) || out.y > ys.max().max(ys.min()) {
            return Err(InterpolationError::ValueOutOfRange);
        }
        Ok(out)
    }
}

/// Interpolate and project the value back to a y pixel. Datasets whose value
/// cannot be placed on the y axis yield [`InterpolationError::Unmappable`].
pub fn interpolate_to_pixel(input: &InterpolationInput<'_>) -> Result<(Interpolated, f64), InterpolationError> {
    let out = interpolate(input)?;
    let y_px = input.y_scale.pixel_for_value(out.y);
    if !y_px.is_finite() {
        return Err(InterpolationError::Unmappable);
    }
    Ok((out, y_px))
}
