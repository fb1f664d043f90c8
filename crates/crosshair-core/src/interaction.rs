// File: crates/crosshair-core/src/interaction.rs
// Summary: Interaction items (host hits and interpolated points) and the interpolating interaction mode.

use tracing::trace;

use crate::geometry::Point;
use crate::host::ChartHost;
use crate::interpolate::{interpolate_to_pixel, DataPoint, InterpolationInput};

/// Element under the pointer: either a real sample found by the host's
/// hit-test or a point synthesised by interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementRef {
    Hit { index: usize, position: Point, value: DataPoint },
    Interpolated { position: Point, value: DataPoint },
}

impl ElementRef {
    /// Pixel anchor used for drawing and tooltip placement.
    pub fn position(&self) -> Point {
        match *self {
            ElementRef::Hit { position, .. } | ElementRef::Interpolated { position, .. } => position,
        }
    }

    pub fn value(&self) -> DataPoint {
        match *self {
            ElementRef::Hit { value, .. } | ElementRef::Interpolated { value, .. } => value,
        }
    }

    pub fn is_interpolated(&self) -> bool { matches!(self, ElementRef::Interpolated { .. }) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionItem {
    pub dataset_index: usize,
    pub element: ElementRef,
}

/// Interaction mode: interpolated items for every visible dataset that opts
/// in, followed by the host's nearest-x items of the datasets that do not.
pub fn interpolate_mode(chart: &dyn ChartHost, pointer: Point) -> Vec<InteractionItem> {
    let mut items = Vec::new();
    let datasets = chart.datasets();

    if let (Some(xs), Some(ys)) = (chart.x_scale(), chart.y_scale()) {
        for (dataset_index, dataset) in datasets.iter().enumerate() {
            if !dataset.interpolate || dataset.hidden {
                continue;
            }
            let input = InterpolationInput::for_dataset(xs, ys, dataset, pointer.x);
            match interpolate_to_pixel(&input) {
                Ok((out, y_px)) => items.push(InteractionItem {
                    dataset_index,
                    element: ElementRef::Interpolated {
                        position: Point::new(pointer.x, y_px),
                        value: DataPoint::new(out.x, out.y),
                    },
                }),
                Err(reason) => trace!(dataset_index, %reason, "skipping dataset"),
            }
        }
    }

    items.extend(
        chart
            .nearest_x_items(pointer)
            .into_iter()
            .filter(|item| datasets.get(item.dataset_index).map_or(true, |d| !d.interpolate)),
    );
    items
}
