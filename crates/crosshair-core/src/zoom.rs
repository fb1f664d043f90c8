// File: crates/crosshair-core/src/zoom.rs
// Summary: Applying, panning and resetting a drag zoom; range filtering of dataset samples.

use tracing::debug;

use crate::axis::AxisRange;
use crate::gesture::ZoomRange;
use crate::host::ChartHost;
use crate::plugin::{Crosshair, IGNORED_EVENTS_AFTER_ZOOM};
use crate::series::Sample;
use crate::sync::{ResetSync, SyncMessage};

/// Who asked for a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOrigin {
    /// Reset control or API call on this chart; broadcast to the group.
    Local,
    /// Replayed from another chart of the group; not broadcast again.
    Synced,
}

/// Samples with `start <= x <= end`, plus the sample just before the first of
/// them and the first sample past `end`, so lines continue to the plot edges.
pub fn filter_to_range(data: &[Sample], start: f64, end: f64) -> Vec<Sample> {
    let mut out = Vec::new();
    let mut started = false;
    let mut stopped = false;
    for (i, sample) in data.iter().enumerate() {
        let x = sample.x_at(i);
        if x >= start && !started {
            if i > 0 {
                out.push(data[i - 1]);
            }
            started = true;
        }
        if x >= start && x <= end {
            out.push(*sample);
        }
        if x > end && !stopped {
            out.push(*sample);
            stopped = true;
        }
    }
    out
}

impl Crosshair {
    /// Zoom the x axis to `[start, end]` (either order). Returns false when
    /// the chart is inert, has no datasets, or `before_zoom` vetoed the zoom.
    pub fn apply_zoom(&mut self, chart: &mut dyn ChartHost, start: f64, end: f64) -> bool {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        if self.state.is_none() {
            return false;
        }
        if chart.datasets().is_empty() {
            debug!(chart = %self.id, "zoom ignored, chart has no datasets");
            return false;
        }
        if !self.config.callbacks.allow_zoom(start, end) {
            debug!(chart = %self.id, start, end, "zoom vetoed");
            return false;
        }

        let full_range = chart.x_scale().map(|s| (s.min(), s.max()));
        let filter = !chart.x_axis_kind().map_or(false, |k| k.is_category());
        let zoom = &self.config.zoom;
        let Some(state) = self.state.as_mut() else { return false };

        state.drag.started = false;
        if state.original_data.is_empty() {
            state.original_axis_range = chart.x_range();
            // owned copies: later filtering must never touch the snapshot
            state.original_data = chart.datasets().iter().map(|d| d.data.clone()).collect();
            state.full_range = full_range;
        }

        if state.reset_control.is_none() {
            state.reset_control = Some(chart.create_reset_control(&zoom.zoom_button_text, &zoom.zoom_button_class));
        }

        chart.set_x_range(AxisRange::new(start, end));
        if filter {
            for (index, original) in state.original_data.iter().enumerate() {
                chart.replace_data(index, filter_to_range(original, start, end));
            }
        }

        state.zoom_range = Some(ZoomRange { start, end });
        state.ignore_next_events = IGNORED_EVENTS_AFTER_ZOOM;
        chart.update();

        debug!(chart = %self.id, start, end, "zoom applied");
        self.config.callbacks.zoomed(start, end);
        true
    }

    /// Restore the data and x range captured at the first zoom and remove the
    /// reset control.
    pub fn reset_zoom(&mut self, chart: &mut dyn ChartHost, origin: ResetOrigin) {
        let Some(state) = self.state.as_mut() else { return };

        if state.zoom_range.is_some() || !state.original_data.is_empty() {
            for (index, data) in std::mem::take(&mut state.original_data).into_iter().enumerate() {
                chart.replace_data(index, data);
            }
            chart.set_x_range(std::mem::take(&mut state.original_axis_range));
            state.zoom_range = None;
            state.full_range = None;
        }

        if let Some(handle) = state.reset_control.take() {
            chart.remove_reset_control(handle);
        }

        if origin == ResetOrigin::Local && self.config.sync.enabled {
            let msg = SyncMessage::Reset(ResetSync { origin: self.id, group: self.config.sync.group });
            self.bus.publish(&msg);
        }
        debug!(chart = %self.id, ?origin, "zoom reset");
        chart.update();
    }

    /// Slide the active zoom window by `increment` data units, keeping its
    /// width and staying inside the range seen at the first zoom.
    pub fn pan_zoom(&mut self, chart: &mut dyn ChartHost, increment: f64) -> bool {
        let Some(state) = self.state.as_ref() else { return false };
        let (Some(ZoomRange { start, end }), Some((min, max))) = (state.zoom_range, state.full_range) else {
            return false;
        };

        let width = end - start;
        let (start, end) = if increment < 0.0 {
            let start = (start + increment).max(min);
            let end = if start == min { min + width } else { end + increment };
            (start, end)
        } else {
            let end = (end + increment).min(max);
            let start = if end == max { max - width } else { start + increment };
            (start, end)
        };
        self.apply_zoom(chart, start, end)
    }
}
