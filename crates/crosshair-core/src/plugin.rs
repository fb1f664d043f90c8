// File: crates/crosshair-core/src/plugin.rs
// Summary: Lifecycle hooks and the crosshair plugin: pointer tracking, drag gesture and draw pass.

use std::time::Duration;

use tracing::{debug, trace};

use crate::color::Color;
use crate::config::CrosshairConfig;
use crate::geometry::{Point, Rect};
use crate::gesture::{CrosshairState, PointerEvent, PointerKind, BUTTONS_NONE, BUTTON_PRIMARY};
use crate::host::ChartHost;
use crate::interpolate::{interpolate_to_pixel, InterpolationInput};
use crate::render::{DrawSurface, StrokeStyle};
use crate::sync::{PointerSync, SyncBus, SyncMessage};
use crate::throttle::Throttle;
use crate::types::ChartId;

/// Radius of the marker drawn at each interpolated value.
pub const TRACE_POINT_RADIUS: f64 = 3.0;
/// Events swallowed after a zoom re-layout.
pub const IGNORED_EVENTS_AFTER_ZOOM: u32 = 2;

/// Hooks a chart invokes on its plugins, in the order of the chart lifecycle.
pub trait ChartPlugin {
    fn id(&self) -> &'static str;
    fn after_init(&mut self, _chart: &mut dyn ChartHost) {}
    fn after_event(&mut self, _chart: &mut dyn ChartHost, _event: &PointerEvent) {}
    fn after_draw(&mut self, _chart: &dyn ChartHost, _surface: &mut dyn DrawSurface) {}
    /// Return false to hide the host's tooltip for this frame.
    fn before_tooltip_draw(&self, _chart: &dyn ChartHost) -> bool { true }
    fn after_destroy(&mut self, _chart: &mut dyn ChartHost) {}
}

/// Crosshair, drag-to-zoom and sync behaviour for one chart.
pub struct Crosshair {
    pub(crate) id: ChartId,
    pub(crate) config: CrosshairConfig,
    /// `None` while the chart is inert (before init, unsupported axis, destroyed).
    pub(crate) state: Option<CrosshairState>,
    pub(crate) bus: SyncBus,
    event_log: Throttle,
}

impl Crosshair {
    pub fn new(config: CrosshairConfig, bus: SyncBus) -> Self {
        Self {
            id: ChartId::next(),
            config,
            state: None,
            bus,
            event_log: Throttle::new(Duration::from_millis(250)),
        }
    }

    pub fn id(&self) -> ChartId { self.id }
    pub fn config(&self) -> &CrosshairConfig { &self.config }
    pub fn state(&self) -> Option<&CrosshairState> { self.state.as_ref() }
    pub fn is_active(&self) -> bool { self.state.is_some() }

    /// Steps 3-5 of event handling: bounds, drag sequencing, cursor update.
    /// Replayed sync events enter here directly.
    pub(crate) fn track(&mut self, chart: &mut dyn ChartHost, event: &PointerEvent) {
        let suppress_synced = self.config.sync.suppress_tooltips;
        let zoom_enabled = self.config.zoom.enabled;
        let Some(xs) = chart.x_scale() else { return };
        let (min_px, max_px) = xs.pixel_bounds();
        let Some(state) = self.state.as_mut() else { return };

        state.suppress_tooltips = event.replayed && suppress_synced;
        state.enabled = event.kind != PointerKind::Leave && event.x > min_px && event.x < max_px;

        if !state.enabled {
            if !state.suppress_update && event.x > max_px {
                // one refresh to clear the crosshair, then stay quiet until re-entry
                state.suppress_update = true;
                chart.update();
            }
            state.drag.started = false;
            return;
        }
        state.suppress_update = false;

        let buttons = event.effective_buttons();
        if zoom_enabled && buttons == BUTTON_PRIMARY && !state.drag.started {
            state.drag.started = true;
            state.drag.start_x = event.x;
            trace!(chart = %self.id, x = event.x, "drag started");
        }

        if state.drag.started && buttons == BUTTONS_NONE {
            state.drag.started = false;
            let start_x = state.drag.start_x;
            let cursor_x = state.cursor.map_or(event.x, |c| c.x);
            let start = xs.value_for_pixel(start_x);
            let end = xs.value_for_pixel(cursor_x);
            if (start_x - cursor_x).abs() > 1.0 {
                self.apply_zoom(chart, start, end);
            } else {
                trace!(chart = %self.id, "drag too short, discarded");
            }
            chart.update();
        }

        if let Some(state) = self.state.as_mut() {
            state.cursor = Some(event.position());
        }
        chart.request_draw();
    }

    fn publish_pointer(&self, chart: &dyn ChartHost, event: &PointerEvent) {
        let (Some(xs), Some(ys)) = (chart.x_scale(), chart.y_scale()) else { return };
        let kind = if event.kind == PointerKind::Click { PointerKind::Move } else { event.kind };
        let msg = SyncMessage::Pointer(PointerSync {
            origin: self.id,
            group: self.config.sync.group,
            data_x: xs.value_for_pixel(event.x),
            data_y: ys.value_for_pixel(event.y),
            buttons: event.effective_buttons(),
            kind,
        });
        self.bus.publish(&msg);
    }

    fn draw_zoombox(&self, chart: &dyn ChartHost, surface: &mut dyn DrawSurface, start_x: f64, cursor: Point) {
        let Some(ys) = chart.y_scale() else { return };
        let top = ys.pixel_for_value(ys.max());
        let bottom = ys.pixel_for_value(ys.min());
        let zoom = &self.config.zoom;
        surface.rect(
            Rect::new(start_x, top, cursor.x - start_x, bottom - top),
            Some(zoom.zoombox_background_color),
            Some(&StrokeStyle::solid(zoom.zoombox_border_color, 1.0)),
        );
    }

    fn draw_trace_line(&self, chart: &dyn ChartHost, surface: &mut dyn DrawSurface, cursor: Point) {
        let (Some(xs), Some(ys)) = (chart.x_scale(), chart.y_scale()) else { return };
        let line = &self.config.line;

        let mut at = cursor;
        if self.config.snap.enabled {
            if let Some(active) = chart.active_elements().first() {
                at = active.element.position();
            }
        }

        let stroke = StrokeStyle::dashed(line.color, line.width, line.dash_pattern.to_vec());
        surface.line(
            Point::new(at.x, ys.pixel_for_value(ys.max())),
            Point::new(at.x, ys.pixel_for_value(ys.min())),
            &stroke,
        );
        surface.line(
            Point::new(xs.pixel_for_value(xs.min()), at.y),
            Point::new(xs.pixel_for_value(xs.max()), at.y),
            &stroke,
        );
    }

    fn draw_trace_points(&self, chart: &dyn ChartHost, surface: &mut dyn DrawSurface, cursor: Point) {
        let (Some(xs), Some(ys)) = (chart.x_scale(), chart.y_scale()) else { return };
        for (index, dataset) in chart.datasets().iter().enumerate() {
            if dataset.hidden || !dataset.interpolate {
                continue;
            }
            let input = InterpolationInput::for_dataset(xs, ys, dataset, cursor.x);
            match interpolate_to_pixel(&input) {
                Ok((_, y_px)) => surface.circle(
                    Point::new(cursor.x, y_px),
                    TRACE_POINT_RADIUS,
                    Some(Color::WHITE),
                    Some(&StrokeStyle::solid(dataset.border_color, 2.0)),
                ),
                Err(reason) => trace!(chart = %self.id, dataset = index, %reason, "no trace point"),
            }
        }
    }
}

impl ChartPlugin for Crosshair {
    fn id(&self) -> &'static str { "crosshair" }

    fn after_init(&mut self, chart: &mut dyn ChartHost) {
        match chart.x_axis_kind() {
            Ok(kind) if chart.y_scale().is_some() => {
                debug!(chart = %self.id, axis = %kind, sync = self.config.sync.enabled, "crosshair attached");
                self.state = Some(CrosshairState::default());
            }
            Ok(_) => debug!(chart = %self.id, "no y axis; crosshair inert"),
            Err(err) => debug!(chart = %self.id, %err, "crosshair inert"),
        }
    }

    fn after_event(&mut self, chart: &mut dyn ChartHost, event: &PointerEvent) {
        if chart.x_axis_kind().is_err() || chart.x_scale().is_none() || chart.y_scale().is_none() {
            return;
        }
        let Some(state) = self.state.as_mut() else { return };

        if !event.replayed {
            if state.ignore_next_events > 0 {
                state.ignore_next_events -= 1;
                trace!(chart = %self.id, left = state.ignore_next_events, "event ignored after update");
                return;
            }
            if self.config.sync.enabled {
                self.publish_pointer(chart, event);
            }
        }

        if self.event_log.admit() {
            trace!(chart = %self.id, kind = ?event.kind, x = event.x, y = event.y, replayed = event.replayed, "pointer");
        }
        self.track(chart, event);
    }

    fn after_draw(&mut self, chart: &dyn ChartHost, surface: &mut dyn DrawSurface) {
        let Some(state) = self.state.as_ref() else { return };
        if !state.enabled {
            return;
        }
        let Some(cursor) = state.cursor else { return };

        if state.drag.started {
            self.draw_zoombox(chart, surface, state.drag.start_x, cursor);
        } else {
            self.draw_trace_line(chart, surface, cursor);
            self.draw_trace_points(chart, surface, cursor);
        }
    }

    fn before_tooltip_draw(&self, _chart: &dyn ChartHost) -> bool {
        self.state.as_ref().map_or(true, |s| !s.drag.started && !s.suppress_tooltips)
    }

    fn after_destroy(&mut self, chart: &mut dyn ChartHost) {
        if let Some(handle) = self.state.as_mut().and_then(|s| s.reset_control.take()) {
            chart.remove_reset_control(handle);
        }
        self.state = None;
        debug!(chart = %self.id, "crosshair destroyed");
    }
}
