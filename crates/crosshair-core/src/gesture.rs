// File: crates/crosshair-core/src/gesture.rs
// Summary: Pointer events and the per-chart crosshair/zoom gesture state.

use serde::{Deserialize, Serialize};

use crate::axis::AxisRange;
use crate::geometry::Point;
use crate::host::ControlHandle;
use crate::series::Sample;

/// Button mask with nothing pressed.
pub const BUTTONS_NONE: u8 = 0;
/// Button mask with only the primary button pressed.
pub const BUTTON_PRIMARY: u8 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointerKind {
    Move,
    Down,
    Up,
    Click,
    Leave,
}

/// Pointer event in the chart's pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
    pub buttons: u8,
    /// Set on events synthesised from a sync message; such events are never
    /// published again.
    pub replayed: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f64, y: f64, buttons: u8) -> Self {
        Self { kind, x, y, buttons, replayed: false }
    }

    pub fn move_to(x: f64, y: f64) -> Self { Self::new(PointerKind::Move, x, y, BUTTONS_NONE) }
    /// Move with the primary button held.
    pub fn drag_to(x: f64, y: f64) -> Self { Self::new(PointerKind::Move, x, y, BUTTON_PRIMARY) }
    pub fn down(x: f64, y: f64) -> Self { Self::new(PointerKind::Down, x, y, BUTTON_PRIMARY) }
    pub fn up(x: f64, y: f64) -> Self { Self::new(PointerKind::Up, x, y, BUTTONS_NONE) }
    pub fn click(x: f64, y: f64) -> Self { Self::new(PointerKind::Click, x, y, BUTTONS_NONE) }
    pub fn leave(x: f64, y: f64) -> Self { Self::new(PointerKind::Leave, x, y, BUTTONS_NONE) }

    pub fn position(&self) -> Point { Point::new(self.x, self.y) }

    /// Buttons as seen by the gesture logic: a release never reports a
    /// pressed button, whatever the platform put in the mask.
    pub fn effective_buttons(&self) -> u8 {
        if self.kind == PointerKind::Up { BUTTONS_NONE } else { self.buttons }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub started: bool,
    pub start_x: f64,
}

/// Applied zoom bounds in data space, `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    pub start: f64,
    pub end: f64,
}

/// Coarse view of [`CrosshairState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Tracking,
    Dragging,
    Suppressed,
}

/// Mutable crosshair state owned by one chart.
#[derive(Clone, Debug, Default)]
pub struct CrosshairState {
    /// Cursor inside the x axis bounds; the crosshair is drawn only then.
    pub enabled: bool,
    pub cursor: Option<Point>,
    pub drag: DragState,
    pub zoom_range: Option<ZoomRange>,
    /// Full data of every dataset, captured at the first zoom.
    pub original_data: Vec<Vec<Sample>>,
    /// X override to restore on reset.
    pub original_axis_range: AxisRange,
    /// Axis range at the first zoom; bounds for panning.
    pub full_range: Option<(f64, f64)>,
    pub reset_control: Option<ControlHandle>,
    pub suppress_tooltips: bool,
    pub suppress_update: bool,
    /// Events still to swallow after a programmatic update.
    pub ignore_next_events: u32,
}

impl CrosshairState {
    pub fn gesture(&self) -> GestureState {
        if self.suppress_update {
            GestureState::Suppressed
        } else if self.drag.started {
            GestureState::Dragging
        } else if self.enabled {
            GestureState::Tracking
        } else {
            GestureState::Idle
        }
    }

    pub fn is_zoomed(&self) -> bool { self.zoom_range.is_some() }
}
