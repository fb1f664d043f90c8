// File: crates/crosshair-core/src/host.rs
// Summary: Contract between the crosshair and the chart that hosts it.

use crate::axis::{AxisKind, AxisRange, Scale};
use crate::error::CrosshairError;
use crate::geometry::Point;
use crate::interaction::InteractionItem;
use crate::series::{Dataset, Sample};

/// Opaque handle to the reset-zoom control created by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlHandle(pub u64);

/// What the crosshair needs from the chart it is attached to.
///
/// Scales are read fresh on every event; after [`ChartHost::update`] they must
/// reflect the current x-axis override and dataset contents.
pub trait ChartHost {
    fn x_scale(&self) -> Option<&dyn Scale>;
    fn y_scale(&self) -> Option<&dyn Scale>;

    /// Declared x-axis type. Hosts with axis types outside [`AxisKind`]
    /// report [`CrosshairError::UnsupportedAxis`].
    fn x_axis_kind(&self) -> Result<AxisKind, CrosshairError> {
        self.x_scale().map(|s| s.kind()).ok_or(CrosshairError::MissingAxis("x"))
    }

    fn datasets(&self) -> &[Dataset];
    /// Swap the samples of dataset `index`; out-of-range indices are ignored.
    fn replace_data(&mut self, index: usize, data: Vec<Sample>);

    /// User min/max override of the x axis.
    fn x_range(&self) -> AxisRange;
    fn set_x_range(&mut self, range: AxisRange);

    /// Elements the host's own hit-testing currently marks active (used by snap).
    fn active_elements(&self) -> &[InteractionItem] { &[] }
    /// Host's default "all items under this x" query.
    fn nearest_x_items(&self, _pointer: Point) -> Vec<InteractionItem> { Vec::new() }

    /// Non-animated re-layout and re-render.
    fn update(&mut self);
    /// Repaint without re-layout.
    fn request_draw(&mut self);

    fn create_reset_control(&mut self, label: &str, class: &str) -> ControlHandle;
    fn remove_reset_control(&mut self, handle: ControlHandle);
}
