// File: crates/crosshair-core/src/lib.rs
// Summary: Core library entry point; exports the crosshair plugin, interpolation engine and sync bus.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod instance;
pub mod interaction;
pub mod interpolate;
pub mod plugin;
pub mod render;
pub mod scale;
pub mod series;
pub mod sync;
pub mod throttle;
pub mod types;
pub mod zoom;

pub use axis::{AxisKind, AxisRange, Scale, TickLabel};
pub use chart::HeadlessChart;
pub use color::Color;
pub use config::{CrosshairConfig, CrosshairOptions, DEFAULT_CONFIG};
pub use error::{CrosshairError, InterpolationError, Result};
pub use geometry::{Point, Rect};
pub use gesture::{PointerEvent, PointerKind};
pub use host::{ChartHost, ControlHandle};
pub use instance::{ChartInstance, SharedInstance};
pub use interaction::{interpolate_mode, ElementRef, InteractionItem};
pub use interpolate::{interpolate, DataPoint, Interpolated, InterpolationInput};
pub use plugin::{ChartPlugin, Crosshair};
pub use render::{DrawSurface, RecordingSurface, StrokeStyle};
pub use scale::{AxisScale, CategoryScale, NumericScale};
pub use series::{Dataset, Sample};
pub use sync::{SyncBus, SyncMessage, Subscription};
pub use zoom::{filter_to_range, ResetOrigin};
