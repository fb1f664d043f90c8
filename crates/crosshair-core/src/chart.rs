// File: crates/crosshair-core/src/chart.rs
// Summary: In-memory chart host: scales laid out inside plot insets, datasets, x override and reset control.

use chrono::{DateTime, TimeZone};

use crate::axis::{AxisKind, AxisRange, Scale, TickLabel};
use crate::error::CrosshairError;
use crate::geometry::{Point, Rect};
use crate::host::{ChartHost, ControlHandle};
use crate::interaction::{ElementRef, InteractionItem};
use crate::interpolate::DataPoint;
use crate::scale::{AxisScale, CategoryScale, NumericScale};
use crate::series::{Dataset, Sample};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Pixel distance within which a sample counts as "under" the pointer.
pub const HIT_RADIUS: f64 = 3.0;

/// Reset control as the headless host models it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetControl {
    pub handle: ControlHandle,
    pub label: String,
    pub class: String,
}

/// Chart without a toolkit behind it. `update` re-fits the x scale to the
/// override (or its natural range) and counts calls, which is all the
/// crosshair observes of a real chart.
pub struct HeadlessChart {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    x_axis_type: String,
    natural_x: (f64, f64),
    x_scale: AxisScale,
    y_scale: AxisScale,
    datasets: Vec<Dataset>,
    x_range: AxisRange,
    active: Vec<InteractionItem>,
    reset_control: Option<ResetControl>,
    next_control: u64,
    pub updates: usize,
    pub draw_requests: usize,
}

impl HeadlessChart {
    /// Chart over explicit scales.
    pub fn new(x_scale: impl Into<AxisScale>, y_scale: impl Into<AxisScale>) -> Self {
        let x_scale = x_scale.into();
        let y_scale = y_scale.into();
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            x_axis_type: x_scale.kind().as_str().to_string(),
            natural_x: (x_scale.min(), x_scale.max()),
            x_scale,
            y_scale,
            datasets: Vec::new(),
            x_range: AxisRange::UNSET,
            active: Vec::new(),
            reset_control: None,
            next_control: 0,
            updates: 0,
            draw_requests: 0,
        }
    }

    /// Linear chart of `width` x `height` pixels with the default insets.
    pub fn linear(width: i32, height: i32, x: (f64, f64), y: (f64, f64)) -> Self {
        Self::sized(width, height, |plot| NumericScale::linear(x.0, x.1, plot.left(), plot.right()).into(), y)
    }

    /// Time chart; x values are epoch milliseconds.
    pub fn time<Tz: TimeZone>(width: i32, height: i32, from: &DateTime<Tz>, to: &DateTime<Tz>, y: (f64, f64)) -> Self {
        Self::sized(width, height, |plot| NumericScale::time(from, to, plot.left(), plot.right()).into(), y)
    }

    /// Category chart; one tick per label.
    pub fn category(width: i32, height: i32, labels: Vec<TickLabel>, y: (f64, f64)) -> Self {
        Self::sized(width, height, |plot| CategoryScale::new(labels, plot.left(), plot.right()).into(), y)
    }

    fn sized(width: i32, height: i32, x_scale: impl FnOnce(&Rect) -> AxisScale, y: (f64, f64)) -> Self {
        let insets = Insets::default();
        let plot = plot_rect(width, height, &insets);
        let mut chart = Self::new(x_scale(&plot), NumericScale::linear(y.0, y.1, plot.bottom(), plot.top()));
        chart.width = width;
        chart.height = height;
        chart.insets = insets;
        chart
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.add_dataset(dataset);
        self
    }

    /// Declare the x axis type; unknown names make the crosshair inert.
    pub fn set_x_axis_type(&mut self, name: impl Into<String>) {
        self.x_axis_type = name.into();
    }

    pub fn x_axis(&self) -> &AxisScale { &self.x_scale }
    pub fn y_axis(&self) -> &AxisScale { &self.y_scale }

    pub fn plot_rect(&self) -> Rect { plot_rect(self.width, self.height, &self.insets) }

    pub fn reset_control(&self) -> Option<&ResetControl> { self.reset_control.as_ref() }

    pub fn set_active_elements(&mut self, items: Vec<InteractionItem>) {
        self.active = items;
    }

    /// Fit both axes to the data of visible datasets (2% y margin), like an
    /// auto-scaled chart; the x override still wins on the next `update`.
    pub fn autoscale(&mut self) {
        let mut ext: Option<(f64, f64, f64, f64)> = None;
        for d in self.datasets.iter().filter(|d| !d.hidden) {
            let Some((x0, x1, y0, y1)) = d.extent() else { continue };
            ext = Some(match ext {
                None => (x0, x1, y0, y1),
                Some((a, b, c, e)) => (a.min(x0), b.max(x1), c.min(y0), e.max(y1)),
            });
        }
        let Some((x_min, mut x_max, y_min, mut y_max)) = ext else { return };
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;

        if let AxisScale::Numeric(_) = self.x_scale {
            self.natural_x = (x_min, x_max);
        }
        self.y_scale = self.y_scale.with_range(y_min - ym, y_max + ym);
        self.relayout_x();
    }

    fn relayout_x(&mut self) {
        let (lo, hi) = match &self.x_scale {
            AxisScale::Category(s) => (0.0, s.labels.len().saturating_sub(1) as f64),
            AxisScale::Numeric(_) => self.natural_x,
        };
        let min = self.x_range.min.unwrap_or(lo);
        let max = self.x_range.max.unwrap_or(hi);
        self.x_scale = self.x_scale.with_range(min, max);
    }

    /// Nearest sample (by pixel x) of `dataset` within [`HIT_RADIUS`].
    fn hit(&self, dataset_index: usize, pointer: Point) -> Option<InteractionItem> {
        let dataset = self.datasets.get(dataset_index)?;
        let mut best: Option<(f64, InteractionItem)> = None;
        for (index, sample) in dataset.data.iter().enumerate() {
            let value = DataPoint::new(sample.x_at(index), sample.y());
            let px = self.x_scale.pixel_for_value(value.x);
            let dist = (px - pointer.x).abs();
            if !(dist <= HIT_RADIUS) || best.as_ref().is_some_and(|(d, _)| *d <= dist) {
                continue;
            }
            let position = Point::new(px, self.y_scale.pixel_for_value(value.y));
            best = Some((dist, InteractionItem { dataset_index, element: ElementRef::Hit { index, position, value } }));
        }
        best.map(|(_, item)| item)
    }
}

fn plot_rect(width: i32, height: i32, insets: &Insets) -> Rect {
    let w = (width - insets.hsum() as i32).max(1) as f64;
    let h = (height - insets.vsum() as i32).max(1) as f64;
    Rect::new(insets.left as f64, insets.top as f64, w, h)
}

impl ChartHost for HeadlessChart {
    fn x_scale(&self) -> Option<&dyn Scale> { Some(&self.x_scale) }
    fn y_scale(&self) -> Option<&dyn Scale> { Some(&self.y_scale) }

    fn x_axis_kind(&self) -> Result<AxisKind, CrosshairError> {
        self.x_axis_type.parse()
    }

    fn datasets(&self) -> &[Dataset] { &self.datasets }

    fn replace_data(&mut self, index: usize, data: Vec<Sample>) {
        if let Some(d) = self.datasets.get_mut(index) {
            d.data = data;
        }
    }

    fn x_range(&self) -> AxisRange { self.x_range }
    fn set_x_range(&mut self, range: AxisRange) { self.x_range = range; }

    fn active_elements(&self) -> &[InteractionItem] { &self.active }

    fn nearest_x_items(&self, pointer: Point) -> Vec<InteractionItem> {
        (0..self.datasets.len())
            .filter(|&i| !self.datasets[i].hidden)
            .filter_map(|i| self.hit(i, pointer))
            .collect()
    }

    fn update(&mut self) {
        self.relayout_x();
        self.updates += 1;
    }

    fn request_draw(&mut self) {
        self.draw_requests += 1;
    }

    fn create_reset_control(&mut self, label: &str, class: &str) -> ControlHandle {
        self.next_control += 1;
        let handle = ControlHandle(self.next_control);
        self.reset_control = Some(ResetControl { handle, label: label.to_string(), class: class.to_string() });
        handle
    }

    fn remove_reset_control(&mut self, handle: ControlHandle) {
        if self.reset_control.as_ref().is_some_and(|c| c.handle == handle) {
            self.reset_control = None;
        }
    }
}
