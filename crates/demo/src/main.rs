// File: crates/demo/src/main.rs
// Summary: Demo loads a time/value CSV (or synthesises one), attaches synced crosshairs to two charts,
// replays a pointer session with a drag zoom and a reset, and writes a PNG per step.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use crosshair_core::scale::value_time;
use crosshair_core::{
    ChartHost, ChartInstance, Color, CrosshairOptions, Dataset, HeadlessChart, Point, PointerEvent, Scale, SharedInstance,
    SyncBus,
};
use crosshair_render_skia::{render_to_png, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const OPTIONS: &str = r##"{
    "line": {"color": "#f66", "width": 1, "dashPattern": [6, 4]},
    "sync": {"enabled": true, "group": 1, "suppressTooltips": true},
    "zoom": {"enabled": true}
}"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let samples = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => synthetic(),
    };
    if samples.len() < 2 {
        anyhow::bail!("need at least two rows with a time and a value column");
    }
    info!(rows = samples.len(), "loaded samples");

    let options = CrosshairOptions::from_json(OPTIONS)?
        .with_after_zoom(|start, end| info!(start = ?value_time(start), end = ?value_time(end), "zoomed"));
    let bus = SyncBus::global();

    // Price on top, the change between consecutive rows below; both share the time axis.
    let deltas: Vec<(f64, f64)> = samples.windows(2).map(|w| (w[1].0, w[1].1 - w[0].1)).collect();
    let top = ChartInstance::attach(
        chart(&samples, Dataset::with_points("value", samples.iter().copied()).interpolated())?,
        &options,
        &bus,
    );
    let bottom = ChartInstance::attach(
        chart(
            &samples,
            Dataset::with_points("change", deltas).interpolated().stepped().with_border_color(Color::from_rgb(40, 200, 120)),
        )?,
        &options,
        &bus,
    );

    let out = PathBuf::from("target/out");
    let opts = RenderOptions::default();
    let (left, right) = plot_span(&top);
    let mid_y = top.borrow().host().plot_rect().y + 80.0;

    // 1) Hover: both charts show the crosshair at the same instant
    let hover = left + (right - left) * 0.4;
    top.borrow_mut().pointer(PointerEvent::move_to(hover, mid_y));
    log_items(&top, hover, mid_y);
    render_both(&top, &bottom, &opts, &out, "hover")?;

    // 2) Drag from 25% to 75% of the top plot; the bottom chart mirrors it
    let (from, to) = (left + (right - left) * 0.25, left + (right - left) * 0.75);
    top.borrow_mut().pointer(PointerEvent::down(from, mid_y));
    for step in 1..=4 {
        let x = from + (to - from) * step as f64 / 4.0;
        top.borrow_mut().pointer(PointerEvent::drag_to(x, mid_y));
    }
    render_both(&top, &bottom, &opts, &out, "dragging")?;
    top.borrow_mut().pointer(PointerEvent::up(to, mid_y));

    // the first two events after a zoom are ignored
    for _ in 0..3 {
        top.borrow_mut().pointer(PointerEvent::move_to(hover, mid_y));
    }
    render_both(&top, &bottom, &opts, &out, "zoomed")?;

    // 3) Pan the bottom chart a little to the right
    let shift = zoom_width(&bottom) * 0.2;
    if !bottom.borrow_mut().pan_zoom(shift) {
        warn!("pan skipped: chart not zoomed");
    }
    render_both(&top, &bottom, &opts, &out, "panned")?;

    // 4) Reset from the bottom chart; the top chart follows
    bottom.borrow_mut().click_reset_control();
    render_both(&top, &bottom, &opts, &out, "reset")?;

    top.borrow_mut().destroy();
    bottom.borrow_mut().destroy();
    info!(subscribers = bus.subscriber_count(), "done");
    Ok(())
}

fn chart(samples: &[(f64, f64)], dataset: Dataset) -> Result<HeadlessChart> {
    let first = value_time(samples[0].0).context("first timestamp out of range")?;
    let last = value_time(samples[samples.len() - 1].0).context("last timestamp out of range")?;
    let mut host = HeadlessChart::time(1024, 320, &first, &last, (0.0, 1.0)).with_dataset(dataset);
    host.autoscale();
    host.update();
    Ok(host)
}

fn plot_span(inst: &SharedInstance<HeadlessChart>) -> (f64, f64) {
    let inst = inst.borrow();
    let plot = inst.host().plot_rect();
    (plot.left(), plot.right())
}

fn zoom_width(inst: &SharedInstance<HeadlessChart>) -> f64 {
    let inst = inst.borrow();
    let xs = inst.host().x_axis();
    xs.max() - xs.min()
}

fn log_items(inst: &SharedInstance<HeadlessChart>, x: f64, y: f64) {
    let inst = inst.borrow();
    for item in inst.interaction_items(Point::new(x, y)) {
        let value = item.element.value();
        let label = &inst.host().datasets()[item.dataset_index].label;
        info!(dataset = %label, time = ?value_time(value.x), value = value.y, "tooltip item");
    }
}

fn render_both(
    top: &SharedInstance<HeadlessChart>,
    bottom: &SharedInstance<HeadlessChart>,
    opts: &RenderOptions,
    out: &Path,
    step: &str,
) -> Result<()> {
    for (name, inst) in [("top", top), ("bottom", bottom)] {
        let path = out.join(format!("crosshair_{step}_{name}.png"));
        render_to_png(&mut inst.borrow_mut(), opts, &path)?;
        info!(path = %path.display(), "wrote");
    }
    Ok(())
}

/// Load `(epoch ms, value)` rows from a CSV with a time column and a value column.
fn load_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]).context("no time column")?;
    let i_value = idx(&["value", "close", "c", "price", "y"]).context("no value column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let t = rec.get(i_time).and_then(parse_time_ms);
        let v = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        if let (Some(t), Some(v)) = (t, v) {
            out.push((t, v));
        }
    }
    out.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(out)
}

/// Epoch seconds or milliseconds, RFC 3339, or `YYYY-MM-DD HH:MM:SS` (UTC).
fn parse_time_ms(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(if n > 10_i64.pow(12) { n as f64 } else { n as f64 * 1000.0 });
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.timestamp_millis() as f64);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|t| Utc.from_utc_datetime(&t).timestamp_millis() as f64)
}

/// Two days of hourly readings: a slow wave with some drift.
fn synthetic() -> Vec<(f64, f64)> {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().unwrap_or_default();
    (0..48)
        .map(|h| {
            let t = start + Duration::hours(h);
            let x = h as f64;
            (t.timestamp_millis() as f64, 100.0 + (x * 0.3).sin() * 12.0 + x * 0.4)
        })
        .collect()
}
