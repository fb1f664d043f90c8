// File: crates/crosshair-core/tests/interpolate.rs
// Purpose: Value interpolation on continuous and category axes.

use chrono::{TimeZone, Utc};
use crosshair_core::axis::TickLabel;
use crosshair_core::interpolate::{interpolate, interpolate_to_pixel, InterpolationInput};
use crosshair_core::scale::{time_value, CategoryScale, NumericScale};
use crosshair_core::{Dataset, InterpolationError};

fn eq(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

fn labels(n: usize) -> Vec<TickLabel> {
    (0..n).map(|i| TickLabel::Text(format!("c{i}"))).collect()
}

#[test]
fn linear_midpoint() {
    let xs = NumericScale::linear(0.0, 10.0, 0.0, 100.0);
    let ys = NumericScale::linear(0.0, 10.0, 100.0, 0.0);
    let d = Dataset::with_points("a", [(0.0, 0.0), (10.0, 10.0)]);
    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 50.0)).expect("bracketed");
    assert!(eq(out.x, 5.0));
    assert!(eq(out.y, 5.0));
    assert_eq!(out.prev.x, 0.0);
    assert_eq!(out.next.x, 10.0);
}

#[test]
fn stepped_holds_previous_value() {
    let xs = NumericScale::linear(0.0, 10.0, 0.0, 100.0);
    let ys = NumericScale::linear(0.0, 10.0, 100.0, 0.0);
    let d = Dataset::with_points("a", [(0.0, 0.0), (10.0, 10.0)]).stepped();
    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 50.0)).expect("bracketed");
    assert_eq!(out.y, 0.0);
}

#[test]
fn cursor_on_first_sample_brackets_with_second() {
    let xs = NumericScale::linear(0.0, 10.0, 0.0, 100.0);
    let ys = NumericScale::linear(0.0, 10.0, 100.0, 0.0);
    let d = Dataset::with_points("a", [(0.0, 2.0), (10.0, 10.0)]);
    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 0.0)).expect("bracketed");
    assert!(eq(out.y, 2.0));
    assert_eq!(out.next.x, 10.0);
}

#[test]
fn continuous_skip_reasons() {
    let xs = NumericScale::linear(0.0, 10.0, 0.0, 100.0);
    let ys = NumericScale::linear(0.0, 4.0, 100.0, 0.0);

    let d = Dataset::with_points("a", [(0.0, 0.0), (10.0, 10.0)]);
    let before_axis = InterpolationInput::for_dataset(&xs, &ys, &d, -10.0);
    assert_eq!(interpolate(&before_axis), Err(InterpolationError::CursorOutOfRange));

    // y = 5 lies above a 0..4 axis
    let above = InterpolationInput::for_dataset(&xs, &ys, &d, 50.0);
    assert_eq!(interpolate(&above), Err(InterpolationError::ValueOutOfRange));

    let short = Dataset::with_points("b", [(0.0, 0.0), (5.0, 1.0)]);
    let past_data = InterpolationInput::for_dataset(&xs, &ys, &short, 80.0);
    assert_eq!(interpolate(&past_data), Err(InterpolationError::NoBracket));

    let gap = Dataset::with_points("c", [(0.0, f64::NAN), (10.0, 1.0)]);
    let nan = InterpolationInput::for_dataset(&xs, &ys, &gap, 50.0);
    assert_eq!(interpolate(&nan), Err(InterpolationError::NotFinite));
}

#[test]
fn time_axis_interpolates_in_milliseconds() {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
    let xs = NumericScale::time(&t0, &t1, 0.0, 360.0);
    let ys = NumericScale::linear(0.0, 100.0, 100.0, 0.0);
    let d = Dataset::with_points("load", [(time_value(&t0), 10.0), (time_value(&t1), 70.0)]);

    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 180.0)).expect("bracketed");
    assert!(eq(out.y, 40.0));
    assert!(eq(out.x, time_value(&t0) + 30.0 * 60.0 * 1000.0));
}

#[test]
fn category_between_ticks() {
    let xs = CategoryScale::new(labels(5), 0.0, 400.0);
    let ys = NumericScale::linear(0.0, 100.0, 100.0, 0.0);
    let d = Dataset::with_values("a", [10.0, 20.0, 30.0, 40.0, 50.0]);

    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 150.0)).expect("bracketed");
    assert!(eq(out.x, 1.5));
    assert!(eq(out.y, 25.0));
    assert_eq!(out.prev.y, 20.0);
    assert_eq!(out.next.y, 30.0);
}

#[test]
fn category_edges_clamp_into_range() {
    let xs = CategoryScale::new(labels(5), 0.0, 400.0);
    let ys = NumericScale::linear(0.0, 100.0, 100.0, 0.0);
    let d = Dataset::with_values("a", [10.0, 20.0, 30.0, 40.0, 50.0]);

    let left = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 0.0)).expect("left edge");
    assert!(eq(left.x, 0.0));
    assert!(eq(left.y, 10.0));

    let right = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 400.0)).expect("right edge");
    assert!(eq(right.x, 4.0));
    assert!(eq(right.y, 50.0));
}

#[test]
fn category_clamps_y_to_axis() {
    let xs = CategoryScale::new(labels(5), 0.0, 400.0);
    let ys = NumericScale::linear(0.0, 40.0, 100.0, 0.0);
    let d = Dataset::with_values("a", [10.0, 20.0, 30.0, 40.0, 50.0]);

    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 350.0)).expect("bracketed");
    assert!(eq(out.y, 40.0));
}

#[test]
fn category_numeric_labels_supply_x() {
    let ticks = [10.0, 20.0, 30.0, 40.0, 50.0].map(TickLabel::Number).to_vec();
    let xs = CategoryScale::new(ticks, 0.0, 400.0);
    let ys = NumericScale::linear(0.0, 100.0, 100.0, 0.0);
    let d = Dataset::with_values("a", [1.0, 2.0, 3.0, 4.0, 5.0]);

    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 50.0)).expect("bracketed");
    assert!(eq(out.x, 15.0));
    assert!(eq(out.prev.x, 10.0) && eq(out.next.x, 20.0));

    let out = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 150.0)).expect("bracketed");
    assert!(eq(out.x, 25.0));
    assert!(eq(out.prev.y, 2.0) && eq(out.next.y, 3.0));
}

#[test]
fn category_cursor_outside_axis_is_skipped() {
    let xs = CategoryScale::new(labels(5), 100.0, 500.0);
    let ys = NumericScale::linear(0.0, 100.0, 100.0, 0.0);
    let d = Dataset::with_values("a", [10.0, 20.0, 30.0, 40.0, 50.0]);

    for px in [50.0, 99.0, 501.0, 550.0] {
        let input = InterpolationInput::for_dataset(&xs, &ys, &d, px);
        assert_eq!(interpolate(&input), Err(InterpolationError::CursorOutOfRange), "px {px}");
    }
    let inside = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 100.0)).expect("left tick");
    assert!(eq(inside.y, 10.0));
}

#[test]
fn category_stepped_uses_left_value_until_last_tick() {
    let xs = CategoryScale::new(labels(3), 0.0, 200.0);
    let ys = NumericScale::linear(0.0, 100.0, 100.0, 0.0);
    let d = Dataset::with_values("a", [10.0, 20.0, 30.0]).stepped();

    let mid = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 150.0)).expect("bracketed");
    assert_eq!(mid.y, 20.0);
    let end = interpolate(&InterpolationInput::for_dataset(&xs, &ys, &d, 200.0)).expect("bracketed");
    assert_eq!(end.y, 30.0);
}

#[test]
fn category_nan_value_is_skipped() {
    let xs = CategoryScale::new(labels(3), 0.0, 200.0);
    let ys = NumericScale::linear(0.0, 100.0, 100.0, 0.0);
    let d = Dataset::with_values("a", [10.0, f64::NAN, 30.0]);
    let input = InterpolationInput::for_dataset(&xs, &ys, &d, 50.0);
    assert_eq!(interpolate(&input), Err(InterpolationError::NotFinite));
}

#[test]
fn projects_back_to_y_pixel() {
    let xs = NumericScale::linear(0.0, 10.0, 0.0, 100.0);
    let ys = NumericScale::linear(0.0, 10.0, 100.0, 0.0);
    let d = Dataset::with_points("a", [(0.0, 0.0), (10.0, 10.0)]);
    let (_, y_px) = interpolate_to_pixel(&InterpolationInput::for_dataset(&xs, &ys, &d, 30.0)).expect("mapped");
    assert!(eq(y_px, 70.0));
}
