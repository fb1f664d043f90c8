// File: crates/crosshair-core/tests/zoom.rs
// Purpose: Programmatic zoom, reset, pan, veto callbacks and range filtering.

use std::cell::Cell;
use std::rc::Rc;

use crosshair_core::axis::TickLabel;
use crosshair_core::scale::NumericScale;
use crosshair_core::{
    filter_to_range, ChartHost, ChartInstance, CrosshairOptions, Dataset, HeadlessChart, Sample, Scale,
    SharedInstance, SyncBus,
};

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

fn chart() -> HeadlessChart {
    HeadlessChart::new(
        NumericScale::linear(0.0, 100.0, 50.0, 300.0),
        NumericScale::linear(0.0, 100.0, 300.0, 50.0),
    )
    .with_dataset(Dataset::with_points("a", (0..10).map(|i| (5.0 + 10.0 * i as f64, i as f64))))
    .with_dataset(Dataset::with_points("b", (0..10).map(|i| (5.0 + 10.0 * i as f64, -(i as f64)))))
}

fn attach(options: CrosshairOptions) -> SharedInstance<HeadlessChart> {
    ChartInstance::attach(chart(), &options, &SyncBus::new())
}

fn xs(host: &HeadlessChart, dataset: usize) -> Vec<f64> {
    host.datasets()[dataset].data.iter().enumerate().map(|(n, s)| s.x_at(n)).collect()
}

#[test]
fn filter_keeps_one_sample_beyond_each_edge() {
    let data: Vec<Sample> = (0..6).map(|i| Sample::point(i as f64, 0.0)).collect();
    let xs: Vec<f64> = filter_to_range(&data, 2.0, 3.5).iter().map(|s| s.x_at(0)).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn filter_from_first_sample_has_no_leading_anchor() {
    let data: Vec<Sample> = (0..6).map(|i| Sample::point(i as f64, 0.0)).collect();
    let xs: Vec<f64> = filter_to_range(&data, 0.0, 2.0).iter().map(|s| s.x_at(0)).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn rezoom_filters_from_the_original_data() {
    let inst = attach(CrosshairOptions::default());
    let mut i = inst.borrow_mut();
    assert!(i.zoom(40.0, 60.0));
    assert_eq!(xs(i.host(), 0), vec![35.0, 45.0, 55.0, 65.0]);

    assert!(i.zoom(10.0, 90.0));
    assert_eq!(xs(i.host(), 0), vec![5.0, 15.0, 25.0, 35.0, 45.0, 55.0, 65.0, 75.0, 85.0, 95.0]);
    assert_eq!(xs(i.host(), 1).len(), 10);
}

#[test]
fn reset_restores_everything_and_rezoom_is_identical() {
    let inst = attach(CrosshairOptions::default());
    let mut i = inst.borrow_mut();
    i.zoom(20.0, 80.0);
    let zoomed = i.host().datasets().to_vec();

    i.click_reset_control();
    let state = i.crosshair().state().expect("active");
    assert!(!state.is_zoomed());
    assert!(state.original_data.is_empty());
    assert!(i.host().reset_control().is_none());
    assert_eq!(i.host().datasets()[0].data.len(), 10);
    assert!(approx(i.host().x_axis().min(), 0.0));
    assert!(approx(i.host().x_axis().max(), 100.0));

    i.zoom(20.0, 80.0);
    assert_eq!(i.host().datasets(), zoomed.as_slice());
}

#[test]
fn reset_without_zoom_is_harmless() {
    let inst = attach(CrosshairOptions::default());
    let mut i = inst.borrow_mut();
    let before = i.host().updates;
    i.click_reset_control();
    assert_eq!(i.host().datasets()[0].data.len(), 10);
    assert_eq!(i.host().updates, before + 1);
}

#[test]
fn reset_control_is_created_once() {
    let inst = attach(CrosshairOptions::default());
    let mut i = inst.borrow_mut();
    i.zoom(20.0, 80.0);
    let first = i.host().reset_control().map(|c| c.handle);
    i.zoom(30.0, 70.0);
    assert_eq!(i.host().reset_control().map(|c| c.handle), first);
}

#[test]
fn before_zoom_can_veto() {
    let options = CrosshairOptions::default().with_before_zoom(|start, _| start > 50.0);
    let inst = attach(options);
    let mut i = inst.borrow_mut();

    assert!(!i.zoom(20.0, 80.0));
    assert!(i.host().reset_control().is_none());
    assert_eq!(i.host().datasets()[0].data.len(), 10);

    assert!(i.zoom(60.0, 80.0));
}

#[test]
fn zoom_without_datasets_is_refused() {
    let host = HeadlessChart::new(
        NumericScale::linear(0.0, 100.0, 50.0, 300.0),
        NumericScale::linear(0.0, 100.0, 300.0, 50.0),
    );
    let inst = ChartInstance::attach(host, &CrosshairOptions::default(), &SyncBus::new());
    let mut i = inst.borrow_mut();
    let before = i.host().updates;

    assert!(!i.zoom(20.0, 80.0));
    assert!(i.host().reset_control().is_none());
    assert_eq!(i.host().updates, before);
    let state = i.crosshair().state().expect("active");
    assert!(!state.is_zoomed());
    assert!(state.original_data.is_empty());
    assert!(approx(i.host().x_axis().max(), 100.0));
}

#[test]
fn after_zoom_sees_normalized_bounds() {
    let seen = Rc::new(Cell::new(None));
    let sink = seen.clone();
    let options = CrosshairOptions::default().with_after_zoom(move |start, end| sink.set(Some((start, end))));
    let inst = attach(options);
    inst.borrow_mut().zoom(80.0, 20.0);
    assert_eq!(seen.get(), Some((20.0, 80.0)));
}

#[test]
fn pan_keeps_width_and_stays_in_bounds() {
    let inst = attach(CrosshairOptions::default());
    let mut i = inst.borrow_mut();
    assert!(!i.pan_zoom(10.0));

    i.zoom(20.0, 80.0);
    assert!(i.pan_zoom(10.0));
    let range = i.crosshair().state().and_then(|s| s.zoom_range).expect("zoomed");
    assert_eq!((range.start, range.end), (30.0, 90.0));

    i.pan_zoom(50.0);
    let range = i.crosshair().state().and_then(|s| s.zoom_range).expect("zoomed");
    assert_eq!((range.start, range.end), (40.0, 100.0));

    i.pan_zoom(-100.0);
    let range = i.crosshair().state().and_then(|s| s.zoom_range).expect("zoomed");
    assert_eq!((range.start, range.end), (0.0, 60.0));
}

#[test]
fn category_zoom_narrows_axis_without_filtering() {
    let labels = (0..6).map(|i| TickLabel::Text(format!("d{i}"))).collect();
    let host = HeadlessChart::category(400, 300, labels, (0.0, 10.0))
        .with_dataset(Dataset::with_values("v", [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    let inst = ChartInstance::attach(host, &CrosshairOptions::default(), &SyncBus::new());
    let mut i = inst.borrow_mut();

    assert!(i.zoom(1.2, 3.8));
    assert_eq!(i.host().datasets()[0].data.len(), 6);
    assert_eq!((i.host().x_axis().min(), i.host().x_axis().max()), (1.0, 4.0));

    // the snapshot is taken for category charts too
    assert_eq!(i.crosshair().state().map(|s| s.original_data.len()), Some(1));
    i.click_reset_control();
    assert_eq!((i.host().x_axis().min(), i.host().x_axis().max()), (0.0, 5.0));
}

#[test]
fn destroy_removes_the_reset_control() {
    let inst = attach(CrosshairOptions::default());
    let mut i = inst.borrow_mut();
    i.zoom(20.0, 80.0);
    i.destroy();
    assert!(i.host().reset_control().is_none());
    assert!(!i.crosshair().is_active());
    assert!(!i.zoom(20.0, 80.0));
}
