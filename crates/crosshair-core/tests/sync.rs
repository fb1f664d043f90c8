// File: crates/crosshair-core/tests/sync.rs
// Purpose: Cross-chart mirroring of pointer, drag-zoom and reset through the sync bus.

use std::cell::Cell;
use std::rc::Rc;

use crosshair_core::scale::NumericScale;
use crosshair_core::types::ChartId;
use crosshair_core::{
    ChartHost, ChartInstance, CrosshairOptions, Dataset, HeadlessChart, PointerEvent, SharedInstance, SyncBus,
    SyncMessage,
};

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

/// Values 0..100 over pixels `left..right`.
fn chart(left: f64, right: f64) -> HeadlessChart {
    HeadlessChart::new(
        NumericScale::linear(0.0, 100.0, left, right),
        NumericScale::linear(0.0, 100.0, 300.0, 50.0),
    )
    .with_dataset(Dataset::with_points("s", (0..10).map(|i| (5.0 + 10.0 * i as f64, 50.0))))
}

fn synced(bus: &SyncBus, group: u32, left: f64, right: f64) -> SharedInstance<HeadlessChart> {
    let json = format!(r#"{{"sync": {{"enabled": true, "group": {group}, "suppressTooltips": true}}, "zoom": {{"enabled": true}}}}"#);
    let options = CrosshairOptions::from_json(&json).expect("options");
    ChartInstance::attach(chart(left, right), &options, bus)
}

fn cursor_x(inst: &SharedInstance<HeadlessChart>) -> Option<f64> {
    inst.borrow().crosshair().state().and_then(|s| s.cursor).map(|c| c.x)
}

#[test]
fn pointer_is_mirrored_in_data_space() {
    let bus = SyncBus::new();
    let a = synced(&bus, 1, 50.0, 300.0);
    let b = synced(&bus, 1, 0.0, 200.0);

    // pixel 155 on A is x = 42, which B draws at pixel 84
    a.borrow_mut().pointer(PointerEvent::move_to(155.0, 100.0));

    assert_eq!(cursor_x(&a), Some(155.0));
    assert!(cursor_x(&b).is_some_and(|x| approx(x, 84.0)));
    assert!(a.borrow().tooltip_visible());
    assert!(!b.borrow().tooltip_visible());
}

#[test]
fn other_groups_are_untouched() {
    let bus = SyncBus::new();
    let a = synced(&bus, 1, 50.0, 300.0);
    let c = synced(&bus, 2, 50.0, 300.0);

    a.borrow_mut().pointer(PointerEvent::move_to(155.0, 100.0));
    assert_eq!(cursor_x(&c), None);
}

#[test]
fn replayed_events_are_not_published_again() {
    let bus = SyncBus::new();
    let a = synced(&bus, 1, 50.0, 300.0);
    let _b = synced(&bus, 1, 0.0, 200.0);

    let seen = Rc::new(Cell::new(0));
    let counter = seen.clone();
    let _probe = bus.subscribe(ChartId::next(), 1, move |_| counter.set(counter.get() + 1));

    a.borrow_mut().pointer(PointerEvent::move_to(155.0, 100.0));
    assert_eq!(seen.get(), 1);
}

#[test]
fn clicks_travel_as_moves() {
    let bus = SyncBus::new();
    let a = synced(&bus, 1, 50.0, 300.0);

    let kinds = Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = kinds.clone();
    let _probe = bus.subscribe(ChartId::next(), 1, move |msg| {
        if let SyncMessage::Pointer(p) = msg {
            sink.borrow_mut().push(p.kind);
        }
    });

    a.borrow_mut().pointer(PointerEvent::click(155.0, 100.0));
    assert_eq!(kinds.borrow().as_slice(), &[crosshair_core::PointerKind::Move]);
}

#[test]
fn drag_zoom_is_mirrored() {
    let bus = SyncBus::new();
    let a = synced(&bus, 1, 50.0, 300.0);
    let b = synced(&bus, 1, 0.0, 200.0);

    a.borrow_mut().pointer(PointerEvent::down(100.0, 150.0));
    a.borrow_mut().pointer(PointerEvent::drag_to(250.0, 150.0));
    assert!(b.borrow().crosshair().state().is_some_and(|s| s.drag.started));
    a.borrow_mut().pointer(PointerEvent::up(250.0, 150.0));

    for inst in [&a, &b] {
        let i = inst.borrow();
        let range = i.crosshair().state().and_then(|s| s.zoom_range).expect("zoomed");
        assert!(approx(range.start, 20.0) && approx(range.end, 80.0));
        assert_eq!(i.host().datasets()[0].data.len(), 8);
        assert!(i.host().reset_control().is_some());
    }
}

#[test]
fn reset_is_mirrored_once() {
    let bus = SyncBus::new();
    let a = synced(&bus, 1, 50.0, 300.0);
    let b = synced(&bus, 1, 0.0, 200.0);
    a.borrow_mut().zoom(20.0, 80.0);
    b.borrow_mut().zoom(20.0, 80.0);
    let b_updates = b.borrow().host().updates;

    a.borrow_mut().click_reset_control();

    let i = b.borrow();
    assert!(!i.crosshair().state().is_some_and(|s| s.is_zoomed()));
    assert!(i.host().reset_control().is_none());
    assert_eq!(i.host().datasets()[0].data.len(), 10);
    assert_eq!(i.host().updates, b_updates + 1);
    assert!(a.borrow().host().reset_control().is_none());
}

#[test]
fn destroy_and_drop_unsubscribe() {
    let bus = SyncBus::new();
    let a = synced(&bus, 1, 50.0, 300.0);
    let b = synced(&bus, 1, 0.0, 200.0);
    assert_eq!(bus.subscriber_count(), 2);

    a.borrow_mut().destroy();
    assert!(!a.borrow().is_subscribed());
    assert_eq!(bus.subscriber_count(), 1);

    drop(b);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn sync_disabled_charts_do_not_subscribe() {
    let bus = SyncBus::new();
    let inst = ChartInstance::attach(chart(50.0, 300.0), &CrosshairOptions::default(), &bus);
    assert!(!inst.borrow().is_subscribed());
    assert_eq!(bus.subscriber_count(), 0);
}
