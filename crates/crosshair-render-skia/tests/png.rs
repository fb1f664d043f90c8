// File: crates/crosshair-render-skia/tests/png.rs
// Purpose: PNG output of a chart with the crosshair overlay; decode and inspect a few pixels.

use crosshair_core::scale::NumericScale;
use crosshair_core::types::Insets;
use crosshair_core::{ChartInstance, CrosshairOptions, Dataset, HeadlessChart, PointerEvent, SyncBus};
use crosshair_render_skia::{render_to_png, render_to_png_bytes, RenderOptions};

/// 400x300 surface, plot 50..350 x 50..250, values 0..100 both ways.
fn chart() -> HeadlessChart {
    let mut host = HeadlessChart::new(
        NumericScale::linear(0.0, 100.0, 50.0, 350.0),
        NumericScale::linear(0.0, 100.0, 250.0, 50.0),
    )
    .with_dataset(Dataset::with_points("flat", [(0.0, 90.0), (100.0, 90.0)]).interpolated());
    host.width = 400;
    host.height = 300;
    host.insets = Insets::new(50, 50, 50, 50);
    host
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

#[test]
fn png_has_surface_dimensions() {
    let inst = ChartInstance::attach(chart(), &CrosshairOptions::default(), &SyncBus::new());
    let bytes = render_to_png_bytes(&mut inst.borrow_mut(), &RenderOptions::default()).expect("render");
    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (400, 300));
    assert_eq!(img.get_pixel(0, 0)[3], 255);
}

#[test]
fn crosshair_line_is_painted_at_cursor() {
    let inst = ChartInstance::attach(chart(), &CrosshairOptions::default(), &SyncBus::new());
    inst.borrow_mut().pointer(PointerEvent::move_to(200.5, 150.5));

    let opts = RenderOptions { draw_grid: false, ..RenderOptions::default() };
    let img = decode(&render_to_png_bytes(&mut inst.borrow_mut(), &opts).expect("render"));

    // default line colour is #f66
    let on_line = img.get_pixel(200, 220);
    assert!(on_line[0] > 200, "red channel {on_line:?}");
    assert!(on_line[1] < 160, "green channel {on_line:?}");

    let off_line = img.get_pixel(260, 220);
    assert!(off_line[0] < 60, "background {off_line:?}");
}

#[test]
fn zoombox_tints_the_dragged_span() {
    let options = CrosshairOptions::from_json(r#"{"zoom": {"enabled": true}}"#).expect("options");
    let inst = ChartInstance::attach(chart(), &options, &SyncBus::new());
    {
        let mut i = inst.borrow_mut();
        i.pointer(PointerEvent::down(100.0, 150.0));
        i.pointer(PointerEvent::drag_to(300.0, 150.0));
    }

    let opts = RenderOptions { draw_grid: false, ..RenderOptions::default() };
    let img = decode(&render_to_png_bytes(&mut inst.borrow_mut(), &opts).expect("render"));

    let inside = img.get_pixel(200, 200);
    let outside = img.get_pixel(320, 200);
    assert!(inside[2] > outside[2] + 20, "inside {inside:?} outside {outside:?}");
}

#[test]
fn writes_png_file() {
    let inst = ChartInstance::attach(chart(), &CrosshairOptions::default(), &SyncBus::new());
    let path = std::env::temp_dir().join("crosshair-render-skia-test").join("chart.png");
    render_to_png(&mut inst.borrow_mut(), &RenderOptions::default(), &path).expect("write");
    let img = image::open(&path).expect("open").to_rgba8();
    assert_eq!(img.width(), 400);
}
