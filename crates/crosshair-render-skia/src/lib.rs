// File: crates/crosshair-render-skia/src/lib.rs
// Summary: Skia backend for the crosshair: a `DrawSurface` over a Skia canvas and headless PNG output.

pub mod png;
pub mod surface;

pub use png::{render_to_png, render_to_png_bytes, RenderOptions};
pub use surface::{to_skia_color, SkiaSurface};
