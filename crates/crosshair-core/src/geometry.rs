// File: crates/crosshair-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A position in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

/// Axis-aligned rectangle; `width`/`height` may be negative when the rectangle
/// was spanned right-to-left (a zoom box dragged backwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Same rectangle with non-negative extents.
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 { (self.x + self.width, -self.width) } else { (self.x, self.width) };
        let (y, height) = if self.height < 0.0 { (self.y + self.height, -self.height) } else { (self.y, self.height) };
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f64 { self.normalized().x }
    pub fn right(&self) -> f64 { let n = self.normalized(); n.x + n.width }
    pub fn top(&self) -> f64 { self.normalized().y }
    pub fn bottom(&self) -> f64 { let n = self.normalized(); n.y + n.height }
}
