// File: crates/graph-core/src/geometry.rs
// Summary: Pixel-space point and viewport types.

use serde::{Deserialize, Serialize};

/// A sample mapped into viewport pixel space. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Drawable area in pixels.
/// Contract: both dimensions are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The size a widget has before its first layout pass.
    pub const ZERO: Viewport = Viewport { width: 0.0, height: 0.0 };

    /// Create a viewport; negative or NaN dimensions are clamped to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width: non_negative(width), height: non_negative(height) }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v > 0.0 { v } else { 0.0 }
}
