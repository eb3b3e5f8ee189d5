// File: crates/graph-core/src/types.rs
// Summary: Shared types and constants (timestamps, defaults, colors).

use serde::{Deserialize, Serialize};

/// Timestamp or duration in milliseconds.
pub type Millis = i64;

/// Default reveal duration in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 900.0;
/// Default vertical headroom, as a fraction applied to min/max.
pub const DEFAULT_PADDING_PERCENT: f64 = 0.02;
/// Default stroke width of the line, in pixels.
pub const DEFAULT_LINE_THICKNESS_PX: f32 = 15.0;
/// Default radius of the frontier marker, in pixels.
pub const DEFAULT_MARKER_RADIUS_PX: f32 = 20.0;

/// Straight (non-premultiplied) RGBA color. Carried through to the renderer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}
