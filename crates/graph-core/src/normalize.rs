// File: crates/graph-core/src/normalize.rs
// Summary: Maps a raw sample series to viewport pixel points with multiplicative vertical padding.
// Notes:
// - Padding scales the extrema (`min * (1 - p)`, `max * (1 + p)`). It has no
//   effect at zero and shrinks the range for negative extrema. Kept as-is for
//   compatibility with existing charts.
// - Degenerate inputs (fewer than two samples, zero spread) produce no path.

use crate::geometry::{Point, Viewport};

/// Minimum and maximum of `samples`, or `None` when empty.
pub fn extrema(samples: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in samples {
        min = min.min(v);
        max = max.max(v);
    }
    if samples.is_empty() { None } else { Some((min, max)) }
}

/// Padded `(min', max')` for `samples`, or `None` when no path would be drawn.
pub fn padded_range(samples: &[f64], padding_percent: f64) -> Option<(f64, f64)> {
    if samples.len() < 2 {
        return None;
    }
    let (min, max) = extrema(samples)?;
    let lo = min * (1.0 - padding_percent);
    let hi = max * (1.0 + padding_percent);
    let spread = hi - lo;
    if spread == 0.0 || !spread.is_finite() {
        return None;
    }
    Some((lo, hi))
}

/// Compute one pixel-space point per sample.
///
/// `x` spreads the samples evenly across `viewport.width`; `y` is the sample's
/// position inside the padded range scaled to `viewport.height`, with the padded
/// minimum at `y = 0`. Returns an empty vector for degenerate input.
pub fn compute_path(samples: &[f64], viewport: Viewport, padding_percent: f64) -> Vec<Point> {
    let Some((lo, hi)) = padded_range(samples, padding_percent) else {
        return Vec::new();
    };
    let spread = hi - lo;
    let last = (samples.len() - 1) as f64;
    let w = viewport.width as f64;
    let h = viewport.height as f64;

    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = w * (i as f64 / last);
            let y = h * ((v - lo) / spread);
            Point::new(x as f32, y as f32)
        })
        .collect()
}
