// File: crates/graph-core/src/animation.rs
// Summary: Time-driven reveal of a normalized path: frontier lookup and the committed-point accumulator.

use tracing::{debug, trace};

use crate::geometry::Point;
use crate::types::Millis;

/// Index of the frontier point `elapsed_ms` into an animation of `duration_ms`
/// over `len` points, or `None` when nothing should be drawn.
///
/// `frame = floor(len * min(1, elapsed / duration))`, with `None` once
/// `elapsed > duration` or the frame runs off the end. A non-positive duration
/// completes immediately; a negative elapsed counts as zero.
pub fn frame_index(len: usize, elapsed_ms: Millis, duration_ms: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let elapsed = elapsed_ms.max(0) as f64;
    if elapsed > duration_ms {
        return None;
    }
    let progress = if duration_ms > 0.0 { (elapsed / duration_ms).min(1.0) } else { 1.0 };
    let frame = (len as f64 * progress).floor() as usize;
    if frame >= len { None } else { Some(frame) }
}

/// Frontier point for a given elapsed time. Pure.
pub fn frontier_at(path: &[Point], elapsed_ms: Millis, duration_ms: f64) -> Option<Point> {
    frame_index(path.len(), elapsed_ms, duration_ms).map(|i| path[i])
}

/// Result of one [`AnimationState::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// `false` means the caller should stop scheduling redraws.
    pub committed: bool,
    /// Where the marker goes this frame.
    pub frontier: Option<Point>,
}

impl Tick {
    pub const DONE: Tick = Tick { committed: false, frontier: None };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Reset, no tick has committed anything yet.
    Idle,
    /// `revealed` points committed so far.
    Animating { revealed: usize },
    /// Terminal until the next reset.
    Done,
}

/// Per-run animation state: start time plus the append-only list of committed points.
#[derive(Clone, Debug, Default)]
pub struct AnimationState {
    start: Millis,
    committed: Vec<Point>,
    // Path index of the last committed point.
    last_frame: Option<usize>,
    finished: bool,
}

impl AnimationState {
    pub fn new(now: Millis) -> Self {
        Self { start: now, ..Self::default() }
    }

    /// Discard the in-flight run and start a new one at `now`.
    pub fn reset(&mut self, now: Millis) {
        debug!(start = now, discarded = self.committed.len(), "reset animation");
        self.start = now;
        self.committed.clear();
        self.last_frame = None;
        self.finished = false;
    }

    pub fn start(&self) -> Millis {
        self.start
    }

    /// Number of points committed to the drawn polyline in this run.
    pub fn revealed(&self) -> usize {
        self.committed.len()
    }

    /// Polyline accumulated so far; the first point is the move-to origin.
    pub fn committed(&self) -> &[Point] {
        &self.committed
    }

    // `now - start`, saturating at the i64 bounds.
    fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.start)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Frontier for `now` without touching any state.
    pub fn current_frontier(
        &self,
        now: Millis,
        path: &[Point],
        duration_ms: f64,
    ) -> Option<Point> {
        frontier_at(path, self.elapsed(now), duration_ms)
    }

    pub fn phase(&self, now: Millis, path: &[Point], duration_ms: f64) -> Phase {
        if self.finished || self.current_frontier(now, path, duration_ms).is_none() {
            return Phase::Done;
        }
        match self.committed.len() {
            0 => Phase::Idle,
            revealed => Phase::Animating { revealed },
        }
    }

    /// Advance the accumulator to `now`.
    ///
    /// The first successful tick after a reset commits `path[0]` as the origin.
    /// Later ticks commit the frontier when its frame moved past the last
    /// committed one; a tick landing on the same frame adds nothing, so
    /// `revealed` counts distinct committed points and never exceeds `path.len()`.
    pub fn tick(&mut self, now: Millis, path: &[Point], duration_ms: f64) -> Tick {
        if self.finished {
            return Tick::DONE;
        }
        let Some(frame) = frame_index(path.len(), self.elapsed(now), duration_ms) else {
            self.finished = true;
            debug!(revealed = self.committed.len(), points = path.len(), "animation complete");
            return Tick::DONE;
        };
        let frontier = path[frame];

        match self.last_frame {
            None => {
                self.committed.push(path[0]);
                self.last_frame = Some(0);
            }
            Some(last) if frame > last => {
                self.committed.push(frontier);
                self.last_frame = Some(frame);
            }
            Some(_) => {}
        }
        trace!(frame, revealed = self.committed.len(), "tick");

        Tick { committed: true, frontier: Some(frontier) }
    }
}
