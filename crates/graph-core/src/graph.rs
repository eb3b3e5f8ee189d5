// File: crates/graph-core/src/graph.rs
// Summary: Widget-level state owner tying samples, viewport, config, path, and animation together.

use tracing::debug;

use crate::animation::{AnimationState, Phase};
use crate::clock::{Clock, WallClock};
use crate::config::GraphConfig;
use crate::error::Result;
use crate::geometry::{Point, Viewport};
use crate::normalize::compute_path;
use crate::types::Millis;

/// What the host should draw for one redraw request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame<'a> {
    /// Committed polyline, in drawing order.
    pub polyline: &'a [Point],
    /// Marker at the animation frontier while it is still running.
    pub marker: Option<Point>,
    /// Whether another redraw should be scheduled.
    pub needs_redraw: bool,
}

/// An animated line graph: feed it samples and a size, then ask for frames.
///
/// Any change to the samples or the viewport recomputes the path and restarts
/// the animation at the clock's current time. Nothing here schedules work; the
/// host calls [`frame`](Self::frame) from its own redraw loop.
pub struct AnimatedLineGraph<C: Clock = WallClock> {
    config: GraphConfig,
    samples: Vec<f64>,
    viewport: Viewport,
    path: Option<Vec<Point>>,
    animation: AnimationState,
    clock: C,
}

impl AnimatedLineGraph<WallClock> {
    pub fn new(config: GraphConfig) -> Result<Self> {
        Self::with_clock(config, WallClock)
    }
}

impl Default for AnimatedLineGraph<WallClock> {
    fn default() -> Self {
        Self::build(GraphConfig::default(), WallClock)
    }
}

impl<C: Clock> AnimatedLineGraph<C> {
    /// Build a graph driven by `clock`. The config goes through the same
    /// validation as [`configure`](Self::configure).
    pub fn with_clock(config: GraphConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: GraphConfig, clock: C) -> Self {
        let now = clock.now_ms();
        Self {
            config,
            samples: Vec::new(),
            viewport: Viewport::ZERO,
            path: None,
            animation: AnimationState::new(now),
            clock,
        }
    }

    /// Replace the data set and restart the animation.
    pub fn set_samples(&mut self, samples: impl Into<Vec<f64>>) {
        self.samples = samples.into();
        debug!(count = self.samples.len(), "set samples");
        self.recompute();
    }

    /// Record a new drawable size and restart the animation.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        debug!(width = self.viewport.width, height = self.viewport.height, "set viewport size");
        self.recompute();
    }

    /// Swap in a validated configuration.
    ///
    /// A new duration applies to the running animation. A new padding applies
    /// from the next data or size change.
    pub fn configure(&mut self, config: GraphConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn recompute(&mut self) {
        let points = compute_path(&self.samples, self.viewport, self.config.padding_percent);
        self.path = if points.is_empty() { None } else { Some(points) };
        self.animation.reset(self.clock.now_ms());
        debug!(points = self.path().len(), "recomputed path");
    }

    /// Advance the animation to the clock's current time and describe what to draw.
    pub fn frame(&mut self) -> Frame<'_> {
        let now = self.clock.now_ms();
        self.frame_at(now)
    }

    /// Same as [`frame`](Self::frame) for an explicit timestamp.
    pub fn frame_at(&mut self, now: Millis) -> Frame<'_> {
        let path = self.path.as_deref().unwrap_or(&[]);
        let tick = self.animation.tick(now, path, self.config.duration_ms);
        Frame {
            polyline: self.animation.committed(),
            marker: tick.frontier,
            needs_redraw: tick.committed,
        }
    }

    /// Frontier for `now` without advancing anything.
    pub fn current_frontier(&self, now: Millis) -> Option<Point> {
        self.animation.current_frontier(now, self.path(), self.config.duration_ms)
    }

    pub fn phase(&self) -> Phase {
        self.animation.phase(self.clock.now_ms(), self.path(), self.config.duration_ms)
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Full normalized path; empty when unset.
    pub fn path(&self) -> &[Point] {
        self.path.as_deref().unwrap_or(&[])
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    pub fn revealed(&self) -> usize {
        self.animation.revealed()
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
