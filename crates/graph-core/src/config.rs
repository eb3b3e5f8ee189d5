// File: crates/graph-core/src/config.rs
// Summary: Graph configuration (animation + style pass-through) with validation and JSON loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::types::{
    Rgba, DEFAULT_DURATION_MS, DEFAULT_LINE_THICKNESS_PX, DEFAULT_MARKER_RADIUS_PX,
    DEFAULT_PADDING_PERCENT,
};

/// Options recognized by [`crate::AnimatedLineGraph::configure`].
///
/// Only `duration_ms` and `padding_percent` feed the path/animation math. The
/// thickness, radius and colors are handed to whatever draws the frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub duration_ms: f64,
    pub padding_percent: f64,
    pub line_thickness_px: f32,
    pub marker_radius_px: f32,
    pub line_color: Rgba,
    pub marker_color: Rgba,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            padding_percent: DEFAULT_PADDING_PERCENT,
            line_thickness_px: DEFAULT_LINE_THICKNESS_PX,
            marker_radius_px: DEFAULT_MARKER_RADIUS_PX,
            line_color: Rgba::BLACK,
            marker_color: Rgba::BLACK,
        }
    }
}

impl GraphConfig {
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_padding_percent(mut self, padding_percent: f64) -> Self {
        self.padding_percent = padding_percent;
        self
    }

    pub fn with_line(mut self, thickness_px: f32, color: Rgba) -> Self {
        self.line_thickness_px = thickness_px;
        self.line_color = color;
        self
    }

    pub fn with_marker(mut self, radius_px: f32, color: Rgba) -> Self {
        self.marker_radius_px = radius_px;
        self.marker_color = color;
        self
    }

    /// Reject values the animation cannot meaningfully use.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(GraphError::InvalidConfiguration(format!(
                "duration_ms must be positive, got {}",
                self.duration_ms
            )));
        }
        if !self.padding_percent.is_finite() || self.padding_percent < 0.0 {
            return Err(GraphError::InvalidConfiguration(format!(
                "padding_percent must be non-negative, got {}",
                self.padding_percent
            )));
        }
        if !(self.line_thickness_px >= 0.0) {
            return Err(GraphError::InvalidConfiguration(format!(
                "line_thickness_px must be non-negative, got {}",
                self.line_thickness_px
            )));
        }
        if !(self.marker_radius_px >= 0.0) {
            return Err(GraphError::InvalidConfiguration(format!(
                "marker_radius_px must be non-negative, got {}",
                self.marker_radius_px
            )));
        }
        Ok(())
    }

    /// Parse a JSON document; absent fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GraphConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
