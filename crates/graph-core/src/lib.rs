// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports path normalization, reveal animation, and widget state.

pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod normalize;
pub mod types;

pub use animation::{frame_index, frontier_at, AnimationState, Phase, Tick};
pub use clock::{Clock, ManualClock, WallClock};
pub use config::GraphConfig;
pub use error::GraphError;
pub use geometry::{Point, Viewport};
pub use graph::{AnimatedLineGraph, Frame};
pub use normalize::{compute_path, padded_range};
pub use types::{Millis, Rgba};
