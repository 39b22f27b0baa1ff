#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod tracker;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
pub mod pyramid;
pub mod window;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker + results.
pub use crate::tracker::{FlowTracker, ParallelTrackOptions, TrackerParams, TrackerWorkspace};
pub use crate::types::{FlowVector, Point, SubpixelCoord, TrackResult};

// High-level diagnostics returned by the tracker.
pub use crate::diagnostics::{PipelineTrace, TrackReport};

// Boundary validation error.
pub use crate::error::TrackError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use flow_tracker::prelude::*;
///
/// # fn main() {
/// let (w, h) = (320usize, 240usize);
/// let old = vec![0u8; w * h];
/// let new = vec![0u8; w * h];
///
/// let mut tracker = FlowTracker::new(TrackerParams::default());
/// let points = vec![Point { x: 160, y: 120 }];
/// let result = tracker
///     .track(
///         ImageU8 { w, h, stride: w, data: &new },
///         ImageU8 { w, h, stride: w, data: &old },
///         &points,
///     )
///     .expect("valid frames");
/// println!("tracked={} latency_ms={:.3}", result.vectors.len(), result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{FlowTracker, Point, TrackerParams, TrackResult};
}
