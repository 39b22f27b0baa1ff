//! Diagnostics data model exposed by the tracker.
//!
//! `TrackReport` is the main entry point returned by
//! `FlowTracker::track_with_diagnostics`, bundling the compact result with a
//! `PipelineTrace` describing every stage the call executed: input shape,
//! pyramid statistics for both frames, per-level survivor and rejection
//! counters, and a timing breakdown. Everything serializes to JSON for the
//! demo tools.

pub mod levels;
pub mod pipeline;
pub mod pyramid;
pub mod timing;

pub use levels::{LevelStage, PointOutcomeCounts};
pub use pipeline::{InputDescriptor, PipelineTrace, TrackReport};
pub use pyramid::{PyramidLevelReport, PyramidStage};
pub use timing::{StageTiming, TimingBreakdown};
