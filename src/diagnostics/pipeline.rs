use serde::Serialize;

use super::levels::LevelStage;
use super::pyramid::PyramidStage;
use super::timing::TimingBreakdown;
use crate::types::TrackResult;

/// Description of the tracking inputs.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    /// Candidate points supplied by the caller, before the cap.
    pub points: usize,
    pub max_points: usize,
    pub pyramid_levels: usize,
}

/// Structured trace of every stage the tracking call executed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub pyramid_old: PyramidStage,
    pub pyramid_new: PyramidStage,
    /// Per-level tracking stages, coarsest first (processing order).
    pub levels: Vec<LevelStage>,
}

/// Main entry point for diagnostics: the compact result plus the trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackReport {
    pub result: TrackResult,
    pub trace: PipelineTrace,
}
