use crate::tracker::{PointOutcome, RejectReason};
use serde::Serialize;

/// Terminal-state counters for every point examined at one pyramid level.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOutcomeCounts {
    pub converged: usize,
    pub iterations_exhausted: usize,
    pub rejected_out_of_roi: usize,
    pub rejected_degenerate: usize,
    pub rejected_residual: usize,
}

impl PointOutcomeCounts {
    pub fn record(&mut self, outcome: &PointOutcome) {
        match outcome {
            PointOutcome::Converged => self.converged += 1,
            PointOutcome::IterationsExhausted => self.iterations_exhausted += 1,
            PointOutcome::Rejected(reason) => self.record_rejection(reason),
        }
    }

    pub fn record_rejection(&mut self, reason: &RejectReason) {
        match reason {
            RejectReason::OutOfRoi => self.rejected_out_of_roi += 1,
            RejectReason::DegenerateWindow => self.rejected_degenerate += 1,
            RejectReason::ResidualTooLarge => self.rejected_residual += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.rejected_out_of_roi + self.rejected_degenerate + self.rejected_residual
    }
}

/// Tracking outcome of one pyramid level, coarsest first in the trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStage {
    pub level_index: usize,
    pub width: usize,
    pub height: usize,
    /// Points entering the level: the capped candidate count at the
    /// coarsest level, the previous level's survivors everywhere else.
    pub points_in: usize,
    pub survived: usize,
    pub outcomes: PointOutcomeCounts,
    pub elapsed_ms: f64,
}
