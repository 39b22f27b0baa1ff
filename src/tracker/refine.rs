//! Per-point tracking at one pyramid level.
//!
//! Covers reference-window extraction, gradient linearization, and the
//! bounded Gauss-Newton refinement loop:
//! - sample a candidate window from the new frame at `pos + flow`,
//! - compute the residual against the reference interior,
//! - solve the precomputed 2×2 system for a flow step,
//! - stop on convergence, rejection, or the iteration cap.
//!
//! A point ends a level in exactly one terminal state. Convergence and an
//! exhausted iteration budget both count as tracked; only a rejection
//! removes the point from subsequent levels. Rejection reasons feed the
//! debug log and the per-level diagnostic counters — never control flow
//! visible to the caller.

use log::debug;

use super::linearize::linearize_window;
use super::params::TrackerParams;
use super::workspace::TrackerWorkspace;
use crate::image::GrayImageU8;
use crate::types::{FlowVector, SubpixelCoord};
use crate::window::{sample_subpixel_window, window_difference, window_dot, window_gradients};

/// Why a point was dropped at some level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Initial or mid-iteration position too close to the image border.
    OutOfRoi,
    /// Gradient covariance determinant below threshold: not enough texture.
    DegenerateWindow,
    /// Candidate mismatch stayed large past half the iteration budget.
    ResidualTooLarge,
}

/// Terminal state of one point at one pyramid level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointOutcome {
    Converged,
    IterationsExhausted,
    Rejected(RejectReason),
}

impl PointOutcome {
    /// Converged and exhausted both feed the next level.
    pub fn is_tracked(&self) -> bool {
        !matches!(self, PointOutcome::Rejected(_))
    }
}

/// Frame pair for one pyramid level, shared by every point tracked there.
pub(crate) struct LevelContext<'a> {
    pub old_level: &'a GrayImageU8,
    pub new_level: &'a GrayImageU8,
    pub params: &'a TrackerParams,
}

/// True when a subpixel position keeps a full tracking window inside the
/// level. Positions are in subpixel units; the window margin is checked in
/// whole pixels.
pub(crate) fn in_roi(
    x: i64,
    y: i64,
    subpixel_factor: i64,
    half_window: i64,
    width: i64,
    height: i64,
) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    let px = x / subpixel_factor;
    let py = y / subpixel_factor;
    px >= half_window && px < width - half_window && py >= half_window && py < height - half_window
}

/// Track a single point through one level: linearize once, then iterate.
pub(crate) fn track_point_at_level(
    ctx: &LevelContext<'_>,
    ws: &mut TrackerWorkspace,
    mut vector: FlowVector,
) -> (FlowVector, PointOutcome) {
    let params = ctx.params;
    let sf = params.subpixel_factor;

    sample_subpixel_window(ctx.old_level, &mut ws.reference, vector.pos, sf);
    window_gradients(&ws.reference, &mut ws.grad_x, &mut ws.grad_y);
    let g = linearize_window(&ws.grad_x, &ws.grad_y, sf);
    if g.is_degenerate() {
        debug!(
            "refine: degenerate window at ({}, {}) det={}",
            vector.pos.x, vector.pos.y, g.det
        );
        return (vector, PointOutcome::Rejected(RejectReason::DegenerateWindow));
    }

    let error_threshold = params.error_threshold();
    let (width, height) = (ctx.old_level.w as i64, ctx.old_level.h as i64);
    let half_window = params.half_window_size as i64;
    let mut flow_x = vector.flow.x as i64;
    let mut flow_y = vector.flow.y as i64;
    let mut outcome = PointOutcome::IterationsExhausted;

    for it in 0..params.max_iterations {
        let cand_x = vector.pos.x as i64 + flow_x;
        let cand_y = vector.pos.y as i64 + flow_y;
        if !in_roi(cand_x, cand_y, sf as i64, half_window, width, height) {
            debug!("refine: candidate ({cand_x}, {cand_y}) left the ROI at iteration {it}");
            return (vector, PointOutcome::Rejected(RejectReason::OutOfRoi));
        }

        let center = SubpixelCoord {
            x: cand_x as i32,
            y: cand_y as i32,
        };
        sample_subpixel_window(ctx.new_level, &mut ws.candidate, center, sf);
        let error = window_difference(&ws.reference, &ws.candidate, &mut ws.residual);
        if error > error_threshold && it > params.max_iterations / 2 {
            debug!(
                "refine: residual {error} above {error_threshold} at iteration {it} for ({}, {})",
                vector.pos.x, vector.pos.y
            );
            return (vector, PointOutcome::Rejected(RejectReason::ResidualTooLarge));
        }

        let b_x = window_dot(&ws.residual, &ws.grad_x) / 255;
        let b_y = window_dot(&ws.residual, &ws.grad_y) / 255;
        let (step_x, step_y) = g.solve(b_x, b_y);
        flow_x += step_x;
        flow_y += step_y;

        if step_x.abs() + step_y.abs() < params.step_threshold as i64 {
            outcome = PointOutcome::Converged;
            break;
        }
    }

    // A wildly diverged estimate that no longer fits the fixed-point range
    // is dropped like any other out-of-region point.
    match (i32::try_from(flow_x), i32::try_from(flow_y)) {
        (Ok(x), Ok(y)) => {
            vector.flow = SubpixelCoord { x, y };
            (vector, outcome)
        }
        _ => {
            debug!("refine: flow ({flow_x}, {flow_y}) overflowed the subpixel range");
            (vector, PointOutcome::Rejected(RejectReason::OutOfRoi))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roi_excludes_borders_and_negatives() {
        // 100×100 level, half window 5, subpixel factor 10.
        assert!(in_roi(500, 500, 10, 5, 100, 100));
        assert!(in_roi(50, 949, 10, 5, 100, 100));
        assert!(!in_roi(49, 500, 10, 5, 100, 100));
        assert!(!in_roi(500, 950, 10, 5, 100, 100));
        assert!(!in_roi(-1, 500, 10, 5, 100, 100));
    }

    #[test]
    fn tracked_covers_both_success_states() {
        assert!(PointOutcome::Converged.is_tracked());
        assert!(PointOutcome::IterationsExhausted.is_tracked());
        assert!(!PointOutcome::Rejected(RejectReason::OutOfRoi).is_tracked());
    }
}
