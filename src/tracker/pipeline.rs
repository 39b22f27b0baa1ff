//! Tracking pipeline driving pyramidal Lucas-Kanade end-to-end.
//!
//! The [`FlowTracker`] exposes a simple API: feed two same-size grayscale
//! frames plus a set of candidate points and get the surviving subpixel
//! flow vectors, optionally with detailed diagnostics. Internally it builds
//! one pyramid per frame, then walks levels coarsest → finest. Each level
//! seeds or doubles the per-point estimates, tracks every active point
//! through the Gauss-Newton refiner, and compacts the survivors into a
//! fresh list that feeds the next level.
//!
//! Typical usage:
//! ```no_run
//! use flow_tracker::image::ImageU8;
//! use flow_tracker::{FlowTracker, Point, TrackerParams};
//!
//! # fn example(new_frame: ImageU8, old_frame: ImageU8) {
//! let mut tracker = FlowTracker::new(TrackerParams::default());
//! let points = vec![Point { x: 120, y: 80 }];
//! if let Ok(result) = tracker.track(new_frame, old_frame, &points) {
//!     println!("tracked {} points", result.vectors.len());
//! }
//! # }
//! ```

use log::debug;
use std::time::Instant;

use super::params::TrackerParams;
use super::refine::{track_point_at_level, LevelContext, PointOutcome};
use super::workspace::TrackerWorkspace;
use crate::diagnostics::{
    InputDescriptor, LevelStage, PipelineTrace, PointOutcomeCounts, PyramidStage, TimingBreakdown,
    TrackReport,
};
use crate::error::TrackError;
use crate::image::{GrayImageU8, ImageU8};
use crate::pyramid::Pyramid;
use crate::types::{FlowVector, Point, SubpixelCoord, TrackResult};

/// Sparse optical flow tracker orchestrating pyramid construction, per-level
/// point tracking, and survivor compaction.
pub struct FlowTracker {
    params: TrackerParams,
    workspace: TrackerWorkspace,
}

impl FlowTracker {
    /// Create a tracker with the supplied parameters.
    pub fn new(params: TrackerParams) -> Self {
        Self {
            params,
            workspace: TrackerWorkspace::new(),
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    /// Replace the parameters for subsequent calls.
    pub fn set_params(&mut self, params: TrackerParams) {
        self.params = params;
    }

    /// Track `points` from the old frame to the new frame, returning the
    /// surviving flow vectors in input order.
    pub fn track(
        &mut self,
        new_frame: ImageU8<'_>,
        old_frame: ImageU8<'_>,
        points: &[Point],
    ) -> Result<TrackResult, TrackError> {
        self.track_with_diagnostics(new_frame, old_frame, points)
            .map(|report| report.result)
    }

    /// Track and return both the result and a detailed per-stage trace.
    pub fn track_with_diagnostics(
        &mut self,
        new_frame: ImageU8<'_>,
        old_frame: ImageU8<'_>,
        points: &[Point],
    ) -> Result<TrackReport, TrackError> {
        if (old_frame.w, old_frame.h) != (new_frame.w, new_frame.h) {
            return Err(TrackError::FrameSizeMismatch {
                old_w: old_frame.w,
                old_h: old_frame.h,
                new_w: new_frame.w,
                new_h: new_frame.h,
            });
        }
        self.params.validate(new_frame.w, new_frame.h)?;

        let (width, height) = (new_frame.w, new_frame.h);
        let depth = self.params.pyramid_depth;
        debug!(
            "FlowTracker::track start w={} h={} points={} depth={}",
            width,
            height,
            points.len(),
            depth
        );
        let total_start = Instant::now();

        let pyr_start = Instant::now();
        let pyramid_old = Pyramid::build(old_frame, depth);
        let pyr_old_ms = pyr_start.elapsed().as_secs_f64() * 1000.0;
        let pyr_new_start = Instant::now();
        let pyramid_new = Pyramid::build(new_frame, depth);
        let pyr_new_ms = pyr_new_start.elapsed().as_secs_f64() * 1000.0;
        let pyr_ms = pyr_old_ms + pyr_new_ms;

        self.workspace.ensure_patch(self.params.patch_size());
        let attempted = points.len().min(self.params.max_points);

        let mut active: Vec<FlowVector> = Vec::with_capacity(attempted);
        let mut level_stages = Vec::with_capacity(depth + 1);
        let mut tracking_ms = 0.0f64;

        for level_idx in (0..=depth).rev() {
            let level_start = Instant::now();
            let old_level = &pyramid_old.levels[level_idx];
            let new_level = &pyramid_new.levels[level_idx];
            let mut counts = PointOutcomeCounts::default();

            let (points_in, input) = if level_idx == depth {
                (
                    attempted,
                    seed_vectors(&points[..attempted], &self.params, old_level, &mut counts),
                )
            } else {
                let doubled = propagate_vectors(&active, &mut counts);
                (active.len(), doubled)
            };

            let outcomes = self.track_level(old_level, new_level, input);
            active = compact_survivors(outcomes, &mut counts);

            let elapsed = level_start.elapsed().as_secs_f64() * 1000.0;
            tracking_ms += elapsed;
            debug!(
                "FlowTracker::level L{}: in={} survived={} rejected={}",
                level_idx,
                points_in,
                active.len(),
                counts.rejected()
            );
            level_stages.push(LevelStage {
                level_index: level_idx,
                width: old_level.w,
                height: old_level.h,
                points_in,
                survived: active.len(),
                outcomes: counts,
                elapsed_ms: elapsed,
            });
        }

        let latency = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "FlowTracker::track done tracked={}/{} latency_ms={:.3}",
            active.len(),
            attempted,
            latency
        );

        let result = TrackResult {
            vectors: active,
            attempted,
            latency_ms: latency,
        };

        let mut timings = TimingBreakdown::with_total(latency);
        timings.record("pyramid", pyr_ms);
        timings.record("tracking", tracking_ms);

        let trace = PipelineTrace {
            input: InputDescriptor {
                width,
                height,
                points: points.len(),
                max_points: self.params.max_points,
                pyramid_levels: depth + 1,
            },
            timings,
            pyramid_old: PyramidStage::from_pyramid(&pyramid_old, pyr_old_ms),
            pyramid_new: PyramidStage::from_pyramid(&pyramid_new, pyr_new_ms),
            levels: level_stages,
        };

        Ok(TrackReport { result, trace })
    }

    /// Run every input vector through one level, sequentially or with Rayon.
    fn track_level(
        &mut self,
        old_level: &GrayImageU8,
        new_level: &GrayImageU8,
        input: Vec<FlowVector>,
    ) -> Vec<(FlowVector, PointOutcome)> {
        if self.params.parallel.should_parallelize(input.len()) {
            #[cfg(feature = "parallel")]
            {
                return track_level_parallel(&self.params, old_level, new_level, input);
            }
        }

        let ctx = LevelContext {
            old_level,
            new_level,
            params: &self.params,
        };
        input
            .into_iter()
            .map(|vector| track_point_at_level(&ctx, &mut self.workspace, vector))
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn track_level_parallel(
    params: &TrackerParams,
    old_level: &GrayImageU8,
    new_level: &GrayImageU8,
    input: Vec<FlowVector>,
) -> Vec<(FlowVector, PointOutcome)> {
    use rayon::prelude::*;

    let patch_size = params.patch_size();
    let ctx = LevelContext {
        old_level,
        new_level,
        params,
    };
    input
        .into_par_iter()
        .map_init(
            || {
                let mut ws = TrackerWorkspace::new();
                ws.ensure_patch(patch_size);
                ws
            },
            |ws, vector| track_point_at_level(&ctx, ws, vector),
        )
        .collect()
}

/// Convert candidate points into coarsest-level subpixel vectors, dropping
/// points whose seed position falls outside the region of interest.
fn seed_vectors(
    points: &[Point],
    params: &TrackerParams,
    coarse_level: &GrayImageU8,
    counts: &mut PointOutcomeCounts,
) -> Vec<FlowVector> {
    let sf = params.subpixel_factor as i64;
    let exp = 1i64 << params.pyramid_depth;
    let half_window = params.half_window_size as i64;
    let (width, height) = (coarse_level.w as i64, coarse_level.h as i64);

    let mut seeded = Vec::with_capacity(points.len());
    for point in points {
        let x = point.x as i64 * sf / exp;
        let y = point.y as i64 * sf / exp;
        if !super::refine::in_roi(x, y, sf, half_window, width, height) {
            debug!("seed: point ({}, {}) outside ROI", point.x, point.y);
            counts.record_rejection(&super::refine::RejectReason::OutOfRoi);
            continue;
        }
        seeded.push(FlowVector {
            pos: SubpixelCoord {
                x: x as i32,
                y: y as i32,
            },
            flow: SubpixelCoord::default(),
        });
    }
    seeded
}

/// Double the surviving vectors into the next finer level's coordinates.
fn propagate_vectors(
    survivors: &[FlowVector],
    counts: &mut PointOutcomeCounts,
) -> Vec<FlowVector> {
    let mut propagated = Vec::with_capacity(survivors.len());
    for vector in survivors {
        let pos_x = 2 * vector.pos.x as i64;
        let pos_y = 2 * vector.pos.y as i64;
        let flow_x = 2 * vector.flow.x as i64;
        let flow_y = 2 * vector.flow.y as i64;
        let doubled = (
            i32::try_from(pos_x),
            i32::try_from(pos_y),
            i32::try_from(flow_x),
            i32::try_from(flow_y),
        );
        match doubled {
            (Ok(px), Ok(py), Ok(fx), Ok(fy)) => propagated.push(FlowVector {
                pos: SubpixelCoord { x: px, y: py },
                flow: SubpixelCoord { x: fx, y: fy },
            }),
            _ => {
                debug!("propagate: doubled estimate overflowed the subpixel range");
                counts.record_rejection(&super::refine::RejectReason::OutOfRoi);
            }
        }
    }
    propagated
}

/// Keep the tracked vectors, in order, recording every terminal state.
fn compact_survivors(
    outcomes: Vec<(FlowVector, PointOutcome)>,
    counts: &mut PointOutcomeCounts,
) -> Vec<FlowVector> {
    let mut survivors = Vec::with_capacity(outcomes.len());
    for (vector, outcome) in outcomes {
        counts.record(&outcome);
        if outcome.is_tracked() {
            survivors.push(vector);
        }
    }
    survivors
}
