//! Parameter types configuring the tracker.
//!
//! Defaults follow common small-platform settings: an 11×11 patch, a
//! subpixel factor of 10, and a shallow three-level pyramid. For tuning,
//! start with the half window size and the pyramid depth; the subpixel
//! factor trades positional resolution against integer headroom.

use crate::error::TrackError;

/// Tracker-wide parameters controlling one tracking call.
#[derive(Clone, Debug)]
pub struct TrackerParams {
    /// Half the tracking window size; the patch is `2 * half + 1` squared.
    pub half_window_size: usize,
    /// Fixed-point scale for positions and flow. All subpixel coordinates
    /// are pixel coordinates multiplied by this factor.
    pub subpixel_factor: u32,
    /// Maximum Gauss-Newton iterations per point per pyramid level.
    pub max_iterations: u32,
    /// Combined step magnitude (subpixel units) below which the refinement
    /// counts as converged.
    pub step_threshold: u32,
    /// Maximum number of candidate points examined per call.
    pub max_points: usize,
    /// Number of downscale steps; the pyramid has `pyramid_depth + 1`
    /// levels.
    pub pyramid_depth: usize,
    /// Controls whether the per-level point loop runs sequentially or with
    /// Rayon.
    pub parallel: ParallelTrackOptions,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            half_window_size: 5,
            subpixel_factor: 10,
            max_iterations: 10,
            step_threshold: 2,
            max_points: 25,
            pyramid_depth: 2,
            parallel: ParallelTrackOptions::default(),
        }
    }
}

impl TrackerParams {
    /// Side length of the tracking patch.
    pub fn patch_size(&self) -> usize {
        2 * self.half_window_size + 1
    }

    /// Residual budget: a mean squared difference of 25 intensity levels
    /// per patch pixel.
    pub fn error_threshold(&self) -> u64 {
        let patch = self.patch_size() as u64;
        625 * patch * patch
    }

    /// Check the parameters against a frame size.
    ///
    /// The subpixel headroom requirement keeps every position and flow
    /// value — including the level-to-level doubling — representable in
    /// `i32`.
    pub fn validate(&self, width: usize, height: usize) -> Result<(), TrackError> {
        if width == 0 || height == 0 {
            return Err(TrackError::EmptyFrame);
        }
        if self.subpixel_factor == 0 {
            return Err(TrackError::ZeroSubpixelFactor);
        }
        if self.step_threshold == 0 {
            return Err(TrackError::ZeroStepThreshold);
        }
        if self.half_window_size == 0 || self.half_window_size >= width.min(height) / 2 {
            return Err(TrackError::InvalidWindow {
                half_window: self.half_window_size,
                width,
                height,
            });
        }
        let dimension = width.max(height);
        if dimension as i64 * self.subpixel_factor as i64 * 4 > i32::MAX as i64 {
            return Err(TrackError::SubpixelRangeOverflow {
                dimension,
                subpixel_factor: self.subpixel_factor,
            });
        }
        Ok(())
    }
}

/// Controls whether per-level point tracking runs sequentially or with Rayon.
#[derive(Clone, Copy, Debug)]
pub struct ParallelTrackOptions {
    enabled: bool,
    min_points_for_parallel: usize,
}

impl ParallelTrackOptions {
    /// Construct explicit options.
    pub fn new(enabled: bool, min_points_for_parallel: usize) -> Self {
        Self {
            enabled,
            min_points_for_parallel: min_points_for_parallel.max(1),
        }
    }

    /// Disable parallel tracking regardless of point count.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            min_points_for_parallel: usize::MAX,
        }
    }

    /// Returns true when parallel tracking should be used for `point_count`.
    pub fn should_parallelize(&self, point_count: usize) -> bool {
        self.enabled && point_count >= self.min_points_for_parallel
    }

    /// Update the minimum point threshold for parallel tracking.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points_for_parallel = min_points.max(1);
        self
    }
}

impl Default for ParallelTrackOptions {
    fn default() -> Self {
        Self {
            enabled: cfg!(feature = "parallel"),
            min_points_for_parallel: 64,
        }
    }
}
