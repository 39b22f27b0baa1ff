//! Boundary validation errors for the tracking entry point.

use thiserror::Error;

/// Rejected inputs or configurations.
///
/// These cover malformed calls only. Per-point tracking failures are never
/// errors; dropped points are simply absent from the result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackError {
    #[error("frame size mismatch: old {old_w}x{old_h}, new {new_w}x{new_h}")]
    FrameSizeMismatch {
        old_w: usize,
        old_h: usize,
        new_w: usize,
        new_h: usize,
    },
    #[error("frames must be non-empty")]
    EmptyFrame,
    #[error("half window size {half_window} invalid for a {width}x{height} frame")]
    InvalidWindow {
        half_window: usize,
        width: usize,
        height: usize,
    },
    #[error("subpixel factor must be positive")]
    ZeroSubpixelFactor,
    #[error("step threshold must be positive")]
    ZeroStepThreshold,
    #[error(
        "subpixel range overflow: dimension {dimension} times factor {subpixel_factor} \
         leaves no headroom in i32"
    )]
    SubpixelRangeOverflow {
        dimension: usize,
        subpixel_factor: u32,
    },
}
