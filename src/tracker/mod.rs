//! Sparse pyramidal Lucas-Kanade tracker.
//!
//! Overview
//! - Builds one grayscale pyramid per input frame and walks levels from
//!   coarsest to finest, doubling each surviving point's position and flow
//!   estimate as the warm start for the next refinement.
//! - Per point and level, samples a padded subpixel reference window from
//!   the old frame, derives gradient windows, and accumulates the 2×2
//!   gradient covariance matrix once.
//! - Refines the flow estimate with a bounded Gauss-Newton loop against
//!   candidate windows from the new frame, in pure integer arithmetic on
//!   subpixel-scaled coordinates.
//! - Drops points (never clamps them) on border violations, determinant
//!   collapse, or persistently large residuals; survivors are compacted
//!   into a fresh list per level.
//!
//! Modules
//! - [`params`] – configuration types used by the tracker and demo tools.
//! - `pipeline` – the main [`FlowTracker`] implementation.
//! - `linearize` – gradient covariance accumulation and the 2×2 solve.
//! - `refine` – per-point refinement loop and terminal states.
//! - `workspace` – reusable scratch windows that amortise allocations.
//!
//! Key ideas
//! - All coordinates are integers scaled by the configured subpixel factor;
//!   the determinant's subpixel scaling keeps solved steps in the same
//!   units.
//! - The covariance matrix is computed once per point per level; only the
//!   residual changes across iterations.
//! - Per-point failures never surface as errors: dropped points are simply
//!   absent from the output, with reasons visible in the debug log and the
//!   diagnostics trace.

pub mod linearize;
pub mod params;
mod pipeline;
mod refine;
mod workspace;

pub use linearize::{linearize_window, GMatrix};
pub use params::{ParallelTrackOptions, TrackerParams};
pub use pipeline::FlowTracker;
pub use refine::{PointOutcome, RejectReason};
pub use workspace::TrackerWorkspace;
