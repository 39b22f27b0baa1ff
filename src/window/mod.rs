//! Fixed-size window primitives backing the tracker.
//!
//! All routines operate on the small square scratch windows owned by the
//! tracker workspace:
//! - [`sample_subpixel_window`] extracts a bilinearly interpolated window at
//!   a subpixel-scaled center, in pure integer arithmetic.
//! - [`window_gradients`] derives horizontal/vertical two-pixel difference
//!   windows from a padded intensity window.
//! - [`window_difference`] computes the per-pixel residual between two
//!   windows together with its summed squared magnitude.
//! - [`window_dot`] is the pixelwise multiply-and-sum reduction.

pub mod gradients;
pub mod reduce;
pub mod sampling;

pub use self::gradients::window_gradients;
pub use self::reduce::{window_difference, window_dot};
pub use self::sampling::sample_subpixel_window;
