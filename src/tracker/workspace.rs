//! Call-scoped scratch windows reused across points and levels.
//!
//! Every point processed at a level runs through the same five fixed-size
//! windows: the padded reference window sampled from the old frame, the
//! candidate window sampled from the new frame, the two gradient windows,
//! and the residual window. Reusing one set across the whole call avoids
//! per-point allocations in the hot loop. When the point loop runs in
//! parallel each worker owns its own set, since concurrently processed
//! points cannot share windows.

use crate::image::{GrayImageU8, ImageI16};

/// Scratch windows for one tracking worker.
#[derive(Default)]
pub struct TrackerWorkspace {
    pub(crate) reference: GrayImageU8,
    pub(crate) candidate: GrayImageU8,
    pub(crate) grad_x: ImageI16,
    pub(crate) grad_y: ImageI16,
    pub(crate) residual: ImageI16,
}

impl TrackerWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size every window for the given patch side length, keeping existing
    /// allocations when the size has not changed.
    pub(crate) fn ensure_patch(&mut self, patch_size: usize) {
        if self.candidate.w == patch_size && self.reference.w == patch_size + 2 {
            return;
        }
        let padded = patch_size + 2;
        self.reference.resize(padded, padded);
        self.candidate.resize(patch_size, patch_size);
        self.grad_x.resize(patch_size, patch_size);
        self.grad_y.resize(patch_size, patch_size);
        self.residual.resize(patch_size, patch_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_patch_sizes_all_windows() {
        let mut ws = TrackerWorkspace::new();
        ws.ensure_patch(11);
        assert_eq!((ws.reference.w, ws.reference.h), (13, 13));
        assert_eq!((ws.candidate.w, ws.candidate.h), (11, 11));
        assert_eq!((ws.grad_x.w, ws.grad_y.w, ws.residual.w), (11, 11, 11));
    }

    #[test]
    fn repeated_ensure_keeps_dimensions() {
        let mut ws = TrackerWorkspace::new();
        ws.ensure_patch(7);
        ws.candidate.set(3, 3, 42);
        ws.ensure_patch(7);
        assert_eq!(ws.candidate.get(3, 3), 42);
        ws.ensure_patch(9);
        assert_eq!((ws.candidate.w, ws.candidate.h), (9, 9));
    }
}
