//! Grayscale image pyramid with integer 2× decimation.
//!
//! Level 0 is an owned copy of the input frame; every further level halves
//! the linear resolution (rounded up) of the one below. Decimation averages
//! the 2×2 source block feeding each destination pixel, clamping samples to
//! the image extents so odd dimensions stay well defined. The whole pyramid
//! stays in 8-bit intensity, keeping downstream arithmetic fixed-point.

use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};

/// Multi-resolution stack of grayscale levels, finest first.
#[derive(Clone, Debug)]
pub struct Pyramid {
    pub levels: Vec<GrayImageU8>,
}

impl Pyramid {
    /// Build a pyramid of `depth + 1` levels from an 8-bit grayscale frame.
    ///
    /// `levels[0]` is the full-resolution frame, `levels[depth]` the
    /// coarsest.
    pub fn build(gray: ImageU8<'_>, depth: usize) -> Self {
        let mut levels = Vec::with_capacity(depth + 1);
        levels.push(copy_l0(gray));

        for _ in 1..=depth {
            let prev = levels.last().expect("previous level available");
            let (nw, nh) = (prev.w.div_ceil(2), prev.h.div_ceil(2));
            let mut down = GrayImageU8::new(nw, nh);
            for y in 0..nh {
                let sy0 = (y * 2).min(prev.h - 1);
                let sy1 = (y * 2 + 1).min(prev.h - 1);
                let src0 = prev.row(sy0);
                let src1 = prev.row(sy1);
                let dst_row = down.row_mut(y);
                for (x, dst_px) in dst_row.iter_mut().enumerate() {
                    let sx0 = (x * 2).min(prev.w - 1);
                    let sx1 = (x * 2 + 1).min(prev.w - 1);
                    let sum = src0[sx0] as u16
                        + src0[sx1] as u16
                        + src1[sx0] as u16
                        + src1[sx1] as u16;
                    *dst_px = ((sum + 2) / 4) as u8;
                }
            }
            levels.push(down);
        }

        Self { levels }
    }

    /// Number of levels, including the full-resolution base.
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }
}

fn copy_l0(gray: ImageU8<'_>) -> GrayImageU8 {
    let mut out = GrayImageU8::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = gray.row(y);
        out.row_mut(y).copy_from_slice(src);
    }
    out
}
