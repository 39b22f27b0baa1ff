//! Pixelwise window reductions: residual-with-error and dot product.

use crate::image::{GrayImageU8, ImageI16, ImageView, ImageViewMut};

/// Compute the per-pixel difference `reference − candidate` into `out` and
/// return the summed squared difference as the error magnitude.
///
/// `reference` may carry a symmetric halo around `candidate`'s extent (the
/// tracker's reference window is padded by one pixel for the gradient pass);
/// the comparison reads its centered interior.
pub fn window_difference(
    reference: &GrayImageU8,
    candidate: &GrayImageU8,
    out: &mut ImageI16,
) -> u64 {
    debug_assert_eq!((candidate.w, candidate.h), (out.w, out.h));
    debug_assert!(reference.w >= candidate.w && reference.h >= candidate.h);
    let border = (reference.w - candidate.w) / 2;
    debug_assert_eq!(reference.h - candidate.h, 2 * border);

    let mut error = 0u64;
    for y in 0..out.h {
        let ref_row = &reference.row(y + border)[border..border + out.w];
        let cand_row = candidate.row(y);
        let out_row = out.row_mut(y);
        for x in 0..out_row.len() {
            let diff = ref_row[x] as i16 - cand_row[x] as i16;
            out_row[x] = diff;
            error += (diff as i64 * diff as i64) as u64;
        }
    }
    error
}

/// Pixelwise multiply-and-sum of two equally sized signed windows.
pub fn window_dot(a: &ImageI16, b: &ImageI16) -> i64 {
    debug_assert_eq!((a.w, a.h), (b.w, b.h));
    let mut sum = 0i64;
    for y in 0..a.h {
        let row_a = a.row(y);
        let row_b = b.row(y);
        for (va, vb) in row_a.iter().zip(row_b) {
            sum += *va as i64 * *vb as i64;
        }
    }
    sum
}
