//! Subpixel window extraction with fixed-point bilinear interpolation.

use crate::image::{GrayImageU8, ImageView, ImageViewMut};
use crate::types::SubpixelCoord;

/// Fill `out` with a window centered at `center` (subpixel units) sampled
/// from `src` with bilinear interpolation.
///
/// The window spans `out.w × out.h` pixels at one-pixel spacing around the
/// center. Sample coordinates are clamped to the image extents, so a window
/// touching the border degrades to edge replication instead of reading out
/// of bounds. Interpolation weights come from the subpixel remainder; the
/// final division truncates, matching the fixed-point reference arithmetic.
pub fn sample_subpixel_window(
    src: &GrayImageU8,
    out: &mut GrayImageU8,
    center: SubpixelCoord,
    subpixel_factor: u32,
) {
    debug_assert!(subpixel_factor > 0);
    debug_assert!(out.w % 2 == 1 && out.h % 2 == 1, "window must be odd-sized");

    let sf = subpixel_factor as i64;
    let half_w = (out.w / 2) as i64;
    let half_h = (out.h / 2) as i64;
    let max_sx = (src.w as i64 - 1) * sf;
    let max_sy = (src.h as i64 - 1) * sf;
    let sf_sq = (sf * sf) as u64;

    for j in 0..out.h {
        let sy = (center.y as i64 + (j as i64 - half_h) * sf).clamp(0, max_sy);
        let y0 = (sy / sf) as usize;
        let ty = (sy % sf) as u64;
        let y1 = (y0 + 1).min(src.h - 1);
        let row0 = src.row(y0);
        let row1 = src.row(y1);
        let dst = out.row_mut(j);
        for (i, dst_px) in dst.iter_mut().enumerate() {
            let sx = (center.x as i64 + (i as i64 - half_w) * sf).clamp(0, max_sx);
            let x0 = (sx / sf) as usize;
            let tx = (sx % sf) as u64;
            let x1 = (x0 + 1).min(src.w - 1);

            let blend = (sf as u64 - tx) * (sf as u64 - ty) * row0[x0] as u64
                + tx * (sf as u64 - ty) * row0[x1] as u64
                + (sf as u64 - tx) * ty * row1[x0] as u64
                + tx * ty * row1[x1] as u64;
            *dst_px = (blend / sf_sq) as u8;
        }
    }
}
