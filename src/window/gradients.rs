//! Gradient windows from a padded intensity window.

use crate::image::{GrayImageU8, ImageI16, ImageView, ImageViewMut};

/// Compute horizontal and vertical gradient windows from `reference`.
///
/// `reference` must be two pixels larger than the gradient windows in both
/// dimensions: each output pixel is the raw two-pixel difference across the
/// corresponding interior pixel, without normalization. The `/255` scaling
/// applied later when the gradient covariance is accumulated keeps the
/// solved refinement step in subpixel units.
pub fn window_gradients(reference: &GrayImageU8, gx: &mut ImageI16, gy: &mut ImageI16) {
    debug_assert_eq!(reference.w, gx.w + 2);
    debug_assert_eq!(reference.h, gx.h + 2);
    debug_assert_eq!((gx.w, gx.h), (gy.w, gy.h));

    for y in 0..gx.h {
        let row_above = reference.row(y);
        let row_mid = reference.row(y + 1);
        let row_below = reference.row(y + 2);
        let gx_row = gx.row_mut(y);
        for (x, gx_px) in gx_row.iter_mut().enumerate() {
            *gx_px = row_mid[x + 2] as i16 - row_mid[x] as i16;
        }
        let gy_row = gy.row_mut(y);
        for (x, gy_px) in gy_row.iter_mut().enumerate() {
            *gy_px = row_below[x + 1] as i16 - row_above[x + 1] as i16;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_ramp_gives_constant_gx_and_zero_gy() {
        let mut reference = GrayImageU8::new(7, 7);
        for y in 0..7 {
            for x in 0..7 {
                reference.set(x, y, (x * 5) as u8);
            }
        }
        let mut gx = ImageI16::new(5, 5);
        let mut gy = ImageI16::new(5, 5);
        window_gradients(&reference, &mut gx, &mut gy);
        assert!(gx.data.iter().all(|&v| v == 10));
        assert!(gy.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn vertical_step_shows_in_gy_only() {
        let mut reference = GrayImageU8::new(5, 5);
        for y in 3..5 {
            for x in 0..5 {
                reference.set(x, y, 90);
            }
        }
        let mut gx = ImageI16::new(3, 3);
        let mut gy = ImageI16::new(3, 3);
        window_gradients(&reference, &mut gx, &mut gy);
        assert!(gx.data.iter().all(|&v| v == 0));
        // Rows straddling the step see the full intensity jump.
        assert_eq!(gy.get(1, 1), 90);
        assert_eq!(gy.get(1, 2), 90);
        assert_eq!(gy.get(1, 0), 0);
    }
}
