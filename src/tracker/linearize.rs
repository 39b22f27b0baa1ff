//! Gradient covariance accumulation and the closed-form 2×2 solve.
//!
//! The G-matrix summarizes the reference window's texture:
//! `G = Σ [[Ix², Ix·Iy], [Ix·Iy, Iy²]]`, each product term scaled by `/255`
//! before accumulation to stay inside the fixed-point budget. Its
//! determinant, further divided by the subpixel factor, both gates
//! degenerate (textureless) windows and converts solved steps into subpixel
//! units. The matrix is computed once per point per level and reused across
//! every refinement iteration; only the mismatch vector changes.

use crate::image::{ImageI16, ImageView};

/// Symmetric 2×2 gradient covariance matrix with its scaled determinant.
#[derive(Clone, Copy, Debug)]
pub struct GMatrix {
    pub gxx: i32,
    pub gxy: i32,
    pub gyy: i32,
    /// `(gxx·gyy − gxy²) / subpixel_factor`.
    pub det: i64,
}

/// Accumulate the G-matrix over a pair of gradient windows.
pub fn linearize_window(gx: &ImageI16, gy: &ImageI16, subpixel_factor: u32) -> GMatrix {
    debug_assert_eq!((gx.w, gx.h), (gy.w, gy.h));
    debug_assert!(subpixel_factor > 0);

    let mut gxx = 0i32;
    let mut gxy = 0i32;
    let mut gyy = 0i32;
    for (row_x, row_y) in gx.rows().zip(gy.rows()) {
        for (&vx, &vy) in row_x.iter().zip(row_y) {
            let vx = vx as i32;
            let vy = vy as i32;
            gxx += vx * vx / 255;
            gxy += vx * vy / 255;
            gyy += vy * vy / 255;
        }
    }

    let det = (gxx as i64 * gyy as i64 - gxy as i64 * gxy as i64) / subpixel_factor as i64;
    GMatrix { gxx, gxy, gyy, det }
}

impl GMatrix {
    /// A determinant below 1 signals a textureless window where the linear
    /// system is ill-conditioned.
    pub fn is_degenerate(&self) -> bool {
        self.det < 1
    }

    /// Solve `G · step = b` via the closed-form inverse. The result is in
    /// subpixel units thanks to the determinant scaling.
    pub fn solve(&self, bx: i64, by: i64) -> (i64, i64) {
        let step_x = (self.gyy as i64 * bx - self.gxy as i64 * by) / self.det;
        let step_y = (self.gxx as i64 * by - self.gxy as i64 * bx) / self.det;
        (step_x, step_y)
    }
}
