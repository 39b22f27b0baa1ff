/// Generates a simple high-contrast checkerboard image.
#[allow(dead_code)]
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let cx = (x / cell) as i32;
            let cy = (y / cell) as i32;
            let sum = cx + cy;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            img[y * width + x] = val;
        }
    }
    img
}

/// Smooth two-component sinusoidal texture with independent gradient
/// directions everywhere, so any interior tracking window is
/// well-conditioned.
pub fn textured_u8(width: usize, height: usize) -> Vec<u8> {
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let a = (0.12 * x as f32 + 0.05 * y as f32).sin();
            let b = (0.04 * x as f32 + 0.17 * y as f32).sin();
            img[y * width + x] = (128.0 + 45.0 * a + 45.0 * b).round() as u8;
        }
    }
    img
}

/// Translate the frame content by `(dx, dy)` whole pixels: a feature at
/// `(x, y)` in the source appears at `(x + dx, y + dy)` in the result.
/// Samples falling outside the source clamp to its border.
pub fn shifted_u8(src: &[u8], width: usize, height: usize, dx: i32, dy: i32) -> Vec<u8> {
    assert_eq!(src.len(), width * height);
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        let sy = (y as i32 - dy).clamp(0, height as i32 - 1) as usize;
        for x in 0..width {
            let sx = (x as i32 - dx).clamp(0, width as i32 - 1) as usize;
            img[y * width + x] = src[sy * width + sx];
        }
    }
    img
}
