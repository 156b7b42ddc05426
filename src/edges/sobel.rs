//! Sobel gradient magnitude on the red channel.
//!
//! - Convolves the fixed 3×3 kernel pair (`X` and `Y`) over interior pixels
//!   only; there is no border clamping, border pixels are simply not written.
//! - `mag = sqrt(gx^2 + gy^2)` truncated toward zero and clamped to 255, then
//!   written to all three channels.
//!
//! Complexity: O(W·H); the kernel sums fit comfortably in `i32`
//! (|gx|, |gy| ≤ 4·255).
use super::partition::RowBand;
use crate::image::{ImageView, Rgb, RgbImage};

pub type Kernel3 = [[i32; 3]; 3];

pub const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

#[inline]
fn clamp_magnitude(gx: i32, gy: i32) -> u8 {
    let sq = (gx * gx + gy * gy) as f64;
    // `as` truncates toward zero, which is the intended rounding.
    (sq.sqrt() as u32).min(255) as u8
}

#[inline]
fn magnitude_from_rows(rows: [&[Rgb]; 3], x: usize) -> u8 {
    let mut sum_x = 0;
    let mut sum_y = 0;
    for (ky, row) in rows.iter().enumerate() {
        let kx_row = &SOBEL_KERNEL_X[ky];
        let ky_row = &SOBEL_KERNEL_Y[ky];
        let (a, b, c) = (
            i32::from(row[x - 1].r()),
            i32::from(row[x].r()),
            i32::from(row[x + 1].r()),
        );
        sum_x += a * kx_row[0] + b * kx_row[1] + c * kx_row[2];
        sum_y += a * ky_row[0] + b * ky_row[1] + c * ky_row[2];
    }
    clamp_magnitude(sum_x, sum_y)
}

/// Gradient magnitude of the interior pixel at (`x`, `y`).
///
/// Panics if the pixel lies on the border (it has no full 3×3 neighborhood).
pub fn sobel_magnitude_at(src: &RgbImage, x: usize, y: usize) -> u8 {
    assert!(
        x >= 1 && y >= 1 && x + 1 < src.w && y + 1 < src.h,
        "({x}, {y}) is not an interior pixel of a {}x{} image",
        src.w,
        src.h
    );
    magnitude_from_rows([src.row(y - 1), src.row(y), src.row(y + 1)], x)
}

/// Fill every row of `band` from `src`.
///
/// Only interior columns are written; the first and last pixel of each row
/// keep whatever the band already holds.
pub fn fill_band(src: &RgbImage, band: RowBand<'_>) {
    let w = src.w;
    debug_assert_eq!(band.width(), w);
    if w < 3 {
        return;
    }
    let start = band.start();
    for (offset, out) in band.into_rows().enumerate() {
        let y = start + offset;
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        for (x, px) in out.iter_mut().enumerate().take(w - 1).skip(1) {
            *px = Rgb::gray(magnitude_from_rows(rows, x));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_center(value: u8) -> RgbImage {
        let mut img = RgbImage::new(5, 5);
        img.set(2, 2, Rgb::gray(value));
        img
    }

    #[test]
    fn flat_image_has_zero_gradient() {
        let img = RgbImage::from_pixels(4, 4, vec![Rgb::gray(77); 16]).unwrap();
        assert_eq!(sobel_magnitude_at(&img, 1, 1), 0);
        assert_eq!(sobel_magnitude_at(&img, 2, 2), 0);
    }

    #[test]
    fn single_bright_pixel_saturates_its_neighbors() {
        let img = with_center(255);
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            assert_eq!(sobel_magnitude_at(&img, x, y), 255, "at ({x}, {y})");
        }
        assert_eq!(sobel_magnitude_at(&img, 2, 2), 0);
    }

    #[test]
    fn magnitude_truncates_square_root() {
        let img = with_center(100);
        // Diagonal neighbors see gx = ±100, gy = ±100: sqrt(20000) = 141.42.
        assert_eq!(sobel_magnitude_at(&img, 1, 1), 141);
        assert_eq!(sobel_magnitude_at(&img, 3, 3), 141);
        // Axis neighbors see a single ±200 term.
        assert_eq!(sobel_magnitude_at(&img, 1, 2), 200);
        assert_eq!(sobel_magnitude_at(&img, 2, 3), 200);
    }

    #[test]
    fn only_red_channel_contributes() {
        let mut img = RgbImage::new(3, 3);
        img.set(0, 1, Rgb::new(0, 255, 255));
        assert_eq!(sobel_magnitude_at(&img, 1, 1), 0);
        img.set(0, 1, Rgb::new(10, 0, 0));
        // Left-middle neighbor: KernelX weight -2.
        assert_eq!(sobel_magnitude_at(&img, 1, 1), 20);
    }

    #[test]
    fn vertical_step_is_horizontal_gradient() {
        let mut img = RgbImage::new(4, 3);
        for y in 0..3 {
            img.set(2, y, Rgb::gray(50));
            img.set(3, y, Rgb::gray(50));
        }
        // gx = 50 * (1 + 2 + 1) = 200 at x = 1, gy = 0.
        assert_eq!(sobel_magnitude_at(&img, 1, 1), 200);
        assert_eq!(sobel_magnitude_at(&img, 2, 1), 200);
    }

    #[test]
    #[should_panic]
    fn border_pixel_is_rejected() {
        let img = RgbImage::new(3, 3);
        sobel_magnitude_at(&img, 0, 1);
    }
}
