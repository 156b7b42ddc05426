#![allow(dead_code)]

use sobel_ppm::{Rgb, RgbImage};

/// Generates a high-contrast RGB checkerboard (0 / 255 cells).
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let on = ((x / cell) + (y / cell)) & 1 == 1;
            img.set(x, y, if on { Rgb::gray(255) } else { Rgb::BLACK });
        }
    }
    img
}

/// Deterministic pseudo-random colors, distinct per channel.
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> RgbImage {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 24) as u8
    };
    let data = (0..width * height)
        .map(|_| Rgb::new(next(), next(), next()))
        .collect();
    RgbImage::from_pixels(width, height, data).expect("length matches dimensions")
}

/// Black image with one gray pixel of `value` at (`x`, `y`).
pub fn single_dot(width: usize, height: usize, x: usize, y: usize, value: u8) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    img.set(x, y, Rgb::gray(value));
    img
}

/// Serialize as a P6 byte stream with an optional comment line.
pub fn ppm_bytes(img: &RgbImage, comment: Option<&str>) -> Vec<u8> {
    let mut bytes = b"P6\n".to_vec();
    if let Some(comment) = comment {
        bytes.extend_from_slice(format!("# {comment}\n").as_bytes());
    }
    bytes.extend_from_slice(format!("{} {}\n255\n", img.w, img.h).as_bytes());
    bytes.extend_from_slice(&img.to_raw());
    bytes
}
