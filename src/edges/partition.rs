//! Row partitioning and the worker fan-out for the Sobel fill.
//!
//! The interior rows `[1, h - 1)` are cut into `threads` contiguous ranges:
//! every range gets `(h - 2) / threads` rows and the last one also takes the
//! remainder. The result buffer is then split with `split_at_mut` into one
//! `RowBand` per range, so each worker holds the only mutable handle to its
//! rows and the fill needs no locks.
use super::sobel::fill_band;
use crate::image::{ImageView, ImageViewMut, Rgb, RgbImage};
use log::debug;
use std::num::NonZeroUsize;
use std::ops::Range;

/// Exclusive mutable handle to the result rows `[start, end)`.
#[derive(Debug)]
pub struct RowBand<'a> {
    start: usize,
    width: usize,
    pixels: &'a mut [Rgb],
}

impl<'a> RowBand<'a> {
    /// First image row covered by this band.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last image row covered by this band.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in the band.
    #[inline]
    pub fn len(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.pixels.len() / self.width
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Consume the band into its rows, top to bottom.
    pub fn into_rows(self) -> std::slice::ChunksExactMut<'a, Rgb> {
        self.pixels.chunks_exact_mut(self.width.max(1))
    }
}

/// Interior row ranges for `threads` workers over an image of height `h`.
///
/// Returns an empty vector when the image has no interior rows. With more
/// workers than rows, all but the last range are empty.
pub fn partition_rows(h: usize, threads: NonZeroUsize) -> Vec<Range<usize>> {
    if h < 3 {
        return Vec::new();
    }
    let interior = h - 2;
    let threads = threads.get();
    let rows_per_worker = interior / threads;

    let mut ranges = Vec::with_capacity(threads);
    let mut start = 1;
    for i in 0..threads {
        let end = if i + 1 == threads {
            h - 1
        } else {
            start + rows_per_worker
        };
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Split a row-major buffer of width `w` into disjoint bands.
///
/// `ranges` must be sorted, non-overlapping and lie inside the buffer; rows
/// between ranges are skipped and stay untouched.
pub fn split_bands<'a>(
    buffer: &'a mut [Rgb],
    w: usize,
    ranges: &[Range<usize>],
) -> Vec<RowBand<'a>> {
    let mut bands = Vec::with_capacity(ranges.len());
    let mut remaining = buffer;
    let mut row = 0;
    for range in ranges {
        assert!(
            range.start >= row && range.end >= range.start,
            "row ranges must be sorted and disjoint: {range:?} after row {row}"
        );
        let skip = (range.start - row) * w;
        let take = (range.end - range.start) * w;
        let (_, rest) = std::mem::take(&mut remaining).split_at_mut(skip);
        let (pixels, rest) = rest.split_at_mut(take);
        bands.push(RowBand {
            start: range.start,
            width: w,
            pixels,
        });
        remaining = rest;
        row = range.end;
    }
    bands
}

/// Sobel gradient magnitude of `src`, filled by `threads` workers.
///
/// The result has the same dimensions as `src`, with black borders and
/// `R = G = B` everywhere. The output does not depend on `threads`.
pub fn sobel_magnitude(src: &RgbImage, threads: NonZeroUsize) -> RgbImage {
    let mut out = RgbImage::new(src.w, src.h);
    if !src.has_interior() {
        debug!(
            "sobel_magnitude: {}x{} image has no interior pixels",
            src.w, src.h
        );
        return out;
    }

    let ranges = partition_rows(src.h, threads);
    debug!(
        "sobel_magnitude: {}x{} over {} worker(s), ranges={:?}",
        src.w, src.h, threads, ranges
    );
    let w = out.width();
    let bands: Vec<RowBand<'_>> = split_bands(out.pixels_mut(), w, &ranges)
        .into_iter()
        .filter(|band| !band.is_empty())
        .collect();

    if threads.get() == 1 {
        fill_sequential(src, bands);
    } else {
        fill_parallel(src, bands, threads);
    }
    out
}

fn fill_sequential(src: &RgbImage, bands: Vec<RowBand<'_>>) {
    for band in bands {
        fill_band(src, band);
    }
}

#[cfg(feature = "parallel")]
fn fill_parallel(src: &RgbImage, bands: Vec<RowBand<'_>>, threads: NonZeroUsize) {
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(threads.get())
        .thread_name(|i| format!("sobel-worker-{i}"))
        .build()
    {
        Ok(pool) => pool,
        Err(err) => {
            log::warn!(
                "sobel_magnitude: could not start {threads} workers ({err}), filling sequentially"
            );
            fill_sequential(src, bands);
            return;
        }
    };

    pool.scope(|s| {
        for band in bands {
            s.spawn(move |_| {
                debug!("sobel worker: rows {}..{}", band.start(), band.end());
                fill_band(src, band);
            });
        }
    });
}

#[cfg(not(feature = "parallel"))]
fn fill_parallel(src: &RgbImage, bands: Vec<RowBand<'_>>, _threads: NonZeroUsize) {
    fill_sequential(src, bands);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn partition_covers_interior_with_remainder_last() {
        let ranges = partition_rows(12, nz(3));
        assert_eq!(ranges, vec![1..4, 4..7, 7..11]);

        let ranges = partition_rows(5, nz(1));
        assert_eq!(ranges, vec![1..4]);
    }

    #[test]
    fn partition_with_more_workers_than_rows() {
        let ranges = partition_rows(4, nz(4));
        assert_eq!(ranges, vec![1..1, 1..1, 1..1, 1..3]);
    }

    #[test]
    fn partition_is_empty_without_interior() {
        assert!(partition_rows(2, nz(2)).is_empty());
        assert!(partition_rows(0, nz(1)).is_empty());
    }

    #[test]
    fn partition_ranges_are_contiguous() {
        for h in 3..40 {
            for t in 1..12 {
                let ranges = partition_rows(h, nz(t));
                assert_eq!(ranges.len(), t);
                assert_eq!(ranges[0].start, 1);
                assert_eq!(ranges[t - 1].end, h - 1);
                for pair in ranges.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
            }
        }
    }

    #[test]
    fn split_bands_hands_out_disjoint_rows() {
        let w = 3;
        let mut buffer = vec![Rgb::BLACK; w * 6];
        {
            let bands = split_bands(&mut buffer, w, &[1..3, 3..3, 3..5]);
            assert_eq!(bands.len(), 3);
            assert_eq!((bands[0].start(), bands[0].end()), (1, 3));
            assert!(bands[1].is_empty());
            assert_eq!((bands[2].start(), bands[2].len()), (3, 2));
            for band in bands {
                let start = band.start();
                for (i, row) in band.into_rows().enumerate() {
                    row.fill(Rgb::gray((start + i) as u8));
                }
            }
        }
        let firsts: Vec<u8> = buffer.chunks(w).map(|row| row[0].r()).collect();
        assert_eq!(firsts, vec![0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn small_images_stay_black() {
        let src = RgbImage::from_pixels(2, 2, vec![Rgb::gray(200); 4]).unwrap();
        let out = sobel_magnitude(&src, nz(4));
        assert_eq!(out, RgbImage::new(2, 2));
    }
}
