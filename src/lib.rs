//! Sobel edge-magnitude filter for binary PPM (P6) images.
//!
//! The crate has three working parts, used in this order:
//!
//! - [`image::io`]: decode a P6 stream into an [`RgbImage`] and encode it back.
//! - [`edges`]: the 3×3 Sobel kernels applied to the red channel, with the
//!   interior rows split into disjoint bands filled by a fixed number of
//!   workers.
//! - [`pipeline`]: load → filter → save for one [`config::RunConfig`].

pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::RunConfig;
pub use crate::diagnostics::RunReport;
pub use crate::edges::sobel_magnitude;
pub use crate::error::{Result, SobelError};
pub use crate::image::io::{decode_ppm, encode_ppm, load_ppm, save_ppm};
pub use crate::image::{Rgb, RgbImage};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use sobel_ppm::prelude::*;
/// use std::num::NonZeroUsize;
///
/// let mut img = RgbImage::new(5, 5);
/// img.set(2, 2, Rgb::gray(255));
/// let edges = sobel_magnitude(&img, NonZeroUsize::new(2).unwrap());
/// assert_eq!(edges.get(1, 2), Rgb::gray(255));
/// assert_eq!(edges.get(0, 0), Rgb::BLACK);
/// ```
pub mod prelude {
    pub use crate::edges::sobel_magnitude;
    pub use crate::image::io::{decode_ppm, encode_ppm};
    pub use crate::image::{ImageView, Rgb, RgbImage};
}
