//! Sobel edge magnitude over RGB images.
//!
//! - `sobel`: the 3×3 kernel pair and the per-pixel / per-band filter.
//! - `partition`: splitting the interior rows into disjoint bands and filling
//!   them on a fixed number of workers.
//!
//! Only the red channel feeds the gradient. Border rows and columns are never
//! written and stay black.

pub mod partition;
pub mod sobel;

pub use partition::{partition_rows, sobel_magnitude, split_bands, RowBand};
pub use sobel::{fill_band, sobel_magnitude_at, Kernel3, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
