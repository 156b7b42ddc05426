pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{Rgb, RgbImage};
pub use self::traits::{ImageView, ImageViewMut, Rows};
