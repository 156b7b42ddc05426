//! Owned 8-bit RGB image in row-major layout (stride == width).
//!
//! Produced by the PPM decoder, read by the Sobel filter and consumed by the
//! encoder. Pixels are stored as `Rgb` triples so row slices can be handed
//! out per row band without any channel arithmetic at the call site.

/// One interleaved R, G, B pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Achromatic pixel with every channel set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self([v, v, v])
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0[0]
    }
    #[inline]
    pub fn g(self) -> u8 {
        self.0[1]
    }
    #[inline]
    pub fn b(self) -> u8 {
        self.0[2]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` pixels
    pub data: Vec<Rgb>,
}

impl RgbImage {
    /// Construct a black (zero-filled) image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![Rgb::BLACK; w * h],
        }
    }

    /// Wrap an existing pixel vector. Returns `None` if the length does not
    /// match `w * h`.
    pub fn from_pixels(w: usize, h: usize, data: Vec<Rgb>) -> Option<Self> {
        (data.len() == w.checked_mul(h)?).then_some(Self { w, h, data })
    }

    /// Build from interleaved R,G,B bytes. Returns `None` if the length does
    /// not match `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != w.checked_mul(h)?.checked_mul(3)? {
            return None;
        }
        let data = bytes
            .chunks_exact(3)
            .map(|px| Rgb([px[0], px[1], px[2]]))
            .collect();
        Some(Self { w, h, data })
    }

    /// Interleaved R,G,B bytes in row-major order.
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.0).collect()
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Rgb) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for RgbImage {
    type Pixel = Rgb;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgb] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for RgbImage {
    #[inline]
    fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }
}
