//! Binary PPM (P6) decoding and encoding.
//!
//! - `decode_ppm`: parse a P6 byte stream into an owned `RgbImage`.
//! - `encode_ppm`: write an `RgbImage` as `P6\n{w} {h}\n255\n` + raw bytes.
//! - `load_ppm` / `save_ppm`: the same against files on disk.
//!
//! The header parser is lenient in one place only: after the magic token it
//! skips whitespace and at most one `#` comment line. Channels are always
//! treated as 8-bit regardless of the declared maximum value.
use super::RgbImage;
use crate::error::{Result, SobelError};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

const MAGIC: &[u8; 2] = b"P6";
const MAX_VALUE: u32 = 255;
/// Upper bound on the up-front pixel buffer reservation; the buffer only
/// grows past it as bytes actually arrive.
const MAX_PREALLOC: usize = 1 << 24;

/// Byte-level cursor over the header section of a PPM stream.
struct HeaderReader<R> {
    inner: R,
}

impl<R: BufRead> HeaderReader<R> {
    fn new(inner: R) -> Self {
        Self { inner }
    }

    fn peek(&mut self) -> Result<Option<u8>> {
        let buf = self
            .inner
            .fill_buf()
            .map_err(|e| SobelError::io("reading PPM header", e))?;
        Ok(buf.first().copied())
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let b = self.peek()?;
        if b.is_some() {
            self.inner.consume(1);
        }
        Ok(b)
    }

    fn read_magic(&mut self) -> Result<()> {
        let mut magic = [0u8; 2];
        for slot in magic.iter_mut() {
            *slot = self
                .next_byte()?
                .ok_or_else(|| SobelError::format("unsupported PPM variant: stream too short"))?;
        }
        if &magic != MAGIC {
            return Err(SobelError::format(format!(
                "unsupported PPM variant {:?}, expected \"P6\"",
                String::from_utf8_lossy(&magic)
            )));
        }
        Ok(())
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b) = self.peek()? {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.inner.consume(1);
        }
        Ok(())
    }

    /// Skip whitespace after the magic and at most one comment line.
    fn skip_comment_line(&mut self) -> Result<()> {
        self.skip_whitespace()?;
        if self.peek()? == Some(b'#') {
            while let Some(b) = self.next_byte()? {
                if b == b'\n' {
                    break;
                }
            }
            self.skip_whitespace()?;
        }
        Ok(())
    }

    /// Read one whitespace-delimited decimal integer, leaving the delimiter
    /// unconsumed.
    fn read_int(&mut self, field: &str) -> Result<i64> {
        self.skip_whitespace()?;
        let mut token = Vec::new();
        while let Some(b) = self.peek()? {
            if b.is_ascii_whitespace() {
                break;
            }
            token.push(b);
            self.inner.consume(1);
        }
        if token.is_empty() {
            return Err(SobelError::format(format!("missing {field}")));
        }
        std::str::from_utf8(&token)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| {
                SobelError::format(format!(
                    "{field} is not a decimal integer: {:?}",
                    String::from_utf8_lossy(&token)
                ))
            })
    }

    fn into_inner(self) -> R {
        self.inner
    }
}

fn positive_dim(value: i64, field: &str) -> Result<usize> {
    if value <= 0 {
        return Err(SobelError::format(format!(
            "{field} must be positive, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| SobelError::format(format!("{field} {value} does not fit in memory")))
}

/// Decode a binary PPM (P6) stream.
///
/// Fails with `Format` on a bad magic or header, with `Truncated` if the
/// stream ends before `w * h * 3` pixel bytes, and with `Io` if reading
/// fails. No partially populated image is ever returned.
pub fn decode_ppm<R: BufRead>(reader: R) -> Result<RgbImage> {
    let mut header = HeaderReader::new(reader);
    header.read_magic()?;
    header.skip_comment_line()?;

    let w = positive_dim(header.read_int("width")?, "width")?;
    let h = positive_dim(header.read_int("height")?, "height")?;
    let max_value = header.read_int("max color value")?;
    if max_value != i64::from(MAX_VALUE) {
        warn!("PPM declares max color value {max_value}; channels are read as 8-bit");
    }

    let expected = w
        .checked_mul(h)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| SobelError::format(format!("dimensions {w}x{h} overflow")))?;

    // Exactly one delimiter byte separates the header from the raster.
    if header.next_byte()?.is_none() {
        return Err(SobelError::Truncated {
            expected,
            available: 0,
        });
    }

    let mut raw = Vec::with_capacity(expected.min(MAX_PREALLOC));
    header
        .into_inner()
        .take(expected as u64)
        .read_to_end(&mut raw)
        .map_err(|e| SobelError::io("reading PPM pixel data", e))?;
    if raw.len() < expected {
        return Err(SobelError::Truncated {
            expected,
            available: raw.len(),
        });
    }

    debug!("decode_ppm: {w}x{h}, {expected} pixel bytes");
    RgbImage::from_raw(w, h, &raw)
        .ok_or_else(|| SobelError::format(format!("pixel data does not match {w}x{h}")))
}

/// Encode `image` as binary PPM (P6). Channel values are written as-is.
pub fn encode_ppm<W: Write>(image: &RgbImage, mut writer: W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n{}\n", image.w, image.h, MAX_VALUE)?;
    writer.write_all(&image.to_raw())?;
    writer.flush()
}

/// Load a PPM image from disk.
pub fn load_ppm(path: &Path) -> Result<RgbImage> {
    let file = File::open(path)
        .map_err(|e| SobelError::io(format!("opening {}", path.display()), e))?;
    decode_ppm(BufReader::new(file))
}

/// Save `image` as a PPM file, creating parent directories as needed.
pub fn save_ppm(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path)
        .map_err(|e| SobelError::io(format!("creating {}", path.display()), e))?;
    encode_ppm(image, BufWriter::new(file))
        .map_err(|e| SobelError::io(format!("writing {}", path.display()), e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| SobelError::io(format!("creating {}", parent.display()), e))?;
        }
    }
    Ok(())
}
