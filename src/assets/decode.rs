use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;

use crate::foundation::core::{AlphaMode, Rgba8};
use crate::foundation::error::{PixelError, PixelResult};

/// Decoded image as a read-only grid of RGBA8 pixels.
///
/// Pixels are stored row-major, tightly packed, origin at the top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    ///
    /// Zero-sized grids are allowed and must carry no pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba8>) -> PixelResult<Self> {
        let expected = u64::from(width) * u64::from(height);
        if pixels.len() as u64 != expected {
            return Err(PixelError::decode(format!(
                "pixel count {} does not match {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Reduce a decoded image to RGBA8, taking the high byte of each 16-bit channel.
    pub fn from_dynamic(img: &image::DynamicImage, mode: AlphaMode) -> Self {
        let rgba = img.to_rgba16();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|px| Rgba8::from_rgba16(px.0, mode))
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the grid has no pixels (zero width or zero height).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels.get(idx).copied()
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Rgba8]> {
        // chunks_exact panics on a zero chunk size.
        let width = (self.width as usize).max(1);
        self.pixels.chunks_exact(width)
    }
}

/// Open `path` and decode it, detecting the format from the file contents.
pub fn load_image(path: &Path, mode: AlphaMode) -> PixelResult<PixelGrid> {
    let file = File::open(path).map_err(|e| PixelError::open(path, e))?;
    let grid = decode_image(BufReader::new(file), mode)?;
    tracing::debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "decoded image"
    );
    Ok(grid)
}

/// Decode an image from any seekable reader.
///
/// The extension of the source (if any) is never consulted; only the leading signature bytes.
pub fn decode_image<R: BufRead + Seek>(reader: R, mode: AlphaMode) -> PixelResult<PixelGrid> {
    let reader = image::ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| PixelError::decode(format!("read image signature: {e}")))?;
    let Some(format) = reader.format() else {
        return Err(PixelError::decode("unrecognized image format"));
    };
    let img = reader
        .decode()
        .map_err(|e| PixelError::decode(format!("{format:?}: {e}")))?;
    Ok(PixelGrid::from_dynamic(&img, mode))
}

/// Decode an in-memory image.
pub fn decode_bytes(bytes: &[u8], mode: AlphaMode) -> PixelResult<PixelGrid> {
    decode_image(Cursor::new(bytes), mode)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
