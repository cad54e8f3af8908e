//! # 1-bit Canvas
//!
//! Owned monochrome raster laid out exactly as the BMP pixel array wants
//! it, so the encoder can copy the buffer without touching a bit:
//!
//! - one bit per pixel, `1` = white, `0` = black
//! - rows padded to a 4-byte boundary
//! - rows stored bottom-up (row 0 in memory is the lowest image row)
//! - most-significant bit first within each byte
//!
//! All of that bit math lives here. Everything else draws through
//! [`Canvas::set_pixel`], which silently drops out-of-bounds writes.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, Size},
};

/// Board width in pixels.
pub const WIDTH: u32 = 800;

/// Board height in pixels.
pub const HEIGHT: u32 = 480;

/// Bytes per row for a 1bpp image of `width` pixels, rounded up to the
/// 4-byte boundary BMP requires.
pub const fn padded_row_stride(width: u32) -> usize {
    let bytes_per_row = (width as usize).div_ceil(8);
    bytes_per_row.div_ceil(4) * 4
}

/// Monochrome pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    stride: usize,
    buffer: Vec<u8>,
}

impl Canvas {
    /// Create an all-white canvas.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = padded_row_stride(width);
        Self {
            width,
            height,
            stride,
            buffer: vec![0xFF; stride * height as usize],
        }
    }

    /// Create an all-white canvas at the board's fixed 800x480 size.
    pub fn board() -> Self {
        Self::new(WIDTH, HEIGHT)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per stored row, including padding.
    pub fn row_stride(&self) -> usize {
        self.stride
    }

    /// Raw pixel array in BMP order.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Paint the pixel at `(x, y)` (top-left origin) black or white.
    ///
    /// Coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, black: bool) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        if black {
            self.buffer[index] &= !mask;
        } else {
            self.buffer[index] |= mask;
        }
    }

    /// Read back the pixel at `(x, y)`: `Some(true)` for black,
    /// `Some(false)` for white, `None` outside the canvas.
    pub fn is_black(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y)
            .map(|(index, mask)| self.buffer[index] & mask == 0)
    }

    /// Number of black pixels on the canvas, padding excluded.
    pub fn black_pixel_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.is_black(x, y) == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Byte index and bit mask for `(x, y)`, or `None` when out of bounds.
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let row = self.height as usize - 1 - y;
        let index = row * self.stride + x / 8;
        let mask = 0x80u8 >> (x % 8);
        Some((index, mask))
    }

    /// Downsampled text rendering for terminals: each character covers a
    /// `cell_width` x `cell_height` block and shows `#` if any pixel in it
    /// is black. Cells larger than the canvas are shrunk to fit it.
    pub fn to_ascii(&self, cell_width: u32, cell_height: u32) -> String {
        let cell_width = cell_width.clamp(1, self.width.max(1));
        let cell_height = cell_height.clamp(1, self.height.max(1));
        let columns = self.width.div_ceil(cell_width);
        let rows = self.height.div_ceil(cell_height);

        let mut out = String::with_capacity(((columns + 1) * rows) as usize);
        for row in 0..rows {
            for column in 0..columns {
                let inked = (0..cell_height).any(|dy| {
                    (0..cell_width).any(|dx| {
                        let x = (column * cell_width + dx) as i32;
                        let y = (row * cell_height + dy) as i32;
                        self.is_black(x, y) == Some(true)
                    })
                });
                out.push(if inked { '#' } else { ' ' });
            }
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Lets embedded-graphics primitives draw onto the canvas.
/// `BinaryColor::On` is ink (black).
impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}
