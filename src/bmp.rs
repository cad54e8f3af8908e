//! # 1-bit BMP Encoding
//!
//! Serializes a [`Canvas`] into a complete Windows bitmap file:
//!
//! | Offset | Size | Contents |
//! |-------:|-----:|----------|
//! | 0  | 14 | file header (`BM`, file size, reserved, pixel offset) |
//! | 14 | 40 | `BITMAPINFOHEADER` |
//! | 54 | 8  | palette: entry 0 black, entry 1 white |
//! | 62 | stride x height | canvas buffer, copied as-is |
//!
//! All multi-byte fields are little-endian. Height is written positive,
//! which tells decoders (and the e-paper firmware) that rows are stored
//! bottom-up, matching the canvas layout.

use crate::canvas::Canvas;

/// `BM` signature.
pub const SIGNATURE: [u8; 2] = [0x42, 0x4D];

pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
pub const PALETTE_LEN: usize = 8;

/// Offset of the pixel array from the start of the file.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_LEN + INFO_HEADER_LEN + PALETTE_LEN;

/// Horizontal and vertical resolution written to the header (~72 DPI).
pub const PIXELS_PER_METER: i32 = 2835;

const PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 1;
const COMPRESSION_NONE: u32 = 0;
const PALETTE_COLORS: u32 = 2;

/// Palette entries in blue, green, red, reserved byte order. Read as
/// little-endian dwords these are `0x00000000` and `0x00FFFFFF`.
const PALETTE: [[u8; 4]; 2] = [
    [0x00, 0x00, 0x00, 0x00], // black
    [0xFF, 0xFF, 0xFF, 0x00], // white, 0x00FFFFFF little-endian
];

/// Total encoded size for a canvas of the given geometry.
pub fn file_size(canvas: &Canvas) -> usize {
    PIXEL_DATA_OFFSET + canvas.buffer().len()
}

/// Encode `canvas` as a complete BMP byte stream.
pub fn encode(canvas: &Canvas) -> Vec<u8> {
    let image_size = canvas.buffer().len();
    let total = file_size(canvas);
    let mut out = Vec::with_capacity(total);

    // File header
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(PIXEL_DATA_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&(canvas.width() as i32).to_le_bytes());
    out.extend_from_slice(&(canvas.height() as i32).to_le_bytes());
    out.extend_from_slice(&PLANES.to_le_bytes());
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&COMPRESSION_NONE.to_le_bytes());
    out.extend_from_slice(&(image_size as u32).to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&PALETTE_COLORS.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    for entry in PALETTE {
        out.extend_from_slice(&entry);
    }

    debug_assert_eq!(out.len(), PIXEL_DATA_OFFSET);
    out.extend_from_slice(canvas.buffer());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_blank_board_layout() {
        let bytes = encode(&Canvas::board());

        assert_eq!(bytes.len(), 48_062);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32_at(&bytes, 2), 48_062);
        assert_eq!(u32_at(&bytes, 6), 0);
        assert_eq!(u32_at(&bytes, 10), 62);
        assert_eq!(u32_at(&bytes, 14), 40);
        assert_eq!(u32_at(&bytes, 18), 800);
        assert_eq!(u32_at(&bytes, 22), 480);
        assert_eq!(u16_at(&bytes, 26), 1);
        assert_eq!(u16_at(&bytes, 28), 1);
        assert_eq!(u32_at(&bytes, 30), 0);
        assert_eq!(u32_at(&bytes, 34), 48_000);
        assert_eq!(u32_at(&bytes, 38), 2835);
        assert_eq!(u32_at(&bytes, 42), 2835);
        assert_eq!(u32_at(&bytes, 46), 2);
        assert_eq!(u32_at(&bytes, 50), 0);
        assert_eq!(&bytes[54..58], &[0x00, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[58..62], &[0xFF, 0xFF, 0xFF, 0x00]);
        assert!(bytes[62..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_white_entry_reads_as_0x00ffffff() {
        let bytes = encode(&Canvas::board());
        assert_eq!(u32_at(&bytes, 58), 0x00FF_FFFF);
    }

    #[test]
    fn test_pixel_array_is_copied_verbatim() {
        let mut canvas = Canvas::board();
        canvas.set_pixel(0, 0, true);
        canvas.set_pixel(400, 240, true);

        let bytes = encode(&canvas);
        assert_eq!(&bytes[PIXEL_DATA_OFFSET..], canvas.buffer());
    }

    #[test]
    fn test_small_canvas_sizes() {
        let canvas = Canvas::new(10, 3);
        let bytes = encode(&canvas);
        assert_eq!(bytes.len(), 62 + 4 * 3);
        assert_eq!(file_size(&canvas), bytes.len());
        assert_eq!(u32_at(&bytes, 18), 10);
        assert_eq!(u32_at(&bytes, 22), 3);
        assert_eq!(u32_at(&bytes, 34), 12);
    }
}
