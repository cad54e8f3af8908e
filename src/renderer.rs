//! # Text and Line Drawing
//!
//! Fixed-width text layout on top of the 5x7 glyph table, plus the
//! horizontal rule used as a section divider. Every pixel goes through
//! [`Canvas::set_pixel`], so anything running off the edge is clipped
//! without affecting where later characters land.

use crate::canvas::Canvas;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Horizontal advance per character in unscaled pixels (glyph + 1 gap).
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Draw `text` with its top-left corner at `(x, y)`, magnifying each
/// glyph pixel to a `scale` x `scale` block.
///
/// Characters are uppercased before lookup. Unmapped characters draw
/// nothing but still take up a full cell.
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, y: i32, scale: u32) {
    let scale = i64::from(scale);
    let advance = i64::from(ADVANCE) * scale;
    let right = i64::from(canvas.width());
    let mut cursor = i64::from(x);

    for ch in text.chars().flat_map(char::to_uppercase) {
        // The cursor only moves right, so nothing later can land on the canvas
        if cursor >= right {
            break;
        }
        let glyph = font::lookup(ch);
        for col in 0..GLYPH_WIDTH {
            for row in 0..GLYPH_HEIGHT {
                if glyph.ink(col, row) {
                    let left = cursor + i64::from(col) * scale;
                    let top = i64::from(y) + i64::from(row) * scale;
                    fill_block(canvas, left, top, scale);
                }
            }
        }
        cursor += advance;
    }
}

/// Paint `length` black pixels rightwards from `(x, y)`.
pub fn draw_horizontal_line(canvas: &mut Canvas, x: i32, y: i32, length: u32) {
    let (start, end) = clamp_span(i64::from(x), i64::from(length), canvas.width());
    for px in start..end {
        canvas.set_pixel(px, y, true);
    }
}

/// Paint the `size` x `size` square at `(left, top)`, visiting only the
/// part that overlaps the canvas.
fn fill_block(canvas: &mut Canvas, left: i64, top: i64, size: i64) {
    let (x0, x1) = clamp_span(left, size, canvas.width());
    let (y0, y1) = clamp_span(top, size, canvas.height());
    for py in y0..y1 {
        for px in x0..x1 {
            canvas.set_pixel(px, py, true);
        }
    }
}

/// Intersect `[start, start + length)` with `[0, limit)`.
fn clamp_span(start: i64, length: i64, limit: u32) -> (i32, i32) {
    let limit = i64::from(limit);
    let lo = start.clamp(0, limit);
    let hi = start.saturating_add(length).clamp(lo, limit);
    (lo as i32, hi as i32)
}
