//! # 5x7 Glyph Table
//!
//! Fixed-width bitmap font used for every piece of text on the board.
//! Each glyph is five columns wide; every column is a 7-bit value where
//! bit `r` set means ink at row `r`, counting from the top.
//!
//! The table only covers what the board actually prints: uppercase
//! letters, digits, space, the degree mark, colon, comma and period.
//! Anything else looks up as the blank (space) glyph.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// Every character with a dedicated glyph.
pub const CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 °:,.";

/// A single 5x7 character bitmap, stored column-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    columns: [u8; 5],
}

impl Glyph {
    /// The all-clear glyph used for space and unmapped characters.
    pub const BLANK: Glyph = Glyph::new([0x00, 0x00, 0x00, 0x00, 0x00]);

    pub const fn new(columns: [u8; 5]) -> Self {
        Self { columns }
    }

    /// True if the pixel at `col` (0-4), `row` (0-6) carries ink.
    ///
    /// Out-of-range positions read as clear, which also masks off any
    /// column bits above the seventh row.
    pub fn ink(&self, col: u32, row: u32) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.columns[col as usize] & (1 << row) != 0
    }

    /// True if no pixel of the glyph is inked.
    pub fn is_blank(&self) -> bool {
        (0..GLYPH_WIDTH).all(|col| (0..GLYPH_HEIGHT).all(|row| !self.ink(col, row)))
    }
}

/// Look up the glyph for `ch`.
///
/// Total: characters outside [`CHARSET`] (including lowercase letters,
/// which callers are expected to fold first) return [`Glyph::BLANK`].
pub fn lookup(ch: char) -> Glyph {
    let columns = match ch {
        '0' => [0x3E, 0x51, 0x49, 0x45, 0x3E],
        '1' => [0x00, 0x42, 0x7F, 0x40, 0x00],
        '2' => [0x42, 0x61, 0x51, 0x49, 0x46],
        '3' => [0x21, 0x41, 0x45, 0x4B, 0x31],
        '4' => [0x18, 0x14, 0x12, 0x7F, 0x10],
        '5' => [0x27, 0x45, 0x45, 0x45, 0x39],
        '6' => [0x3C, 0x4A, 0x49, 0x49, 0x30],
        '7' => [0x01, 0x71, 0x09, 0x05, 0x03],
        '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => [0x06, 0x49, 0x49, 0x29, 0x1E],
        'A' => [0x7E, 0x11, 0x11, 0x11, 0x7E],
        'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
        'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
        'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
        'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
        'F' => [0x7F, 0x09, 0x09, 0x09, 0x01],
        'G' => [0x3E, 0x41, 0x49, 0x49, 0x7A],
        'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
        'I' => [0x00, 0x41, 0x7F, 0x41, 0x00],
        'J' => [0x20, 0x40, 0x41, 0x3F, 0x01],
        'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
        'L' => [0x7F, 0x40, 0x40, 0x40, 0x40],
        'M' => [0x7F, 0x02, 0x0C, 0x02, 0x7F],
        'N' => [0x7F, 0x04, 0x08, 0x10, 0x7F],
        'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
        'P' => [0x7F, 0x09, 0x09, 0x09, 0x06],
        'Q' => [0x3E, 0x41, 0x51, 0x21, 0x5E],
        'R' => [0x7F, 0x09, 0x19, 0x29, 0x46],
        'S' => [0x46, 0x49, 0x49, 0x49, 0x31],
        'T' => [0x01, 0x01, 0x7F, 0x01, 0x01],
        'U' => [0x3F, 0x40, 0x40, 0x40, 0x3F],
        'V' => [0x1F, 0x20, 0x40, 0x20, 0x1F],
        'W' => [0x3F, 0x40, 0x38, 0x40, 0x3F],
        'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => [0x07, 0x08, 0x70, 0x08, 0x07],
        'Z' => [0x61, 0x51, 0x49, 0x45, 0x43],
        '°' => [0x02, 0x05, 0x02, 0x00, 0x00],
        ':' => [0x00, 0x36, 0x36, 0x00, 0x00],
        // Bit 7 falls below the glyph box and never renders.
        ',' => [0x00, 0x80, 0x60, 0x00, 0x00],
        '.' => [0x00, 0x60, 0x60, 0x00, 0x00],
        _ => return Glyph::BLANK,
    };
    Glyph::new(columns)
}
