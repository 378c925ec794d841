//! 5x5 bitmaps for the LED matrix
//!
//! Each row is stored as a 5-bit mask with bit 4 as the leftmost column
//! (`x = 0`), so the literals below read the same way the image looks.

use crate::MATRIX_SIZE;

/// A 5x5 monochrome image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [u8; 5],
}

impl Glyph {
    /// Exclamation mark, shown when calibration has failed
    pub const EXCLAMATION: Self = Self::from_rows([
        0b00100, //
        0b00100, //
        0b00100, //
        0b00000, //
        0b00100, //
    ]);

    /// Arrow pointing North
    pub const ARROW_N: Self = Self::from_rows([
        0b00100, //
        0b01110, //
        0b10101, //
        0b00100, //
        0b00100, //
    ]);

    /// Arrow pointing North-East
    pub const ARROW_NE: Self = Self::from_rows([
        0b00111, //
        0b00011, //
        0b00101, //
        0b01000, //
        0b10000, //
    ]);

    /// Arrow pointing East
    pub const ARROW_E: Self = Self::from_rows([
        0b00100, //
        0b00010, //
        0b11111, //
        0b00010, //
        0b00100, //
    ]);

    /// Arrow pointing South-East
    pub const ARROW_SE: Self = Self::from_rows([
        0b10000, //
        0b01000, //
        0b00101, //
        0b00011, //
        0b00111, //
    ]);

    /// Arrow pointing South
    pub const ARROW_S: Self = Self::from_rows([
        0b00100, //
        0b00100, //
        0b10101, //
        0b01110, //
        0b00100, //
    ]);

    /// Arrow pointing South-West
    pub const ARROW_SW: Self = Self::from_rows([
        0b00001, //
        0b00010, //
        0b10100, //
        0b11000, //
        0b11100, //
    ]);

    /// Arrow pointing West
    pub const ARROW_W: Self = Self::from_rows([
        0b00100, //
        0b01000, //
        0b11111, //
        0b01000, //
        0b00100, //
    ]);

    /// Arrow pointing North-West
    pub const ARROW_NW: Self = Self::from_rows([
        0b11100, //
        0b11000, //
        0b10100, //
        0b00010, //
        0b00001, //
    ]);

    /// Build a glyph from row masks, top row first
    ///
    /// Bits above the fifth are ignored.
    #[must_use]
    pub const fn from_rows(rows: [u8; 5]) -> Self {
        Self {
            rows: [
                rows[0] & 0x1F,
                rows[1] & 0x1F,
                rows[2] & 0x1F,
                rows[3] & 0x1F,
                rows[4] & 0x1F,
            ],
        }
    }

    /// Row masks, top row first
    #[must_use]
    pub const fn rows(&self) -> [u8; 5] {
        self.rows
    }

    /// Whether the pixel at column `x`, row `y` is lit
    ///
    /// Coordinates outside the matrix are never lit.
    #[must_use]
    pub const fn is_lit(&self, x: u8, y: u8) -> bool {
        if x >= MATRIX_SIZE || y >= MATRIX_SIZE {
            return false;
        }
        (self.rows[y as usize] >> (MATRIX_SIZE - 1 - x)) & 1 == 1
    }

    /// Number of lit pixels
    #[must_use]
    pub const fn lit_count(&self) -> u32 {
        let mut count = 0;
        let mut i = 0;
        while i < self.rows.len() {
            count += self.rows[i].count_ones();
            i += 1;
        }
        count
    }
}
