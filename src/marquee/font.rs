//! Fixed-width 5-row uppercase fonts.
//!
//! Each font covers space and `A`–`Z`. Lookups are case-insensitive and every other
//! character falls back to the blank space glyph.

/// Number of pixel rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Index of the space glyph in each table. `A`–`Z` follow at 1–26.
const SPACE_INDEX: usize = 0;

// 4x5 font, each row read most-significant-bit first as the leftmost pixel.
const FONT_4X5: [[u8; GLYPH_HEIGHT]; 27] = [
    [0b0000, 0b0000, 0b0000, 0b0000, 0b0000], // ' '
    [0b0110, 0b1001, 0b1111, 0b1001, 0b1001], // A
    [0b1110, 0b1001, 0b1110, 0b1001, 0b1110], // B
    [0b0111, 0b1000, 0b1000, 0b1000, 0b0111], // C
    [0b1110, 0b1001, 0b1001, 0b1001, 0b1110], // D
    [0b1111, 0b1000, 0b1110, 0b1000, 0b1111], // E
    [0b1111, 0b1000, 0b1110, 0b1000, 0b1000], // F
    [0b0111, 0b1000, 0b1011, 0b1001, 0b0111], // G
    [0b1001, 0b1001, 0b1111, 0b1001, 0b1001], // H
    [0b1111, 0b0010, 0b0010, 0b0010, 0b1111], // I
    [0b0011, 0b0001, 0b0001, 0b1001, 0b0110], // J
    [0b1001, 0b1010, 0b1100, 0b1010, 0b1001], // K
    [0b1000, 0b1000, 0b1000, 0b1000, 0b1111], // L
    [0b1001, 0b1111, 0b1001, 0b1001, 0b1001], // M
    [0b1001, 0b1101, 0b1011, 0b1001, 0b1001], // N
    [0b0110, 0b1001, 0b1001, 0b1001, 0b0110], // O
    [0b1110, 0b1001, 0b1110, 0b1000, 0b1000], // P
    [0b0110, 0b1001, 0b1001, 0b1011, 0b0111], // Q
    [0b1110, 0b1001, 0b1110, 0b1010, 0b1001], // R
    [0b0111, 0b1000, 0b0110, 0b0001, 0b1110], // S
    [0b1111, 0b0010, 0b0010, 0b0010, 0b0010], // T
    [0b1001, 0b1001, 0b1001, 0b1001, 0b0110], // U
    [0b1001, 0b1001, 0b1001, 0b0101, 0b0010], // V
    [0b1001, 0b1001, 0b1001, 0b1111, 0b1001], // W
    [0b1001, 0b0101, 0b0010, 0b0101, 0b1001], // X
    [0b1001, 0b1001, 0b0110, 0b0010, 0b0010], // Y
    [0b1111, 0b0001, 0b0010, 0b0100, 0b1111], // Z
];

// 3x5 font, same bit order as FONT_4X5.
const FONT_3X5: [[u8; GLYPH_HEIGHT]; 27] = [
    [0b000, 0b000, 0b000, 0b000, 0b000], // ' '
    [0b010, 0b101, 0b111, 0b101, 0b101], // A
    [0b110, 0b101, 0b110, 0b101, 0b110], // B
    [0b011, 0b100, 0b100, 0b100, 0b011], // C
    [0b110, 0b101, 0b101, 0b101, 0b110], // D
    [0b111, 0b100, 0b110, 0b100, 0b111], // E
    [0b111, 0b100, 0b110, 0b100, 0b100], // F
    [0b011, 0b100, 0b101, 0b101, 0b011], // G
    [0b101, 0b101, 0b111, 0b101, 0b101], // H
    [0b111, 0b010, 0b010, 0b010, 0b111], // I
    [0b001, 0b001, 0b001, 0b101, 0b010], // J
    [0b101, 0b101, 0b110, 0b101, 0b101], // K
    [0b100, 0b100, 0b100, 0b100, 0b111], // L
    [0b101, 0b111, 0b111, 0b101, 0b101], // M
    [0b110, 0b101, 0b101, 0b101, 0b101], // N
    [0b010, 0b101, 0b101, 0b101, 0b010], // O
    [0b110, 0b101, 0b110, 0b100, 0b100], // P
    [0b010, 0b101, 0b101, 0b110, 0b011], // Q
    [0b110, 0b101, 0b110, 0b101, 0b101], // R
    [0b011, 0b100, 0b010, 0b001, 0b110], // S
    [0b111, 0b010, 0b010, 0b010, 0b010], // T
    [0b101, 0b101, 0b101, 0b101, 0b111], // U
    [0b101, 0b101, 0b101, 0b101, 0b010], // V
    [0b101, 0b101, 0b111, 0b111, 0b101], // W
    [0b101, 0b101, 0b010, 0b101, 0b101], // X
    [0b101, 0b101, 0b010, 0b010, 0b010], // Y
    [0b111, 0b001, 0b010, 0b100, 0b111], // Z
];

/// The bitmap of one supported character.
///
/// Each of the [`GLYPH_HEIGHT`] rows is a bitmask `width` bits wide; the most significant of
/// those bits is the leftmost pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
    width: u8,
}

impl Glyph {
    /// Row bitmasks, top row first.
    #[must_use]
    pub const fn rows(&self) -> &[u8; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Whether no pixel of the glyph is lit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }

    /// Whether the pixel at `column` (0 = leftmost) and `row` (0 = top) is lit.
    ///
    /// Positions outside the glyph are unlit.
    #[must_use]
    pub fn is_lit(&self, column: usize, row: usize) -> bool {
        row < GLYPH_HEIGHT && self.column_bits(column) & (1 << row) != 0
    }

    /// One column of the glyph as a mask: bit `r` is set when row `r` is lit.
    ///
    /// Columns outside the glyph are `0`.
    #[must_use]
    pub fn column_bits(&self, column: usize) -> u8 {
        let width = self.width();
        if column >= width {
            return 0;
        }
        let shift = width - 1 - column;
        self.rows
            .iter()
            .enumerate()
            .fold(0u8, |bits, (row_index, row)| {
                bits | (((*row >> shift) & 1) << row_index)
            })
    }
}

/// Font options for marquee text.
///
/// Both fonts are [`GLYPH_HEIGHT`] pixels tall and cover space and `A`–`Z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarqueeFont {
    /// 3 pixels wide, 5 tall. Fits 7 characters across a 30-column panel.
    Font3x5,
    /// 4 pixels wide, 5 tall. Fits 6 characters across a 30-column panel.
    #[default]
    Font4x5,
}

impl MarqueeFont {
    /// Glyph width in pixels.
    #[must_use]
    pub const fn glyph_width(self) -> usize {
        match self {
            Self::Font3x5 => 3,
            Self::Font4x5 => 4,
        }
    }

    /// Columns used per character: the glyph plus one blank spacing column.
    #[must_use]
    pub const fn advance(self) -> usize {
        self.glyph_width() + 1
    }

    /// Look up the glyph for `ch`.
    ///
    /// Lowercase letters use their uppercase glyph. Any character other than space and
    /// `A`–`Z` gets the blank space glyph.
    ///
    /// ```rust
    /// use led_marquee::marquee::font::MarqueeFont;
    ///
    /// let font = MarqueeFont::Font4x5;
    /// assert_eq!(font.glyph('a'), font.glyph('A'));
    /// assert!(font.glyph('?').is_blank());
    /// ```
    #[must_use]
    pub fn glyph(self, ch: char) -> Glyph {
        let rows = match self {
            Self::Font3x5 => &FONT_3X5,
            Self::Font4x5 => &FONT_4X5,
        };
        let index = glyph_index(ch);
        Glyph {
            rows: rows.get(index).copied().unwrap_or([0; GLYPH_HEIGHT]),
            width: self.glyph_width() as u8,
        }
    }
}

fn glyph_index(ch: char) -> usize {
    match ch.to_ascii_uppercase() {
        upper @ 'A'..='Z' => usize::from(upper as u8 - b'A') + 1,
        _ => SPACE_INDEX,
    }
}
