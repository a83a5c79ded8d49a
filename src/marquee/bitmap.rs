//! A rasterized message, stored as 5-bit column masks.

use embedded_graphics::geometry::{OriginDimensions, Size};
use heapless::Vec;

use super::font::{GLYPH_HEIGHT, MarqueeFont};
use crate::{Error, Result};

/// A message rendered once into pixel columns, ready to scroll.
///
/// Column `c` is stored as a mask where bit `r` is set when row `r` (0 = top) is lit.
/// Every character contributes its glyph columns left-to-right followed by one blank spacing
/// column, so the pixel width is `chars × (glyph width + 1)`.
///
/// `CAP` is the number of columns reserved. A message that needs more columns than that is
/// rejected by [`rasterize`](Self::rasterize).
///
/// ```rust
/// use led_marquee::marquee::{MarqueeFont, MessageBitmap};
///
/// let bitmap = MessageBitmap::<300>::rasterize("AB", MarqueeFont::Font4x5)?;
/// assert_eq!(bitmap.pixel_width(), 10);
/// assert!(!bitmap.is_lit(0, 0)); // 'A' top row is 0b0110
/// assert!(bitmap.is_lit(1, 0));
/// # Ok::<(), led_marquee::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBitmap<const CAP: usize> {
    columns: Vec<u8, CAP>,
}

impl<const CAP: usize> MessageBitmap<CAP> {
    /// Number of columns this bitmap can hold.
    pub const CAPACITY: usize = CAP;

    /// Rasterize `text` with `font`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageTooWide`] when the message needs more than `CAP` columns.
    /// Nothing is rasterized in that case.
    pub fn rasterize(text: &str, font: MarqueeFont) -> Result<Self> {
        let required = text.chars().count().saturating_mul(font.advance());
        if required > CAP {
            return Err(Error::MessageTooWide {
                required,
                capacity: CAP,
            });
        }

        let mut columns = Vec::new();
        for ch in text.chars() {
            let glyph = font.glyph(ch);
            for column in 0..glyph.width() {
                columns
                    .push(glyph.column_bits(column))
                    .map_err(|_| Error::MessageTooWide {
                        required,
                        capacity: CAP,
                    })?;
            }
            columns.push(0).map_err(|_| Error::MessageTooWide {
                required,
                capacity: CAP,
            })?;
        }
        Ok(Self { columns })
    }

    /// Width of the rasterized message in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> usize {
        self.columns.len()
    }

    /// Whether the message has no columns (empty text).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column mask at `column`, or `0` past the end.
    #[must_use]
    pub fn column_bits(&self, column: usize) -> u8 {
        self.columns.get(column).copied().unwrap_or(0)
    }

    /// Whether the pixel at `column`, `row` is lit. Out-of-range positions are unlit.
    #[must_use]
    pub fn is_lit(&self, column: usize, row: usize) -> bool {
        row < GLYPH_HEIGHT && self.column_bits(column) & (1 << row) != 0
    }

    /// Signed-column form of [`is_lit`](Self::is_lit), used while scrolling.
    #[must_use]
    pub fn is_lit_at(&self, column: i32, row: usize) -> bool {
        usize::try_from(column).is_ok_and(|column| self.is_lit(column, row))
    }

    /// All column masks, leftmost first.
    #[must_use]
    pub fn columns(&self) -> &[u8] {
        &self.columns
    }
}

impl<const CAP: usize> OriginDimensions for MessageBitmap<CAP> {
    fn size(&self) -> Size {
        Size::new(
            u32::try_from(self.pixel_width()).unwrap_or(u32::MAX),
            u32::try_from(GLYPH_HEIGHT).unwrap_or(u32::MAX),
        )
    }
}
