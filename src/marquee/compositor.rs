//! Paint the visible window of a [`MessageBitmap`] into a strip-order frame.

use itertools::iproduct;

use super::MessageBitmap;
use crate::led2d::LedLayout;
use crate::led_strip::{Frame1d, RGB8};

/// Clear `frame`, then draw the part of `bitmap` visible at `scroll_offset`.
///
/// Layout column `col` shows bitmap column `(W - 1 - col) + scroll_offset`, so in [`LedLayout`]
/// coordinates the message first appears at `x = 0` (offset `-(W - 1)`) and moves toward
/// `x = W - 1` as the offset grows. On a panel mounted mirrored, with layout column 0 on the
/// viewer's right, that reads as text entering at the right edge and moving left. Lit pixels
/// get `color`, everything else is black. Bitmap columns outside `[0, pixel_width)` are unlit.
///
/// ```rust
/// use led_marquee::led2d::LedLayout;
/// use led_marquee::led_strip::{Frame1d, colors};
/// use led_marquee::marquee::{MarqueeFont, MessageBitmap, composite};
///
/// const LED_LAYOUT: LedLayout<150, 30, 5> = LedLayout::serpentine_row_major();
/// let bitmap = MessageBitmap::<300>::rasterize("A", MarqueeFont::Font4x5)?;
/// let mut frame = Frame1d::filled(colors::BLUE);
///
/// // Offset 0: display column 29 shows bitmap column 0 (unlit in the top row).
/// composite(&mut frame, &bitmap, 0, colors::RED, &LED_LAYOUT);
/// assert_eq!(frame[LED_LAYOUT.led_index(29, 2)], colors::RED);
/// assert_eq!(frame[LED_LAYOUT.led_index(29, 0)], colors::BLACK);
/// # Ok::<(), led_marquee::Error>(())
/// ```
pub fn composite<const N: usize, const W: usize, const H: usize, const CAP: usize>(
    frame: &mut Frame1d<N>,
    bitmap: &MessageBitmap<CAP>,
    scroll_offset: i32,
    color: RGB8,
    led_layout: &LedLayout<N, W, H>,
) {
    *frame = Frame1d::new();
    // Pair each display column with its mirror, `W - 1 - col`.
    for (row, (col, mirrored)) in iproduct!(0..H, (0..W).zip((0..W).rev())) {
        let bitmap_col = i32::try_from(mirrored)
            .unwrap_or(i32::MAX)
            .saturating_add(scroll_offset);
        if bitmap.is_lit_at(bitmap_col, row) {
            if let Some(led) = frame.get_mut(led_layout.led_index(col, row)) {
                *led = color;
            }
        }
    }
}
