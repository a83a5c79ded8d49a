//! Rectangular views of a NeoPixel-style (WS2812) LED panel.
//!
//! A panel is an LED strip folded into rows. [`LedLayout`] records how the strip is folded, and
//! [`Frame2d`] lets you think in `(x, y)` screen coordinates instead of strip order:
//! `(0, 0)` is the top-left corner, `x` increases to the right, and `y` increases downward.
//!
//! # Example: Draw, Then Convert to Strip Order
//!
//! ```rust
//! use led_marquee::led2d::{Frame2d, LedLayout};
//! use led_marquee::led_strip::colors;
//!
//! // A 4×2 panel whose strip snakes left-to-right, then right-to-left.
//! const LED_LAYOUT: LedLayout<8, 4, 2> = LedLayout::serpentine_row_major();
//!
//! let mut frame = Frame2d::<4, 2>::new();
//! frame[(0, 1)] = colors::RED; // bottom-left pixel
//!
//! let strip_frame = LED_LAYOUT.frame_to_strip(&frame);
//! assert_eq!(strip_frame[7], colors::RED); // last LED on the strip
//! ```

// Re-export geometric types from embedded-graphics for convenience
pub use embedded_graphics::geometry::{Point, Size};

pub mod layout;

pub use layout::LedLayout;

use core::{
    convert::Infallible,
    ops::{Deref, DerefMut, Index, IndexMut},
};
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb888, prelude::*};
use smart_leds::RGB8;

/// A 2D array of RGB pixels representing a single display frame.
///
/// Frames are stored in row-major order where `frame[(x, y)]` is the pixel at column `x`,
/// row `y`. A [`LedLayout`] converts them to and from strip order.
///
/// `Frame2d` is an [`embedded-graphics`](https://docs.rs/embedded-graphics) draw target, so
/// lines, shapes and fonts from that crate can be drawn on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Frame2d width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame2d height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total number of pixels (WIDTH × HEIGHT).
    pub const LEN: usize = W * H;
    /// Frame dimensions as a [`Size`].
    pub const SIZE: Size = Size::new(W as u32, H as u32);
    /// Top-left corner coordinate as a [`Point`].
    pub const TOP_LEFT: Point = Point::new(0, 0);

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); W]; H])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Frame2d<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Frame2d<W, H> {
    fn size(&self) -> Size {
        Self::SIZE
    }
}

impl<const W: usize, const H: usize> DrawTarget for Frame2d<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            // Off-panel pixels are clipped.
            let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if x_index < W && y_index < H {
                self.0[y_index][x_index] = RGB8::new(color.r(), color.g(), color.b());
            }
        }
        Ok(())
    }
}
