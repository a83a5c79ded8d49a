//! Compile-time description of panel geometry and wiring.
//!
//! See [`LedLayout`] for details.

use super::Frame2d;
use crate::led_strip::Frame1d;

/// Compile-time description of panel geometry and wiring.
///
/// `LedLayout` defines how a rectangular `(x, y)` panel of `W × H` LEDs maps to the linear
/// order of the `N` LEDs on a NeoPixel-style (WS2812) strip.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
/// `x` increases to the right, and `y` increases downward.
///
/// Most panels are wired in a snake pattern; use [`serpentine_row_major`](Self::serpentine_row_major).
/// For unusual wiring, list `(x, y)` for each LED in strip order with [`LedLayout::new`].
///
/// ## Validation
///
/// Layouts are validated at **compile time** when built in a `const`:
/// - coordinates must be in-bounds
/// - every `(x, y)` cell must appear exactly once
///
/// # Example
///
/// ```rust
/// use led_marquee::led2d::layout::LedLayout;
///
/// const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
/// const _: () = assert!(SNAKE.equals(&EXPECTED)); // Compile-time assert
///
/// assert_eq!(SNAKE.led_index(0, 1), 5);
/// ```
///
/// ```text
/// Strip snakes across rows (3×2 example):
///   LED0  LED1  LED2
///   LED5  LED4  LED3
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
    by_xy: [u16; N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the layout has no LEDs. Never true for a validated layout.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Strip index of the LED at `(x_index, y_index)`.
    ///
    /// Coordinates outside the panel return LED index 0 instead of panicking.
    #[must_use]
    pub const fn led_index(&self, x_index: usize, y_index: usize) -> usize {
        if x_index >= W || y_index >= H {
            return 0;
        }
        self.by_xy[y_index * W + x_index] as usize
    }

    /// Const equality helper for doctests/examples.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies the mapping covers every cell of the W×H panel exactly once.
    ///
    /// Entry `i` is the `(x, y)` position of LED `i` on the strip.
    ///
    /// ```rust
    /// use led_marquee::led2d::layout::LedLayout;
    ///
    /// // 3×2 panel wired top row left-to-right, then bottom row left-to-right.
    /// const MAP: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    /// assert_eq!(MAP.led_index(2, 1), 5);
    /// ```
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for the inverse mapping"
        );

        let mut seen = [false; N];
        let mut by_xy = [0u16; N];

        let mut led_index = 0;
        while led_index < N {
            let (col, row) = map[led_index];
            let col = col as usize;
            let row = row as usize;

            assert!(col < W, "column out of bounds");
            assert!(row < H, "row out of bounds");

            let cell = row * W + col;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;
            by_xy[cell] = led_index as u16;

            led_index += 1;
        }

        // With N cells and no duplicates, every cell is covered.
        Self { map, by_xy }
    }

    /// Serpentine row-major mapping (alternating left-to-right and right-to-left across rows).
    ///
    /// Even rows run left-to-right: `index = y * W + x`.
    /// Odd rows run right-to-left: `index = y * W + (W - 1 - x)`.
    ///
    /// ```rust
    /// use led_marquee::led2d::layout::LedLayout;
    ///
    /// const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    /// const EXPECTED: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
    /// const _: () = assert!(MAP.equals(&EXPECTED));
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Convert a 2D frame to strip order.
    #[must_use]
    pub fn frame_to_strip(&self, frame_2d: &Frame2d<W, H>) -> Frame1d<N> {
        let mut frame_1d = Frame1d::new();
        for (led_index, &(x_index, y_index)) in self.map.iter().enumerate() {
            frame_1d[led_index] = frame_2d[(usize::from(x_index), usize::from(y_index))];
        }
        frame_1d
    }

    /// Convert a strip-order frame back to a 2D frame.
    #[must_use]
    pub fn strip_to_frame(&self, frame_1d: &Frame1d<N>) -> Frame2d<W, H> {
        let mut frame_2d = Frame2d::new();
        for (&(x_index, y_index), &color) in self.map.iter().zip(frame_1d.iter()) {
            frame_2d[(usize::from(x_index), usize::from(y_index))] = color;
        }
        frame_2d
    }
}
