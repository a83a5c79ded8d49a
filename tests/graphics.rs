#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for drawing with embedded-graphics.

use std::error::Error;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use led_marquee::led2d::{Frame2d, LedLayout};
use led_marquee::led_strip::RGB8;
use led_marquee::marquee::{MarqueeFont, MessageBitmap};

const LED_LAYOUT: LedLayout<150, 30, 5> = LedLayout::serpentine_row_major();
const TEAL: Rgb888 = Rgb888::new(0, 40, 60);

fn lit_count<const W: usize, const H: usize>(frame: &Frame2d<W, H>) -> usize {
    frame
        .iter()
        .flatten()
        .filter(|pixel| **pixel != RGB8::default())
        .count()
}

#[test]
fn frame_reports_panel_size() {
    let frame = Frame2d::<30, 5>::new();
    assert_eq!(frame.size(), Size::new(30, 5));
    assert_eq!(frame.bounding_box().top_left, Point::zero());
}

#[test]
fn filled_rectangle_lands_on_frame() -> Result<(), Box<dyn Error>> {
    let mut frame = Frame2d::<30, 5>::new();
    Rectangle::new(Point::new(2, 1), Size::new(3, 2))
        .into_styled(PrimitiveStyle::with_fill(TEAL))
        .draw(&mut frame)?;

    assert_eq!(lit_count(&frame), 6);
    assert_eq!(frame[(2, 1)], RGB8::new(0, 40, 60));
    assert_eq!(frame[(4, 2)], RGB8::new(0, 40, 60));
    assert_eq!(frame[(5, 2)], RGB8::default());
    assert_eq!(frame[(2, 0)], RGB8::default());
    Ok(())
}

#[test]
fn off_panel_pixels_are_clipped() -> Result<(), Box<dyn Error>> {
    let mut frame = Frame2d::<30, 5>::new();
    // Overhangs the right and bottom edges: only (28..30, 3..5) is on the panel.
    Rectangle::new(Point::new(28, 3), Size::new(4, 4))
        .into_styled(PrimitiveStyle::with_fill(TEAL))
        .draw(&mut frame)?;
    // Starts left of the panel: only x = 0..=2 is on the panel.
    Line::new(Point::new(-5, 0), Point::new(2, 0))
        .into_styled(PrimitiveStyle::with_stroke(TEAL, 1))
        .draw(&mut frame)?;

    assert_eq!(lit_count(&frame), 4 + 3);
    assert_eq!(frame[(29, 4)], RGB8::new(0, 40, 60));
    assert_eq!(frame[(0, 0)], RGB8::new(0, 40, 60));
    assert_eq!(frame[(3, 0)], RGB8::default());
    Ok(())
}

#[test]
fn drawn_frame_converts_to_strip_order() -> Result<(), Box<dyn Error>> {
    let mut frame = Frame2d::<30, 5>::new();
    Pixel(Point::new(0, 1), TEAL).draw(&mut frame)?;

    let strip_frame = LED_LAYOUT.frame_to_strip(&frame);
    // Row 1 runs right to left, so (0, 1) is the last LED of that row.
    assert_eq!(strip_frame[59], RGB8::new(0, 40, 60));
    assert_eq!(strip_frame.lit_count(), 1);
    Ok(())
}

#[test]
fn message_bitmap_size_is_pixel_width_by_glyph_height() -> Result<(), Box<dyn Error>> {
    let bitmap = MessageBitmap::<300>::rasterize("AB", MarqueeFont::Font4x5)?;
    assert_eq!(bitmap.size(), Size::new(10, 5));

    let narrow = MessageBitmap::<300>::rasterize("AB", MarqueeFont::Font3x5)?;
    assert_eq!(narrow.size(), Size::new(8, 5));

    let empty = MessageBitmap::<300>::rasterize("", MarqueeFont::Font4x5)?;
    assert_eq!(empty.size(), Size::new(0, 5));
    assert_eq!(empty.bounding_box().size.width, 0);
    Ok(())
}
