#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for message rasterization.

use led_marquee::Error;
use led_marquee::marquee::{MESSAGE_CAPACITY_DEFAULT, MarqueeFont, MessageBitmap};

type Bitmap = MessageBitmap<MESSAGE_CAPACITY_DEFAULT>;

#[test]
fn pixel_width_is_chars_times_advance() -> Result<(), Error> {
    for (text, font) in [
        ("", MarqueeFont::Font4x5),
        ("A", MarqueeFont::Font4x5),
        ("HELLO WORLD", MarqueeFont::Font4x5),
        ("HELLO WORLD", MarqueeFont::Font3x5),
        ("SOMETIMES THERE ARE PROBLEMS     DO NOT FRET", MarqueeFont::Font4x5),
    ] {
        let bitmap = Bitmap::rasterize(text, font)?;
        assert_eq!(bitmap.pixel_width(), text.chars().count() * font.advance());
    }
    Ok(())
}

#[test]
fn ab_in_4x5_font() -> Result<(), Error> {
    let bitmap = Bitmap::rasterize("AB", MarqueeFont::Font4x5)?;
    assert_eq!(bitmap.pixel_width(), 10);
    // 'A' top row is 0b0110.
    assert!(!bitmap.is_lit(0, 0));
    assert!(bitmap.is_lit(1, 0));
    assert!(bitmap.is_lit(2, 0));
    assert!(!bitmap.is_lit(3, 0));
    // Spacing columns after each glyph.
    assert_eq!(bitmap.column_bits(4), 0);
    assert_eq!(bitmap.column_bits(9), 0);
    // 'B' left column is fully lit.
    assert_eq!(bitmap.column_bits(5), 0b1_1111);
    Ok(())
}

#[test]
fn out_of_range_is_unlit() -> Result<(), Error> {
    let bitmap = Bitmap::rasterize("B", MarqueeFont::Font4x5)?;
    assert!(bitmap.is_lit(0, 4));
    assert!(!bitmap.is_lit(0, 5));
    assert!(!bitmap.is_lit(5, 0));
    assert!(!bitmap.is_lit_at(-1, 0));
    assert_eq!(bitmap.column_bits(100), 0);
    Ok(())
}

#[test]
fn columns_match_glyphs() -> Result<(), Error> {
    let font = MarqueeFont::Font3x5;
    let bitmap = Bitmap::rasterize("Hi!", font)?;
    let mut expected = Vec::new();
    for ch in ['H', 'I', ' '] {
        let glyph = font.glyph(ch);
        expected.extend((0..glyph.width()).map(|column| glyph.column_bits(column)));
        expected.push(0);
    }
    assert_eq!(bitmap.columns(), expected.as_slice());
    Ok(())
}

#[test]
fn message_too_wide_fails_fast() {
    let result = MessageBitmap::<9>::rasterize("AB", MarqueeFont::Font4x5);
    assert!(matches!(
        result,
        Err(Error::MessageTooWide {
            required: 10,
            capacity: 9
        })
    ));
}

#[test]
fn message_exactly_at_capacity_fits() -> Result<(), Error> {
    let bitmap = MessageBitmap::<10>::rasterize("AB", MarqueeFont::Font4x5)?;
    assert_eq!(bitmap.pixel_width(), 10);
    Ok(())
}

#[test]
fn too_wide_error_message() {
    let Err(err) = MessageBitmap::<4>::rasterize("A", MarqueeFont::Font4x5) else {
        panic!("expected MessageTooWide");
    };
    assert_eq!(
        err.to_string(),
        "message needs 5 bitmap columns but capacity is 4"
    );
}
