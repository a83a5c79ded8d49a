#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for PNG and APNG previews.

use std::error::Error;
use std::fs::File;

use led_marquee::led2d::{Frame2d, LedLayout};
use led_marquee::led_strip::colors;
use led_marquee::marquee::{Marquee, MarqueeConfig};
use led_marquee::to_png::{write_frame_png, write_frames_apng, write_marquee_apng};
use png::Decoder;

const LED_LAYOUT: LedLayout<150, 30, 5> = LedLayout::serpentine_row_major();

fn decode_info(path: &std::path::Path) -> Result<(u32, u32, Option<u32>), Box<dyn Error>> {
    let reader = Decoder::new(File::open(path)?).read_info()?;
    let info = reader.info();
    Ok((
        info.width,
        info.height,
        info.animation_control.as_ref().map(|control| control.num_frames),
    ))
}

#[test]
fn single_frame_png_fits_max_dimension() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("frame.png");

    let mut frame = Frame2d::<30, 5>::new();
    frame[(0, 0)] = colors::RED;
    frame[(29, 4)] = colors::WHITE;
    write_frame_png(&frame, &path, 600)?;

    let (width, height, frames) = decode_info(&path)?;
    assert!(width <= 600, "width {width}");
    assert!(width > height);
    assert_eq!(frames, None);
    Ok(())
}

#[test]
fn apng_has_one_frame_per_input() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("nested").join("frames.png");

    let frames: Vec<Frame2d<4, 2>> = [colors::RED, colors::GREEN, colors::BLUE]
        .into_iter()
        .map(Frame2d::filled)
        .collect();
    write_frames_apng(&frames, &path, 100, 60)?;

    let (width, height, frame_count) = decode_info(&path)?;
    assert!(width <= 100);
    assert!(height < width);
    assert_eq!(frame_count, Some(3));
    Ok(())
}

#[test]
fn empty_frame_list_is_an_error() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let frames: [Frame2d<4, 2>; 0] = [];
    assert!(write_frames_apng(&frames, temp_dir.path().join("empty.png"), 100, 60).is_err());
    Ok(())
}

#[test]
fn marquee_apng_covers_one_cycle() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("marquee.png");

    let config = MarqueeConfig {
        message: "HI",
        ..MarqueeConfig::DEFAULT
    };
    let mut marquee = Marquee::<150, 30, 5>::new(&config, LED_LAYOUT)?;
    let written = write_marquee_apng(&mut marquee, &path, 600, 60)?;

    assert_eq!(written, marquee.frames_per_cycle());
    assert_eq!(marquee.scroll_offset(), Marquee::<150, 30, 5>::START_OFFSET);
    let (_, _, frame_count) = decode_info(&path)?;
    assert_eq!(frame_count, Some(u32::try_from(written)?));
    Ok(())
}

#[test]
fn huge_max_dimension_on_tiny_panel_still_renders() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("tiny.png");

    let mut frame = Frame2d::<2, 1>::new();
    frame[(1, 0)] = colors::GREEN;
    write_frame_png(&frame, &path, u32::MAX)?;

    let (width, height, _) = decode_info(&path)?;
    assert!(width > height, "{width}x{height}");
    assert!(width < 4096, "cell size is capped, got width {width}");
    Ok(())
}
