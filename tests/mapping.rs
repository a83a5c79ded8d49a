#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for panel wiring.

use led_marquee::led_strip::{Frame1d, RGB8, colors};
use led_marquee::led2d::Frame2d;
use led_marquee::led2d::layout::LedLayout;

const PANEL: LedLayout<150, 30, 5> = LedLayout::serpentine_row_major();

#[test]
fn serpentine_formula_per_row_parity() {
    for y_index in 0..5 {
        for x_index in 0..30 {
            let expected = if y_index % 2 == 0 {
                y_index * 30 + x_index
            } else {
                y_index * 30 + (29 - x_index)
            };
            assert_eq!(PANEL.led_index(x_index, y_index), expected);
        }
    }
}

#[test]
fn each_row_covers_a_contiguous_range_once() {
    for y_index in 0..5 {
        let mut indexes: Vec<usize> = (0..30)
            .map(|x_index| PANEL.led_index(x_index, y_index))
            .collect();
        indexes.sort_unstable();
        let expected: Vec<usize> = (y_index * 30..(y_index + 1) * 30).collect();
        assert_eq!(indexes, expected);
    }
}

#[test]
fn out_of_range_returns_zero() {
    assert_eq!(PANEL.led_index(30, 0), 0);
    assert_eq!(PANEL.led_index(0, 5), 0);
    assert_eq!(PANEL.led_index(usize::MAX, usize::MAX), 0);
}

#[test]
fn row_one_runs_right_to_left() {
    assert_eq!(PANEL.led_index(29, 1), 30);
    assert_eq!(PANEL.led_index(0, 1), 59);
    assert_eq!(PANEL.led_index(0, 2), 60);
}

#[test]
fn index_to_xy_is_inverse_of_led_index() {
    for (led_index, &(x_index, y_index)) in PANEL.index_to_xy().iter().enumerate() {
        assert_eq!(
            PANEL.led_index(usize::from(x_index), usize::from(y_index)),
            led_index
        );
    }
}

#[test]
fn custom_wiring_matches_expected() {
    const COLUMN_MAJOR: LedLayout<6, 3, 2> =
        LedLayout::new([(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    assert_eq!(COLUMN_MAJOR.led_index(1, 1), 3);
    assert_eq!(COLUMN_MAJOR.led_index(2, 0), 4);
    assert!(!COLUMN_MAJOR.equals(&LedLayout::serpentine_row_major()));
}

#[test]
fn frame_round_trip_through_strip_order() {
    let mut frame = Frame2d::<30, 5>::new();
    frame[(0, 0)] = colors::RED;
    frame[(29, 1)] = colors::GREEN;
    frame[(3, 4)] = colors::BLUE;

    let strip = PANEL.frame_to_strip(&frame);
    assert_eq!(strip[0], colors::RED);
    assert_eq!(strip[30], colors::GREEN);
    assert_eq!(strip[123], colors::BLUE);
    assert_eq!(strip.lit_count(), 3);

    assert_eq!(PANEL.strip_to_frame(&strip), frame);
}

#[test]
fn strip_to_frame_places_each_led() {
    let mut strip = Frame1d::<150>::new();
    strip[59] = RGB8::new(1, 2, 3);
    let frame = PANEL.strip_to_frame(&strip);
    assert_eq!(frame[(0, 1)], RGB8::new(1, 2, 3));
}
