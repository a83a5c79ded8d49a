//! Scroll an uppercase text message across a serpentine-wired NeoPixel-style (WS2812) LED
//! matrix on the Pico 1 and Pico 2.
//!
//! Text is rasterized once into a 5-row [`MessageBitmap`](crate::marquee::MessageBitmap) using a
//! small fixed-width font, then a [`Marquee`](crate::marquee::Marquee) slides that bitmap one
//! pixel per tick across the panel, looping forever.
//!
//! See the [`marquee!`] macro for the usual way to put a marquee on real hardware.
//!
//! # Glossary
//!
//! Resources available on the Pico 1 and Pico 2:
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):** Pico 1 has 2. Pico 2 has 3.
//! - **DMA ([Direct Memory Access](https://en.wikipedia.org/wiki/Direct_memory_access)):** Both Pico 1 and 2 have 12 channels.
//! - **Serpentine wiring:** consecutive rows of the panel alternate scan direction, so the LED
//!   strip snakes back and forth.
#![cfg_attr(not(feature = "host"), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: an architecture must be selected (unless testing with host feature)
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature");

mod error;
pub mod led2d;
pub mod led_strip;
#[cfg(feature = "host")]
pub mod led_strip_host;
pub mod marquee;
#[cfg(not(feature = "host"))]
pub mod pio_irqs;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
