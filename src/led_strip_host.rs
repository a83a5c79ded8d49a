//! Host stand-in for the LED strip, for tests and previews.
#![cfg(feature = "host")]

use std::cell::RefCell;

use crate::Result;
use crate::led_strip::{Frame1d, WriteFrame, apply_correction};

/// A [`WriteFrame`] that records every frame instead of lighting LEDs.
///
/// With [`with_combo_table`](Self::with_combo_table), frames are recorded after gamma and
/// brightness correction, exactly as the hardware strip task would send them.
///
/// ```rust
/// use embassy_futures::block_on;
/// use led_marquee::led_strip::{Frame1d, WriteFrame, colors};
/// use led_marquee::led_strip_host::RecordingStrip;
///
/// let strip = RecordingStrip::<4>::new();
/// block_on(strip.write_frame(Frame1d::filled(colors::RED)))?;
/// assert_eq!(strip.frames(), vec![Frame1d::filled(colors::RED)]);
/// # Ok::<(), led_marquee::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct RecordingStrip<const N: usize> {
    frames: RefCell<Vec<Frame1d<N>>>,
    combo_table: Option<[u8; 256]>,
}

impl<const N: usize> RecordingStrip<N> {
    /// A strip that records frames unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frames: RefCell::new(Vec::new()),
            combo_table: None,
        }
    }

    /// A strip that runs every frame through `combo_table` before recording it.
    #[must_use]
    pub const fn with_combo_table(combo_table: [u8; 256]) -> Self {
        Self {
            frames: RefCell::new(Vec::new()),
            combo_table: Some(combo_table),
        }
    }

    /// Every frame written so far, oldest first.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame1d<N>> {
        self.frames.borrow().clone()
    }

    /// The most recent frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<Frame1d<N>> {
        self.frames.borrow().last().copied()
    }

    /// Number of frames written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }
}

impl<const N: usize> WriteFrame<N> for RecordingStrip<N> {
    async fn write_frame(&self, mut frame: Frame1d<N>) -> Result<()> {
        if let Some(combo_table) = &self.combo_table {
            apply_correction(&mut frame, combo_table);
        }
        self.frames.borrow_mut().push(frame);
        Ok(())
    }
}
