//! A device abstraction for NeoPixel-style (WS2812) LED strips.
//!
//! A strip receives whole [`Frame1d`] buffers, one color per LED in wiring order. Before a frame
//! reaches the LEDs, every channel goes through a single lookup table that folds together gamma
//! correction ([`Gamma`]) and brightness scaling (global brightness plus the [`Current`] budget).
//!
//! On hardware, the strip is driven by a background task that owns the PIO state machine and DMA
//! channel. The [`marquee!`](crate::marquee!) macro spawns that task for you. On the host (feature
//! `host`), [`RecordingStrip`](crate::led_strip_host::RecordingStrip) stands in for the hardware.
//!
//! # Example: Budget Brightness
//!
//! ```rust
//! use led_marquee::led_strip::{Current, Gamma, generate_combo_table, scale_brightness};
//!
//! // 150 LEDs at up to 60 mA each, limited to 300 mA, global brightness 255.
//! let limit = Current::Milliamps(300).max_brightness(150 * 60);
//! let brightness = scale_brightness(255, limit);
//! let combo_table = generate_combo_table(Gamma::Linear, brightness);
//!
//! assert_eq!(brightness, 8);
//! assert_eq!(combo_table[255], 8);
//! assert_eq!(combo_table[0], 0);
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`, `ORANGE`, `PURPLE`.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used by LED strip frames.
pub use smart_leds::RGB8;

use core::ops::{Deref, DerefMut};

use crate::Result;

// ============================================================================
// Frames
// ============================================================================

/// Fixed-size 1D LED strip frame, one color per LED in wiring order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [RGB8; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }

    /// Number of LEDs that are not black.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|color| **color != RGB8::default()).count()
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[RGB8; N]> for Frame1d<N> {
    fn from(array: [RGB8; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [RGB8; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Gamma Correction
// ============================================================================

/// Gamma correction mode for LED strips.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Gamma {
    /// Linear gamma (no correction). Gamma = 1.0
    #[default]
    Linear,
    /// Standard gamma 2.2 correction for perceived brightness.
    Gamma2_2,
}

/// Gamma 2.2 lookup table for 8-bit values.
/// Pre-computed to avoid floating point math: corrected = (value/255)^2.2 * 255
const GAMMA_2_2_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 11, 11,
    11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21, 22, 22, 23,
    23, 24, 25, 25, 26, 26, 27, 28, 28, 29, 30, 30, 31, 32, 33, 33, 34, 35, 35, 36, 37, 38, 39, 39,
    40, 41, 42, 43, 43, 44, 45, 46, 47, 48, 49, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61,
    62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 73, 74, 75, 76, 77, 78, 79, 81, 82, 83, 84, 85, 87, 88,
    89, 90, 91, 93, 94, 95, 97, 98, 99, 100, 102, 103, 105, 106, 107, 109, 110, 111, 113, 114, 116,
    117, 119, 120, 121, 123, 124, 126, 127, 129, 130, 132, 133, 135, 137, 138, 140, 141, 143, 145,
    146, 148, 149, 151, 153, 154, 156, 158, 159, 161, 163, 165, 166, 168, 170, 172, 173, 175, 177,
    179, 181, 182, 184, 186, 188, 190, 192, 194, 196, 197, 199, 201, 203, 205, 207, 209, 211, 213,
    215, 217, 219, 221, 223, 225, 227, 229, 231, 234, 236, 238, 240, 242, 244, 246, 248, 251, 253,
    255,
];

/// Generate a combined gamma correction and brightness scaling lookup table.
///
/// This combines two operations into a single table lookup:
/// 1. Apply gamma correction based on the `gamma` parameter
/// 2. Scale by `max_brightness`
///
/// The result is a table where `combo_table[input_value]` gives the final output value.
#[must_use]
pub const fn generate_combo_table(gamma: Gamma, max_brightness: u8) -> [u8; 256] {
    let mut result = [0u8; 256];
    let mut index = 0;
    while index < 256 {
        let gamma_corrected = match gamma {
            Gamma::Linear => index as u8,
            Gamma::Gamma2_2 => GAMMA_2_2_TABLE[index],
        };
        // Apply brightness scaling: (value * brightness) / 255
        let scaled = ((gamma_corrected as u16 * max_brightness as u16) / 255) as u8;
        result[index] = scaled;
        index += 1;
    }
    result
}

/// Run every channel of `frame` through `combo_table`.
pub fn apply_correction<const N: usize>(frame: &mut Frame1d<N>, combo_table: &[u8; 256]) {
    for color in frame.iter_mut() {
        *color = RGB8::new(
            combo_table[usize::from(color.r)],
            combo_table[usize::from(color.g)],
            combo_table[usize::from(color.b)],
        );
    }
}

// ============================================================================
// Power Budget
// ============================================================================

/// Worst-case draw of one WS2812 LED at full white, in milliamps.
pub const MILLIAMPS_PER_LED: u32 = 60;

/// Used by [`marquee!`](crate::marquee!) to budget current for the LED panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Current {
    /// Limit brightness to stay within a specific milliamp budget.
    ///
    /// The limit is calculated so the worst-case current (all LEDs at full white) does not
    /// exceed this budget. For example, a 30×5 panel draws 9000 mA at full white; a 300 mA
    /// budget caps brightness at 8/255.
    Milliamps(u16),
    /// No limit: brightness stays at 100% (subject to practical hardware constraints like
    /// USB power delivery and the Pico's circuitry).
    Unlimited,
}

impl Default for Current {
    fn default() -> Self {
        MAX_CURRENT_DEFAULT
    }
}

/// Default current budget for the marquee (`Current::Milliamps(300)`).
pub const MAX_CURRENT_DEFAULT: Current = Current::Milliamps(300);

impl Current {
    /// Calculate maximum brightness based on current budget and worst-case current draw.
    ///
    /// Returns 255 (full brightness) for Unlimited, or a scaled value for Milliamps.
    #[must_use]
    pub const fn max_brightness(self, worst_case_ma: u32) -> u8 {
        assert!(worst_case_ma > 0, "worst_case_ma must be positive");
        match self {
            Self::Milliamps(ma) => {
                let scale = (ma as u32 * 255) / worst_case_ma;
                if scale > 255 { 255 } else { scale as u8 }
            }
            Self::Unlimited => 255,
        }
    }
}

/// Combine a global brightness (0–255) with a current-budget limit (0–255).
#[must_use]
pub const fn scale_brightness(brightness: u8, limit: u8) -> u8 {
    ((brightness as u16 * limit as u16) / 255) as u8
}

// ============================================================================
// Strip Output
// ============================================================================

/// Something that can show a [`Frame1d`] on LEDs.
pub trait WriteFrame<const N: usize> {
    /// Show `frame`. It remains displayed until the next frame replaces it.
    async fn write_frame(&self, frame: Frame1d<N>) -> Result<()>;
}

#[cfg(not(feature = "host"))]
mod device {
    use embassy_rp::pio::Instance;
    use embassy_rp::pio_programs::ws2812::{PioWs2812, RgbColorOrder};
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::signal::Signal;

    use super::{Frame1d, WriteFrame, apply_correction};
    use crate::Result;

    #[doc(hidden)] // Required pub for macro expansion in downstream crates
    pub type LedStripCommandSignal<const N: usize> = Signal<CriticalSectionRawMutex, Frame1d<N>>;

    #[doc(hidden)] // Required pub for macro expansion in downstream crates
    pub type LedStripCompletionSignal = Signal<CriticalSectionRawMutex, ()>;

    /// Static used to construct an LED strip handle.
    #[doc(hidden)] // Must be pub for method signatures and macro expansion in downstream crates
    pub struct LedStripStatic<const N: usize> {
        command_signal: LedStripCommandSignal<N>,
        completion_signal: LedStripCompletionSignal,
    }

    impl<const N: usize> LedStripStatic<N> {
        /// Creates static resources.
        #[must_use]
        pub const fn new_static() -> Self {
            Self {
                command_signal: Signal::new(),
                completion_signal: Signal::new(),
            }
        }

        #[doc(hidden)]
        pub fn command_signal(&'static self) -> &'static LedStripCommandSignal<N> {
            &self.command_signal
        }

        #[doc(hidden)]
        pub fn completion_signal(&'static self) -> &'static LedStripCompletionSignal {
            &self.completion_signal
        }
    }

    /// Handle for sending frames to the LED strip task.
    ///
    /// Created by [`marquee!`](crate::marquee!)-generated types; see the
    /// [module documentation](mod@crate::led_strip).
    pub struct LedStrip<const N: usize> {
        command_signal: &'static LedStripCommandSignal<N>,
        completion_signal: &'static LedStripCompletionSignal,
    }

    impl<const N: usize> LedStrip<N> {
        /// Creates a new LED strip handle bound to the given static resources.
        #[must_use]
        pub fn new(led_strip_static: &'static LedStripStatic<N>) -> Self {
            Self {
                command_signal: led_strip_static.command_signal(),
                completion_signal: led_strip_static.completion_signal(),
            }
        }
    }

    impl<const N: usize> WriteFrame<N> for LedStrip<N> {
        async fn write_frame(&self, frame: Frame1d<N>) -> Result<()> {
            self.command_signal.signal(frame);
            self.completion_signal.wait().await;
            Ok(())
        }
    }

    #[doc(hidden)] // Required pub for macro expansion in downstream crates
    pub async fn led_strip_device_loop<PIO, const SM: usize, const N: usize, ORDER>(
        mut driver: PioWs2812<'static, PIO, SM, N, ORDER>,
        command_signal: &'static LedStripCommandSignal<N>,
        completion_signal: &'static LedStripCompletionSignal,
        combo_table: &'static [u8; 256],
    ) -> !
    where
        PIO: Instance,
        ORDER: RgbColorOrder,
    {
        defmt::info!("led_strip_device_loop: task started with {} LEDs", N);
        loop {
            let mut frame = command_signal.wait().await;
            command_signal.reset();
            apply_correction(&mut frame, combo_table);
            driver.write(&frame).await;
            completion_signal.signal(());
        }
    }
}

#[cfg(not(feature = "host"))]
pub use device::{
    LedStrip, LedStripCommandSignal, LedStripCompletionSignal, LedStripStatic,
    led_strip_device_loop,
};
