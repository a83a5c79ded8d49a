//! Scroll a text message across an LED panel, one pixel per tick.
//!
//! The pipeline has three stages:
//!
//! 1. [`MessageBitmap::rasterize`] renders the text once with a [`MarqueeFont`].
//! 2. [`composite`] paints the window of that bitmap visible at a given scroll offset into a
//!    strip-order [`Frame1d`], using a [`LedLayout`] to find each pixel's LED.
//! 3. [`Marquee`] owns the scroll offset. Each [`tick`](Marquee::tick) composites a frame and
//!    advances the offset; on hardware [`run`](Marquee::run) sends every frame to the strip
//!    and sleeps for the frame interval.
//!
//! The offset starts at `-W`, increases by one each tick, and returns to `-W` once it passes the
//! message's pixel width `P`. One full cycle is therefore `P + W + 1` ticks. At `-W` the frame is
//! blank; bitmap column 0 first shows at offset `-(W - 1)`, in layout column `x = 0`. Layout
//! columns are mirrored (see [`composite`]), so on a panel mounted with its column 0 on the
//! viewer's right the text enters from the viewer's right edge.
//!
//! # Example: Step Through a Scroll Cycle
//!
//! ```rust
//! use led_marquee::led2d::LedLayout;
//! use led_marquee::marquee::{Marquee, MarqueeConfig};
//!
//! const LED_LAYOUT: LedLayout<150, 30, 5> = LedLayout::serpentine_row_major();
//! let config = MarqueeConfig {
//!     message: "HI",
//!     ..MarqueeConfig::DEFAULT
//! };
//! let mut marquee = Marquee::<150, 30, 5>::new(&config, LED_LAYOUT)?;
//!
//! // "HI" is 2 × (4 + 1) = 10 columns wide.
//! assert_eq!(marquee.pixel_width(), 10);
//! assert_eq!(marquee.frames_per_cycle(), 41);
//!
//! // The first frame is blank: the text starts just past the right edge.
//! assert_eq!(marquee.tick().lit_count(), 0);
//! for _ in 1..marquee.frames_per_cycle() {
//!     marquee.tick();
//! }
//! assert_eq!(marquee.scroll_offset(), -30);
//! # Ok::<(), led_marquee::Error>(())
//! ```
//!
//! On hardware, use the [`marquee!`](crate::marquee!) macro to bind a marquee to a pin, PIO
//! and DMA channel.

pub mod bitmap;
pub mod compositor;
pub mod font;

pub use bitmap::MessageBitmap;
pub use compositor::composite;
pub use font::{Glyph, MarqueeFont};

// Re-export for macro use
#[doc(hidden)]
pub use paste;

use embassy_time::Duration;

use crate::Result;
use crate::led2d::{Frame2d, LedLayout};
use crate::led_strip::{Current, Frame1d, Gamma, MAX_CURRENT_DEFAULT, RGB8, WriteFrame, colors};

/// Default bitmap column capacity for [`Marquee`] and [`marquee!`](crate::marquee!).
pub const MESSAGE_CAPACITY_DEFAULT: usize = 300;

/// Frame interval used by [`MarqueeConfig::DEFAULT`].
pub const FRAME_INTERVAL_DEFAULT: Duration = Duration::from_millis(60);

/// Everything about a marquee that is not fixed by its hardware type.
///
/// Build one in a `const` and hand it to [`marquee!`](crate::marquee!), or pass it to
/// [`Marquee::new`]. Start from [`MarqueeConfig::DEFAULT`] and override fields with struct
/// update syntax.
///
/// ```rust
/// use led_marquee::led_strip::{Current, colors};
/// use led_marquee::marquee::{MarqueeConfig, MarqueeFont};
///
/// const MARQUEE_CONFIG: MarqueeConfig<'static> = MarqueeConfig {
///     message: "HELLO WORLD",
///     color: colors::GREEN,
///     font: MarqueeFont::Font3x5,
///     max_current: Current::Milliamps(500),
///     ..MarqueeConfig::DEFAULT
/// };
/// assert_eq!(MARQUEE_CONFIG.brightness, 255);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarqueeConfig<'a> {
    /// Text to scroll. Lowercase is shown as uppercase; characters other than `A`–`Z` show as
    /// spaces.
    pub message: &'a str,
    /// Color of lit pixels. Unlit pixels are black.
    pub color: RGB8,
    /// Glyph set used to rasterize `message`.
    pub font: MarqueeFont,
    /// Time between frames. Each frame moves the text one pixel left.
    pub frame_interval: Duration,
    /// Current budget used to cap brightness.
    pub max_current: Current,
    /// Global brightness, 0–255, applied on top of the current budget.
    pub brightness: u8,
    /// Gamma correction applied to every channel.
    pub gamma: Gamma,
}

impl MarqueeConfig<'static> {
    /// Red 4×5 text, 60 ms per frame, 300 mA budget, full brightness, linear gamma.
    pub const DEFAULT: Self = Self {
        message: "SOMETIMES THERE ARE PROBLEMS     DO NOT FRET",
        color: colors::RED,
        font: MarqueeFont::Font4x5,
        frame_interval: FRAME_INTERVAL_DEFAULT,
        max_current: MAX_CURRENT_DEFAULT,
        brightness: 255,
        gamma: Gamma::Linear,
    };
}

impl Default for MarqueeConfig<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scroll state for one message on one `W × H` panel of `N` LEDs.
///
/// `CAP` bounds the message's pixel width; see [`MessageBitmap`].
/// See the [module documentation](mod@crate::marquee) for an example.
#[derive(Clone, Debug)]
pub struct Marquee<
    const N: usize,
    const W: usize,
    const H: usize,
    const CAP: usize = MESSAGE_CAPACITY_DEFAULT,
> {
    led_layout: LedLayout<N, W, H>,
    bitmap: MessageBitmap<CAP>,
    font: MarqueeFont,
    color: RGB8,
    scroll_offset: i32,
    frame: Frame1d<N>,
}

impl<const N: usize, const W: usize, const H: usize, const CAP: usize> Marquee<N, W, H, CAP> {
    /// Scroll offset at the start of every cycle, one column before the text becomes visible.
    ///
    /// One tick later the offset is `-(W - 1)`, where bitmap column 0 shows in layout column
    /// `x = 0`.
    #[expect(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::arithmetic_side_effects,
        reason = "panel widths are far below i32::MAX"
    )]
    pub const START_OFFSET: i32 = -(W as i32);

    /// Rasterize `config.message` and start a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageTooWide`](crate::Error::MessageTooWide) if the message needs
    /// more than `CAP` bitmap columns.
    pub fn new(config: &MarqueeConfig<'_>, led_layout: LedLayout<N, W, H>) -> Result<Self> {
        let bitmap = MessageBitmap::rasterize(config.message, config.font)?;
        #[cfg(not(feature = "host"))]
        defmt::info!(
            "Marquee::new: {}x{} panel, message is {} columns wide",
            W,
            H,
            bitmap.pixel_width()
        );
        Ok(Self {
            led_layout,
            bitmap,
            font: config.font,
            color: config.color,
            scroll_offset: Self::START_OFFSET,
            frame: Frame1d::new(),
        })
    }

    /// Replace the message and restart the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageTooWide`](crate::Error::MessageTooWide) if `message` needs more
    /// than `CAP` bitmap columns. The current message keeps scrolling in that case.
    pub fn set_message(&mut self, message: &str) -> Result<()> {
        self.bitmap = MessageBitmap::rasterize(message, self.font)?;
        self.scroll_offset = Self::START_OFFSET;
        Ok(())
    }

    /// Change the color of lit pixels, starting with the next tick.
    pub const fn set_color(&mut self, color: RGB8) {
        self.color = color;
    }

    /// Composite the frame for the current offset, then advance the offset.
    ///
    /// The offset wraps to [`START_OFFSET`](Self::START_OFFSET) once it exceeds the pixel
    /// width.
    pub fn tick(&mut self) -> &Frame1d<N> {
        composite(
            &mut self.frame,
            &self.bitmap,
            self.scroll_offset,
            self.color,
            &self.led_layout,
        );
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        if self.scroll_offset > self.pixel_width_i32() {
            self.scroll_offset = Self::START_OFFSET;
        }
        &self.frame
    }

    /// Tick once and send the frame to `strip`.
    ///
    /// # Errors
    ///
    /// Returns any error from the strip.
    pub async fn step<S: WriteFrame<N>>(&mut self, strip: &S) -> Result<()> {
        let frame = *self.tick();
        strip.write_frame(frame).await
    }

    /// Clear the panel, then scroll forever, one tick every `frame_interval`.
    ///
    /// # Errors
    ///
    /// Returns the first error from the strip. Otherwise never returns.
    #[cfg(not(feature = "host"))]
    pub async fn run<S: WriteFrame<N>>(
        &mut self,
        strip: &S,
        frame_interval: Duration,
    ) -> Result<core::convert::Infallible> {
        strip.write_frame(Frame1d::new()).await?;
        loop {
            self.step(strip).await?;
            if self.scroll_offset == Self::START_OFFSET {
                defmt::trace!("Marquee: cycle of {} frames done", self.frames_per_cycle());
            }
            embassy_time::Timer::after(frame_interval).await;
        }
    }

    /// Offset the next [`tick`](Self::tick) will draw at.
    #[must_use]
    pub const fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Width of the current message in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> usize {
        self.bitmap.pixel_width()
    }

    /// Ticks from one start of cycle to the next: `pixel_width + W + 1`.
    #[must_use]
    pub fn frames_per_cycle(&self) -> usize {
        self.pixel_width().saturating_add(W).saturating_add(1)
    }

    /// The rasterized message.
    #[must_use]
    pub const fn bitmap(&self) -> &MessageBitmap<CAP> {
        &self.bitmap
    }

    /// The most recently composited frame, in strip order.
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<N> {
        &self.frame
    }

    /// The most recently composited frame, as `(x, y)` pixels.
    #[must_use]
    pub fn frame_2d(&self) -> Frame2d<W, H> {
        self.led_layout.strip_to_frame(&self.frame)
    }

    /// The panel's wiring.
    #[must_use]
    pub const fn led_layout(&self) -> &LedLayout<N, W, H> {
        &self.led_layout
    }

    fn pixel_width_i32(&self) -> i32 {
        i32::try_from(self.pixel_width()).unwrap_or(i32::MAX)
    }
}

/// Defines a marquee type bound to a GPIO pin, PIO block and DMA channel.
///
/// The panel is `width × height` LEDs wired in a serpentine (snake) pattern starting at the
/// top-left corner. Everything else comes from a `const` [`MarqueeConfig`].
///
/// ```rust,ignore
/// use core::convert::Infallible;
///
/// use embassy_executor::Spawner;
/// use led_marquee::marquee::MarqueeConfig;
/// use led_marquee::{Result, marquee};
///
/// const MARQUEE_CONFIG: MarqueeConfig<'static> = MarqueeConfig {
///     message: "HELLO WORLD",
///     ..MarqueeConfig::DEFAULT
/// };
///
/// marquee! {
///     pub Marquee30x5 {
///         pin: PIN_4,
///         pio: PIO0,
///         dma: DMA_CH0,
///         width: 30,
///         height: 5,
///         config: MARQUEE_CONFIG,
///     }
/// }
///
/// async fn example(spawner: Spawner) -> Result<Infallible> {
///     let p = embassy_rp::init(Default::default());
///     let marquee30x5 = Marquee30x5::new(p.PIN_4, p.PIO0, p.DMA_CH0, spawner)?;
///     marquee30x5.run().await
/// }
/// ```
///
/// An optional trailing `capacity: <expr>` field changes the bitmap column capacity from
/// [`MESSAGE_CAPACITY_DEFAULT`].
///
/// # Generated items
///
/// - `WIDTH`, `HEIGHT`, `LEN`: panel geometry.
/// - `MAX_BRIGHTNESS`: the configured brightness after applying the current budget
///   (60 mA per LED worst case).
/// - `new(pin, pio, dma, spawner)`: rasterizes the message and spawns the strip task.
/// - `run(self)`: clears the panel and scrolls forever.
#[cfg(not(feature = "host"))]
#[macro_export]
macro_rules! marquee {
    ($($tt:tt)*) => { $crate::__marquee_impl! { $($tt)* } };
}

/// Implementation macro. Not part of the public API; use [`marquee!`] instead.
#[cfg(not(feature = "host"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __marquee_impl {
    // Entry point without capacity: fill the default
    (
        $vis:vis $name:ident {
            pin: $pin:ident,
            pio: $pio:ident,
            dma: $dma:ident,
            width: $width:expr,
            height: $height:expr,
            config: $config:expr $(,)?
        }
    ) => {
        $crate::__marquee_impl! {
            $vis $name {
                pin: $pin,
                pio: $pio,
                dma: $dma,
                width: $width,
                height: $height,
                config: $config,
                capacity: $crate::marquee::MESSAGE_CAPACITY_DEFAULT,
            }
        }
    };

    // All fields given - expand the type
    (
        $vis:vis $name:ident {
            pin: $pin:ident,
            pio: $pio:ident,
            dma: $dma:ident,
            width: $width:expr,
            height: $height:expr,
            config: $config:expr,
            capacity: $capacity:expr $(,)?
        }
    ) => {
        $crate::marquee::paste::paste! {
            /// Marquee generated by `marquee!`.
            $vis struct $name {
                marquee: $crate::marquee::Marquee<
                    { $width * $height },
                    { $width },
                    { $height },
                    { $capacity }
                >,
                strip: $crate::led_strip::LedStrip<{ $width * $height }>,
            }

            impl $name {
                /// Panel width in LEDs.
                pub const WIDTH: usize = $width;
                /// Panel height in LEDs.
                pub const HEIGHT: usize = $height;
                /// Total number of LEDs.
                pub const LEN: usize = $width * $height;

                // Worst case: every LED at full white
                const WORST_CASE_MA: u32 =
                    (Self::LEN as u32) * $crate::led_strip::MILLIAMPS_PER_LED;
                /// Brightness after applying the configured current budget.
                pub const MAX_BRIGHTNESS: u8 = $crate::led_strip::scale_brightness(
                    $config.brightness,
                    $config.max_current.max_brightness(Self::WORST_CASE_MA),
                );

                // Combined gamma correction and brightness scaling table
                const COMBO_TABLE: [u8; 256] =
                    $crate::led_strip::generate_combo_table($config.gamma, Self::MAX_BRIGHTNESS);

                const LED_LAYOUT: $crate::led2d::LedLayout<
                    { $width * $height },
                    { $width },
                    { $height }
                > = $crate::led2d::LedLayout::serpentine_row_major();

                /// Rasterize the configured message and spawn the LED strip task.
                ///
                /// The `pin`, `pio`, and `dma` parameters must be the GPIO pin, PIO block, and
                /// DMA channel named in the macro.
                ///
                /// # Errors
                ///
                /// Returns an error if the message is too wide for the bitmap capacity or the
                /// strip task cannot be spawned.
                pub fn new(
                    pin: impl Into<::embassy_rp::Peri<'static, ::embassy_rp::peripherals::$pin>>,
                    pio: ::embassy_rp::Peri<'static, ::embassy_rp::peripherals::$pio>,
                    dma: impl Into<::embassy_rp::Peri<'static, ::embassy_rp::peripherals::$dma>>,
                    spawner: ::embassy_executor::Spawner,
                ) -> $crate::Result<Self> {
                    static STRIP_STATIC: $crate::led_strip::LedStripStatic<{ $width * $height }> =
                        $crate::led_strip::LedStripStatic::new_static();

                    let marquee = $crate::marquee::Marquee::new(&$config, Self::LED_LAYOUT)?;

                    let token = [<$name:snake _strip_task>](
                        pio,
                        dma.into(),
                        pin.into(),
                        STRIP_STATIC.command_signal(),
                        STRIP_STATIC.completion_signal(),
                    );
                    spawner.spawn(token).map_err($crate::Error::TaskSpawn)?;

                    let strip = $crate::led_strip::LedStrip::new(&STRIP_STATIC);
                    Ok(Self { marquee, strip })
                }

                /// Clear the panel, then scroll the message forever.
                ///
                /// # Errors
                ///
                /// Returns the first error from the LED strip.
                pub async fn run(self) -> $crate::Result<::core::convert::Infallible> {
                    let Self { mut marquee, strip } = self;
                    marquee.run(&strip, $config.frame_interval).await
                }
            }

            #[::embassy_executor::task]
            async fn [<$name:snake _strip_task>](
                pio: ::embassy_rp::Peri<'static, ::embassy_rp::peripherals::$pio>,
                dma: ::embassy_rp::Peri<'static, ::embassy_rp::peripherals::$dma>,
                pin: ::embassy_rp::Peri<'static, ::embassy_rp::peripherals::$pin>,
                command_signal: &'static $crate::led_strip::LedStripCommandSignal<{ $width * $height }>,
                completion_signal: &'static $crate::led_strip::LedStripCompletionSignal,
            ) -> ! {
                let ::embassy_rp::pio::Pio { mut common, sm0, .. } = ::embassy_rp::pio::Pio::new(
                    pio,
                    <::embassy_rp::peripherals::$pio as $crate::pio_irqs::MarqueePio>::irqs(),
                );
                let program =
                    ::embassy_rp::pio_programs::ws2812::PioWs2812Program::new(&mut common);
                let driver = ::embassy_rp::pio_programs::ws2812::PioWs2812::<
                    ::embassy_rp::peripherals::$pio,
                    0,
                    { $width * $height },
                    _
                >::new(&mut common, sm0, dma, pin, &program);
                $crate::led_strip::led_strip_device_loop(
                    driver,
                    command_signal,
                    completion_signal,
                    &$name::COMBO_TABLE,
                )
                .await
            }
        }
    };
}
