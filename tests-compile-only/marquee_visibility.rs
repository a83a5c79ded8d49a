#![no_std]
#![no_main]
#![allow(dead_code, reason = "types are only checked, never constructed")]
//! Test visibility and capacity support for the marquee! macro.

use led_marquee::marquee;
use led_marquee::marquee::MarqueeConfig;
use {defmt_rtt as _, panic_probe as _};

const CONFIG: MarqueeConfig<'static> = MarqueeConfig {
    message: "ABC",
    ..MarqueeConfig::DEFAULT
};

// Test default visibility (private)
marquee! {
    MarqueeDefault {
        pin: PIN_3,
        pio: PIO0,
        dma: DMA_CH0,
        width: 8,
        height: 5,
        config: CONFIG,
    }
}

// Test explicit public visibility with a custom capacity
mod test_explicit_pub {
    use led_marquee::marquee;

    marquee! {
        pub MarqueeExplicitPub {
            pin: PIN_4,
            pio: PIO1,
            dma: DMA_CH1,
            width: 12,
            height: 5,
            config: super::CONFIG,
            capacity: 64,
        }
    }

    pub use MarqueeExplicitPub as ExportedPub;
}

// Test pub(crate) visibility
mod test_pub_crate {
    use led_marquee::marquee;

    marquee! {
        pub(crate) MarqueePubCrate {
            pin: PIN_5,
            pio: PIO0,
            dma: DMA_CH2,
            width: 4,
            height: 5,
            config: super::CONFIG,
        }
    }
}

const _: () = assert!(test_explicit_pub::ExportedPub::LEN == 60);
const _: () = assert!(test_pub_crate::MarqueePubCrate::WIDTH == 4);
const _: () = assert!(MarqueeDefault::MAX_BRIGHTNESS > 0);

#[cortex_m_rt::entry]
fn main() -> ! {
    loop {}
}
